mod gui;
mod hashers;
mod file_ops;
mod models;

use iced::{window, Size};

fn main() -> iced::Result {
    iced::application(
        "HashView - File Hashes",
        gui::HashApp::update,
        gui::HashApp::view,
    )
    .window(window::Settings {
        size: Size::new(720.0, 440.0),
        resizable: true,
        ..window::Settings::default()
    })
    .run_with(|| gui::HashApp::new(std::env::args().nth(1)))
}
