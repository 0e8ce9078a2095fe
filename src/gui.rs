use iced::{Element, Length, Task, Color, Border};
use iced::widget::{Column, Row, Container, Text, Button, Space, rule};

use crate::file_ops;
use crate::models::{Algorithm, DigestState, FileSelection, HashSlot};
use std::path::PathBuf;
use rfd::FileDialog;
use tokio::task;

#[derive(Debug, Clone)]
pub enum Message {
    BrowseFile,
    FileChosen(Option<PathBuf>),
    DigestComputed {
        path: PathBuf,
        algorithm: Algorithm,
        result: Result<String, String>,
    },
}

pub struct HashApp {
    file: FileSelection,
    slots: Vec<HashSlot>,
    // Algorithms still waiting their turn for the current file. Hashing is
    // sequential: the next one starts when the previous completion arrives.
    pending: Vec<Algorithm>,
    status_message: String,
}

impl HashApp {
    /// `startup_arg` is the first command-line argument, if any. A real path
    /// there is hashed immediately; the literal `--port` is reserved and
    /// never treated as a file path.
    pub fn new(startup_arg: Option<String>) -> (Self, Task<Message>) {
        let mut app = HashApp {
            file: FileSelection::default(),
            slots: Algorithm::all().into_iter().map(HashSlot::new).collect(),
            pending: Vec::new(),
            status_message: String::new(),
        };
        let startup = match startup_arg {
            Some(arg) if arg != "--port" => app.start_hashing(PathBuf::from(arg)),
            _ => Task::none(),
        };
        (app, startup)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BrowseFile => {
                return Task::perform(async {
                    FileDialog::new().set_directory(".").pick_file()
                }, Message::FileChosen);
            }
            Message::FileChosen(Some(path)) => {
                return self.start_hashing(path);
            }
            Message::FileChosen(None) => { /* cancelled */ }
            Message::DigestComputed { path, algorithm, result } => {
                if self.file.path.as_deref() != Some(path.as_path()) {
                    // Completion for a file that is no longer selected.
                    return Task::none();
                }
                match result {
                    Ok(hex) => {
                        if let Some(slot) =
                            self.slots.iter_mut().find(|s| s.algorithm == algorithm)
                        {
                            slot.result = DigestState::Done(hex);
                        }
                        if !self.pending.is_empty() {
                            let next = self.pending.remove(0);
                            return hash_task(path, next);
                        }
                        println!("Hashing complete for: {:?}", path);
                    }
                    Err(e) => {
                        println!("Hash compute error: {}", e);
                        self.status_message = format!("Error: {}", e);
                        self.pending.clear();
                        for slot in &mut self.slots {
                            if slot.result.is_loading() {
                                slot.result = DigestState::Idle;
                            }
                        }
                    }
                }
            }
        }
        Task::none()
    }

    fn start_hashing(&mut self, path: PathBuf) -> Task<Message> {
        println!("Hashing file: {:?}", path);
        self.file.path = Some(path.clone());
        self.status_message.clear();
        for slot in &mut self.slots {
            slot.result = DigestState::Loading;
        }
        let mut queue: Vec<Algorithm> =
            self.slots.iter().map(|s| s.algorithm.clone()).collect();
        let first = queue.remove(0);
        self.pending = queue;
        hash_task(path, first)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let accent = self.accent_color();
        let text_color = self.text_color();
        let secondary_text = self.secondary_text_color();

        let title = Text::new("HashView")
            .size(28)
            .style(move |_theme| {
                iced::widget::text::Style {
                    color: Some(accent),
                }
            });

        let subtitle = Text::new("MD5 / SHA1 file hashes")
            .size(14)
            .style(move |_theme| {
                iced::widget::text::Style {
                    color: Some(secondary_text),
                }
            });

        let browse_btn = Button::new(
            Text::new("Browse Files")
                .size(16)
        )
        .on_press(Message::BrowseFile)
        .padding(12)
        .width(Length::Fixed(180.0));

        let file_display = if let Some(path) = &self.file.path {
            self.framed_value(path.display().to_string(), 16)
        } else {
            Text::new("No file selected")
                .size(16)
                .style(move |_theme| {
                    iced::widget::text::Style {
                        color: Some(secondary_text),
                    }
                })
                .into()
        };

        let mut digests = Column::new().spacing(12).width(Length::Fill);
        for slot in &self.slots {
            let label = Text::new(slot.algorithm.name())
                .size(14)
                .style(move |_theme| {
                    iced::widget::text::Style {
                        color: Some(text_color),
                    }
                });
            digests = digests.push(
                Column::new()
                    .spacing(5)
                    .push(label)
                    .push(self.framed_value(slot.result.to_string(), 14)),
            );
        }

        let status = Text::new(&self.status_message)
            .size(14)
            .style(|_theme| {
                iced::widget::text::Style {
                    color: Some(Color::from_rgb(0.9, 0.2, 0.2)),
                }
            });

        let content = Column::new()
            .padding(30)
            .spacing(20)
            .width(Length::Fill)
            .push(title)
            .push(subtitle)
            .push(rule::Rule::horizontal(1))
            .push(
                Row::new()
                    .spacing(20)
                    .push(browse_btn)
                    .push(file_display),
            )
            .push(Space::with_height(10))
            .push(digests)
            .push(status);

        let bg_color = self.bg_color();
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| {
                iced::widget::container::Style {
                    background: Some(iced::Background::Color(bg_color)),
                    border: Border::default(),
                    ..Default::default()
                }
            })
            .into()
    }

    fn framed_value(&self, value: String, size: u16) -> Element<'_, Message> {
        let text_color = self.text_color();
        let container_bg = self.container_bg_color();
        let border_color = self.border_color();
        Container::new(
            Text::new(value)
                .size(size)
                .style(move |_theme| {
                    iced::widget::text::Style {
                        color: Some(text_color),
                    }
                })
        )
        .padding(10)
        .width(Length::Fill)
        .style(move |_theme| {
            iced::widget::container::Style {
                background: Some(iced::Background::Color(container_bg)),
                border: Border {
                    color: border_color,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            }
        })
        .into()
    }

    // Theme color helpers
    fn bg_color(&self) -> Color {
        Color::from_rgb(1.0, 1.0, 1.0)
    }

    fn text_color(&self) -> Color {
        Color::from_rgb(0.1, 0.1, 0.1)
    }

    fn secondary_text_color(&self) -> Color {
        Color::from_rgb(0.4, 0.4, 0.4)
    }

    fn container_bg_color(&self) -> Color {
        Color::from_rgb(0.95, 0.95, 0.95)
    }

    fn border_color(&self) -> Color {
        Color::from_rgb(0.8, 0.8, 0.8)
    }

    fn accent_color(&self) -> Color {
        Color::from_rgb(0.2, 0.5, 0.8)
    }
}

fn hash_task(path: PathBuf, algorithm: Algorithm) -> Task<Message> {
    Task::perform(
        async move {
            let worker_path = path.clone();
            let worker_algorithm = algorithm.clone();
            let result = task::spawn_blocking(move || {
                file_ops::compute_file_hash(&worker_path, &worker_algorithm)
            })
            .await
            .unwrap()
            .map_err(|e| format!("{:#}", e));
            (path, algorithm, result)
        },
        |(path, algorithm, result)| Message::DigestComputed { path, algorithm, result },
    )
}
