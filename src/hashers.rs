use crate::models::Algorithm;
use anyhow::Result;
use std::io::Read;

/// Consume `reader` to end-of-stream and return the digest as lowercase
/// hex with no separators.
pub fn compute_hash_for_reader<R: Read>(mut reader: R, algorithm: &Algorithm) -> Result<String> {
    match algorithm {
        Algorithm::Md5 => {
            use md5::Context;
            let mut ctx = Context::new();
            let mut buf = [0u8; 64 * 1024];
            loop {
                let n = reader.read(&mut buf)?;
                if n == 0 { break; }
                ctx.consume(&buf[..n]);
            }
            Ok(format!("{:x}", ctx.finalize()))
        }
        Algorithm::Sha1 => {
            use sha1::{Digest, Sha1};
            let mut hasher = Sha1::new();
            let mut buf = [0u8; 64 * 1024];
            loop {
                let n = reader.read(&mut buf)?;
                if n == 0 { break; }
                hasher.update(&buf[..n]);
            }
            Ok(hex::encode(hasher.finalize()))
        }
    }
}
