use std::fs::File;
use anyhow::{Context, Result};
use std::path::Path;
use crate::hashers;
use crate::models::Algorithm;
use std::io::BufReader;

/// Compute the digest of the file at `path` using a streaming read.
/// This is synchronous; call it inside a spawned thread/task to keep the
/// UI responsive. The file handle is released when the reader goes out of
/// scope, whether hashing succeeded or not.
pub fn compute_file_hash(path: &Path, algorithm: &Algorithm) -> Result<String> {
    let f = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(f);
    let hex = hashers::compute_hash_for_reader(reader, algorithm)?;
    Ok(hex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn hashes_file_contents() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"hello world").unwrap();

        let md5 = compute_file_hash(file.path(), &Algorithm::Md5).unwrap();
        let sha1 = compute_file_hash(file.path(), &Algorithm::Sha1).unwrap();
        assert_eq!(md5, "5eb63bbbe01eeed093cb22bb8f5acdc3");
        assert_eq!(sha1, "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed");
    }

    #[test]
    fn hashes_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let md5 = compute_file_hash(file.path(), &Algorithm::Md5).unwrap();
        assert_eq!(md5, "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn hashing_twice_is_idempotent() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"same bytes, same digest").unwrap();

        for algorithm in Algorithm::all() {
            let first = compute_file_hash(file.path(), &algorithm).unwrap();
            let second = compute_file_hash(file.path(), &algorithm).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = compute_file_hash(Path::new("no/such/file.bin"), &Algorithm::Md5).unwrap_err();
        assert!(err.to_string().contains("failed to open"));
    }
}
