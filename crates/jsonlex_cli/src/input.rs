//! Reading input files.

use crate::error::CliError;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Name used for standard input in output and diagnostics.
pub const STDIN_NAME: &str = "<stdin>";

/// One input, read fully into memory.
pub struct Source {
    pub name: String,
    bytes: Vec<u8>,
}

impl Source {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a file, or standard input when `path` is `-`.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        if path == Path::new("-") {
            return Self::from_stdin();
        }
        let name = path.display().to_string();
        let bytes = std::fs::read(path).map_err(|source| CliError::Read {
            path: name.clone(),
            source,
        })?;
        debug!(file = %name, bytes = bytes.len(), "loaded input");
        Ok(Self::new(name, bytes))
    }

    pub fn from_stdin() -> Result<Self, CliError> {
        let mut bytes = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .map_err(|source| CliError::Read {
                path: STDIN_NAME.to_string(),
                source,
            })?;
        debug!(bytes = bytes.len(), "loaded standard input");
        Ok(Self::new(STDIN_NAME, bytes))
    }

    /// The input as text. Fails with the offset of the first invalid byte.
    pub fn text(&self) -> Result<&str, CliError> {
        simdutf8::compat::from_utf8(&self.bytes).map_err(|err| CliError::InvalidUtf8 {
            path: self.name.clone(),
            offset: err.valid_up_to(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_accepts_utf8() {
        let source = Source::new("a.json", "[\"é\"]".as_bytes().to_vec());
        assert_eq!(source.text().unwrap(), "[\"é\"]");
    }

    #[test]
    fn test_text_reports_invalid_offset() {
        let source = Source::new("b.json", vec![b'[', b'"', 0xFF, b'"', b']']);
        match source.text() {
            Err(CliError::InvalidUtf8 { path, offset }) => {
                assert_eq!(path, "b.json");
                assert_eq!(offset, 2);
            }
            other => panic!("expected invalid UTF-8 error, got {:?}", other.map(str::len)),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = Source::load(Path::new("/definitely/not/here.json")).err().unwrap();
        assert!(matches!(err, CliError::Read { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
