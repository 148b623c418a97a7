use std::fs;
use std::path::Path;

use crate::error::Error;

/// Largest input file accepted, in bytes.
pub const MAX_INPUT_SIZE: u64 = 10 * 1024 * 1024; // 10MB

pub struct InputReader;

impl InputReader {
    /// Reads a whole UTF-8 input file.
    pub fn read(path: &Path) -> Result<String, Error> {
        let read_error = |source| Error::Read {
            path: path.to_path_buf(),
            source,
        };

        let size = fs::metadata(path).map_err(read_error)?.len();
        if size > MAX_INPUT_SIZE {
            return Err(Error::InputTooLarge { size });
        }

        fs::read_to_string(path).map_err(read_error)
    }
}
