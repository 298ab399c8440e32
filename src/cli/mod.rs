pub mod categorize;
pub mod list;
pub mod render;

use std::io::Read;
use std::path::Path;

use crate::error::{AppError, Result};

/// Read a whole input file, `-` meaning stdin
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|err| AppError::io(path, err))?;
        return Ok(buffer);
    }

    std::fs::read_to_string(path).map_err(|err| AppError::io(path, err))
}
