use std::fs;
use std::io::Write;
use std::path::Path;

use crate::utils::error::Result;

/// Read a whole file into memory
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    Ok(fs::read(path.as_ref())?)
}

/// Replace the contents of a file, creating it if it doesn't exist
pub fn write_file<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<()> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = fs::File::create(path.as_ref())?;
    file.write_all(contents)?;
    file.flush()?;
    Ok(())
}
