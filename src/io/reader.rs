use std::io;
use std::path::Path;

/// Read a whole file as UTF-8 text
pub fn read_file<P: AsRef<Path>>(path: P) -> io::Result<String> {
    std::fs::read_to_string(path)
}
