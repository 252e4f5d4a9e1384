use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write `contents` to `path`, creating or truncating the file.
/// Returns the number of bytes written.
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> io::Result<usize> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;

    Ok(contents.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_truncates() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "a much longer previous content").unwrap();

        let written = write_file(file.path(), "short").unwrap();

        assert_eq!(written, 5);
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "short");
    }
}
