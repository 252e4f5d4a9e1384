pub mod reader;
pub mod writer;

pub use reader::read_file;
pub use writer::write_file;
