pub mod buffer;
pub mod offset;
pub mod point;

pub use buffer::Buffer;
pub use offset::Offset;
pub use point::Point;
