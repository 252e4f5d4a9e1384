pub mod error;
pub mod prompt;
pub mod session;

pub use error::SessionError;
pub use prompt::{AnsweredPrompt, FilePrompt, NativePrompt};
pub use session::{DocumentSession, OpenOutcome, SaveOutcome};
