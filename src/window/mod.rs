pub mod chrome;
pub mod outcome;
pub mod window;
pub mod workspace;

pub use chrome::Chrome;
pub use outcome::{EditAction, Outcome, PromptReply, PromptRequest};
pub use window::EditorWindow;
pub use workspace::Workspace;
