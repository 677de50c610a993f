//! Chain editor domain - Interactive editing of the fallback configuration

mod builder;
mod prompt;
mod session;
mod state;

pub use builder::ChainBuilder;
pub use prompt::{Prompter, ScriptedPrompter};
pub use session::{ChainEditor, EditorOutcome};
pub use state::{EditorState, MenuChoice};
