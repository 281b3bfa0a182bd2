//! Line-oriented interactive prompts.
mod prompt;

pub use prompt::Prompter;
