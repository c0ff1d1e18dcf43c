pub mod prompt;

pub use prompt::{execute_prompt, PromptOptions};
