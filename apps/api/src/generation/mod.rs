pub mod handlers;
pub mod pipeline;
pub mod prompt_builder;
pub mod prompts;
pub mod splitter;
