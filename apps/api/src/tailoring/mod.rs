pub mod handlers;
pub mod keyword_source;
pub mod pipeline;
pub mod prompts;
