//! AI prompt templates.

pub mod instructions;
pub mod suggestion;

pub use instructions::render_instructions_prompt;
pub use suggestion::render_suggestion_prompt;
