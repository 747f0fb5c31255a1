//! Fixed prompt template for the remote generate strategy.
//!
//! The template is a configuration constant: role-tagged, with a system
//! instruction constraining tone and the output ceiling, followed by the
//! user content. The dispatcher treats it as opaque.

use colloquy_types::conversation::MAX_CONTENT_CHARS;

/// System instruction embedded at the top of every generate prompt.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a concise, friendly chat assistant. Reply with a single plain \
     sentence of at most 128 characters.";

/// Wrap user content in the role-tagged prompt template.
pub fn build_prompt(user_content: &str) -> String {
    format!("system: {SYSTEM_INSTRUCTION}\nuser: {user_content}\nassistant:")
}
