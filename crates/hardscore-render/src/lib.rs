//! Rendering utilities for human surfaces (Markdown, terminal summary).

#![forbid(unsafe_code)]

mod markdown;
mod summary;

pub use markdown::render_markdown;
pub use summary::render_summary;
