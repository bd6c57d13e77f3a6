//! Template rendering for LangGPT role prompts.
//!
//! This module provides:
//!
//! - **Render**: the two-pass renderer (`render`)
//! - **Context**: field values keyed by placeholder name
//! - **Source**: template resolution (file or built-in) and loading
//!
//! # Template Syntax
//!
//! ```text
//! # Role: {{role}}
//!
//! ## Skills
//! {{#each skills}}- {{this}}
//! {{/each}}
//! ```
//!
//! - `{{name}}` - Substitutes the scalar field `name`
//! - `{{#each name}}...{{/each}}` - Repeats the body once per item of list `name`
//! - `{{this}}` - Inside a block body, the current item

mod context;
mod render;
mod source;

pub use context::{Context, Value};
pub use render::render;
pub use source::{BUILTIN_TEMPLATE, TemplateSource};
