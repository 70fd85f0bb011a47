//! Template engine module
//!
//! Provides template parsing, binding contexts, built-in transforms and
//! rendering.

pub mod context;
pub mod engine;
pub mod parser;
pub mod transform;

// Re-export public API
pub use context::{BindingContext, DerivationKey};
pub use engine::TemplateRenderer;
pub use parser::{Expression, ParsedTemplate, TemplateElement, TemplateParser};
pub use transform::Transform;
