//! Template renderer
//!
//! Renders parsed templates against a [`BindingContext`]. Rendering reads
//! the context and the parsed template only, so the same inputs always give
//! the same output. File bodies and output paths go through the same code.

use tracing::trace;

use crate::{
    error::TemplateError,
    templates::{
        context::BindingContext,
        parser::{Expression, ParsedTemplate, TemplateElement, TemplateParser},
        transform::Transform,
    },
};

/// Renders templates with placeholder substitution
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateRenderer;

impl TemplateRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Parse and render template text
    ///
    /// # Arguments
    /// * `template` - Template text
    /// * `ctx` - Bindings available to placeholders
    ///
    /// # Returns
    /// Rendered text, or the first placeholder error encountered
    pub fn render(&self, template: &str, ctx: &BindingContext) -> Result<String, TemplateError> {
        self.render_parsed(&TemplateParser::parse(template), ctx)
    }

    /// Render an already parsed template
    pub fn render_parsed(
        &self,
        template: &ParsedTemplate,
        ctx: &BindingContext,
    ) -> Result<String, TemplateError> {
        let mut result = String::new();

        for element in &template.elements {
            match element {
                TemplateElement::Text(text) => result.push_str(text),
                TemplateElement::Placeholder(expr) => {
                    result.push_str(&self.evaluate(expr, ctx)?);
                }
            }
        }

        Ok(result)
    }

    /// Evaluate a single placeholder expression
    pub fn evaluate(&self, expr: &Expression, ctx: &BindingContext) -> Result<String, TemplateError> {
        let mut value = ctx
            .lookup(&expr.key)
            .ok_or_else(|| TemplateError::UndefinedPlaceholder(expr.key.clone()))?
            .to_string();

        for name in &expr.transforms {
            value = Transform::apply_named(name, &value)?;
        }

        trace!(key = %expr.key, transforms = ?expr.transforms, "Resolved placeholder");
        Ok(value)
    }
}
