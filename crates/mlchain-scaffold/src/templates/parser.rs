//! Template syntax parser
//!
//! Parses template text into a flat list of literal text and placeholder
//! expressions. A placeholder is `{{ key }}` or `{{ key | Transform | ... }}`
//! where `key` and every transform name are identifiers. Brace sequences that
//! do not form such a placeholder are kept as literal text, so parsing never
//! fails.

use std::collections::BTreeSet;

/// A placeholder expression: a key piped through zero or more transforms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// Binding key to look up
    pub key: String,
    /// Transform names, applied left to right
    pub transforms: Vec<String>,
}

impl Expression {
    /// Parse the text between `{{` and `}}`
    ///
    /// Returns `None` when the text is not a well-formed expression.
    pub fn parse(inner: &str) -> Option<Self> {
        let mut segments = inner.split('|').map(str::trim);

        let key = segments.next().filter(|s| is_identifier(s))?;
        let transforms = segments
            .map(|s| is_identifier(s).then(|| s.to_string()))
            .collect::<Option<Vec<_>>>()?;

        Some(Self {
            key: key.to_string(),
            transforms,
        })
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Represents a parsed template element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateElement {
    /// Literal text, emitted unchanged
    Text(String),
    /// Placeholder expression
    Placeholder(Expression),
}

/// Parsed template structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTemplate {
    /// Template elements in source order
    pub elements: Vec<TemplateElement>,
}

impl ParsedTemplate {
    /// Binding keys referenced by the template
    pub fn keys(&self) -> BTreeSet<&str> {
        self.expressions().map(|e| e.key.as_str()).collect()
    }

    /// Transform names referenced by the template
    pub fn transforms(&self) -> BTreeSet<&str> {
        self.expressions()
            .flat_map(|e| e.transforms.iter().map(String::as_str))
            .collect()
    }

    /// True when the template contains no placeholders
    pub fn is_literal(&self) -> bool {
        self.expressions().next().is_none()
    }

    fn expressions(&self) -> impl Iterator<Item = &Expression> {
        self.elements.iter().filter_map(|element| match element {
            TemplateElement::Placeholder(expr) => Some(expr),
            TemplateElement::Text(_) => None,
        })
    }
}

/// Template parser
pub struct TemplateParser;

impl TemplateParser {
    /// Parse template content into elements
    pub fn parse(content: &str) -> ParsedTemplate {
        let mut elements = Vec::new();
        let mut text = String::new();
        let mut rest = content;

        while let Some(open) = rest.find("{{") {
            let after_open = &rest[open + 2..];
            let Some(close) = after_open.find("}}") else {
                break;
            };

            match Expression::parse(&after_open[..close]) {
                Some(expr) => {
                    text.push_str(&rest[..open]);
                    if !text.is_empty() {
                        elements.push(TemplateElement::Text(std::mem::take(&mut text)));
                    }
                    elements.push(TemplateElement::Placeholder(expr));
                    rest = &after_open[close + 2..];
                }
                None => {
                    // Keep one brace and rescan, so `{{{ key }}}` still finds `{{ key }}`.
                    text.push_str(&rest[..=open]);
                    rest = &rest[open + 1..];
                }
            }
        }

        text.push_str(rest);
        if !text.is_empty() {
            elements.push(TemplateElement::Text(text));
        }

        ParsedTemplate { elements }
    }
}
