//! Identifier case conversion
//!
//! Splits an identifier into words and joins them back in a target
//! convention. Input is first cut into chunks on `_`, `-` and whitespace.
//! A chunk written entirely in capitals next to other chunks is one word
//! (`MY_PLUGIN`). Any other chunk starts a new word at every uppercase
//! letter, so `MyXPlugin` and `AB` keep their one-letter words. Digits stay
//! attached to the word they follow.

use heck::{ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use serde::{Deserialize, Serialize};

use crate::error::InvalidIdentifierError;

/// Naming conventions the converter can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CaseStyle {
    /// PascalCase (e.g., MyPlugin)
    Pascal,
    /// camelCase (e.g., myPlugin)
    Camel,
    /// snake_case (e.g., my_plugin)
    Snake,
    /// kebab-case (e.g., my-plugin)
    Kebab,
    /// SCREAMING_SNAKE_CASE (e.g., MY_PLUGIN)
    ScreamingSnake,
}

impl CaseStyle {
    /// Convert `input` to this style
    pub fn apply(&self, input: &str) -> Result<String, InvalidIdentifierError> {
        match self {
            CaseStyle::Pascal => to_pascal_case(input),
            CaseStyle::Camel => to_camel_case(input),
            CaseStyle::Snake => to_snake_case(input),
            CaseStyle::Kebab => to_kebab_case(input),
            CaseStyle::ScreamingSnake => to_screaming_snake_case(input),
        }
    }
}

fn is_separator(ch: char) -> bool {
    ch == '_' || ch == '-' || ch.is_whitespace()
}

/// Split an identifier into its words
///
/// Fails when the input is empty or made only of separators.
pub fn tokenize(input: &str) -> Result<Vec<String>, InvalidIdentifierError> {
    let chunks: Vec<&str> = input.split(is_separator).filter(|c| !c.is_empty()).collect();

    if chunks.is_empty() {
        let reason = if input.is_empty() {
            "identifier is empty"
        } else {
            "identifier contains only separators"
        };
        return Err(InvalidIdentifierError::new(input, reason));
    }

    let separated = chunks.len() > 1;
    let mut tokens = Vec::new();
    for chunk in chunks {
        if separated && !chunk.chars().any(char::is_lowercase) {
            tokens.push(chunk.to_string());
        } else {
            split_at_capitals(chunk, &mut tokens);
        }
    }

    Ok(tokens)
}

fn split_at_capitals(chunk: &str, tokens: &mut Vec<String>) {
    let mut current = String::new();
    for ch in chunk.chars() {
        if ch.is_uppercase() && !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        tokens.push(current);
    }
}

/// Convert to PascalCase: `my_plugin` becomes `MyPlugin`
pub fn to_pascal_case(input: &str) -> Result<String, InvalidIdentifierError> {
    Ok(tokenize(input)?
        .iter()
        .map(|t| t.to_upper_camel_case())
        .collect())
}

/// Convert to camelCase: `my_plugin` becomes `myPlugin`
pub fn to_camel_case(input: &str) -> Result<String, InvalidIdentifierError> {
    let tokens = tokenize(input)?;
    let mut result = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i == 0 {
            result.push_str(&token.to_snake_case());
        } else {
            result.push_str(&token.to_upper_camel_case());
        }
    }
    Ok(result)
}

/// Convert to snake_case: `MyPlugin` becomes `my_plugin`
pub fn to_snake_case(input: &str) -> Result<String, InvalidIdentifierError> {
    join_words(input, "_", |t| t.to_snake_case())
}

/// Convert to kebab-case: `MyPlugin` becomes `my-plugin`
pub fn to_kebab_case(input: &str) -> Result<String, InvalidIdentifierError> {
    join_words(input, "-", |t| t.to_snake_case())
}

/// Convert to SCREAMING_SNAKE_CASE: `my-plugin` becomes `MY_PLUGIN`
pub fn to_screaming_snake_case(input: &str) -> Result<String, InvalidIdentifierError> {
    join_words(input, "_", |t| t.to_shouty_snake_case())
}

// Each token is a single word for heck: no separators, no inner word break.
fn join_words(
    input: &str,
    separator: &str,
    word: impl Fn(&str) -> String,
) -> Result<String, InvalidIdentifierError> {
    Ok(tokenize(input)?
        .iter()
        .map(|t| word(t))
        .collect::<Vec<_>>()
        .join(separator))
}
