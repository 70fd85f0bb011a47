//! Built-in placeholder transforms

use crate::{
    case::CaseStyle,
    error::{InvalidIdentifierError, TemplateError},
};

/// A named transform usable in a placeholder pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Case conversion (`SnakeToCamel`, `PascalCase`, `CamelCase`, ...)
    Case(CaseStyle),
    /// Plain uppercase, no word splitting
    Upper,
    /// Plain lowercase, no word splitting
    Lower,
    /// Quoted YAML scalar, safe to paste after `key: `
    YamlString,
}

impl Transform {
    /// Every transform name the renderer understands
    pub const NAMES: [&'static str; 9] = [
        "SnakeToCamel",
        "PascalCase",
        "CamelCase",
        "SnakeCase",
        "KebabCase",
        "ScreamingSnakeCase",
        "Upper",
        "Lower",
        "YamlString",
    ];

    /// Look up a transform by its template name
    ///
    /// `SnakeToCamel` is the name plugin templates have always used
    /// and produces PascalCase (`my_plugin` becomes `MyPlugin`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "SnakeToCamel" | "PascalCase" => Some(Transform::Case(CaseStyle::Pascal)),
            "CamelCase" => Some(Transform::Case(CaseStyle::Camel)),
            "SnakeCase" => Some(Transform::Case(CaseStyle::Snake)),
            "KebabCase" => Some(Transform::Case(CaseStyle::Kebab)),
            "ScreamingSnakeCase" => Some(Transform::Case(CaseStyle::ScreamingSnake)),
            "Upper" => Some(Transform::Upper),
            "Lower" => Some(Transform::Lower),
            "YamlString" => Some(Transform::YamlString),
            _ => None,
        }
    }

    /// Apply the transform named `name` to `input`
    pub fn apply_named(name: &str, input: &str) -> Result<String, TemplateError> {
        let transform =
            Self::from_name(name).ok_or_else(|| TemplateError::UndefinedTransform(name.to_string()))?;
        transform
            .apply(input)
            .map_err(|source| TemplateError::TransformFailed {
                transform: name.to_string(),
                source,
            })
    }

    /// Apply the transform to `input`
    pub fn apply(&self, input: &str) -> Result<String, InvalidIdentifierError> {
        match self {
            Transform::Case(style) => style.apply(input),
            Transform::Upper => Ok(input.to_uppercase()),
            Transform::Lower => Ok(input.to_lowercase()),
            // A JSON string is a YAML double-quoted scalar and never spans lines.
            Transform::YamlString => Ok(serde_json::Value::from(input).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_name_resolves() {
        for name in Transform::NAMES {
            assert!(Transform::from_name(name).is_some(), "{name} should resolve");
        }
    }

    #[test]
    fn test_snake_to_camel_is_pascal() {
        assert_eq!(Transform::apply_named("SnakeToCamel", "my_plugin").unwrap(), "MyPlugin");
    }

    #[test]
    fn test_upper_does_not_split_words() {
        assert_eq!(Transform::apply_named("Upper", "my plugin").unwrap(), "MY PLUGIN");
    }

    #[test]
    fn test_yaml_string_parses_back_to_input() {
        for input in [
            "Weather: current conditions # live",
            "- starts like a list",
            "it's \"quoted\"",
            "two\nlines",
            "true",
            "",
        ] {
            let quoted = Transform::apply_named("YamlString", input).unwrap();
            let doc = format!("description: {quoted}\n");
            let value: serde_yaml::Value = serde_yaml::from_str(&doc).unwrap();
            assert_eq!(value["description"].as_str(), Some(input), "{doc}");
        }
    }

    #[test]
    fn test_unknown_transform() {
        assert_eq!(
            Transform::apply_named("Reverse", "abc"),
            Err(TemplateError::UndefinedTransform("Reverse".to_string()))
        );
    }

    #[test]
    fn test_transform_failure_carries_name() {
        let err = Transform::apply_named("SnakeCase", "__").unwrap_err();
        assert!(matches!(err, TemplateError::TransformFailed { ref transform, .. } if transform == "SnakeCase"));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!(Transform::from_name("snaketocamel").is_none());
    }
}
