use serde::Serialize;

use crate::app::error::FormatError;
use crate::app::language::Language;

/// Fixed pretty-printing style. Deliberately not user-configurable.
#[derive(Debug, Clone, Copy)]
pub struct FormatStyle {
    pub indent_width: usize,
}

pub const STYLE: FormatStyle = FormatStyle { indent_width: 2 };

/// Seam over the external pretty-printer. `PrettyPrinter` is the built-in
/// backend; tests substitute scripted implementations.
pub trait CodeFormatter {
    fn format(&self, text: &str, language: Language) -> Result<String, FormatError>;
}

/// Built-in formatter with serde-based backends.
///
/// Languages without a mapped backend fail the whole operation with an
/// unsupported-language error rather than silently passing text through;
/// the dispatcher reports that to the user.
pub struct PrettyPrinter {
    style: FormatStyle,
}

impl PrettyPrinter {
    pub fn new() -> Self {
        Self { style: STYLE }
    }

    fn format_json(&self, text: &str) -> Result<String, FormatError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| FormatError::Syntax(e.to_string()))?;

        let indent = " ".repeat(self.style.indent_width);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut out = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        value
            .serialize(&mut ser)
            .map_err(|e| FormatError::Syntax(e.to_string()))?;

        let mut formatted = String::from_utf8(out)
            .map_err(|e| FormatError::Syntax(e.to_string()))?;
        formatted.push('\n');
        Ok(formatted)
    }

    fn format_yaml(&self, text: &str) -> Result<String, FormatError> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(text).map_err(|e| FormatError::Syntax(e.to_string()))?;
        serde_yaml::to_string(&value).map_err(|e| FormatError::Syntax(e.to_string()))
    }
}

impl CodeFormatter for PrettyPrinter {
    fn format(&self, text: &str, language: Language) -> Result<String, FormatError> {
        match language {
            Language::Json => self.format_json(text),
            Language::Yaml => self.format_yaml(text),
            other => Err(FormatError::Unsupported(other)),
        }
    }
}

impl Default for PrettyPrinter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_two_space_indent_and_trailing_newline() {
        let printer = PrettyPrinter::new();
        let out = printer.format("{\"a\":1}", Language::Json).unwrap();
        assert_eq!(out, "{\n  \"a\": 1\n}\n");
    }

    #[test]
    fn test_json_nested_structures() {
        let printer = PrettyPrinter::new();
        let out = printer
            .format("{\"a\":[1,2],\"b\":{\"c\":true}}", Language::Json)
            .unwrap();
        assert_eq!(
            out,
            "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": {\n    \"c\": true\n  }\n}\n"
        );
    }

    #[test]
    fn test_invalid_json_is_a_syntax_error() {
        let printer = PrettyPrinter::new();
        let err = printer.format("{\"a\":", Language::Json).unwrap_err();
        assert!(matches!(err, FormatError::Syntax(_)));
        assert_eq!(err.to_string(), "Syntax Error: Unable to format");
    }

    #[test]
    fn test_yaml_normalization() {
        let printer = PrettyPrinter::new();
        let out = printer.format("a:   1\nb:    two", Language::Yaml).unwrap();
        assert_eq!(out, "a: 1\nb: two\n");
    }

    #[test]
    fn test_unmapped_language_is_unsupported() {
        let printer = PrettyPrinter::new();
        let err = printer.format("x = 1", Language::Python).unwrap_err();
        assert!(matches!(err, FormatError::Unsupported(Language::Python)));
    }
}
