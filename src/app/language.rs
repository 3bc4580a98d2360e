use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical identifier for the syntax assumed in both panes.
///
/// `Plaintext` doubles as the default and the "no detection possible"
/// sentinel; every unknown classifier label collapses onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Javascript,
    Typescript,
    Json,
    Html,
    Css,
    Yaml,
    Python,
    Sql,
    Markdown,
    Php,
    Java,
    Xml,
    Plaintext,
}

impl Language {
    /// Lowercase tag as shown in the status bar and settings file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Typescript => "typescript",
            Language::Json => "json",
            Language::Html => "html",
            Language::Css => "css",
            Language::Yaml => "yaml",
            Language::Python => "python",
            Language::Sql => "sql",
            Language::Markdown => "markdown",
            Language::Php => "php",
            Language::Java => "java",
            Language::Xml => "xml",
            Language::Plaintext => "plaintext",
        }
    }

    /// Map a raw classifier label (syntect syntax name, alias, extension)
    /// onto the fixed tag set. Unknown labels become `Plaintext`.
    pub fn from_raw_label(label: &str) -> Language {
        match label.trim().to_lowercase().as_str() {
            "javascript" | "js" | "node" => Language::Javascript,
            "typescript" | "ts" => Language::Typescript,
            "json" => Language::Json,
            "html" | "html (rails)" => Language::Html,
            "css" => Language::Css,
            "yaml" | "yml" => Language::Yaml,
            "python" | "py" => Language::Python,
            "sql" => Language::Sql,
            "markdown" | "md" => Language::Markdown,
            "php" => Language::Php,
            "java" => Language::Java,
            "xml" => Language::Xml,
            _ => Language::Plaintext,
        }
    }

    /// Name of the syntect syntax used to highlight this language.
    ///
    /// TypeScript is not in syntect's default set, so it borrows the
    /// JavaScript grammar. `None` means no highlighting.
    pub fn syntect_name(&self) -> Option<&'static str> {
        match self {
            Language::Javascript | Language::Typescript => Some("JavaScript"),
            Language::Json => Some("JSON"),
            Language::Html => Some("HTML"),
            Language::Css => Some("CSS"),
            Language::Yaml => Some("YAML"),
            Language::Python => Some("Python"),
            Language::Sql => Some("SQL"),
            Language::Markdown => Some("Markdown"),
            Language::Php => Some("PHP"),
            Language::Java => Some("Java"),
            Language::Xml => Some("XML"),
            Language::Plaintext => None,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Plaintext
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_plaintext() {
        assert_eq!(Language::default(), Language::Plaintext);
    }

    #[test]
    fn test_raw_label_aliases() {
        assert_eq!(Language::from_raw_label("JavaScript"), Language::Javascript);
        assert_eq!(Language::from_raw_label("js"), Language::Javascript);
        assert_eq!(Language::from_raw_label("ts"), Language::Typescript);
        assert_eq!(Language::from_raw_label("YAML"), Language::Yaml);
        assert_eq!(Language::from_raw_label("yml"), Language::Yaml);
        assert_eq!(Language::from_raw_label("JSON"), Language::Json);
    }

    #[test]
    fn test_unknown_label_falls_back_to_plaintext() {
        assert_eq!(Language::from_raw_label("brainfuck"), Language::Plaintext);
        assert_eq!(Language::from_raw_label(""), Language::Plaintext);
        assert_eq!(Language::from_raw_label("  "), Language::Plaintext);
    }

    #[test]
    fn test_display_matches_tag() {
        assert_eq!(Language::Json.to_string(), "json");
        assert_eq!(Language::Plaintext.to_string(), "plaintext");
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Language::Typescript).unwrap();
        assert_eq!(json, "\"typescript\"");
        let lang: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(lang, Language::Typescript);
    }

    #[test]
    fn test_typescript_highlights_as_javascript() {
        assert_eq!(Language::Typescript.syntect_name(), Some("JavaScript"));
        assert_eq!(Language::Plaintext.syntect_name(), None);
    }
}
