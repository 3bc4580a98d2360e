use regex_lite::Regex;
use syntect::parsing::SyntaxSet;

use crate::app::error::ClassifyError;

/// Seam over the external language classifier. Returns a raw label (syntect
/// syntax name, alias, or empty string for "no idea"); the caller maps it
/// onto the fixed `Language` set. May fail, but a failure never reaches the
/// user.
pub trait LanguageClassifier {
    fn classify(&self, text: &str) -> Result<String, ClassifyError>;
}

/// Minimum token-probe score before a label is trusted. One stray keyword
/// is not enough evidence.
const MIN_SCORE: usize = 2;

struct TokenProbe {
    label: &'static str,
    patterns: Vec<Regex>,
}

impl TokenProbe {
    fn score(&self, text: &str) -> usize {
        self.patterns
            .iter()
            .map(|re| re.find_iter(text).count())
            .sum()
    }
}

/// Content-based best-effort classifier.
///
/// Probes in order of reliability: a strict JSON parse, syntect's first-line
/// detection (shebangs, `<?xml`, `<!DOCTYPE`), weighted keyword scoring per
/// language, and finally a structural YAML parse. Anything unrecognized
/// yields an empty label.
pub struct ContentClassifier {
    syntax_set: SyntaxSet,
    probes: Vec<TokenProbe>,
}

impl ContentClassifier {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            probes: build_probes(),
        }
    }

    fn json_probe(text: &str) -> bool {
        let trimmed = text.trim_start();
        (trimmed.starts_with('{') || trimmed.starts_with('['))
            && serde_json::from_str::<serde_json::Value>(text).is_ok()
    }

    fn yaml_probe(text: &str) -> bool {
        matches!(
            serde_yaml::from_str::<serde_yaml::Value>(text),
            Ok(serde_yaml::Value::Mapping(_))
        )
    }
}

impl LanguageClassifier for ContentClassifier {
    fn classify(&self, text: &str) -> Result<String, ClassifyError> {
        if Self::json_probe(text) {
            return Ok("json".to_string());
        }

        if let Some(syntax) = self.syntax_set.find_syntax_by_first_line(text) {
            if syntax.name != "Plain Text" {
                return Ok(syntax.name.clone());
            }
        }

        // Strict > keeps the first probe on equal scores, so the table's
        // more-to-less-distinctive ordering decides ties.
        let mut best: Option<(usize, &'static str)> = None;
        for p in &self.probes {
            let score = p.score(text);
            if score >= MIN_SCORE && best.is_none_or(|(s, _)| score > s) {
                best = Some((score, p.label));
            }
        }
        if let Some((_, label)) = best {
            return Ok(label.to_string());
        }

        if Self::yaml_probe(text) {
            return Ok("yaml".to_string());
        }

        Ok(String::new())
    }
}

impl Default for ContentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn build_probes() -> Vec<TokenProbe> {
    let probe = |label: &'static str, patterns: &[&str]| TokenProbe {
        label,
        patterns: patterns
            .iter()
            .map(|p| Regex::new(p).expect("invalid probe pattern"))
            .collect(),
    };

    // Order matters only for ties: earlier probes win.
    vec![
        probe("php", &[r"<\?php", r"\$[a-zA-Z_]\w*\s*=", r"\becho\s"]),
        probe(
            "html",
            &[
                r"(?i)<!doctype\s+html",
                r"(?i)<(html|head|body|div|span|p|a|ul|li|table)\b",
                r"</[a-zA-Z][a-zA-Z0-9]*>",
            ],
        ),
        probe(
            "css",
            &[
                r"(?m)^\s*[.#]?[a-zA-Z][\w-]*\s*\{",
                r"[\w-]+\s*:\s*[^;{}]+;",
                r"@(media|import|keyframes)\b",
            ],
        ),
        probe(
            "sql",
            &[
                r"(?i)\bselect\b[\s\S]+\bfrom\b",
                r"(?i)\binsert\s+into\b",
                r"(?i)\bcreate\s+table\b",
                r"(?i)\b(where|group\s+by|order\s+by)\b",
            ],
        ),
        probe(
            "python",
            &[
                r"(?m)^\s*def\s+\w+\s*\(.*\)\s*:",
                r"(?m)^\s*class\s+\w+.*:",
                r"(?m)^(import|from)\s+\w+",
                r"\bself\b",
                r"\bprint\(",
            ],
        ),
        probe(
            "java",
            &[
                r"\bpublic\s+(class|static|void|final)\b",
                r"\bSystem\.out\.println\b",
                r"(?m)^\s*(private|protected)\s+\w+(<[\w, ]+>)?\s+\w+",
                r"\bimport\s+java\.",
            ],
        ),
        probe(
            "typescript",
            &[
                r":\s*(string|number|boolean|any|void|unknown)\b",
                r"\binterface\s+\w+",
                r"\btype\s+\w+\s*=",
                r"\benum\s+\w+",
            ],
        ),
        probe(
            "javascript",
            &[
                r"\bfunction\s*\w*\s*\(",
                r"\b(const|let|var)\s+\w+\s*=",
                r"=>",
                r"\bconsole\.(log|warn|error)\b",
                r"\brequire\(",
            ],
        ),
        probe(
            "markdown",
            &[
                r"(?m)^#{1,6}\s+\S",
                r"(?m)^[-*]\s+\S",
                r"\[[^\]]+\]\([^)]+\)",
                r"```",
            ],
        ),
        probe("yaml", &[r"(?m)^[\w-]+:\s+\S", r"(?m)^\s*-\s+[\w'\x22]"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::language::Language;

    fn classify(text: &str) -> Language {
        let classifier = ContentClassifier::new();
        Language::from_raw_label(&classifier.classify(text).unwrap())
    }

    #[test]
    fn test_json_object() {
        assert_eq!(classify("{\"a\":1}"), Language::Json);
        assert_eq!(classify("[1, 2, 3]"), Language::Json);
    }

    #[test]
    fn test_javascript_snippet() {
        let code = "const x = 1;\nfunction add(a, b) { return a + b; }\nconsole.log(add(x, 2));";
        assert_eq!(classify(code), Language::Javascript);
    }

    #[test]
    fn test_typescript_beats_javascript_on_annotations() {
        let code = "interface Point { x: number; y: number }\nconst p: Point = { x: 1, y: 2 };\ntype Id = string;\nfunction f(a: number): void {}";
        assert_eq!(classify(code), Language::Typescript);
    }

    #[test]
    fn test_python_snippet() {
        let code = "import os\n\ndef main():\n    print(os.getcwd())\n";
        assert_eq!(classify(code), Language::Python);
    }

    #[test]
    fn test_html_document() {
        let code = "<!DOCTYPE html>\n<html><body><p>hi</p></body></html>";
        assert_eq!(classify(code), Language::Html);
    }

    #[test]
    fn test_sql_query() {
        let code = "SELECT id, name FROM users WHERE active = 1 ORDER BY name;";
        assert_eq!(classify(code), Language::Sql);
    }

    #[test]
    fn test_php_snippet() {
        let code = "<?php\n$total = 0;\necho $total;";
        assert_eq!(classify(code), Language::Php);
    }

    #[test]
    fn test_tied_scores_resolve_to_earlier_probe() {
        // typescript and javascript both score 2 here; typescript sits
        // earlier in the table and must win the tie.
        let code = "interface A {}\ntype B = C\nconst x = 1\nlet y = 2";
        assert_eq!(classify(code), Language::Typescript);
    }

    #[test]
    fn test_yaml_mapping() {
        let code = "name: ferris\nversion: 2\nitems:\n  - one\n  - two\n";
        assert_eq!(classify(code), Language::Yaml);
    }

    #[test]
    fn test_markdown_document() {
        let code = "# Title\n\n- first\n- second\n\nSee [docs](https://example.com).\n";
        assert_eq!(classify(code), Language::Markdown);
    }

    #[test]
    fn test_xml_prolog_via_first_line() {
        let code = "<?xml version=\"1.0\"?>\n<root><item/></root>";
        assert_eq!(classify(code), Language::Xml);
    }

    #[test]
    fn test_plain_prose_is_unrecognized() {
        let code = "Just a plain sentence without any code in it.";
        assert_eq!(classify(code), Language::Plaintext);
    }
}
