//! Text templates for rendered documentation blocks.
//!
//! Templates use a simple `{{variable}}` syntax. Rendering is a single pass
//! over the template: substituted values are copied verbatim and never scanned
//! for placeholders, so fetched pages containing `{{...}}` come out unchanged.

use std::borrow::Cow;

/// A template string with `{{variable}}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: Cow<'static, str>,
}

impl Template {
    /// Create a template from any string.
    pub fn new(source: impl Into<Cow<'static, str>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// The raw template text.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Render the template.
    ///
    /// Placeholders without a matching variable render as empty strings; an
    /// unterminated `{{` is emitted literally.
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(self.source.len());
        let mut rest: &str = &self.source;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let Some(end) = after.find("}}") else {
                out.push_str(&rest[start..]);
                rest = "";
                break;
            };

            let name = after[..end].trim();
            if let Some((_, value)) = vars.iter().find(|(key, _)| *key == name) {
                out.push_str(value);
            }
            rest = &after[end + 2..];
        }

        out.push_str(rest);
        out
    }
}

impl From<&'static str> for Template {
    fn from(source: &'static str) -> Self {
        Self::new(source)
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_substitution() {
        let template = Template::new("Hello, {{name}}!");
        assert_eq!(template.render(&[("name", "World")]), "Hello, World!");
    }

    #[test]
    fn test_whitespace_inside_braces() {
        let template = Template::new("{{ content }} from {{source_url}}");
        let out = template.render(&[("content", "text"), ("source_url", "https://x")]);
        assert_eq!(out, "text from https://x");
    }

    #[test]
    fn test_missing_variable_renders_empty() {
        let template = Template::new("[{{missing}}]");
        assert_eq!(template.render(&[]), "[]");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let template = Template::new("{{content}} | {{source_url}}");
        let out = template.render(&[("content", "{{source_url}}"), ("source_url", "u")]);
        assert_eq!(out, "{{source_url}} | u");
    }

    #[test]
    fn test_unterminated_placeholder_is_literal() {
        let template = Template::new("value: {{content");
        assert_eq!(template.render(&[("content", "x")]), "value: {{content");
    }

    #[test]
    fn test_single_braces_untouched() {
        let template = Template::new("const x = { a: 1 }; `${y}` {{v}}");
        assert_eq!(template.render(&[("v", "ok")]), "const x = { a: 1 }; `${y}` ok");
    }
}
