//! Message templates
//!
//! A template is literal text with named holes: `"User {UserId} logged in"`.
//! A hole may be prefixed with `@` to destructure the captured value, or `$`
//! to capture it by its string rendering. `{{` and `}}` are literal braces.
//! A hole may carry a format after `:`; the only format honored when
//! rendering is `l`, which renders string values without quotes.

use super::property::{PropertyValue, ScalarValue};
use std::fmt;

/// How a hole's argument is captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Destructuring {
    #[default]
    Default,
    Stringify,
    Destructure,
}

/// A hole in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyToken {
    name: String,
    destructuring: Destructuring,
    format: Option<String>,
    raw: String,
}

impl PropertyToken {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn destructuring(&self) -> Destructuring {
        self.destructuring
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Original source text of the hole, braces included
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Argument index for numeric holes such as `{0}`
    pub fn position(&self) -> Option<usize> {
        self.name.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateToken {
    Text(String),
    Property(PropertyToken),
}

/// A parsed message template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    text: String,
    tokens: Vec<TemplateToken>,
}

impl MessageTemplate {
    /// Parse template text. Parsing never fails; malformed holes become text.
    pub fn parse(text: &str) -> Self {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut rest = text;

        while let Some(c) = rest.chars().next() {
            match c {
                '{' if rest.starts_with("{{") => {
                    literal.push('{');
                    rest = &rest[2..];
                }
                '}' if rest.starts_with("}}") => {
                    literal.push('}');
                    rest = &rest[2..];
                }
                '{' => match rest.find('}') {
                    Some(end) => {
                        let raw = &rest[..=end];
                        match Self::parse_hole(raw) {
                            Some(token) => {
                                if !literal.is_empty() {
                                    tokens.push(TemplateToken::Text(std::mem::take(&mut literal)));
                                }
                                tokens.push(TemplateToken::Property(token));
                            }
                            None => literal.push_str(raw),
                        }
                        rest = &rest[end + 1..];
                    }
                    None => {
                        literal.push_str(rest);
                        rest = "";
                    }
                },
                _ => {
                    literal.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }

        if !literal.is_empty() {
            tokens.push(TemplateToken::Text(literal));
        }

        Self {
            text: text.to_string(),
            tokens,
        }
    }

    fn parse_hole(raw: &str) -> Option<PropertyToken> {
        let inner = &raw[1..raw.len() - 1];
        let (destructuring, inner) = match inner.chars().next() {
            Some('@') => (Destructuring::Destructure, &inner[1..]),
            Some('$') => (Destructuring::Stringify, &inner[1..]),
            _ => (Destructuring::Default, inner),
        };

        let (name, format) = match inner.split_once(':') {
            Some((name, format)) => (name, Some(format.to_string())),
            None => (inner, None),
        };

        let valid = !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_');
        if !valid {
            return None;
        }

        Some(PropertyToken {
            name: name.to_string(),
            destructuring,
            format,
            raw: raw.to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[TemplateToken] {
        &self.tokens
    }

    pub fn property_tokens(&self) -> impl Iterator<Item = &PropertyToken> {
        self.tokens.iter().filter_map(|token| match token {
            TemplateToken::Property(p) => Some(p),
            TemplateToken::Text(_) => None,
        })
    }

    /// True when the template has holes and every one of them is numeric
    pub fn is_positional(&self) -> bool {
        let mut holes = self.property_tokens().peekable();
        holes.peek().is_some() && holes.all(|p| p.position().is_some())
    }

    /// Render the template, resolving holes through `lookup`.
    /// Holes without a value are rendered as their raw source text.
    pub fn render<'a, F>(&self, lookup: F) -> String
    where
        F: Fn(&str) -> Option<&'a PropertyValue>,
    {
        let mut output = String::with_capacity(self.text.len());
        for token in &self.tokens {
            match token {
                TemplateToken::Text(text) => output.push_str(text),
                TemplateToken::Property(p) => match lookup(p.name()) {
                    Some(PropertyValue::Scalar(ScalarValue::String(s)))
                        if p.format() == Some("l") =>
                    {
                        output.push_str(s)
                    }
                    Some(value) => output.push_str(&value.to_string()),
                    None => output.push_str(p.raw()),
                },
            }
        }
        output
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(template: &MessageTemplate) -> Vec<&str> {
        template.property_tokens().map(PropertyToken::name).collect()
    }

    #[test]
    fn test_parse_named_holes() {
        let template = MessageTemplate::parse("User {UserId} bought {@Order} for {$Price:l}");
        assert_eq!(names(&template), vec!["UserId", "Order", "Price"]);

        let holes: Vec<_> = template.property_tokens().collect();
        assert_eq!(holes[1].destructuring(), Destructuring::Destructure);
        assert_eq!(holes[2].destructuring(), Destructuring::Stringify);
        assert_eq!(holes[2].format(), Some("l"));
        assert!(!template.is_positional());
    }

    #[test]
    fn test_escaped_braces_and_malformed_holes() {
        let template = MessageTemplate::parse("{{literal}} {not valid} {open");
        assert!(names(&template).is_empty());
        assert_eq!(
            template.tokens(),
            &[TemplateToken::Text("{literal} {not valid} {open".to_string())]
        );
    }

    #[test]
    fn test_positional() {
        let template = MessageTemplate::parse("{0} then {1}");
        assert!(template.is_positional());
        assert!(!MessageTemplate::parse("no holes").is_positional());
    }

    #[test]
    fn test_render() {
        let template = MessageTemplate::parse("Hello {Name}, {Name:l}! {Missing}");
        let name = PropertyValue::from("Ada");
        let rendered = template.render(|n| if n == "Name" { Some(&name) } else { None });
        assert_eq!(rendered, "Hello \"Ada\", Ada! {Missing}");
    }

    #[test]
    fn test_non_ascii_text() {
        let template = MessageTemplate::parse("Größe {Wert} ✓");
        assert_eq!(names(&template), vec!["Wert"]);
        assert_eq!(template.text(), "Größe {Wert} ✓");
    }
}
