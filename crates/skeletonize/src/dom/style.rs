//! Inline `style` attribute declarations.
//!
//! [`InlineStyle`] is a small CSSOM-like view over the text of a `style`
//! attribute. Declarations are split with `cssparser`, so semicolons inside
//! strings, `url(...)` tokens and parenthesized functions stay inside their
//! declaration.

use std::fmt;

use cssparser::{Delimiter, ParseError, Parser, ParserInput};

/// A single `name: value` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
    pub important: bool,
}

impl Declaration {
    fn from_source(source: &str) -> Option<Self> {
        let source = source.trim().trim_end_matches(';').trim();
        let (name, value) = source.split_once(':')?;
        let name = normalize_property_name(name.trim());
        if name.is_empty() {
            return None;
        }

        let mut value = value.trim();
        let mut important = false;
        if let Some(stripped) = strip_important(value) {
            value = stripped;
            important = true;
        }
        if value.is_empty() {
            return None;
        }

        Some(Self {
            name,
            value: value.to_string(),
            important,
        })
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)?;
        if self.important {
            f.write_str(" !important")?;
        }
        f.write_str(";")
    }
}

/// Ordered declarations of an element's inline style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<Declaration>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the text of a `style` attribute.
    ///
    /// Malformed declarations are dropped; a repeated property keeps its
    /// first position and its last value.
    pub fn parse(css_text: &str) -> Self {
        let mut style = Self::new();
        let mut input = ParserInput::new(css_text);
        let mut parser = Parser::new(&mut input);

        while !parser.is_exhausted() {
            let start = parser.position();
            let _ = parser.parse_until_after(Delimiter::Semicolon, consume_declaration);
            if let Some(declaration) = Declaration::from_source(parser.slice_from(start)) {
                style.upsert(declaration);
            }
        }

        style
    }

    pub fn get_property_value(&self, name: &str) -> Option<&str> {
        let name = normalize_property_name(name);
        self.declarations
            .iter()
            .find(|declaration| declaration.name == name)
            .map(|declaration| declaration.value.as_str())
    }

    /// Sets a property, updating it in place when already declared.
    ///
    /// An empty value removes the property.
    pub fn set_property(&mut self, name: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.remove_property(name);
            return;
        }
        self.upsert(Declaration {
            name: normalize_property_name(name),
            value: value.to_string(),
            important: false,
        });
    }

    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        let name = normalize_property_name(name);
        let index = self
            .declarations
            .iter()
            .position(|declaration| declaration.name == name)?;
        Some(self.declarations.remove(index).value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Serializes the declarations the way browsers report `style.cssText`.
    pub fn to_css_text(&self) -> String {
        self.declarations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn upsert(&mut self, declaration: Declaration) {
        match self
            .declarations
            .iter_mut()
            .find(|existing| existing.name == declaration.name)
        {
            Some(existing) => *existing = declaration,
            None => self.declarations.push(declaration),
        }
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_text())
    }
}

fn consume_declaration<'i, 't>(parser: &mut Parser<'i, 't>) -> Result<(), ParseError<'i, ()>> {
    while parser.next_including_whitespace_and_comments().is_ok() {}
    Ok(())
}

// Custom properties are case-sensitive; everything else is ASCII case-insensitive.
fn normalize_property_name(name: &str) -> String {
    if name.starts_with("--") {
        name.to_string()
    } else {
        name.to_ascii_lowercase()
    }
}

fn strip_important(value: &str) -> Option<&str> {
    let (head, tail) = value.rsplit_once('!')?;
    if tail.trim().eq_ignore_ascii_case("important") {
        Some(head.trim_end())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_declarations() {
        let style = InlineStyle::parse("width: 120px; height:40px");
        assert_eq!(style.len(), 2);
        assert_eq!(style.get_property_value("width"), Some("120px"));
        assert_eq!(style.get_property_value("HEIGHT"), Some("40px"));
    }

    #[test]
    fn test_parse_keeps_semicolons_inside_functions_and_strings() {
        let style = InlineStyle::parse(
            "background: url(\"data:image/png;base64,AAA\"); content: 'a;b'; color: red",
        );
        assert_eq!(style.len(), 3);
        assert_eq!(
            style.get_property_value("background"),
            Some("url(\"data:image/png;base64,AAA\")")
        );
        assert_eq!(style.get_property_value("content"), Some("'a;b'"));
    }

    #[test]
    fn test_parse_drops_malformed_declarations() {
        let style = InlineStyle::parse("width; : 3px; color: ; ;; height: 1px");
        assert_eq!(style.len(), 1);
        assert_eq!(style.get_property_value("height"), Some("1px"));
    }

    #[test]
    fn test_parse_important() {
        let style = InlineStyle::parse("color: red !important");
        let declaration = style.iter().next().unwrap();
        assert!(declaration.important);
        assert_eq!(declaration.value, "red");
        assert_eq!(style.to_css_text(), "color: red !important;");
    }

    #[test]
    fn test_custom_properties_are_case_sensitive() {
        let mut style = InlineStyle::new();
        style.set_property("--Skeleton-X", "1");
        assert_eq!(style.get_property_value("--Skeleton-X"), Some("1"));
        assert_eq!(style.get_property_value("--skeleton-x"), None);
    }

    #[test]
    fn test_set_property_updates_in_place() {
        let mut style = InlineStyle::parse("display: block; width: 10px");
        style.set_property("display", "inline-block");
        assert_eq!(style.to_css_text(), "display: inline-block; width: 10px;");
    }

    #[test]
    fn test_set_property_appends() {
        let mut style = InlineStyle::parse("width: 10px;");
        style.set_property("display", "inline-block");
        assert_eq!(style.to_css_text(), "width: 10px; display: inline-block;");
    }

    #[test]
    fn test_set_empty_value_removes() {
        let mut style = InlineStyle::parse("width: 10px; height: 2px");
        style.set_property("width", "");
        assert_eq!(style.to_css_text(), "height: 2px;");
    }

    #[test]
    fn test_empty_style() {
        let style = InlineStyle::parse("   ");
        assert!(style.is_empty());
        assert_eq!(style.to_css_text(), "");
    }
}
