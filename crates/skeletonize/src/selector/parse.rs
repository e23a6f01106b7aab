//! Selector parsing.
//!
//! Parsing runs in two passes. `cssparser` first tokenizes the selector into
//! [`Lexeme`]s, resolving attribute blocks as it goes; the grammar pass then
//! groups lexemes into compound selectors joined by combinators.

use cssparser::{ParseError, Parser, ParserInput, Token};

use super::error::SelectorError;

/// How two compound selectors relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// `a b`
    Descendant,
    /// `a > b`
    Child,
    /// `a + b`
    NextSibling,
    /// `a ~ b`
    SubsequentSibling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeOperator {
    /// `[a=v]`
    Equals,
    /// `[a~=v]`
    Includes,
    /// `[a|=v]`
    DashMatch,
    /// `[a^=v]`
    Prefix,
    /// `[a$=v]`
    Suffix,
    /// `[a*=v]`
    Substring,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSelector {
    pub name: String,
    pub matcher: Option<(AttributeOperator, String)>,
}

/// A sequence of simple selectors with no combinator, like `img.hero[alt]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    /// Lowercased type selector; `None` matches any element.
    pub tag: Option<String>,
    pub ids: Vec<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<AttributeSelector>,
    has_type: bool,
}

impl CompoundSelector {
    fn is_empty(&self) -> bool {
        !self.has_type && self.ids.is_empty() && self.classes.is_empty() && self.attributes.is_empty()
    }
}

/// Compound selectors joined by combinators, read left to right.
///
/// `combinators[i]` joins `compounds[i]` and `compounds[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexSelector {
    pub compounds: Vec<CompoundSelector>,
    pub combinators: Vec<Combinator>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Lexeme {
    Ident(String),
    Id(String),
    Dot,
    Star,
    Whitespace,
    Comma,
    Combinator(Combinator),
    Attribute(AttributeSelector),
}

/// Parses a comma-separated selector list.
pub(crate) fn parse_selector_list(selector: &str) -> Result<Vec<ComplexSelector>, SelectorError> {
    let lexemes = lex(selector)?;
    lexemes
        .split(|lexeme| *lexeme == Lexeme::Comma)
        .map(|group| parse_complex(selector, group))
        .collect()
}

pub(crate) fn lex(selector: &str) -> Result<Vec<Lexeme>, SelectorError> {
    let mut input = ParserInput::new(selector);
    let mut parser = Parser::new(&mut input);
    let mut lexemes = Vec::new();

    loop {
        let location = parser.current_source_location();
        let token = match parser.next_including_whitespace() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        let lexeme = match token {
            Token::Ident(name) => Lexeme::Ident(name.to_string()),
            Token::IDHash(id) => Lexeme::Id(id.to_string()),
            Token::Delim('.') => Lexeme::Dot,
            Token::Delim('*') => Lexeme::Star,
            Token::Delim('>') => Lexeme::Combinator(Combinator::Child),
            Token::Delim('+') => Lexeme::Combinator(Combinator::NextSibling),
            Token::Delim('~') => Lexeme::Combinator(Combinator::SubsequentSibling),
            Token::WhiteSpace(_) => Lexeme::Whitespace,
            Token::Comma => Lexeme::Comma,
            Token::SquareBracketBlock => {
                let attribute = parser
                    .parse_nested_block(parse_attribute)
                    .map_err(|err| syntax_error(selector, err))?;
                Lexeme::Attribute(attribute)
            }
            Token::Colon => return Err(unsupported(selector, "pseudo-class")),
            Token::Delim('|') => return Err(unsupported(selector, "namespace")),
            _ => {
                return Err(SelectorError::Syntax {
                    selector: selector.to_string(),
                    line: location.line + 1,
                    column: location.column,
                })
            }
        };
        lexemes.push(lexeme);
    }

    Ok(lexemes)
}

fn parse_attribute<'i, 't>(
    parser: &mut Parser<'i, 't>,
) -> Result<AttributeSelector, ParseError<'i, ()>> {
    let name = parser.expect_ident()?.to_ascii_lowercase();
    if parser.is_exhausted() {
        return Ok(AttributeSelector {
            name,
            matcher: None,
        });
    }

    let operator = match parser.next()?.clone() {
        Token::Delim('=') => AttributeOperator::Equals,
        Token::IncludeMatch => AttributeOperator::Includes,
        Token::DashMatch => AttributeOperator::DashMatch,
        Token::PrefixMatch => AttributeOperator::Prefix,
        Token::SuffixMatch => AttributeOperator::Suffix,
        Token::SubstringMatch => AttributeOperator::Substring,
        _ => return Err(parser.new_custom_error(())),
    };
    let value = parser.expect_ident_or_string()?.to_string();
    parser.expect_exhausted()?;

    Ok(AttributeSelector {
        name,
        matcher: Some((operator, value)),
    })
}

fn parse_complex(selector: &str, group: &[Lexeme]) -> Result<ComplexSelector, SelectorError> {
    let group = trim_whitespace(group);
    if group.is_empty() {
        return Err(SelectorError::Empty {
            selector: selector.to_string(),
        });
    }

    let mut compounds = Vec::new();
    let mut combinators = Vec::new();
    let mut current: Option<CompoundSelector> = None;
    let mut pending: Option<Combinator> = None;
    let mut lexemes = group.iter();

    while let Some(lexeme) = lexemes.next() {
        match lexeme {
            Lexeme::Whitespace => {
                if let Some(compound) = current.take() {
                    compounds.push(compound);
                    pending = Some(Combinator::Descendant);
                }
            }
            Lexeme::Combinator(combinator) => {
                if let Some(compound) = current.take() {
                    compounds.push(compound);
                }
                let dangling = compounds.is_empty()
                    || matches!(pending, Some(existing) if existing != Combinator::Descendant);
                if dangling {
                    return Err(malformed(selector, "misplaced combinator"));
                }
                pending = Some(*combinator);
            }
            Lexeme::Comma => return Err(malformed(selector, "unexpected comma")),
            simple => {
                if current.is_none() {
                    if !compounds.is_empty() {
                        let combinator = pending
                            .take()
                            .ok_or_else(|| malformed(selector, "missing combinator"))?;
                        combinators.push(combinator);
                    }
                    current = Some(CompoundSelector::default());
                }
                if let Some(compound) = current.as_mut() {
                    push_simple(selector, compound, simple, &mut lexemes)?;
                }
            }
        }
    }

    match current {
        Some(compound) => compounds.push(compound),
        None => return Err(malformed(selector, "trailing combinator")),
    }

    Ok(ComplexSelector {
        compounds,
        combinators,
    })
}

fn push_simple<'a>(
    selector: &str,
    compound: &mut CompoundSelector,
    lexeme: &'a Lexeme,
    rest: &mut impl Iterator<Item = &'a Lexeme>,
) -> Result<(), SelectorError> {
    match lexeme {
        Lexeme::Ident(tag) => {
            if !compound.is_empty() {
                return Err(malformed(selector, "type selector must come first"));
            }
            compound.tag = Some(tag.to_ascii_lowercase());
            compound.has_type = true;
        }
        Lexeme::Star => {
            if !compound.is_empty() {
                return Err(malformed(selector, "universal selector must come first"));
            }
            compound.has_type = true;
        }
        Lexeme::Id(id) => compound.ids.push(id.clone()),
        Lexeme::Dot => match rest.next() {
            Some(Lexeme::Ident(class)) => compound.classes.push(class.clone()),
            _ => return Err(malformed(selector, "expected class name after '.'")),
        },
        Lexeme::Attribute(attribute) => compound.attributes.push(attribute.clone()),
        Lexeme::Whitespace | Lexeme::Comma | Lexeme::Combinator(_) => {
            return Err(malformed(selector, "unexpected token"))
        }
    }
    Ok(())
}

fn trim_whitespace(group: &[Lexeme]) -> &[Lexeme] {
    let start = group
        .iter()
        .position(|lexeme| *lexeme != Lexeme::Whitespace)
        .unwrap_or(group.len());
    let end = group
        .iter()
        .rposition(|lexeme| *lexeme != Lexeme::Whitespace)
        .map_or(start, |index| index + 1);
    &group[start..end]
}

fn syntax_error(selector: &str, err: ParseError<'_, ()>) -> SelectorError {
    SelectorError::Syntax {
        selector: selector.to_string(),
        line: err.location.line + 1,
        column: err.location.column,
    }
}

fn malformed(selector: &str, reason: &str) -> SelectorError {
    SelectorError::Malformed {
        selector: selector.to_string(),
        reason: reason.to_string(),
    }
}

fn unsupported(selector: &str, feature: &str) -> SelectorError {
    SelectorError::Unsupported {
        selector: selector.to_string(),
        feature: feature.to_string(),
    }
}
