//! CSS selector engine for the document model.
//!
//! Supports type and universal selectors, `#id`, `.class`, attribute
//! selectors (`[a]`, `=`, `~=`, `|=`, `^=`, `$=`, `*=`), the descendant,
//! child (`>`), next-sibling (`+`) and subsequent-sibling (`~`) combinators,
//! and comma-separated lists. Pseudo-classes, pseudo-elements and namespaces
//! are rejected with [`SelectorError::Unsupported`].

mod error;
mod matching;
mod parse;

pub use error::SelectorError;
pub use parse::{
    AttributeOperator, AttributeSelector, Combinator, ComplexSelector, CompoundSelector,
};

use crate::dom::{Document, NodeId};

/// A parsed, comma-separated list of selectors.
///
/// # Example
///
/// ```rust
/// use skeletonize::dom::Document;
/// use skeletonize::selector::SelectorList;
///
/// let mut document = Document::new();
/// let body = document.body();
/// let list = document.append_element(body, "ul", &[("class", "feed")]).unwrap();
/// let item = document.append_element(list, "li", &[("data-kind", "post")]).unwrap();
///
/// let selectors = SelectorList::parse(".feed > li[data-kind=post]").unwrap();
/// assert!(selectors.matches(&document, item));
/// assert!(!selectors.matches(&document, list));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    selectors: Vec<ComplexSelector>,
}

impl SelectorList {
    pub fn parse(selector: &str) -> Result<Self, SelectorError> {
        Ok(Self {
            selectors: parse::parse_selector_list(selector)?,
        })
    }

    /// Whether any selector in the list matches `node`.
    pub fn matches(&self, document: &Document, node: NodeId) -> bool {
        self.selectors
            .iter()
            .any(|selector| selector.matches(document, node))
    }

    pub fn selectors(&self) -> &[ComplexSelector] {
        &self.selectors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        document: Document,
        main: NodeId,
        card: NodeId,
        title: NodeId,
        image: NodeId,
        footer: NodeId,
    }

    // <main id="content" class="page">
    //   <div class="card wide" data-skeleton-color="red" lang="en-US">
    //     <h2>..</h2><img src="hero.png">
    //   </div>
    //   <footer></footer>
    // </main>
    fn fixture() -> Fixture {
        let mut document = Document::new();
        let body = document.body();
        let main = document
            .append_element(body, "main", &[("id", "content"), ("class", "page")])
            .unwrap();
        let card = document
            .append_element(
                main,
                "div",
                &[
                    ("class", "card wide"),
                    ("data-skeleton-color", "red"),
                    ("lang", "en-US"),
                ],
            )
            .unwrap();
        let title = document.append_element(card, "h2", &[]).unwrap();
        let image = document
            .append_element(card, "img", &[("src", "hero.png")])
            .unwrap();
        let footer = document.append_element(main, "footer", &[]).unwrap();
        Fixture {
            document,
            main,
            card,
            title,
            image,
            footer,
        }
    }

    fn select(fixture: &Fixture, selector: &str) -> Vec<NodeId> {
        fixture.document.query_selector_all(selector).unwrap()
    }

    #[test]
    fn test_type_class_and_id() {
        let f = fixture();
        assert_eq!(select(&f, "div"), vec![f.card]);
        assert_eq!(select(&f, "DIV"), vec![f.card]);
        assert_eq!(select(&f, ".card.wide"), vec![f.card]);
        assert_eq!(select(&f, "#content"), vec![f.main]);
        assert_eq!(select(&f, "main#content.page"), vec![f.main]);
        assert!(select(&f, ".Card").is_empty());
    }

    #[test]
    fn test_universal() {
        let f = fixture();
        assert_eq!(select(&f, ".card *"), vec![f.title, f.image]);
        assert_eq!(select(&f, "*.card"), vec![f.card]);
    }

    #[test]
    fn test_attribute_operators() {
        let f = fixture();
        assert_eq!(select(&f, "[data-skeleton-color]"), vec![f.card]);
        assert_eq!(select(&f, "[data-skeleton-color=red]"), vec![f.card]);
        assert_eq!(select(&f, "[data-skeleton-color=\"red\"]"), vec![f.card]);
        assert_eq!(select(&f, "[class~=wide]"), vec![f.card]);
        assert_eq!(select(&f, "[lang|=en]"), vec![f.card]);
        assert_eq!(select(&f, "[src^=hero]"), vec![f.image]);
        assert_eq!(select(&f, "[src$='.png']"), vec![f.image]);
        assert_eq!(select(&f, "[src*=ro]"), vec![f.image]);
        assert!(select(&f, "[src^='']").is_empty());
        assert!(select(&f, "[class~=ca]").is_empty());
    }

    #[test]
    fn test_combinators() {
        let f = fixture();
        assert_eq!(select(&f, "main img"), vec![f.image]);
        assert_eq!(select(&f, "main > img"), Vec::<NodeId>::new());
        assert_eq!(select(&f, ".card > img"), vec![f.image]);
        assert_eq!(select(&f, "h2 + img"), vec![f.image]);
        assert_eq!(select(&f, "h2+img"), vec![f.image]);
        assert_eq!(select(&f, ".card ~ footer"), vec![f.footer]);
        assert!(select(&f, "img ~ h2").is_empty());
    }

    #[test]
    fn test_descendant_backtracking() {
        let f = fixture();
        // `.page` is two levels up; the first ancestor candidate fails.
        assert_eq!(select(&f, ".page h2"), vec![f.title]);
        assert_eq!(select(&f, "body .page > .card img"), vec![f.image]);
    }

    #[test]
    fn test_selector_list_in_document_order() {
        let f = fixture();
        assert_eq!(select(&f, "footer, h2, main"), vec![f.main, f.title, f.footer]);
        assert_eq!(select(&f, " img ,img "), vec![f.image]);
    }

    #[test]
    fn test_no_match() {
        let f = fixture();
        assert!(select(&f, ".missing").is_empty());
    }

    #[test]
    fn test_empty_selector() {
        assert!(matches!(
            SelectorList::parse(""),
            Err(SelectorError::Empty { .. })
        ));
        assert!(matches!(
            SelectorList::parse("a, "),
            Err(SelectorError::Empty { .. })
        ));
    }

    #[test]
    fn test_malformed_selectors() {
        for selector in ["> a", "a >", "a > > b", ". a", "a.", "div span.x div.y >"] {
            assert!(
                matches!(
                    SelectorList::parse(selector),
                    Err(SelectorError::Malformed { .. })
                ),
                "expected malformed error for {:?}",
                selector
            );
        }
    }

    #[test]
    fn test_syntax_errors() {
        assert!(matches!(
            SelectorList::parse("#1a"),
            Err(SelectorError::Syntax { .. })
        ));
        assert!(matches!(
            SelectorList::parse("[=x]"),
            Err(SelectorError::Syntax { .. })
        ));
        assert!(matches!(
            SelectorList::parse("a { }"),
            Err(SelectorError::Syntax { .. })
        ));
    }

    #[test]
    fn test_unsupported_features() {
        assert!(matches!(
            SelectorList::parse("a:hover"),
            Err(SelectorError::Unsupported { .. })
        ));
        assert!(matches!(
            SelectorList::parse("svg|rect"),
            Err(SelectorError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_universal_after_class_is_rejected() {
        // No whitespace between `.a` and `*`, so both land in one compound.
        assert!(SelectorList::parse(".a*").is_err());
    }

    #[test]
    fn test_parse_structure() {
        let list = SelectorList::parse("ul.feed > li").unwrap();
        let selector = &list.selectors()[0];
        assert_eq!(selector.compounds.len(), 2);
        assert_eq!(selector.combinators, vec![Combinator::Child]);
        assert_eq!(selector.compounds[0].tag.as_deref(), Some("ul"));
        assert_eq!(selector.compounds[0].classes, vec!["feed".to_string()]);
    }
}
