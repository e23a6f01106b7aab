//! Transformation of a single element into a skeleton.

use tracing::{debug, warn};

use crate::dom::{Document, DomError, NodeId};
use crate::options::{merge_options, resolve_dataset_options, SkeletonOptions};
use crate::skeletonizer::Skeletonizer;

/// What [`Skeletonizer::transform`] did to one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformReport {
    /// The element that was transformed.
    pub element: NodeId,
    /// The options applied after merging annotations with caller options.
    pub options: SkeletonOptions,
    /// Number of descendant images replaced by placeholders.
    pub images_replaced: usize,
    /// Copies that took the element's place, in document order.
    ///
    /// Empty when no repetition happened; the element itself then stays
    /// where it was.
    pub copies: Vec<NodeId>,
}

impl TransformReport {
    /// The nodes now standing in the document for the transformed element.
    pub fn nodes(&self) -> Vec<NodeId> {
        if self.copies.is_empty() {
            vec![self.element]
        } else {
            self.copies.clone()
        }
    }
}

impl Skeletonizer {
    /// Turns one element into a skeleton.
    ///
    /// In order: registers the stylesheet, merges the element's
    /// `data-skeleton-*` annotations with `options` (caller wins), adds the
    /// marker class, writes the `--skeleton-*` variables inline, replaces
    /// descendant images with inline-block spans and finally repeats the
    /// element as many times as its count attribute asks for.
    ///
    /// Repetition needs a parent element; a detached element is transformed
    /// in place and never repeated.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NotAnElement`] if `element` is not an element.
    pub fn transform(
        &self,
        document: &mut Document,
        element: NodeId,
        options: Option<&SkeletonOptions>,
    ) -> Result<TransformReport, DomError> {
        if !document.is_element(element) {
            return Err(DomError::NotAnElement(element));
        }

        self.ensure_style_registered(document)?;

        let dataset = document.dataset(element);
        let annotated = resolve_dataset_options(dataset.iter(), &self.settings.annotation_prefix);
        let options = merge_options(&annotated.to_options(), options);

        document.add_class(element, &self.settings.marker_class)?;
        for (variable, value) in options.style_variables() {
            document.set_style_property(element, variable, value)?;
        }

        let images_replaced = replace_images(document, element)?;

        let count = self.repetition_count(document.get_attribute(element, &self.settings.count_attribute));
        let copies = if count > 1 && document.parent_element(element).is_some() {
            multiply(document, element, count)?
        } else {
            Vec::new()
        };

        debug!(
            %element,
            images = images_replaced,
            copies = copies.len(),
            "transformed skeleton element"
        );

        Ok(TransformReport {
            element,
            options,
            images_replaced,
            copies,
        })
    }

    /// Number of copies requested by a count attribute value, capped by
    /// [`Settings::max_clones`](crate::Settings::max_clones).
    fn repetition_count(&self, value: Option<&str>) -> usize {
        let requested = match value.and_then(parse_int) {
            Some(n) if n > 1 => n,
            _ => return 1,
        };
        let max = self.settings.max_clones.max(1);
        match usize::try_from(requested) {
            Ok(n) if n <= max => n,
            _ => {
                warn!(requested, max, "skeleton repetition count capped");
                max
            }
        }
    }
}

/// Replaces every `<img>` below `element` with a `<span>` carrying the
/// image's inline style plus `display: inline-block`.
fn replace_images(document: &mut Document, element: NodeId) -> Result<usize, DomError> {
    let images = document.get_elements_by_tag_name(element, "img");
    for &image in &images {
        let span = document.create_element("span");
        let style = document.get_attribute(image, "style").unwrap_or("").to_string();
        document.set_attribute(span, "style", &style)?;
        document.set_style_property(span, "display", "inline-block")?;
        document.replace_with(image, span)?;
    }
    Ok(images.len())
}

/// Replaces `element` with `count` deep copies of itself, kept in order.
fn multiply(document: &mut Document, element: NodeId, count: usize) -> Result<Vec<NodeId>, DomError> {
    let copies = (0..count)
        .map(|_| document.clone_node(element, true))
        .collect::<Result<Vec<_>, _>>()?;

    document.replace_with(element, copies[0])?;
    for pair in copies.windows(2) {
        document.insert_after(pair[0], pair[1])?;
    }
    Ok(copies)
}

/// Reads a base-10 integer prefix the way JavaScript's `parseInt` does:
/// leading whitespace, an optional sign, then as many digits as present.
///
/// Returns `None` where `parseInt` would produce `NaN`. Out-of-range values
/// saturate.
fn parse_int(text: &str) -> Option<i64> {
    let text = text.trim_start_matches(is_js_whitespace);
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(byte - b'0'));
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

// ECMAScript WhiteSpace and LineTerminator code points.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{B}'
            | '\u{C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
