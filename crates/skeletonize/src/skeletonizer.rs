//! The skeleton entry points.

use tracing::{debug, warn};

use crate::dom::{Document, DomError};
use crate::error::Result;
use crate::options::SkeletonOptions;
use crate::settings::Settings;
use crate::stylesheet::{ensure_style_registered, render_stylesheet, DEFAULT_STYLESHEET};
use crate::target::Target;
use crate::transform::TransformReport;

/// Turns elements into skeleton loaders.
///
/// A `Skeletonizer` owns its [`Settings`] and the stylesheet rendered from
/// them. Use [`Skeletonizer::new`] for the SkeletonJS conventions or
/// [`Skeletonizer::with_settings`] to customize them.
///
/// # Example
///
/// ```rust
/// use skeletonize::{dom::Document, Settings, Skeletonizer};
///
/// let skeletonizer = Skeletonizer::with_settings(Settings::new().with_marker_class("ghost")).unwrap();
///
/// let mut document = Document::new();
/// let body = document.body();
/// let row = document.append_element(body, "li", &[("class", "row")]).unwrap();
///
/// skeletonizer.init(&mut document, ".row", None);
/// assert!(document.has_class(row, "ghost"));
/// ```
#[derive(Debug, Clone)]
pub struct Skeletonizer {
    pub(crate) settings: Settings,
    stylesheet: String,
}

impl Skeletonizer {
    /// Creates a skeletonizer with default settings.
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            stylesheet: DEFAULT_STYLESHEET.clone(),
        }
    }

    /// Creates a skeletonizer with custom settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or the stylesheet fails
    /// to render.
    pub fn with_settings(settings: Settings) -> Result<Self> {
        settings.validate()?;
        let stylesheet = render_stylesheet(&settings)?;
        Ok(Self {
            settings,
            stylesheet,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The stylesheet text registered into documents.
    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    /// Adds the stylesheet to the document unless it is already there.
    ///
    /// Returns whether it was inserted by this call.
    pub fn ensure_style_registered(&self, document: &mut Document) -> std::result::Result<bool, DomError> {
        ensure_style_registered(document, &self.settings.style_id, &self.stylesheet)
    }

    /// Transforms every element `target` resolves to, in order, with the
    /// same caller `options`.
    ///
    /// Never fails: a selector that cannot be parsed is logged and treated
    /// as matching nothing.
    pub fn init(
        &self,
        document: &mut Document,
        target: impl Into<Target>,
        options: Option<&SkeletonOptions>,
    ) {
        if let Err(err) = self.try_init(document, target, options) {
            warn!(error = %err, "skeleton initialization skipped");
        }
    }

    /// Like [`init`](Self::init), but reports what happened.
    ///
    /// # Errors
    ///
    /// Returns an error if a selector target cannot be parsed; no element is
    /// touched in that case.
    pub fn try_init(
        &self,
        document: &mut Document,
        target: impl Into<Target>,
        options: Option<&SkeletonOptions>,
    ) -> Result<Vec<TransformReport>> {
        let elements = target.into().resolve(document)?;
        debug!(count = elements.len(), "resolved skeleton targets");

        let mut reports = Vec::with_capacity(elements.len());
        for element in elements {
            reports.push(self.transform(document, element, options)?);
        }
        Ok(reports)
    }
}

impl Default for Skeletonizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SkeletonError;

    #[test]
    fn test_new_uses_default_stylesheet() {
        let skeletonizer = Skeletonizer::new();
        assert_eq!(skeletonizer.settings(), &Settings::default());
        assert!(skeletonizer.stylesheet().contains(".skeletonJS"));
    }

    #[test]
    fn test_with_settings_rejects_invalid() {
        let result = Skeletonizer::with_settings(Settings::new().with_marker_class("not valid"));
        assert!(matches!(result, Err(SkeletonError::InvalidSettings(_))));
    }

    #[test]
    fn test_try_init_reports_selector_errors() {
        let mut document = Document::new();
        let body = document.body();
        let card = document.append_element(body, "div", &[]).unwrap();

        let result = Skeletonizer::new().try_init(&mut document, "div:hover", None);
        assert!(matches!(result, Err(SkeletonError::Selector(_))));
        assert!(!document.has_class(card, "skeletonJS"));
        assert!(document.get_element_by_id("skeletonjs-style").is_none());
    }

    #[test]
    fn test_init_swallows_selector_errors() {
        let mut document = Document::new();
        let before = document.outer_html(document.root());
        Skeletonizer::new().init(&mut document, "[", None);
        assert_eq!(document.outer_html(document.root()), before);
    }

    #[test]
    fn test_try_init_returns_report_per_element() {
        let mut document = Document::new();
        let body = document.body();
        let first = document.append_element(body, "p", &[]).unwrap();
        let second = document.append_element(body, "p", &[]).unwrap();

        let reports = Skeletonizer::new()
            .try_init(&mut document, "p", None)
            .unwrap();
        let elements: Vec<_> = reports.iter().map(|report| report.element).collect();
        assert_eq!(elements, vec![first, second]);
    }

    #[test]
    fn test_custom_settings_flow_through() {
        let settings = Settings::new()
            .with_marker_class("ghost")
            .with_style_id("ghost-style")
            .with_annotation_prefix("ghost")
            .with_count_attribute("data-ghosts");
        let skeletonizer = Skeletonizer::with_settings(settings).unwrap();

        let mut document = Document::new();
        let body = document.body();
        let list = document.append_element(body, "ul", &[]).unwrap();
        document
            .append_element(
                list,
                "li",
                &[("data-ghost-border-radius", "3px"), ("data-ghosts", "2")],
            )
            .unwrap();

        skeletonizer.init(&mut document, "li", None);

        let items = document.element_children(list);
        assert_eq!(items.len(), 2);
        for item in items {
            assert!(document.has_class(item, "ghost"));
            assert_eq!(
                document.style(item).get_property_value("--skeleton-border-radius"),
                Some("3px")
            );
        }
        let style = document.get_element_by_id("ghost-style").unwrap();
        assert!(document.text_content(style).contains(".ghost .ghost *"));
    }
}
