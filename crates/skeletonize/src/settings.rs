//! Skeletonizer settings.
//!
//! [`Settings`] names the hooks the transformation relies on (marker class,
//! stylesheet id, annotation prefix, repetition attribute) and the defaults
//! declared on `:root` by the registered stylesheet. The defaults follow the
//! SkeletonJS markup conventions, so existing `data-skeleton-*` annotations
//! and `.skeletonJS` styling keep working.
//!
//! Settings can be built fluently or loaded from JSON or YAML:
//!
//! ```rust
//! use skeletonize::Settings;
//!
//! let settings = Settings::from_yaml("markerClass: loading\nmaxClones: 20\n").unwrap();
//! assert_eq!(settings.marker_class, "loading");
//! assert_eq!(settings.style_id, "skeletonjs-style");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkeletonError};

pub const DEFAULT_MARKER_CLASS: &str = "skeletonJS";
pub const DEFAULT_STYLE_ID: &str = "skeletonjs-style";
pub const DEFAULT_ANNOTATION_PREFIX: &str = "skeleton";
pub const DEFAULT_COUNT_ATTRIBUTE: &str = "data-skeletons-count";
pub const DEFAULT_MAX_CLONES: usize = 1000;

/// Values declared on `:root` by the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RootDefaults {
    pub background_color: String,
    pub animation_duration: String,
    pub animation_type: String,
}

impl Default for RootDefaults {
    fn default() -> Self {
        Self {
            background_color: "#e0e0e0".to_string(),
            animation_duration: "1.5s".to_string(),
            animation_type: "shimmer".to_string(),
        }
    }
}

/// Configuration of a [`Skeletonizer`](crate::Skeletonizer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Class added to every transformed element.
    pub marker_class: String,
    /// `id` of the registered `<style>` element.
    pub style_id: String,
    /// Dataset key prefix of option annotations.
    pub annotation_prefix: String,
    /// Attribute holding the repetition count.
    pub count_attribute: String,
    /// Upper bound on the number of copies made of one element.
    pub max_clones: usize,
    pub root_defaults: RootDefaults,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            style_id: DEFAULT_STYLE_ID.to_string(),
            annotation_prefix: DEFAULT_ANNOTATION_PREFIX.to_string(),
            count_attribute: DEFAULT_COUNT_ATTRIBUTE.to_string(),
            max_clones: DEFAULT_MAX_CLONES,
            root_defaults: RootDefaults::default(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: Self = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn with_marker_class(mut self, class: impl Into<String>) -> Self {
        self.marker_class = class.into();
        self
    }

    pub fn with_style_id(mut self, id: impl Into<String>) -> Self {
        self.style_id = id.into();
        self
    }

    pub fn with_annotation_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.annotation_prefix = prefix.into();
        self
    }

    pub fn with_count_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.count_attribute = attribute.into();
        self
    }

    pub fn with_max_clones(mut self, max: usize) -> Self {
        self.max_clones = max;
        self
    }

    pub fn with_root_defaults(mut self, defaults: RootDefaults) -> Self {
        self.root_defaults = defaults;
        self
    }

    /// Checks that the names interpolated into the stylesheet and markup are usable.
    pub fn validate(&self) -> Result<()> {
        if !is_css_identifier(&self.marker_class) {
            return Err(SkeletonError::InvalidSettings(format!(
                "marker class '{}' is not a CSS identifier",
                self.marker_class
            )));
        }
        if self.style_id.is_empty() || self.style_id.contains(char::is_whitespace) {
            return Err(SkeletonError::InvalidSettings(format!(
                "style id '{}' must be non-empty and contain no whitespace",
                self.style_id
            )));
        }
        if self.count_attribute.is_empty() || self.count_attribute.contains(char::is_whitespace) {
            return Err(SkeletonError::InvalidSettings(format!(
                "count attribute '{}' must be non-empty and contain no whitespace",
                self.count_attribute
            )));
        }
        if self.max_clones == 0 {
            return Err(SkeletonError::InvalidSettings(
                "max clones must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn is_css_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let first_ok = match chars.next() {
        Some('-') => chars
            .clone()
            .next()
            .is_some_and(|c| c == '-' || c == '_' || c.is_alphabetic()),
        Some(c) => c == '_' || c.is_alphabetic(),
        None => false,
    };
    first_ok && chars.all(|c| c == '-' || c == '_' || c.is_alphanumeric())
}
