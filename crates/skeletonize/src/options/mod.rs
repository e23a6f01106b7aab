//! Skeleton appearance options.
//!
//! This module provides:
//!
//! - [`SkeletonOptions`]: the per-element visual configuration
//! - [`merge_options`]: field-by-field precedence between annotations and caller options
//! - [`resolve_dataset_options`]: reading options from `data-skeleton-*` annotations
//!
//! Every option maps to exactly one CSS custom property. Options left unset
//! fall back to the defaults declared once in the registered stylesheet.

mod dataset;

pub use dataset::{resolve_dataset_options, transform_key, DatasetOptions};

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const BACKGROUND_COLOR_VAR: &str = "--skeleton-background-color";
pub const BORDER_RADIUS_VAR: &str = "--skeleton-border-radius";
pub const COLOR_VAR: &str = "--skeleton-color";
pub const ANIMATION_DURATION_VAR: &str = "--skeleton-animation-duration";
pub const ANIMATION_TYPE_VAR: &str = "--skeleton-animation-type";
pub const ANIMATION_BACKGROUND_VAR: &str = "--skeleton-animation-background";

/// Visual options for a skeleton element.
///
/// Field names (de)serialize in camelCase, matching the keys produced by
/// `data-skeleton-*` annotations. `backgroundcolor` is accepted as an alias
/// of `backgroundColor`.
///
/// # Example
///
/// ```rust
/// use skeletonize::SkeletonOptions;
///
/// let options = SkeletonOptions::new()
///     .with_border_radius("8px")
///     .with_animation_duration("2s");
///
/// assert_eq!(
///     options.style_variables(),
///     vec![
///         ("--skeleton-border-radius", "8px"),
///         ("--skeleton-animation-duration", "2s"),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkeletonOptions {
    #[serde(alias = "backgroundcolor", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    /// Text color; the stylesheet keeps text transparent when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<String>,
    /// Name of the `@keyframes` rule driving the overlay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_type: Option<String>,
    /// Highlight color of the shimmer gradient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_background: Option<String>,
}

impl SkeletonOptions {
    /// Creates options with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from a JSON object such as `{"borderRadius": "4px"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_background_color(mut self, value: impl Into<String>) -> Self {
        self.background_color = Some(value.into());
        self
    }

    pub fn with_border_radius(mut self, value: impl Into<String>) -> Self {
        self.border_radius = Some(value.into());
        self
    }

    pub fn with_color(mut self, value: impl Into<String>) -> Self {
        self.color = Some(value.into());
        self
    }

    pub fn with_animation_duration(mut self, value: impl Into<String>) -> Self {
        self.animation_duration = Some(value.into());
        self
    }

    pub fn with_animation_type(mut self, value: impl Into<String>) -> Self {
        self.animation_type = Some(value.into());
        self
    }

    pub fn with_animation_background(mut self, value: impl Into<String>) -> Self {
        self.animation_background = Some(value.into());
        self
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The custom properties to set on an element, in a fixed order.
    ///
    /// Fields that are unset or empty are skipped: an empty value means
    /// "unset", never "set to nothing".
    pub fn style_variables(&self) -> Vec<(&'static str, &str)> {
        [
            (BACKGROUND_COLOR_VAR, &self.background_color),
            (BORDER_RADIUS_VAR, &self.border_radius),
            (COLOR_VAR, &self.color),
            (ANIMATION_DURATION_VAR, &self.animation_duration),
            (ANIMATION_TYPE_VAR, &self.animation_type),
            (ANIMATION_BACKGROUND_VAR, &self.animation_background),
        ]
        .into_iter()
        .filter_map(|(variable, value)| {
            value
                .as_deref()
                .filter(|value| !value.is_empty())
                .map(|value| (variable, value))
        })
        .collect()
    }
}

/// Merges annotation options with caller options, field by field.
///
/// A field set by the caller wins, even when set to the empty string; a
/// field the caller leaves unset keeps the annotation's value.
pub fn merge_options(dataset: &SkeletonOptions, caller: Option<&SkeletonOptions>) -> SkeletonOptions {
    let Some(caller) = caller else {
        return dataset.clone();
    };

    SkeletonOptions {
        background_color: pick(&caller.background_color, &dataset.background_color),
        border_radius: pick(&caller.border_radius, &dataset.border_radius),
        color: pick(&caller.color, &dataset.color),
        animation_duration: pick(&caller.animation_duration, &dataset.animation_duration),
        animation_type: pick(&caller.animation_type, &dataset.animation_type),
        animation_background: pick(&caller.animation_background, &dataset.animation_background),
    }
}

fn pick(caller: &Option<String>, dataset: &Option<String>) -> Option<String> {
    caller.as_ref().or(dataset.as_ref()).cloned()
}
