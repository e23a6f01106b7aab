//! Turn document elements into shimmering skeleton loaders.
//!
//! A skeleton is a placeholder shown while data loads: the element keeps its
//! layout, its text turns transparent, its images become blank blocks and a
//! gradient sweeps across it. This crate provides:
//!
//! - [`init`] and [`Skeletonizer`]: transform the elements a [`Target`] names
//! - [`SkeletonOptions`]: per-element visual options, also read from
//!   `data-skeleton-*` annotations
//! - [`Settings`]: marker class, stylesheet id and other hooks, loadable from
//!   JSON or YAML
//! - [`dom`]: the in-memory document the transformation works against
//! - [`selector`]: the CSS selector engine behind string targets
//!
//! Options apply field by field with the caller's options first, then the
//! element's annotations, then the defaults of the registered stylesheet.
//!
//! # Example
//!
//! ```rust
//! use skeletonize::dom::Document;
//! use skeletonize::SkeletonOptions;
//!
//! let mut document = Document::new();
//! let body = document.body();
//! let feed = document.append_element(body, "section", &[]).unwrap();
//! let card = document
//!     .append_element(
//!         feed,
//!         "article",
//!         &[("class", "card"), ("data-skeletons-count", "3"), ("data-skeleton-border-radius", "6px")],
//!     )
//!     .unwrap();
//! document.append_element(card, "img", &[("src", "avatar.png")]).unwrap();
//!
//! let options = SkeletonOptions::new().with_animation_duration("2s");
//! skeletonize::init(&mut document, ".card", Some(&options));
//!
//! let cards = document.element_children(feed);
//! assert_eq!(cards.len(), 3);
//! for card in cards {
//!     assert!(document.has_class(card, "skeletonJS"));
//!     let style = document.style(card);
//!     assert_eq!(style.get_property_value("--skeleton-border-radius"), Some("6px"));
//!     assert_eq!(style.get_property_value("--skeleton-animation-duration"), Some("2s"));
//! }
//! assert!(document.get_element_by_id("skeletonjs-style").is_some());
//! ```
//!
//! The transformation is one-way: removing the skeleton state once data
//! arrives is left to the caller.

pub mod dom;
pub mod options;
pub mod selector;

mod error;
mod settings;
mod skeletonizer;
mod stylesheet;
mod target;
mod transform;

pub use error::{Result, SkeletonError};
pub use options::{merge_options, SkeletonOptions};
pub use settings::{
    RootDefaults, Settings, DEFAULT_ANNOTATION_PREFIX, DEFAULT_COUNT_ATTRIBUTE,
    DEFAULT_MARKER_CLASS, DEFAULT_MAX_CLONES, DEFAULT_STYLE_ID,
};
pub use skeletonizer::Skeletonizer;
pub use stylesheet::{ensure_style_registered, render_stylesheet, SHIMMER_KEYFRAMES};
pub use target::Target;
pub use transform::TransformReport;

use once_cell::sync::Lazy;

use crate::dom::Document;

static DEFAULT_SKELETONIZER: Lazy<Skeletonizer> = Lazy::new(Skeletonizer::new);

/// Transforms every element `target` names using the default settings.
///
/// Accepts a selector, a single node, a collection of nodes or nothing (see
/// [`Target`]). Never fails: an invalid selector is logged and ignored. Use
/// [`Skeletonizer::try_init`] to observe errors.
pub fn init(document: &mut Document, target: impl Into<Target>, options: Option<&SkeletonOptions>) {
    DEFAULT_SKELETONIZER.init(document, target, options);
}
