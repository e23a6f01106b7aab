//! Shared skeleton stylesheet.
//!
//! The stylesheet is rendered from `templates/skeleton.css.tmpl` with
//! MiniJinja, so the marker class and `:root` defaults come from
//! [`Settings`]. It declares:
//!
//! - `--skeleton-*` defaults on `:root`
//! - the base rule for marker-classed elements and their descendants
//!   (background, radius, clipping, transparent text)
//! - the `::after` shimmer overlay
//! - hiding of everything inside a nested skeleton
//! - the `shimmer` keyframes
//!
//! [`ensure_style_registered`] inserts it into `<head>` at most once per
//! document, keyed by the style element's id.

use minijinja::{context, Environment};
use once_cell::sync::Lazy;
use tracing::{debug, error};

use crate::dom::{Document, DomError};
use crate::error::SkeletonError;
use crate::settings::Settings;

/// Name of the bundled keyframes rule.
pub const SHIMMER_KEYFRAMES: &str = "shimmer";

const TEMPLATE_NAME: &str = "skeleton.css";
const TEMPLATE_SOURCE: &str = include_str!("../templates/skeleton.css.tmpl");

pub(crate) static DEFAULT_STYLESHEET: Lazy<String> = Lazy::new(|| {
    render_stylesheet(&Settings::default()).unwrap_or_else(|err| {
        error!(error = %err, "failed to render the bundled skeleton stylesheet");
        String::new()
    })
});

/// Renders the stylesheet text for the given settings.
pub fn render_stylesheet(settings: &Settings) -> Result<String, SkeletonError> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, TEMPLATE_SOURCE)?;
    let template = env.get_template(TEMPLATE_NAME)?;
    let defaults = &settings.root_defaults;

    Ok(template.render(context! {
        marker => &settings.marker_class,
        background_color => &defaults.background_color,
        animation_duration => &defaults.animation_duration,
        animation_type => &defaults.animation_type,
        keyframes => SHIMMER_KEYFRAMES,
    })?)
}

/// Appends `<style id="{style_id}">` holding `css` to the document head,
/// unless an element with that id is already in the document.
///
/// Returns whether the style element was inserted.
pub fn ensure_style_registered(
    document: &mut Document,
    style_id: &str,
    css: &str,
) -> Result<bool, DomError> {
    if document.get_element_by_id(style_id).is_some() {
        return Ok(false);
    }

    let style = document.create_element("style");
    document.set_attribute(style, "id", style_id)?;
    document.append_text(style, css)?;
    let head = document.head();
    document.append_child(head, style)?;

    debug!(id = style_id, "registered skeleton stylesheet");
    Ok(true)
}
