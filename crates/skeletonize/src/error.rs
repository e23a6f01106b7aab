//! Crate-level error type.

use thiserror::Error;

use crate::dom::DomError;
use crate::selector::SelectorError;

/// Errors surfaced by the fallible entry points.
///
/// The page-facing [`init`](crate::init) never returns these; it degrades to
/// a no-op and logs instead.
#[derive(Error, Debug)]
pub enum SkeletonError {
    #[error(transparent)]
    Dom(#[from] DomError),

    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("failed to parse JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to render stylesheet: {0}")]
    Template(#[from] minijinja::Error),
}

pub type Result<T> = std::result::Result<T, SkeletonError>;
