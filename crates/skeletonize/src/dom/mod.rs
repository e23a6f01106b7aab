//! In-memory document model.
//!
//! This module provides the slice of the DOM the skeleton transformation
//! works against:
//!
//! - [`Document`]: arena-backed node tree with creation, lookup, mutation,
//!   deep cloning and HTML serialization
//! - [`NodeId`]: handle to a node in a document
//! - [`InlineStyle`]: parsed `style` attribute declarations
//! - [`Dataset`]: `data-*` attributes keyed the way `element.dataset` keys them
//! - [`DomError`]: rejected tree mutations

mod dataset;
mod document;
mod error;
mod node;
mod serialize;
mod style;

pub use dataset::{dataset_key, Dataset};
pub use document::Document;
pub use error::DomError;
pub use node::{ElementData, NodeData, NodeId};
pub use style::{Declaration, InlineStyle};
