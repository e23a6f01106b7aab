//! Options read from `data-skeleton-*` annotations.

use std::collections::BTreeMap;

use tracing::trace;

use super::SkeletonOptions;

/// Maps a dataset key to an option name.
///
/// A literal leading `prefix` is stripped and the first character of the
/// remainder is lowercased. When nothing remains (the key is exactly the
/// prefix), the original key is kept. Keys without the prefix go through the
/// same lowercasing.
///
/// ```rust
/// use skeletonize::options::transform_key;
///
/// assert_eq!(transform_key("skeletonBorderRadius", "skeleton"), "borderRadius");
/// assert_eq!(transform_key("skeleton", "skeleton"), "skeleton");
/// assert_eq!(transform_key("Theme", "skeleton"), "theme");
/// ```
pub fn transform_key(key: &str, prefix: &str) -> String {
    let remainder = key.strip_prefix(prefix).unwrap_or(key);
    let mut chars = remainder.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => key.to_string(),
    }
}

/// Annotation values keyed by option name.
///
/// Holds every non-empty annotation, including keys that name no option, so
/// callers can inspect exactly what the element declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetOptions {
    fields: BTreeMap<String, String>,
}

impl DatasetOptions {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Picks the fields that name an option; other keys are ignored.
    pub fn to_options(&self) -> SkeletonOptions {
        let mut options = SkeletonOptions::new();
        for (name, value) in &self.fields {
            let slot = match name.as_str() {
                "backgroundColor" | "backgroundcolor" => &mut options.background_color,
                "borderRadius" => &mut options.border_radius,
                "color" => &mut options.color,
                "animationDuration" => &mut options.animation_duration,
                "animationType" => &mut options.animation_type,
                "animationBackground" => &mut options.animation_background,
                _ => {
                    trace!(key = %name, "annotation does not name a skeleton option");
                    continue;
                }
            };
            *slot = Some(value.clone());
        }
        options
    }
}

/// Reads annotation entries into option fields.
///
/// Entries with empty values are dropped. When two keys map to the same
/// name, the later entry wins.
pub fn resolve_dataset_options<'a, I>(dataset: I, prefix: &str) -> DatasetOptions
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut fields = BTreeMap::new();
    for (key, value) in dataset {
        if value.is_empty() {
            continue;
        }
        let name = transform_key(key, prefix);
        trace!(key, name = %name, "mapped annotation");
        fields.insert(name, value.to_string());
    }
    DatasetOptions { fields }
}
