//! `data-*` attribute view.

/// Converts a `data-*` attribute name into its dataset key.
///
/// Follows the HTML rule: the `data-` prefix is removed and every `-`
/// followed by an ASCII lowercase letter is dropped, uppercasing the letter.
/// Returns `None` for attributes outside the `data-` namespace.
///
/// ```rust
/// use skeletonize::dom::dataset_key;
///
/// assert_eq!(dataset_key("data-skeleton-border-radius").as_deref(), Some("skeletonBorderRadius"));
/// assert_eq!(dataset_key("data-skeletons-count").as_deref(), Some("skeletonsCount"));
/// assert_eq!(dataset_key("class"), None);
/// ```
pub fn dataset_key(attribute: &str) -> Option<String> {
    let rest = attribute.strip_prefix("data-")?;
    let mut key = String::with_capacity(rest.len());
    let mut chars = rest.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(next) = chars.peek().copied().filter(char::is_ascii_lowercase) {
                key.push(next.to_ascii_uppercase());
                chars.next();
                continue;
            }
        }
        key.push(c);
    }

    Some(key)
}

/// Snapshot of an element's `data-*` attributes keyed by dataset name.
///
/// Entries keep attribute order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    entries: Vec<(String, String)>,
}

impl Dataset {
    pub(crate) fn from_attributes<'a>(attributes: impl Iterator<Item = (&'a str, &'a str)>) -> Self {
        let entries = attributes
            .filter_map(|(name, value)| dataset_key(name).map(|key| (key, value.to_string())))
            .collect();
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
