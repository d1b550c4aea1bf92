//! Layering several descriptions into one.
//!
//! Later descriptions win on conflicting keys. In deep mode two nested maps under the same key are
//! merged recursively instead of the later one replacing the earlier one. Lists are never merged
//! positionally: an incoming list always replaces whatever was there.

use crate::innerlude::*;

/// How [`merge`] combines values under the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeOptions {
    /// Recursively merge nested maps instead of replacing them.
    pub deep: bool,
}

impl MergeOptions {
    /// Later values replace earlier ones wholesale.
    pub const fn shallow() -> Self {
        Self { deep: false }
    }

    /// Nested maps under the same key are merged recursively.
    pub const fn deep() -> Self {
        Self { deep: true }
    }
}

/// Merge `descriptions` from left to right into a new description.
///
/// `None` entries are skipped, so optional layers can be passed without unwrapping them first. The
/// inputs are never modified. A key keeps the position it had in the first description that set
/// it, even when a later description replaces its value.
///
/// ```rust
/// use arbor_core::prelude::*;
///
/// let base = desc! { "b" => 1, "a" => 1 };
/// let overrides = desc! { "a" => 2 };
///
/// let merged = merge(MergeOptions::shallow(), [Some(&base), None, Some(&overrides)]);
/// assert_eq!(merged.keys().collect::<Vec<_>>(), ["b", "a"]);
/// assert_eq!(merged.get("a"), Some(&Value::Int(2)));
/// ```
pub fn merge<'a, I>(options: MergeOptions, descriptions: I) -> Description
where
    I: IntoIterator,
    I::Item: Into<Option<&'a Description>>,
{
    let mut merged = Description::new();

    for description in descriptions.into_iter().filter_map(Into::into) {
        for (key, incoming) in description.iter() {
            match (options.deep, merged.get_mut(key), incoming) {
                (true, Some(Value::Map(current)), Value::Map(incoming)) => {
                    tracing::trace!(key, "deep merging nested description");
                    *current = merge(options, [&*current, incoming]);
                }
                (_, Some(current), incoming) => *current = incoming.clone(),
                (_, None, incoming) => {
                    merged.insert(key, incoming.clone());
                }
            }
        }
    }

    merged
}

/// [`merge`] with [`MergeOptions::shallow`].
pub fn merge_shallow<'a, I>(descriptions: I) -> Description
where
    I: IntoIterator,
    I::Item: Into<Option<&'a Description>>,
{
    merge(MergeOptions::shallow(), descriptions)
}

/// [`merge`] with [`MergeOptions::deep`].
pub fn merge_deep<'a, I>(descriptions: I) -> Description
where
    I: IntoIterator,
    I::Item: Into<Option<&'a Description>>,
{
    merge(MergeOptions::deep(), descriptions)
}

impl Description {
    /// Merge `other` on top of this description, returning a new one.
    pub fn merged_with(&self, other: &Description, options: MergeOptions) -> Description {
        merge(options, [self, other])
    }
}
