//! Rendering settings for assertion failure reports.

use std::fmt;

/// Controls how collections are rendered in failure reports.
///
/// # Examples
///
/// ```
/// use message_matchers::assertion::ReportConfig;
///
/// let config = ReportConfig::default();
/// assert_eq!(config.max_items, 10);
///
/// let compact = ReportConfig::compact();
/// assert_eq!(compact.render_items(&[1, 2, 3, 4, 5]), "[1, 2, 3, ... and 2 more]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Maximum number of elements rendered before eliding the rest.
    pub max_items: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportConfig {
    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_items: 10 }
    }

    /// Creates a configuration that renders only a few elements.
    #[must_use]
    pub const fn compact() -> Self {
        Self { max_items: 3 }
    }

    /// Creates a configuration that renders every element.
    #[must_use]
    pub const fn verbose() -> Self {
        Self {
            max_items: usize::MAX,
        }
    }

    /// Renders `items` as a bracketed list, eliding anything past
    /// [`max_items`](Self::max_items).
    #[must_use]
    pub fn render_items<T: fmt::Debug>(&self, items: &[T]) -> String {
        let mut rendered: Vec<String> = items
            .iter()
            .take(self.max_items)
            .map(|item| format!("{item:?}"))
            .collect();
        let hidden = items.len().saturating_sub(self.max_items);
        if hidden > 0 {
            rendered.push(format!("... and {hidden} more"));
        }
        format!("[{}]", rendered.join(", "))
    }
}
