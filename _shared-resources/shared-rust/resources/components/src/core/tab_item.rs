// Tab Item Registry
// Fixed, ordered set of tab identifiers shared by every tab bar variant

use std::fmt::Debug;

/// A tab identifier drawn from a fixed, ordered set
///
/// Implemented by plain enums. `ALL` lists every variant in display order and
/// that order is the tab's ordinal index, used for array-style lookups into
/// per-button state such as [`ButtonGeometry`](crate::core::ButtonGeometry).
///
/// ```rust
/// use tui_components::TabItem;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Tab { Inbox, Sent }
///
/// impl TabItem for Tab {
///     const ALL: &'static [Self] = &[Tab::Inbox, Tab::Sent];
///     fn id(&self) -> &'static str { match self { Tab::Inbox => "inbox", Tab::Sent => "sent" } }
///     fn label(&self) -> &'static str { match self { Tab::Inbox => "Inbox", Tab::Sent => "Sent" } }
///     fn icon(&self) -> &'static str { match self { Tab::Inbox => "✉", Tab::Sent => "➤" } }
/// }
///
/// assert_eq!(Tab::Sent.index(), 1);
/// ```
pub trait TabItem: Copy + Eq + Debug + 'static {
    /// Every tab, in ordinal order
    const ALL: &'static [Self];

    /// Stable identifier (config keys, logs)
    fn id(&self) -> &'static str;

    /// Display label
    fn label(&self) -> &'static str;

    /// Icon glyph
    fn icon(&self) -> &'static str;

    /// Ordinal position of this tab in `ALL`
    fn index(&self) -> usize {
        Self::ALL.iter().position(|tab| tab == self).unwrap_or(0)
    }

    /// Tab at the given ordinal position
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Number of tabs in the set
    fn count() -> usize {
        Self::ALL.len()
    }

    /// Next tab in ordinal order, wrapping around
    fn next(&self) -> Self {
        let count = Self::count();
        Self::ALL[(self.index() + 1) % count]
    }

    /// Previous tab in ordinal order, wrapping around
    fn previous(&self) -> Self {
        let count = Self::count();
        Self::ALL[(self.index() + count - 1) % count]
    }
}
