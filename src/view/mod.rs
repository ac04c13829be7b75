//! View derivation: pure filtering, searching, sorting, and grouping of
//! the note collection.

use crate::domain::Note;
use std::cmp::Reverse;

/// Sort direction for the displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Most recent creation first.
    Newest,
    /// Oldest creation first.
    Oldest,
}

/// The four view configurations the cycling control steps through.
///
/// These are the only combinations of filter and sort the UI ever
/// requests; favorites-only and pinned-only are mutually exclusive by
/// construction. `next` advances the cycle:
/// `AllNewest → AllOldest → FavoritesNewest → PinnedNewest → AllNewest`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    AllNewest,
    AllOldest,
    FavoritesNewest,
    PinnedNewest,
}

impl ViewMode {
    /// The next mode in the cycling control.
    pub fn next(self) -> Self {
        match self {
            ViewMode::AllNewest => ViewMode::AllOldest,
            ViewMode::AllOldest => ViewMode::FavoritesNewest,
            ViewMode::FavoritesNewest => ViewMode::PinnedNewest,
            ViewMode::PinnedNewest => ViewMode::AllNewest,
        }
    }

    /// Sort order this mode requests.
    pub fn sort_order(self) -> SortOrder {
        match self {
            ViewMode::AllOldest => SortOrder::Oldest,
            _ => SortOrder::Newest,
        }
    }

    /// Status line shown when the control lands on this mode.
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::AllNewest => "Showing: All Notes (Newest First)",
            ViewMode::AllOldest => "Showing: All Notes (Oldest First)",
            ViewMode::FavoritesNewest => "Showing: Favorites Only (Newest First)",
            ViewMode::PinnedNewest => "Showing: Pinned Only (Newest First)",
        }
    }
}

/// Inputs to one view derivation.
#[derive(Debug, Clone, Default)]
pub struct ViewQuery {
    pub mode: ViewMode,
    /// Case-insensitive substring matched against note content.
    /// Titles are deliberately not searched.
    pub search: Option<String>,
    /// When set, show only trashed notes instead of hiding them.
    pub trash: bool,
}

impl ViewQuery {
    /// Query for a mode with no search, default visibility.
    pub fn for_mode(mode: ViewMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

/// The derived, ordered, grouped list for display.
///
/// Borrowed from the input collection: derivation never clones or
/// mutates notes. Pinned renders first when non-empty.
#[derive(Debug, PartialEq)]
pub struct GroupedView<'a> {
    pub pinned: Vec<&'a Note>,
    pub others: Vec<&'a Note>,
}

impl<'a> GroupedView<'a> {
    /// Total notes across both groups.
    pub fn len(&self) -> usize {
        self.pinned.len() + self.others.len()
    }

    /// Whether the view has no notes at all.
    pub fn is_empty(&self) -> bool {
        self.pinned.is_empty() && self.others.is_empty()
    }

    /// All notes in display order: pinned group, then others.
    pub fn iter(&self) -> impl Iterator<Item = &'a Note> + '_ {
        self.pinned.iter().chain(self.others.iter()).copied()
    }
}

/// Derives the displayed view from the collection.
///
/// Pure and deterministic; the pipeline runs in a fixed order:
/// visibility → mode filter → content search → stable sort by creation
/// time → pinned/others grouping. Every note that passes the filter
/// stages lands in exactly one group.
pub fn query<'a>(notes: &'a [Note], q: &ViewQuery) -> GroupedView<'a> {
    let needle = q
        .search
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();

    let mut visible: Vec<&Note> = notes
        .iter()
        .filter(|n| n.is_trashed() == q.trash)
        .filter(|n| match q.mode {
            ViewMode::FavoritesNewest => n.is_favorite(),
            ViewMode::PinnedNewest => n.is_pinned(),
            ViewMode::AllNewest | ViewMode::AllOldest => true,
        })
        .filter(|n| needle.is_empty() || n.content().to_lowercase().contains(&needle))
        .collect();

    // Stable sort: equal timestamps keep collection order.
    match q.mode.sort_order() {
        SortOrder::Newest => visible.sort_by_key(|n| Reverse(n.created_at())),
        SortOrder::Oldest => visible.sort_by_key(|n| n.created_at()),
    }

    let (pinned, others): (Vec<&Note>, Vec<&Note>) =
        visible.into_iter().partition(|n| n.is_pinned());
    GroupedView { pinned, others }
}
