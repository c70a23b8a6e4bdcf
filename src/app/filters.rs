//! Filter chip vocabulary and the selected-tag set.
//!
//! This module defines the closed six-tag [`FilterTag`] vocabulary and the
//! [`FilterSet`] owning the currently selected tags. Selection uses
//! symmetric-difference toggle semantics: toggling a tag twice returns the
//! set to its prior value.
//!
//! The selected set is tracked and rendered (chips fill when selected) but
//! is deliberately not applied to the recipe list; see DESIGN.md.

use std::collections::HashSet;

/// One label from the fixed filter vocabulary.
///
/// The vocabulary is closed: chips exist for exactly these six tags and user
/// input cannot produce a value outside the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterTag {
    Complex,
    Quick,
    Meatless,
    Dessert,
    Appetizer,
    HotDish,
}

impl FilterTag {
    /// All tags in chip-row order (first row, then second row).
    pub const ALL: [Self; 6] = [
        Self::Complex,
        Self::Quick,
        Self::Meatless,
        Self::Dessert,
        Self::Appetizer,
        Self::HotDish,
    ];

    /// Returns the chip label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complex => "Complex",
            Self::Quick => "Quick",
            Self::Meatless => "Meatless",
            Self::Dessert => "Dessert",
            Self::Appetizer => "Appetizer",
            Self::HotDish => "Hot dish",
        }
    }

    /// Returns the tag bound to a 1-based chip number, if any.
    ///
    /// The shim maps the `1`-`6` keys through this.
    #[must_use]
    pub fn from_chip_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// The set of currently selected filter tags.
///
/// Duplicates are impossible by construction and ordering is irrelevant.
/// There is no maximum cardinality: all six tags may be selected at once.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    selected: HashSet<FilterTag>,
}

impl FilterSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles a tag: removes it if present, adds it otherwise.
    ///
    /// Returns `true` if the tag is selected after the toggle. Applying
    /// `toggle` twice with the same tag restores the prior set.
    pub fn toggle(&mut self, tag: FilterTag) -> bool {
        if self.selected.remove(&tag) {
            tracing::debug!(tag = tag.label(), "filter deselected");
            false
        } else {
            self.selected.insert(tag);
            tracing::debug!(tag = tag.label(), "filter selected");
            true
        }
    }

    /// Returns whether a tag is currently selected.
    #[must_use]
    pub fn contains(&self, tag: FilterTag) -> bool {
        self.selected.contains(&tag)
    }

    /// Returns the number of selected tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns whether no tags are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_self_inverse_for_every_tag() {
        for tag in FilterTag::ALL {
            let mut filters = FilterSet::new();
            filters.toggle(tag);
            assert!(filters.contains(tag));
            filters.toggle(tag);
            assert!(!filters.contains(tag));
            assert!(filters.is_empty());
        }
    }

    #[test]
    fn test_toggle_quick_scenario() {
        let mut filters = FilterSet::new();
        assert!(filters.toggle(FilterTag::Quick));
        assert_eq!(filters.len(), 1);
        assert!(filters.contains(FilterTag::Quick));

        assert!(!filters.toggle(FilterTag::Quick));
        assert!(filters.is_empty());
    }

    #[test]
    fn test_all_tags_may_be_selected_at_once() {
        let mut filters = FilterSet::new();
        for tag in FilterTag::ALL {
            filters.toggle(tag);
        }
        assert_eq!(filters.len(), FilterTag::ALL.len());
    }

    #[test]
    fn test_chip_numbers_map_in_row_order() {
        assert_eq!(FilterTag::from_chip_number(1), Some(FilterTag::Complex));
        assert_eq!(FilterTag::from_chip_number(6), Some(FilterTag::HotDish));
        assert_eq!(FilterTag::from_chip_number(0), None);
        assert_eq!(FilterTag::from_chip_number(7), None);
    }
}
