//! Per-card ephemeral interaction state.
//!
//! This module defines [`CardState`], the entrance/favorite state owned by a
//! single rendered recipe card, and [`CardDeck`], the mapping from stable
//! recipe ids to card states. Card state is created the first time its key
//! appears in a render pass, persists across re-renders while the key stays
//! rendered, and is discarded when the key leaves the rendered set (for
//! example when the user navigates away from the recipe list). It is never
//! part of the recipe itself.
//!
//! # State machines
//!
//! Each card carries two independent flags:
//!
//! - Entrance: `Hidden -> Visible`, fired exactly once by the card's first
//!   appearance in a render pass, never by user action, no reverse edge.
//! - Favorite: `Unfavorited <-> Favorited`, flipped unconditionally on each
//!   activation, no automatic reset.
//!
//! The scale factor is derived from the favorite flag through an eased
//! animation; it is display state, not a third flag.

use std::collections::HashMap;

use crate::app::animation::Animation;
use crate::domain::RecipeId;

/// Scale of the favorite glyph at rest.
pub const REST_SCALE: f32 = 1.0;

/// Peak scale of the favorite glyph while favorited.
pub const FAVORITE_SCALE: f32 = 1.2;

/// Seconds for the favorite scale to settle.
const SCALE_SECS: f32 = 0.25;

/// Seconds for the entrance fade/slide to settle.
const ENTRANCE_SECS: f32 = 0.35;

/// Ephemeral animation and interaction state for one rendered card.
#[derive(Debug, Clone)]
pub struct CardState {
    revealed: bool,
    favorite: bool,
    /// Entrance progress, 0.0 (absent) to 1.0 (in final position).
    entrance: Animation,
    /// Favorite glyph scale, [`REST_SCALE`] to [`FAVORITE_SCALE`].
    scale: Animation,
}

impl CardState {
    fn new() -> Self {
        Self {
            revealed: false,
            favorite: false,
            entrance: Animation::resting(0.0, ENTRANCE_SECS),
            scale: Animation::resting(REST_SCALE, SCALE_SECS),
        }
    }

    /// Returns whether the entrance transition has fired.
    #[must_use]
    pub const fn revealed(&self) -> bool {
        self.revealed
    }

    /// Returns the favorite flag.
    #[must_use]
    pub const fn favorite(&self) -> bool {
        self.favorite
    }

    /// Returns the current favorite glyph scale.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    /// Returns the entrance progress, 0.0 to 1.0.
    #[must_use]
    pub fn entrance(&self) -> f32 {
        self.entrance.value()
    }

    /// Fires the one-way entrance transition.
    ///
    /// Idempotent: the transition fires at most once per card lifetime and
    /// never reverts.
    fn reveal(&mut self) {
        if self.revealed {
            return;
        }
        self.revealed = true;
        self.entrance = Animation::running(0.0, 1.0, ENTRANCE_SECS);
    }

    /// Flips the favorite flag and retargets the scale animation.
    ///
    /// Returns the flag after the flip. The flag is committed immediately;
    /// the scale only chases it on subsequent frame ticks.
    pub fn toggle_favorite(&mut self) -> bool {
        self.favorite = !self.favorite;
        let target = if self.favorite {
            FAVORITE_SCALE
        } else {
            REST_SCALE
        };
        self.scale.retarget(target);
        self.favorite
    }

    fn advance(&mut self, dt: f32) {
        self.entrance.advance(dt);
        self.scale.advance(dt);
    }

    /// Returns whether any of the card's animations is still in flight.
    #[must_use]
    pub fn animating(&self) -> bool {
        !self.entrance.done() || !self.scale.done()
    }
}

/// Mapping from stable recipe ids to live card states.
///
/// The deck implements the card lifecycle: [`CardDeck::mark_rendered`] is
/// the explicit first-render hook that creates state for keys appearing for
/// the first time and discards state for keys that left the rendered set.
#[derive(Debug, Clone, Default)]
pub struct CardDeck {
    cards: HashMap<RecipeId, CardState>,
}

impl CardDeck {
    /// Creates an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the first-render hook for one render pass.
    ///
    /// For every key in `rendered`, creates fresh card state on first
    /// appearance and fires its entrance transition; existing cards are left
    /// untouched (the entrance never re-fires). Card state whose key is not
    /// in `rendered` is discarded.
    pub fn mark_rendered(&mut self, rendered: &[RecipeId]) {
        for id in rendered {
            self.cards.entry(*id).or_insert_with(CardState::new).reveal();
        }
        let before = self.cards.len();
        self.cards.retain(|id, _| rendered.contains(id));
        if self.cards.len() != before {
            tracing::debug!(
                discarded = before - self.cards.len(),
                "card state discarded for unmounted keys"
            );
        }
    }

    /// Returns the card state for a key, if it is currently mounted.
    #[must_use]
    pub fn get(&self, id: RecipeId) -> Option<&CardState> {
        self.cards.get(&id)
    }

    /// Returns mutable card state for a key, if it is currently mounted.
    pub fn get_mut(&mut self, id: RecipeId) -> Option<&mut CardState> {
        self.cards.get_mut(&id)
    }

    /// Advances every card's animations by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        for card in self.cards.values_mut() {
            card.advance(dt);
        }
    }

    /// Returns whether any mounted card is still animating.
    #[must_use]
    pub fn animating(&self) -> bool {
        self.cards.values().any(CardState::animating)
    }

    /// Returns the number of mounted cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no cards are mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn deck_with(ids: &[RecipeId]) -> CardDeck {
        let mut deck = CardDeck::new();
        deck.mark_rendered(ids);
        deck
    }

    #[test]
    fn test_first_render_reveals_exactly_once() {
        let id = RecipeId(1);
        let mut deck = deck_with(&[id]);

        let card = deck.get(id).unwrap();
        assert!(card.revealed());
        assert!(card.animating(), "entrance runs after the reveal");

        // A later render pass must not restart the entrance.
        deck.advance(1.0);
        deck.mark_rendered(&[id]);
        let card = deck.get(id).unwrap();
        assert!(card.revealed());
        assert!((card.entrance() - 1.0).abs() < EPS);
        assert!(!card.animating());
    }

    #[test]
    fn test_revealed_never_reverts() {
        let id = RecipeId(1);
        let mut deck = deck_with(&[id]);
        deck.advance(1.0);
        for _ in 0..3 {
            deck.mark_rendered(&[id]);
            assert!(deck.get(id).unwrap().revealed());
        }
    }

    #[test]
    fn test_favorite_flips_per_toggle() {
        let id = RecipeId(2);
        let mut deck = deck_with(&[id]);
        let card = deck.get_mut(id).unwrap();

        assert!(!card.favorite());
        assert!(card.toggle_favorite());
        assert!(!card.toggle_favorite());
        assert!(card.toggle_favorite());
        assert!(!card.toggle_favorite());
        assert!(!card.favorite(), "even number of taps restores the start");
    }

    #[test]
    fn test_scale_rests_at_one_and_peaks_favorited() {
        let id = RecipeId(3);
        let mut deck = deck_with(&[id]);
        deck.advance(1.0);

        let card = deck.get_mut(id).unwrap();
        assert!((card.scale() - REST_SCALE).abs() < EPS);

        card.toggle_favorite();
        // The flag commits before the animation moves.
        assert!(card.favorite());
        assert!((card.scale() - REST_SCALE).abs() < EPS);

        deck.advance(1.0);
        let card = deck.get(id).unwrap();
        assert!((card.scale() - FAVORITE_SCALE).abs() < EPS);
    }

    #[test]
    fn test_scale_returns_to_rest_after_untoggle() {
        let id = RecipeId(3);
        let mut deck = deck_with(&[id]);
        deck.advance(1.0);

        deck.get_mut(id).unwrap().toggle_favorite();
        deck.advance(1.0);
        deck.get_mut(id).unwrap().toggle_favorite();
        deck.advance(1.0);

        assert!((deck.get(id).unwrap().scale() - REST_SCALE).abs() < EPS);
    }

    #[test]
    fn test_scale_is_independent_of_entrance_state() {
        let id = RecipeId(4);
        let mut deck = deck_with(&[id]);

        // Entrance still mid-flight; favorite scale must still respond.
        let card = deck.get_mut(id).unwrap();
        card.toggle_favorite();
        deck.advance(1.0);
        assert!((deck.get(id).unwrap().scale() - FAVORITE_SCALE).abs() < EPS);
    }

    #[test]
    fn test_unmounted_keys_are_discarded() {
        let keep = RecipeId(1);
        let drop = RecipeId(2);
        let mut deck = deck_with(&[keep, drop]);

        deck.get_mut(drop).unwrap().toggle_favorite();
        deck.mark_rendered(&[keep]);

        assert!(deck.get(drop).is_none());
        assert_eq!(deck.len(), 1);

        // Remounting the key starts from fresh state.
        deck.mark_rendered(&[keep, drop]);
        assert!(!deck.get(drop).unwrap().favorite());
    }
}
