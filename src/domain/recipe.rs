//! Recipe domain model and the built-in catalog.
//!
//! This module defines the core `Recipe` value type and the fixed in-memory
//! catalog the plugin browses. Recipes are immutable: they are created once at
//! catalog construction and never change afterwards. There is no recipe data
//! source behind the catalog; the list itself is the data.

/// Stable identifier for a recipe.
///
/// Per-card interaction state is keyed by this id rather than by list position,
/// so a reordered catalog cannot reattach a card's state to a different recipe.
/// Ids are assigned once at catalog construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipeId(pub u32);

/// Opaque handle to a bundled recipe image.
///
/// The state model never resolves the handle. The paint layer decides how to
/// present it, falling back to a placeholder when it cannot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef(pub &'static str);

impl ImageRef {
    /// Returns the asset label carried by the handle.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.0
    }
}

/// Recipe difficulty, a closed three-value set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Returns the display label for the difficulty.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// An immutable recipe record.
///
/// # Fields
///
/// - `id`: Stable identifier, unique within the catalog
/// - `name`: Display name shown on the card
/// - `image`: Opaque handle to the card's image asset
/// - `difficulty`: One of the three difficulty levels
/// - `minutes`: Cooking time in minutes, always positive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub image: ImageRef,
    pub difficulty: Difficulty,
    pub minutes: u16,
}

impl Recipe {
    /// Creates a new recipe record.
    ///
    /// # Examples
    ///
    /// ```
    /// use forkful::domain::{Difficulty, ImageRef, Recipe, RecipeId};
    ///
    /// let recipe = Recipe::new(RecipeId(1), "Greek Salad", ImageRef("image1"), Difficulty::Medium, 30);
    /// assert_eq!(recipe.name, "Greek Salad");
    /// assert_eq!(recipe.minutes, 30);
    /// ```
    #[must_use]
    pub fn new(
        id: RecipeId,
        name: impl Into<String>,
        image: ImageRef,
        difficulty: Difficulty,
        minutes: u16,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image,
            difficulty,
            minutes,
        }
    }
}

/// Builds the fixed, ordered recipe catalog.
///
/// The catalog is designed for arbitrary length but ships with the three
/// reference entries. Order here is render order.
#[must_use]
pub fn catalog() -> Vec<Recipe> {
    vec![
        Recipe::new(
            RecipeId(1),
            "Greek Salad",
            ImageRef("image1"),
            Difficulty::Medium,
            30,
        ),
        Recipe::new(
            RecipeId(2),
            "Avocado Toast",
            ImageRef("image2"),
            Difficulty::Easy,
            15,
        ),
        Recipe::new(
            RecipeId(3),
            "Salmon with Vegetables",
            ImageRef("image3"),
            Difficulty::Hard,
            45,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_ordered_and_fixed() {
        let recipes = catalog();
        assert_eq!(recipes.len(), 3);
        assert_eq!(recipes[0].name, "Greek Salad");
        assert_eq!(recipes[1].name, "Avocado Toast");
        assert_eq!(recipes[2].name, "Salmon with Vegetables");
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let recipes = catalog();
        let mut ids: Vec<RecipeId> = recipes.iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), recipes.len());
    }

    #[test]
    fn test_cooking_times_are_positive() {
        for recipe in catalog() {
            assert!(recipe.minutes > 0, "{} has no cooking time", recipe.name);
        }
    }

    #[test]
    fn test_difficulty_labels() {
        assert_eq!(Difficulty::Easy.label(), "Easy");
        assert_eq!(Difficulty::Medium.label(), "Medium");
        assert_eq!(Difficulty::Hard.label(), "Hard");
    }
}
