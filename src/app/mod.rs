//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! plugin runtime (main.rs) and the domain/ui layers. It implements the
//! event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                            │
//!                                       Render Pass → Frame Ticks
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`animation`]: Frame-paced float interpolation and easing
//! - [`cards`]: Per-card ephemeral entrance/favorite state
//! - [`filters`]: Filter tag vocabulary and the selected set
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Theme and input mode types
//! - [`nav`]: Screen enum and navigation controller
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use forkful::app::{AppState, Event, ThemeMode, ScreenId, handle_event};
//! use forkful::domain::catalog;
//!
//! let mut state = AppState::new(catalog(), ScreenId::Home, ThemeMode::Light);
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! # Ok::<(), forkful::domain::ForkfulError>(())
//! ```

pub mod actions;
pub mod animation;
pub mod cards;
pub mod filters;
pub mod handler;
pub mod modes;
pub mod nav;
pub mod state;

pub use actions::Action;
pub use cards::{CardDeck, CardState, FAVORITE_SCALE, REST_SCALE};
pub use filters::{FilterSet, FilterTag};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, ThemeController, ThemeMode};
pub use nav::{NavigationController, ScreenId};
pub use state::AppState;
