//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, imperative commands produced by
//! the event handler after processing user input. Actions bridge pure state
//! transformations and effectful operations the core cannot perform itself:
//! closing the pane, writing the restore slot, scheduling the next animation
//! frame.
//!
//! The event handler returns a `Vec<Action>` after processing each event; the
//! plugin shim executes them in sequence.

use crate::app::nav::ScreenId;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit (pressing 'q').
    CloseFocus,

    /// Writes the selected screen to the single-slot restore file.
    ///
    /// Emitted only when the screen actually changed; re-selecting the
    /// current screen never writes.
    PersistScreen(ScreenId),

    /// Requests one animation frame tick from the host timer.
    ///
    /// Emitted while any card animation is in flight. The shim answers with
    /// a `Tick` event when the timer fires.
    ScheduleFrame,
}
