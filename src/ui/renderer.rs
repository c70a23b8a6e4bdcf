//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components. The active palette is
//! resolved from the theme controller on every pass, so a theme flip is
//! visible on the very next render.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and delegates to the
/// screen-appropriate layout. Prints ANSI-styled output using `print!`
/// macros; does not clear the screen or manage cursor visibility.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let theme = Theme::for_mode(state.theme.mode());

    render_viewmodel(&viewmodel, &theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(info) = &vm.placeholder {
        components::render_placeholder_screen(vm, info, theme, rows, cols);
    } else {
        components::render_home_screen(vm, theme, rows, cols);
    }
}
