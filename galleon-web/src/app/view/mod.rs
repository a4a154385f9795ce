mod handlers;
mod phases;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use galleon_core::Phase;
use yew::prelude::*;

/// Render whatever the controller's phase calls for. The phase is the
/// single source of truth: menu (with the start spinner while a start is
/// in flight), the live voyage screen, or the voyage screen with the
/// outcome modal on top.
pub fn render_app(state: &AppState, handlers: &AppHandlers) -> Html {
    let controller = state.controller();
    match controller.phase() {
        Phase::Menu | Phase::Starting => phases::render_menu(controller, handlers),
        Phase::Running | Phase::OutcomeWin | Phase::OutcomeLose => {
            phases::render_voyage(controller, handlers)
        }
    }
}
