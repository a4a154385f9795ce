use crate::app::state::AppState;
use galleon_core::{Direction, Event, Tier};
use yew::prelude::*;

/// The five entry points the presentation layer is allowed to call,
/// each mapped 1:1 to a controller transition.
#[derive(Clone, PartialEq)]
pub struct AppHandlers {
    pub start: Callback<Tier>,
    pub move_ship: Callback<Direction>,
    pub advance: Callback<()>,
    pub retry: Callback<()>,
    pub go_menu: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            start: build_start(state),
            move_ship: build_move(state),
            advance: build_dispatch(state, Event::Advance),
            retry: build_dispatch(state, Event::Retry),
            go_menu: build_dispatch(state, Event::ReturnToMenu),
        }
    }
}

fn build_start(state: &AppState) -> Callback<Tier> {
    let controller = state.controller.clone();
    Callback::from(move |tier: Tier| controller.dispatch(Event::StartTier { tier }))
}

fn build_dispatch(state: &AppState, event: Event) -> Callback<()> {
    let controller = state.controller.clone();
    Callback::from(move |()| controller.dispatch(event.clone()))
}

/// Directional moves: gate on the running phase, then run the shared
/// submit-and-fetch sequence so the view reflects the latest truth without
/// waiting for the next poll tick.
#[cfg(target_arch = "wasm32")]
fn build_move(state: &AppState) -> Callback<Direction> {
    let controller = state.controller.clone();
    let transport = state.transport.clone();
    Callback::from(move |direction: Direction| {
        let Some((session, epoch)) = controller.0.move_gate() else {
            return;
        };
        let controller = controller.clone();
        let transport = transport.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match galleon_core::run_move(&*transport, &session, epoch, direction).await {
                Ok(event) => controller.dispatch(event),
                Err(e) => log::warn!("forced fetch after move failed: {e}"),
            }
        });
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn build_move(state: &AppState) -> Callback<Direction> {
    let controller = state.controller.clone();
    Callback::from(move |_direction: Direction| {
        // Gate only; the network side of a move needs the browser.
        let _ = controller.0.move_gate();
    })
}
