//! Application root: owns the shared state, wires the background drivers,
//! and hands the controller to the phase views.

pub mod input;
pub mod state;
pub mod sync;
pub mod view;

use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let state = state::use_app_state();
    sync::use_start_driver(&state);
    sync::use_poll_loop(&state);
    let handlers = view::AppHandlers::new(&state);
    input::use_keyboard_controls(&state, &handlers.move_ship);
    view::render_app(&state, &handlers)
}

// Without a browser there is no network or keyboard to drive, but the
// render path itself stays testable.
#[cfg(not(target_arch = "wasm32"))]
#[function_component(App)]
pub fn app() -> Html {
    let state = state::use_app_state();
    let handlers = view::AppHandlers::new(&state);
    view::render_app(&state, &handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn fresh_app_renders_the_menu() {
        let rendered = block_on(LocalServerRenderer::<App>::new().render());
        assert!(rendered.contains("Galleon Treasure Voyage"));
        assert!(rendered.contains("SURVIVAL"));
    }
}
