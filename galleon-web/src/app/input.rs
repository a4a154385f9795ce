//! Window-level keyboard routing for the four arrow keys.
//!
//! The listener is installed only while the phase is `Running` and torn
//! down as soon as it leaves, so the handler closure can never act on a
//! session that has ended. Default scrolling is suppressed for the arrow
//! keys only; every other key is left to the browser.

#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
#[cfg(target_arch = "wasm32")]
use crate::dom;
#[cfg(target_arch = "wasm32")]
use galleon_core::{Direction, Phase};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_keyboard_controls(state: &AppState, on_move: &Callback<Direction>) {
    let phase = state.controller().phase();
    // The callbacks are rebuilt every render; the listener closure reads the
    // freshest one through this ref so registration tracks phase changes
    // only, not per-render callback identity.
    let on_move_ref = use_mut_ref(|| on_move.clone());
    *on_move_ref.borrow_mut() = on_move.clone();

    use_effect_with(phase, move |phase| {
        let listener = (*phase == Phase::Running).then(|| {
            let on_move_ref = on_move_ref.clone();
            let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
                move |event: web_sys::KeyboardEvent| {
                    if let Some(direction) = Direction::from_arrow_key(&event.key()) {
                        event.prevent_default();
                        on_move_ref.borrow().emit(direction);
                    }
                },
            );
            if dom::window()
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                .is_err()
            {
                dom::console_error("failed to install keyboard listener");
            }
            closure
        });
        move || {
            if let Some(closure) = listener {
                let _ = dom::window()
                    .remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            }
        }
    });
}
