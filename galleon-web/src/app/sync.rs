//! Asynchronous drivers: the start request and the synchronization loop.
//!
//! Both are plain effects keyed on `(epoch, phase)`. Completions are
//! dispatched as epoch-stamped events, so anything resolving after a phase
//! transition is discarded by the controller at apply time.

#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
#[cfg(target_arch = "wasm32")]
use crate::dom;
#[cfg(target_arch = "wasm32")]
use galleon_core::{Phase, run_poll_tick, run_start};
#[cfg(target_arch = "wasm32")]
use std::cell::Cell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// While the controller sits in `Starting`, run the transport's start call
/// for the active tier and complete the transition with the result.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_start_driver(state: &AppState) {
    let controller = state.controller.clone();
    let transport = state.transport.clone();
    let tier = state.controller().tier();
    let key = (state.controller().epoch(), state.controller().phase());

    use_effect_with(key, move |(epoch, phase)| {
        if *phase == Phase::Starting {
            let epoch = *epoch;
            wasm_bindgen_futures::spawn_local(async move {
                let event = run_start(&*transport, tier, epoch).await;
                controller.dispatch(event);
            });
        }
        || {}
    });
}

/// Fixed-period state fetch while the phase is `Running`. Each tick is
/// independent; a failed fetch is logged and the next tick is the de facto
/// retry. Leaving `Running` re-runs the effect, and its cleanup flips the
/// cancellation flag the loop checks every tick — no dangling timers.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_poll_loop(state: &AppState) {
    let controller = state.controller.clone();
    let transport = state.transport.clone();
    let poll_ms = i32::try_from(state.config.poll_ms).unwrap_or(400);
    let session = state.controller().session().cloned();
    let key = (state.controller().epoch(), state.controller().phase());

    use_effect_with(key, move |(epoch, phase)| {
        let cancelled = Rc::new(Cell::new(false));
        if *phase == Phase::Running
            && let Some(session) = session
        {
            let epoch = *epoch;
            let flag = cancelled.clone();
            wasm_bindgen_futures::spawn_local(async move {
                loop {
                    if dom::sleep_ms(poll_ms).await.is_err() || flag.get() {
                        break;
                    }
                    match run_poll_tick(&*transport, &session, epoch).await {
                        Ok(event) => controller.dispatch(event),
                        Err(e) => log::warn!("state poll failed: {e}"),
                    }
                    if flag.get() {
                        break;
                    }
                }
            });
        }
        move || cancelled.set(true)
    });
}
