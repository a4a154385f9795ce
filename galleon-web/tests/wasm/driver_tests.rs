//! Browser-run coverage for the hook layer: keyboard listener lifecycle and
//! the gated move path. Run with a wasm test runner against a real browser.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_test::*;
use web_sys::{KeyboardEvent, KeyboardEventInit};
use yew::prelude::*;

use galleon_core::{Direction, Event, SessionId, Tier};
use galleon_web::app::input::use_keyboard_controls;
use galleon_web::app::state::use_app_state;
use galleon_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, Clone, PartialEq)]
struct HarnessProps {
    moves: Rc<RefCell<Vec<Direction>>>,
    /// Drive the controller into the running phase on mount.
    run: bool,
}

#[function_component(KeyHarness)]
fn key_harness(props: &HarnessProps) -> Html {
    let state = use_app_state();
    {
        let state = state.clone();
        use_effect_with(props.run, move |run| {
            if *run {
                state.dispatch(Event::StartTier { tier: Tier::Easy });
                state.dispatch(Event::StartSucceeded {
                    epoch: 1,
                    session: SessionId::new("session_1").unwrap(),
                });
            }
            || {}
        });
    }
    let moves = props.moves.clone();
    let on_move = Callback::from(move |direction: Direction| moves.borrow_mut().push(direction));
    use_keyboard_controls(&state, &on_move);
    html! { <span>{ format!("{:?}", state.controller().phase()) }</span> }
}

fn harness_root() -> web_sys::Element {
    let doc = dom::window().document().expect("document");
    if let Some(root) = doc.get_element_by_id("harness-root") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create harness root");
    root.set_id("harness-root");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append harness root");
    root
}

fn render_harness(moves: Rc<RefCell<Vec<Direction>>>, run: bool) {
    yew::Renderer::<KeyHarness>::with_root_and_props(harness_root(), HarnessProps { moves, run })
        .render();
}

/// Let queued renders and effects run.
async fn settle() {
    let _ = dom::sleep_ms(20).await;
}

fn press(key: &str) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_cancelable(true);
    let event =
        KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keyboard event");
    let _ = dom::window().dispatch_event(&event);
    event
}

#[wasm_bindgen_test]
async fn arrow_keys_move_the_ship_while_running() {
    let moves = Rc::new(RefCell::new(Vec::new()));
    render_harness(moves.clone(), true);
    settle().await;

    let up = press("ArrowUp");
    let left = press("ArrowLeft");
    let enter = press("Enter");
    settle().await;

    assert_eq!(*moves.borrow(), vec![Direction::North, Direction::West]);
    assert!(up.default_prevented(), "arrow scrolling must be suppressed");
    assert!(left.default_prevented());
    assert!(!enter.default_prevented(), "other keys pass through");
}

#[wasm_bindgen_test]
async fn menu_phase_installs_no_listener() {
    let moves = Rc::new(RefCell::new(Vec::new()));
    render_harness(moves.clone(), false);
    settle().await;

    press("ArrowDown");
    press("ArrowRight");
    settle().await;

    assert!(moves.borrow().is_empty());
}
