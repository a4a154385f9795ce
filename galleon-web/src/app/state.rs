//! Shared application state: one reduced controller value plus the
//! long-lived transport and config handles.

use crate::config::ClientConfig;
use crate::net::HttpTransport;
use galleon_core::{Event, SessionController};
use std::rc::Rc;
use yew::prelude::*;

/// Reducer wrapper around the core controller. Every trigger source —
/// start driver, poll loop, input callbacks — dispatches [`Event`]s here,
/// so the controller always applies them against its current state rather
/// than a render-time copy.
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerHandle(pub SessionController);

impl Reducible for ControllerHandle {
    type Action = Event;

    fn reduce(self: Rc<Self>, action: Event) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(Self(next))
    }
}

#[derive(Clone)]
pub struct AppState {
    pub controller: UseReducerHandle<ControllerHandle>,
    pub transport: Rc<HttpTransport>,
    pub config: Rc<ClientConfig>,
}

impl AppState {
    /// Controller value as of the current render.
    #[must_use]
    pub fn controller(&self) -> &SessionController {
        &self.controller.0
    }

    pub fn dispatch(&self, event: Event) {
        self.controller.dispatch(event);
    }
}

#[hook]
pub fn use_app_state() -> AppState {
    let config = use_memo((), |()| ClientConfig::load_from_static());
    let transport = {
        let base_url = config.base_url.clone();
        use_memo((), move |()| HttpTransport::new(base_url))
    };
    let controller = use_reducer(|| ControllerHandle(SessionController::new()));
    AppState {
        controller,
        transport,
        config,
    }
}
