//! Tier-selection menu, shown in the `Menu` and `Starting` phases.

use crate::app::view::AppHandlers;
use galleon_core::{SessionController, TIER_SEQUENCE, Tier};
use yew::prelude::*;

/// Menu copy only; the actual lives and island counts are remote knowledge.
const fn tier_blurb(tier: Tier) -> &'static str {
    match tier {
        Tier::Easy => "EASY - 5 lives, 10 islands",
        Tier::Medium => "MEDIUM - 4 lives, 12 islands",
        Tier::Hard => "HARD - 3 lives, 14 islands",
        Tier::Survival => "SURVIVAL - 2 lives, 14 islands",
    }
}

pub fn render_menu(controller: &SessionController, handlers: &AppHandlers) -> Html {
    let loading = controller.is_loading();
    let tier_button = |tier: Tier| {
        let on_start = handlers.start.clone();
        let onclick = Callback::from(move |_| on_start.emit(tier));
        html! {
            <button class="btn tier-btn" {onclick} disabled={loading} key={tier.wire_name()}>
                { if loading { "Loading...".to_string() } else { format!("LEVEL {}", tier.position()) } }
                <br />
                <span class="btn-desc">{ tier_blurb(tier) }</span>
            </button>
        }
    };
    html! {
        <div class="container menu-container">
            <h1>{ "⚓ Galleon Treasure Voyage ⚓" }</h1>
            <p class="subtitle">{ "Find the treasure and escape the pirates!" }</p>
            if let Some(error) = controller.error_message() {
                <div class="error-message" role="alert">{ error.to_string() }</div>
            }
            <div class="menu">
                { for TIER_SEQUENCE.iter().map(|tier| tier_button(*tier)) }
            </div>
        </div>
    }
}
