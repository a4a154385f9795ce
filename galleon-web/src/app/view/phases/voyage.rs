//! In-voyage screen: HUD, grid, controls, and the end-of-level modal.

use crate::app::view::AppHandlers;
use crate::components::ui::dpad::DirectionPad;
use crate::components::ui::grid::{GridView, cell_class, cell_symbol};
use crate::components::ui::hud::HudBar;
use crate::components::ui::outcome_modal::OutcomeModal;
use galleon_core::{CellKind, Phase, SessionController};
use yew::prelude::*;

const LEGEND: [(CellKind, &str); 5] = [
    (CellKind::Ship, "Your ship"),
    (CellKind::Treasure, "Treasure"),
    (CellKind::Island, "Island"),
    (CellKind::Pirate, "Pirate"),
    (CellKind::Monster, "Sea Monster"),
];

fn render_legend() -> Html {
    html! {
        <div class="legend">
            { for LEGEND.iter().map(|(kind, label)| html! {
                <span class={classes!("legend-item", cell_class(*kind))} key={*label}>
                    { cell_symbol(*kind) }{ " " }{ *label }
                </span>
            }) }
        </div>
    }
}

pub fn render_voyage(controller: &SessionController, handlers: &AppHandlers) -> Html {
    let tier = controller.tier();
    let board = match controller.snapshot() {
        Some(snapshot) => html! { <GridView snapshot={snapshot.clone()} /> },
        None => html! { <div class="grid-loading">{ "Charting the waters..." }</div> },
    };
    let modal = controller.outcome_message().map(|message| {
        let can_advance = controller.phase() == Phase::OutcomeWin && controller.has_next_tier();
        html! {
            <OutcomeModal
                message={AttrValue::from(message.to_string())}
                {can_advance}
                on_advance={handlers.advance.clone()}
                on_retry={handlers.retry.clone()}
                on_menu={handlers.go_menu.clone()}
            />
        }
    });
    html! {
        <div class="container game-container">
            <h1>{ format!("Level {} - {}", controller.level(), tier) }</h1>
            <HudBar
                {tier}
                level={controller.level()}
                total_score={controller.total_score()}
                snapshot={controller.snapshot().cloned()}
            />
            { board }
            { render_legend() }
            <DirectionPad on_move={handlers.move_ship.clone()} />
            <button class="btn btn-menu" onclick={handlers.go_menu.reform(|_| ())}>
                { "Back to menu" }
            </button>
            { modal.unwrap_or_default() }
        </div>
    }
}
