//! Run stats bar: level badges plus whatever the latest snapshot reports.

use galleon_core::{RemoteSnapshot, SessionStatus, Tier};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub tier: Tier,
    pub level: usize,
    pub total_score: u32,
    #[prop_or_default]
    pub snapshot: Option<RemoteSnapshot>,
}

const fn status_label(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Running => "RUNNING",
        SessionStatus::Win => "WIN",
        SessionStatus::Lose => "LOSE",
    }
}

#[function_component(HudBar)]
pub fn hud_bar(props: &Props) -> Html {
    let snap = props.snapshot.as_ref();
    let status = snap.map_or("LOADING", |s| status_label(s.status));
    // Badge total moves with the live level score. A WIN's level score is
    // already banked into the total, so it must not be added again.
    let run_total = props.total_score.saturating_add(
        snap.filter(|s| s.status != SessionStatus::Win)
            .map_or(0, |s| s.score),
    );
    let stat = |label: &str, value: String| {
        html! {
            <div class="info-item">
                <span class="stat-label">{ label.to_string() }</span>
                <span class="stat-value">{ value }</span>
            </div>
        }
    };
    html! {
        <>
            <div class="level-info">
                <span class="level-badge">{ format!("LEVEL {}", props.level) }</span>
                <span class="difficulty-badge">{ props.tier.to_string() }</span>
                <span class="lives-badge">{ format!("Lives: {}", snap.map_or(0, |s| s.lives)) }</span>
                <span class="score-badge">{ format!("Total score: {run_total}") }</span>
            </div>
            <div class="info-bar">
                { stat("Level score:", snap.map_or(0, |s| s.score).to_string()) }
                { stat("Position:", format!("({},{})", snap.map_or(0, |s| s.ship_x), snap.map_or(0, |s| s.ship_y))) }
                { stat("Treasure:", format!("({},{})", snap.map_or(0, |s| s.treasure_x), snap.map_or(0, |s| s.treasure_y))) }
                { stat("Pirates:", snap.map_or(0, |s| s.pirates).to_string()) }
                { stat("Monsters:", snap.map_or(0, |s| s.monsters).to_string()) }
                { stat("Moves:", snap.map_or(0, |s| s.moves).to_string()) }
                { stat("Status:", status.to_string()) }
            </div>
        </>
    }
}
