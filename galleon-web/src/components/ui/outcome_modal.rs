//! Outcome modal shown over the game screen once the remote session
//! reports a terminal state.

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub message: AttrValue,
    /// Offer the next-tier button. Only true after a win with tiers left.
    #[prop_or_default]
    pub can_advance: bool,
    pub on_advance: Callback<()>,
    pub on_retry: Callback<()>,
    pub on_menu: Callback<()>,
}

#[function_component(OutcomeModal)]
pub fn outcome_modal(props: &Props) -> Html {
    let advance = {
        let cb = props.on_advance.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let retry = {
        let cb = props.on_retry.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let menu = {
        let cb = props.on_menu.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="game-over-modal" role="dialog" aria-modal="true">
            <div class="modal-content">
                <p class="outcome-text">{ props.message.clone() }</p>
                if props.can_advance {
                    <button class="btn btn-next" onclick={advance}>{ "Next level" }</button>
                }
                <button class="btn btn-retry" onclick={retry}>{ "Retry level" }</button>
                <button class="btn btn-menu" onclick={menu}>{ "Back to menu" }</button>
            </div>
        </div>
    }
}
