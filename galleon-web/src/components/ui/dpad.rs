//! On-screen directional controls. These and the arrow keys funnel into
//! the same move entry point with identical gating.

use galleon_core::Direction;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub on_move: Callback<Direction>,
}

#[function_component(DirectionPad)]
pub fn direction_pad(props: &Props) -> Html {
    let button = |direction: Direction, symbol: &str, title: &str| {
        let on_move = props.on_move.clone();
        let onclick = Callback::from(move |_| on_move.emit(direction));
        html! {
            <button class="arrow-btn" {onclick} title={title.to_string()}>
                { symbol.to_string() }
            </button>
        }
    };
    html! {
        <div class="controls">
            <div></div>
            { button(Direction::North, "⬆️", "Move north (or ↑)") }
            <div></div>
            { button(Direction::West, "⬅️", "Move west (or ←)") }
            { button(Direction::South, "⬇️", "Move south (or ↓)") }
            { button(Direction::East, "➡️", "Move east (or →)") }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[function_component(PadHarness)]
    fn pad_harness() -> Html {
        html! { <DirectionPad on_move={Callback::from(|_| {})} /> }
    }

    #[test]
    fn renders_all_four_directions() {
        let rendered = block_on(LocalServerRenderer::<PadHarness>::new().render());
        for title in ["north", "south", "east", "west"] {
            assert!(rendered.contains(title), "missing {title} button");
        }
    }
}
