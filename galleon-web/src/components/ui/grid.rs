//! Ocean grid rendering. Turning a snapshot cell into a symbol is a pure,
//! stateless lookup; everything that moves the symbols lives remotely.

use galleon_core::{CellKind, RemoteSnapshot};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub snapshot: RemoteSnapshot,
}

#[must_use]
pub const fn cell_symbol(kind: CellKind) -> &'static str {
    match kind {
        CellKind::Empty => "",
        CellKind::Ship => "🚢",
        CellKind::Treasure => "💰",
        CellKind::Island => "🏝️",
        CellKind::Pirate => "🏴",
        CellKind::Monster => "🐙",
    }
}

#[must_use]
pub const fn cell_class(kind: CellKind) -> &'static str {
    match kind {
        CellKind::Empty => "cell",
        CellKind::Ship => "cell cell-ship",
        CellKind::Treasure => "cell cell-treasure",
        CellKind::Island => "cell cell-island",
        CellKind::Pirate => "cell cell-pirate",
        CellKind::Monster => "cell cell-monster",
    }
}

#[function_component(GridView)]
pub fn grid_view(props: &Props) -> Html {
    html! {
        <div class="grid" role="grid">
            { for props.snapshot.grid.iter().enumerate().map(|(row, cells)| html! {
                <div class="grid-row" role="row" key={row}>
                    { for cells.iter().enumerate().map(|(col, kind)| html! {
                        <div class={cell_class(*kind)} role="gridcell" key={format!("{row}-{col}")}>
                            { cell_symbol(*kind) }
                        </div>
                    }) }
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use galleon_core::SessionStatus;
    use yew::LocalServerRenderer;

    #[test]
    fn symbols_cover_every_cell_kind() {
        assert_eq!(cell_symbol(CellKind::Ship), "🚢");
        assert_eq!(cell_symbol(CellKind::Treasure), "💰");
        assert_eq!(cell_symbol(CellKind::Island), "🏝️");
        assert_eq!(cell_symbol(CellKind::Pirate), "🏴");
        assert_eq!(cell_symbol(CellKind::Monster), "🐙");
        assert_eq!(cell_symbol(CellKind::Empty), "");
    }

    #[test]
    fn classes_mark_occupied_cells() {
        assert_eq!(cell_class(CellKind::Empty), "cell");
        assert!(cell_class(CellKind::Pirate).contains("cell-pirate"));
    }

    #[derive(Properties, Clone, PartialEq)]
    struct HarnessProps {
        snapshot: RemoteSnapshot,
    }

    #[function_component(GridHarness)]
    fn grid_harness(props: &HarnessProps) -> Html {
        html! { <GridView snapshot={props.snapshot.clone()} /> }
    }

    #[test]
    fn renders_one_cell_per_grid_entry() {
        let snapshot = RemoteSnapshot {
            grid: vec![
                vec![CellKind::Empty, CellKind::Ship],
                vec![CellKind::Island, CellKind::Treasure],
            ],
            status: SessionStatus::Running,
            ..RemoteSnapshot::default()
        };
        let rendered = block_on(
            LocalServerRenderer::<GridHarness>::with_props(HarnessProps { snapshot }).render(),
        );
        assert!(rendered.contains("🚢"));
        assert!(rendered.contains("cell-treasure"));
        assert_eq!(rendered.matches("gridcell").count(), 4);
    }
}
