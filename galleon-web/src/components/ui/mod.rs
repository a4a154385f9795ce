pub mod dpad;
pub mod grid;
pub mod hud;
pub mod outcome_modal;
