mod menu;
mod voyage;

pub use menu::render_menu;
pub use voyage::render_voyage;
