mod bar_panel;
mod global_footer;
mod status_bar;

pub use bar_panel::BarPanel;
pub use global_footer::GlobalFooter;
pub use status_bar::StatusBar;
