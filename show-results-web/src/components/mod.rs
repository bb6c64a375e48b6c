pub mod button;
pub mod providers;
pub mod result_panel;

pub use button::Button;
pub use result_panel::ResultPanel;
