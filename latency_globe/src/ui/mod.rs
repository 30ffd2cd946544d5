mod hud;
mod inspector;
mod tooltip;

pub use hud::{hud_plugin, HudState};
pub use inspector::{inspector_plugin, SelectedPair, TimeRange};
pub use tooltip::tooltip_plugin;
