pub mod actions;

pub use actions::{ActionConfig, ACTIONS_API_PATH, ICON_PATH};
