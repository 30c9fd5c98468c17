pub mod json;
pub mod tab;

pub use json::to_json;
pub use tab::{TabStyle, format_tab};
