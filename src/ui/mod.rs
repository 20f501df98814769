pub mod braille;
pub mod career;
pub mod overlay;
pub mod render;
pub mod theme;

pub use career::render_career;
pub use overlay::OverlayMessage;
pub use render::{render_match, MatchHud};
pub use theme::Theme;
