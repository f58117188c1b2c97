//! Visual theme: color tokens, the mood keyword heuristic and the single owned
//! theme value handed to the rendering layer.

pub mod colorizer;
pub mod palette;
pub mod state;

pub use colorizer::{colorize, matching_group, MoodGroup, MOOD_GROUPS};
pub use palette::{ColorTheme, HexColor, InvalidHexColor, DARK_TEXT, LIGHT_TEXT};
pub use state::{ThemeSource, ThemeState};
