//! Presentation-side logic shared by every client of the finder API.
//!
//! Nothing in here renders anything. It turns API responses into view
//! models and tracks the search lifecycle, so the browser bundle and the
//! terminal client behave the same way.

mod cards;
mod export;
mod links;
mod state;
mod theme;

pub use cards::{RecipeCard, RecipeDetail, SuggestionPanel, NO_RECIPES_MESSAGE};
pub use export::MissingIngredientsExport;
pub use links::video_search_url;
pub use state::{SearchOutcome, SearchState, EMPTY_INPUT_MESSAGE, FETCH_FAILED_MESSAGE};
pub use theme::{Theme, ThemeStore, ThemeStoreError};
