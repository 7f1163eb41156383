pub mod app;
pub mod components;
pub mod state;
pub mod theme;

pub use app::QuickRecipeApp;
pub use state::{AppState, ViewState};
pub use theme::Theme;
