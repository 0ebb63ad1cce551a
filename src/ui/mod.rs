mod app;
mod colors;

pub use app::TuiApp;
pub use colors::TableColors;
