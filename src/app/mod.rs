pub mod app;
pub mod chart;
pub mod fetch;
pub mod state;
pub mod ui;
pub mod utils;

pub use app::App;
pub use state::AppState;
