pub mod mover;
pub mod price_point;
pub mod search_result;

pub use mover::{MoverEntry, MoverKind, Movers};
pub use price_point::PricePoint;
pub use search_result::SearchResult;
