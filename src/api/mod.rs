pub mod dto;
pub mod tradebrains;
pub mod utils;

pub use tradebrains::TradeBrainsApi;
