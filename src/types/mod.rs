pub mod enums;
pub mod liquidity;
pub mod lst;

pub use enums::{ApyWindow, QuoteMode, SwapSource};
pub use liquidity::{AddLiquidityRequest, AddLiquidityResponse, PriorityFee, WSOL_MINT};
pub use lst::{ApyResponse, LstInfo, PriceEntry, PriceResponse, SolValueResponse, TvlResponse};
