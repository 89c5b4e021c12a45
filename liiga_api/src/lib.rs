//! Unofficial client for the Liiga statistics API.
//!
//! Fetches JSON from `https://liiga.fi/api/v2` and reshapes the nested,
//! per-endpoint response shapes into flat records suitable for tabular
//! consumption. Fetching and normalization are separate steps: the [`Client`]
//! fetches a raw value once and hands it to the pure normalization layer in
//! [`endpoints`] and [`normalize`], so raw responses can be cached and reused
//! by callers.

mod client;
mod errors;
mod game_type;
mod record;
mod user_agent;

pub mod endpoints;
pub mod normalize;

pub use self::client::Client;
pub use self::endpoints::{NormalizeOptions, Records};
pub use self::errors::Error;
pub use self::game_type::GameType;
pub use self::record::FlatRecord;
