//! The response-normalization core: pure functions from raw JSON values to
//! flat records. Nothing in this module performs I/O or mutates its input, so
//! every function can be called from concurrent callers without coordination.

pub mod events;
pub mod extract;
pub mod flatten;
pub mod period;

pub use self::events::{collect_events, EventSpec};
pub use self::extract::{extract, extract_record, ColumnSpec};
pub use self::flatten::{flatten, rename_nested};
pub use self::period::{aggregate_by_period, aggregate_summed, PeriodStatsSpec};
