//! Conversion engine between Unix epoch seconds and RFC3339 timestamps

pub mod arith;
pub mod duration;
pub mod instant;

pub use arith::{add_time, diff_time};
pub use duration::format_duration;
pub use instant::{convert_token, format_instant, parse_instant};
