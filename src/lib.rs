pub mod app;
pub mod convert;
pub mod core;

// 重新导出主要类型
pub use crate::convert::arith::{add_time, diff_time};
pub use crate::convert::duration::format_duration;
pub use crate::convert::instant::{convert_token, format_instant, parse_instant};
pub use crate::core::config::{Config, OutputZone};
pub use crate::core::error::TimeConvError;

// 常量定义
pub const SECS_PER_MINUTE: i64 = 60;
pub const SECS_PER_HOUR: i64 = 3600;

// 结果类型别名
pub type Result<T> = std::result::Result<T, TimeConvError>;
