use chrono::{DateTime, Duration, FixedOffset};

use crate::convert::instant::parse_instant;
use crate::core::error::TimeConvError;
use crate::Result;

/// 两个令牌：时间点 + 秒数，返回相加后的时间点
pub fn add_time(args: &[String]) -> Result<DateTime<FixedOffset>> {
    if args.len() != 2 {
        return Err(TimeConvError::invalid_arguments(args));
    }

    let (t, _) = parse_instant(&args[0]).map_err(|e| TimeConvError::argument_time("first", e))?;

    let secs: i64 = args[1]
        .parse()
        .map_err(|source| TimeConvError::ArgumentDuration { source })?;

    let delta = Duration::try_seconds(secs).ok_or(TimeConvError::Overflow)?;
    t.checked_add_signed(delta).ok_or(TimeConvError::Overflow)
}

/// 两个令牌：两个时间点，返回 A - B
pub fn diff_time(args: &[String]) -> Result<Duration> {
    if args.len() != 2 {
        return Err(TimeConvError::invalid_arguments(args));
    }

    let (start, _) =
        parse_instant(&args[0]).map_err(|e| TimeConvError::argument_time("first", e))?;
    let (finish, _) =
        parse_instant(&args[1]).map_err(|e| TimeConvError::argument_time("second", e))?;

    Ok(start.signed_duration_since(finish))
}
