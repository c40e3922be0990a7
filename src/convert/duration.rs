use chrono::Duration;

use crate::{SECS_PER_HOUR, SECS_PER_MINUTE};

/// 渲染时间差。
/// Unix 模式输出整数秒；否则输出秒粒度的 h/m/s 形式，
/// 如 "0s"、"42s"、"1m5s"、"1h0m0s"，负值带前导 "-"，小时不折算成天。
pub fn format_duration(d: Duration, epoch_output: bool) -> String {
    let total = d.num_seconds();
    if epoch_output {
        return total.to_string();
    }

    let sign = if total < 0 { "-" } else { "" };
    let secs = total.abs();

    let hours = secs / SECS_PER_HOUR;
    let minutes = secs % SECS_PER_HOUR / SECS_PER_MINUTE;
    let seconds = secs % SECS_PER_MINUTE;

    if hours > 0 {
        format!("{}{}h{}m{}s", sign, hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}{}m{}s", sign, minutes, seconds)
    } else {
        format!("{}{}s", sign, seconds)
    }
}
