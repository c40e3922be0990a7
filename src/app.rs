use std::io::Write;

use chrono::Utc;

use crate::convert::arith::{add_time, diff_time};
use crate::convert::duration::format_duration;
use crate::convert::instant::{convert_token, format_instant};
use crate::core::config::Config;
use crate::Result;

/// 按配置执行一次请求，结果行写入 out。
/// 模式优先级：当前时间 > 加法 > 差值 > 默认逐个转换。
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    config.validate()?;

    if config.current_time {
        // 当前时间模式忽略位置参数
        let now = Utc::now().fixed_offset();
        writeln!(
            out,
            "{}",
            format_instant(now, config.epoch_output, config.zone())
        )?;
        return Ok(());
    }

    if config.add_mode {
        let t = add_time(&config.args)?;
        writeln!(
            out,
            "{}",
            format_instant(t, config.epoch_output, config.zone())
        )?;
        return Ok(());
    }

    if config.diff_mode {
        let d = diff_time(&config.args)?;
        writeln!(out, "{}", format_duration(d, config.epoch_output))?;
        return Ok(());
    }

    // 默认模式：逐个转换位置参数，遇到首个失败即停止
    for arg in &config.args {
        let line = convert_token(arg, config.epoch_output, config.zone())?;
        writeln!(out, "{}", line)?;
    }

    Ok(())
}
