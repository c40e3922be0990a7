use chrono::{DateTime, FixedOffset, Local, SecondsFormat, Utc};

use crate::core::config::OutputZone;
use crate::core::error::TimeConvError;
use crate::Result;

/// 解析单个输入令牌。
/// 先按整数（Unix 秒，UTC）解析，失败后按 RFC3339 解析；
/// 返回时间点和"输入是否为 Unix 秒"标志。
pub fn parse_instant(token: &str) -> Result<(DateTime<FixedOffset>, bool)> {
    if let Ok(secs) = token.parse::<i64>() {
        let t = DateTime::from_timestamp(secs, 0).ok_or(TimeConvError::OutOfRange(secs))?;
        return Ok((t.fixed_offset(), true));
    }

    match DateTime::parse_from_rfc3339(token) {
        Ok(t) => Ok((t, false)),
        Err(source) => Err(TimeConvError::parse_error(token, source)),
    }
}

/// 渲染时间点。
/// Unix 模式输出整数秒；结构化模式按所选时区输出 RFC3339（秒精度，UTC 以 Z 结尾）。
pub fn format_instant(t: DateTime<FixedOffset>, epoch_output: bool, zone: OutputZone) -> String {
    if epoch_output {
        return t.timestamp().to_string();
    }

    match zone {
        OutputZone::Utc => t
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Secs, true),
        OutputZone::Local => t
            .with_timezone(&Local)
            .to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}

/// 转换单个令牌：输出与检测到的输入表示相反，force_epoch 强制 Unix 秒输出
pub fn convert_token(token: &str, force_epoch: bool, zone: OutputZone) -> Result<String> {
    let (t, from_epoch) = parse_instant(token)?;
    tracing::debug!(
        "parsed {:?} as {} input",
        token,
        if from_epoch { "epoch" } else { "rfc3339" }
    );
    Ok(format_instant(t, force_epoch || !from_epoch, zone))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_epoch_token() {
        let (t, from_epoch) = parse_instant("0").unwrap();
        assert!(from_epoch);
        assert_eq!(t.timestamp(), 0);

        let (t, from_epoch) = parse_instant("-86400").unwrap();
        assert!(from_epoch);
        assert_eq!(t.timestamp(), -86400);
    }

    #[test]
    fn test_parse_rfc3339_token() {
        let (t, from_epoch) = parse_instant("1970-01-01T01:00:00+01:00").unwrap();
        assert!(!from_epoch);
        assert_eq!(t.timestamp(), 0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_instant("not-a-time").unwrap_err();
        assert!(matches!(err, TimeConvError::ParseError { .. }));
    }

    #[test]
    fn test_parse_rejects_out_of_range_epoch() {
        let err = parse_instant("9223372036854775807").unwrap_err();
        assert!(matches!(err, TimeConvError::OutOfRange(_)));
    }

    #[test]
    fn test_format_epoch_output() {
        let (t, _) = parse_instant("1970-01-01T00:00:00Z").unwrap();
        assert_eq!(format_instant(t, true, OutputZone::Utc), "0");
    }

    #[test]
    fn test_format_structured_utc() {
        let (t, _) = parse_instant("3600").unwrap();
        assert_eq!(format_instant(t, false, OutputZone::Utc), "1970-01-01T01:00:00Z");
    }

    #[test]
    fn test_format_structured_local_preserves_instant() {
        // 本地时区因机器而异，只验证往返后时间点不变
        let (t, _) = parse_instant("1714552200").unwrap();
        let rendered = format_instant(t, false, OutputZone::Local);
        let (back, _) = parse_instant(&rendered).unwrap();
        assert_eq!(back.timestamp(), 1714552200);
    }

    #[test]
    fn test_structured_round_trip() {
        let (t, _) = parse_instant("2024-05-01T10:30:00+02:00").unwrap();
        let rendered = format_instant(t, false, OutputZone::Utc);
        assert_eq!(rendered, "2024-05-01T08:30:00Z");
        let (back, _) = parse_instant(&rendered).unwrap();
        assert_eq!(back.timestamp(), t.timestamp());
    }

    #[test]
    fn test_convert_inverts_representation() {
        assert_eq!(
            convert_token("0", false, OutputZone::Utc).unwrap(),
            "1970-01-01T00:00:00Z"
        );
        assert_eq!(
            convert_token("1970-01-01T00:00:00Z", false, OutputZone::Utc).unwrap(),
            "0"
        );
    }

    #[test]
    fn test_convert_forced_epoch() {
        assert_eq!(convert_token("42", true, OutputZone::Utc).unwrap(), "42");
        assert_eq!(
            convert_token("1970-01-01T00:01:00Z", true, OutputZone::Utc).unwrap(),
            "60"
        );
    }
}
