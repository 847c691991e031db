// ==========================================
// 成衣生产进度统计 - 日期解析（日粒度）
// ==========================================
// 红线: 所有日期比较按自然日进行,先截断时分秒再求差
// 红线: 缺失/非法日期一律视为 None（失败关闭）
// ==========================================

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// 解析为自然日
///
/// 支持格式:
/// - `2026-01-17`
/// - `2026-01-17T08:30:00` / `2026-01-17T08:30:00.123`
/// - `2026-01-17 08:30:00`
/// - RFC 3339 带时区（保留该时区下的日期）
///
/// 空串或无法识别的格式返回 None
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(day);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    None
}

/// serde 宽松反序列化: 非字符串/非法日期 → None
pub fn deserialize_lenient_day<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.as_str().and_then(parse_day)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_day("2026-01-17"), Some(day(2026, 1, 17)));
        assert_eq!(parse_day("  2026-01-17 "), Some(day(2026, 1, 17)));
    }

    #[test]
    fn test_parse_truncates_time_of_day() {
        assert_eq!(parse_day("2026-01-17T23:59:59"), Some(day(2026, 1, 17)));
        assert_eq!(parse_day("2026-01-17 00:00:01.500"), Some(day(2026, 1, 17)));
    }

    #[test]
    fn test_parse_rfc3339_keeps_offset_local_day() {
        // UTC 前一天 17:00 = +07:00 当天 00:00
        assert_eq!(parse_day("2026-01-17T00:00:00+07:00"), Some(day(2026, 1, 17)));
        assert_eq!(parse_day("2026-01-16T17:00:00Z"), Some(day(2026, 1, 16)));
    }

    #[test]
    fn test_parse_invalid_is_none() {
        assert_eq!(parse_day(""), None);
        assert_eq!(parse_day("not a date"), None);
        assert_eq!(parse_day("2026-02-30"), None);
    }

    #[test]
    fn test_lenient_deserializer() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(default, deserialize_with = "deserialize_lenient_day")]
            date: Option<NaiveDate>,
        }

        let h: Holder = serde_json::from_str(r#"{"date":"2026-03-01T10:00:00.000Z"}"#).unwrap();
        assert_eq!(h.date, Some(day(2026, 3, 1)));

        let h: Holder = serde_json::from_str(r#"{"date":null}"#).unwrap();
        assert_eq!(h.date, None);

        let h: Holder = serde_json::from_str(r#"{"date":12345}"#).unwrap();
        assert_eq!(h.date, None);

        let h: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(h.date, None);
    }
}
