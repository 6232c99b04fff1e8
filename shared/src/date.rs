//! 时间类型模块
//!
//! 提供两种时间类型：
//! - `Timestamp`: 可序列化的毫秒时间戳，用于传输和存储
//! - `Date`: 操作型时间类型，封装浏览器时钟，提供 now(), parse() 等方法

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use std::time::Duration;

// =========================================================
// Timestamp - 可传输的时间戳类型
// =========================================================

/// 毫秒时间戳，用于序列化传输和存储
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// 创建新的时间戳
    #[inline]
    pub const fn new(ms: i64) -> Self {
        Self(ms)
    }

    /// 获取毫秒值
    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// 获取秒值
    #[inline]
    pub const fn as_secs(&self) -> i64 {
        self.0 / 1000
    }

    /// 格式化为日期字符串 (YYYY-MM-DD)，用于表格展示
    pub fn format_date(&self) -> String {
        match DateTime::from_timestamp_millis(self.0) {
            Some(dt) => dt.format("%Y-%m-%d").to_string(),
            None => "-".to_string(),
        }
    }

    /// 格式化为日期时间字符串 (YYYY-MM-DD HH:MM)
    pub fn format_datetime(&self) -> String {
        match DateTime::from_timestamp_millis(self.0) {
            Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            None => "-".to_string(),
        }
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0 + rhs.as_millis() as i64)
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = Duration;

    /// 计算两个时间戳之间的差值（返回 Duration）
    fn sub(self, rhs: Timestamp) -> Self::Output {
        let diff_ms = (self.0 - rhs.0).max(0);
        Duration::from_millis(diff_ms as u64)
    }
}

// =========================================================
// Date - 操作型时间类型
// =========================================================

/// 操作型时间类型，封装 js_sys::Date
///
/// 用于获取当前时间、解析时间字符串等操作，仅在 WASM 环境可用
#[derive(Debug, Clone)]
pub struct Date(js_sys::Date);

impl Date {
    /// 获取当前时间
    #[inline]
    pub fn now() -> Self {
        Self(js_sys::Date::new_0())
    }

    /// 获取当前时间的毫秒时间戳
    #[inline]
    pub fn now_timestamp() -> Timestamp {
        Timestamp(js_sys::Date::now() as i64)
    }

    /// 从毫秒时间戳创建
    #[inline]
    pub fn from_timestamp(ts: Timestamp) -> Self {
        Self(js_sys::Date::new(&(ts.0 as f64).into()))
    }

    /// 从 ISO 8601 / RFC 3339 字符串解析，直接返回时间戳
    ///
    /// 返回 None 如果解析失败
    pub fn parse_timestamp(s: &str) -> Option<Timestamp> {
        let ms = js_sys::Date::parse(s);
        if ms.is_nan() {
            None
        } else {
            Some(Timestamp(ms as i64))
        }
    }

    /// 转换为时间戳
    #[inline]
    pub fn timestamp(&self) -> Timestamp {
        Timestamp(self.0.get_time() as i64)
    }
}

impl From<Timestamp> for Date {
    fn from(ts: Timestamp) -> Self {
        Self::from_timestamp(ts)
    }
}

impl From<Date> for Timestamp {
    fn from(date: Date) -> Self {
        date.timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_ordering_is_by_millis() {
        let earlier = Timestamp::new(1_000);
        let later = Timestamp::new(2_000);
        assert!(earlier < later);
        assert_eq!(later - earlier, Duration::from_secs(1));
    }

    #[test]
    fn timestamp_sub_saturates_at_zero() {
        let earlier = Timestamp::new(1_000);
        let later = Timestamp::new(5_000);
        assert_eq!(earlier - later, Duration::ZERO);
    }

    #[test]
    fn format_date_renders_utc_day() {
        // 2024-03-01T12:30:00Z
        let ts = Timestamp::new(1_709_296_200_000);
        assert_eq!(ts.format_date(), "2024-03-01");
        assert_eq!(ts.format_datetime(), "2024-03-01 12:30");
    }

    #[test]
    fn add_duration_advances_millis() {
        let ts = Timestamp::new(0) + Duration::from_secs(90);
        assert_eq!(ts.as_millis(), 90_000);
        assert_eq!(ts.as_secs(), 90);
    }
}
