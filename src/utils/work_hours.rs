//! 教师课时计算
//!
//! 课时结算只统计已完成的课次：对每个课次取 end - start 的秒数，
//! 求和后换算成小时。

/// 把一组课次时长（秒）汇总成课时数（小时，保留两位小数）
pub fn sum_work_hours(durations_secs: impl IntoIterator<Item = i64>) -> f64 {
    let total_secs: i64 = durations_secs.into_iter().map(|d| d.max(0)).sum();
    round_hours(total_secs as f64 / 3600.0)
}

/// 课时金额 = 课时数 x 课时费
pub fn work_amount(hours: f64, hourly_rate: f64) -> f64 {
    round_hours(hours * hourly_rate)
}

/// 保留两位小数
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_session() {
        // 90 分钟 = 1.5 小时
        assert_eq!(sum_work_hours([5400]), 1.5);
    }

    #[test]
    fn test_multiple_sessions() {
        // 1h + 45min + 2h = 3.75h
        assert_eq!(sum_work_hours([3600, 2700, 7200]), 3.75);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(sum_work_hours([]), 0.0);
    }

    #[test]
    fn test_negative_duration_ignored() {
        // 脏数据：end < start 的课次不应产生负课时
        assert_eq!(sum_work_hours([-600, 3600]), 1.0);
    }

    #[test]
    fn test_rounding() {
        // 50 分钟 = 0.8333... -> 0.83
        assert_eq!(sum_work_hours([3000]), 0.83);
    }

    #[test]
    fn test_amount() {
        assert_eq!(work_amount(3.75, 120.0), 450.0);
        assert_eq!(work_amount(0.83, 100.0), 83.0);
    }
}
