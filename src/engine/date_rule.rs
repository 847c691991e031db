// ==========================================
// 成衣生产进度统计 - 交期判定规则
// ==========================================
// 参照日: 产品计划出货日（FCR）
// 候选日: 缝制线交付日期 expiredDate
// 红线: 自然日粒度比较（NaiveDate 已截断时分秒）
// 红线: 任一日期缺失 → 不过期 / Normal（失败关闭）
// ==========================================

use crate::config::StatisticThresholds;
use crate::domain::types::ExpiryTier;
use chrono::NaiveDate;

/// 过期天数 = reference - candidate
///
/// 正数表示线别日期已早于出货日（已过期）,0 或负数表示未过期
pub fn overdue_days(reference: Option<NaiveDate>, candidate: Option<NaiveDate>) -> Option<i64> {
    match (reference, candidate) {
        (Some(reference), Some(candidate)) => Some((reference - candidate).num_days()),
        _ => None,
    }
}

/// 线别日期相对出货日是否已过期（candidate < reference）
pub fn is_expired_date(reference: Option<NaiveDate>, candidate: Option<NaiveDate>) -> bool {
    overdue_days(reference, candidate).map_or(false, |days| days > 0)
}

/// 交期分级
///
/// 规则（顺序执行，命中即返回）:
/// 1) 任一日期缺失 → Normal
/// 2) 过期天数 > danger_window_days → Danger（严格于 is_expired_date）
/// 3) 过期天数 > -warning_window_days → Warning（已过期未达危险,或距过期不足预警窗口）
/// 4) 其他 → Normal
pub fn expiries_date_type(
    reference: Option<NaiveDate>,
    candidate: Option<NaiveDate>,
    thresholds: &StatisticThresholds,
) -> ExpiryTier {
    match overdue_days(reference, candidate) {
        None => ExpiryTier::Normal,
        Some(days) if days > thresholds.danger_window_days => ExpiryTier::Danger,
        Some(days) if days > -thresholds.warning_window_days => ExpiryTier::Warning,
        Some(_) => ExpiryTier::Normal,
    }
}
