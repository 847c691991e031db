// ==========================================
// 成衣生产进度统计 - 工序达标判定
// ==========================================
// 职责: 四道工序的达标谓词 + 完成百分比
// 规则: achieved ?? 0 >= target ?? 0,无容差、无取整
// ==========================================

/// 缺失数量视为 0
#[inline]
pub fn normalize(quantity: Option<u64>) -> u64 {
    quantity.unwrap_or(0)
}

/// 通用达标判定
pub fn stage_passed(target: Option<u64>, achieved: Option<u64>) -> bool {
    normalize(achieved) >= normalize(target)
}

// 四个工序谓词保持完全同构。
// 目录完成数统计对质检/包装复用了 iron_passed,谓词若出现差异需同步检查该处。

/// 缝制是否达标
pub fn sew_passed(target: Option<u64>, achieved: Option<u64>) -> bool {
    stage_passed(target, achieved)
}

/// 整烫是否达标
pub fn iron_passed(target: Option<u64>, achieved: Option<u64>) -> bool {
    stage_passed(target, achieved)
}

/// 质检是否达标
pub fn check_passed(target: Option<u64>, achieved: Option<u64>) -> bool {
    stage_passed(target, achieved)
}

/// 包装是否达标
pub fn package_passed(target: Option<u64>, achieved: Option<u64>) -> bool {
    stage_passed(target, achieved)
}

/// 完成百分比
///
/// # 返回
/// - None: 目标为 0 或缺失（不适用）
/// - Some(achieved / target * 100)
pub fn percentage(target: Option<u64>, achieved: Option<u64>) -> Option<f64> {
    let target = normalize(target);
    if target == 0 {
        return None;
    }
    Some(normalize(achieved) as f64 / target as f64 * 100.0)
}

/// 百分比严格低于阈值（不适用的百分比永不满足）
pub fn below(percent: Option<f64>, threshold: f64) -> bool {
    percent.map_or(false, |p| p < threshold)
}
