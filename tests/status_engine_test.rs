// ==========================================
// StatusEngine 引擎集成测试
// ==========================================
// 测试目标: 验证单产品状态标签判定顺序与图标显示
// 覆盖范围: success / danger / warning / normal 四级标签
// ==========================================

use chrono::NaiveDate;
use garment_status::config::StatisticThresholds;
use garment_status::domain::{Completion, Product, SewingLineDelivery, StatusIconType};
use garment_status::engine::{
    expiries_date_type, is_expired_date, is_show_status_icon, StatusEngine,
};
use garment_status::ExpiryTier;

// ==========================================
// 测试辅助函数
// ==========================================

/// 计划出货日: 2026-09-15
fn fcr() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2026, 9, 15)
}

fn day(m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2026, m, d)
}

fn create_product(id: i64, quantity_po: Option<u64>) -> Product {
    Product::new(id, quantity_po, fcr())
}

fn create_sums(
    id: i64,
    sewed: &[(u64, Option<NaiveDate>)],
    ironed: u64,
    checked: u64,
    packaged: u64,
) -> (Vec<SewingLineDelivery>, Vec<Completion>) {
    let deliveries = sewed
        .iter()
        .map(|(q, date)| SewingLineDelivery::new(id, Some(*q), *date))
        .collect();
    let completions = vec![Completion::new(id, Some(ironed), Some(checked), Some(packaged))];
    (deliveries, completions)
}

// ==========================================
// 场景 A: 全部达标 + 线别日期均晚于出货日 → success
// ==========================================

#[test]
fn test_scenario_a_success() {
    let engine = StatusEngine::new();
    let product = create_product(1, Some(100));
    let (deliveries, completions) =
        create_sums(1, &[(50, day(9, 20)), (30, day(9, 25)), (20, day(10, 1))], 100, 100, 100);

    assert!(deliveries
        .iter()
        .all(|d| !is_expired_date(product.date_output_fcr, d.expired_date)));
    assert_eq!(
        engine.status_icon_type(&product, &deliveries, &completions),
        StatusIconType::Success
    );
}

#[test]
fn test_scenario_a_with_every_line_expired_is_not_success() {
    let engine = StatusEngine::new();
    let product = create_product(1, Some(100));
    let (deliveries, completions) =
        create_sums(1, &[(50, day(9, 1)), (30, day(9, 5)), (20, day(9, 10))], 100, 100, 100);

    assert_eq!(
        engine.status_icon_type(&product, &deliveries, &completions),
        StatusIconType::Normal
    );
}

// ==========================================
// 场景 B: 全部为 0 + 线别过期超出危险窗口 → danger
// ==========================================

#[test]
fn test_scenario_b_danger() {
    let engine = StatusEngine::new();
    let thresholds = StatisticThresholds::default();
    let product = create_product(2, Some(200));
    let (deliveries, completions) = create_sums(2, &[(0, day(9, 1)), (0, day(9, 14))], 0, 0, 0);

    assert_eq!(
        expiries_date_type(product.date_output_fcr, deliveries[0].expired_date, &thresholds),
        ExpiryTier::Danger
    );
    assert!(is_expired_date(product.date_output_fcr, deliveries[0].expired_date));
    assert_eq!(
        engine.status_icon_type(&product, &deliveries, &completions),
        StatusIconType::Danger
    );
}

#[test]
fn test_danger_tier_is_stricter_than_expired() {
    let thresholds = StatisticThresholds::default();
    let reference = fcr();
    let mut day_cursor = day(7, 1);
    while day_cursor <= day(11, 30) {
        let tier = expiries_date_type(reference, day_cursor, &thresholds);
        if tier == ExpiryTier::Danger {
            assert!(is_expired_date(reference, day_cursor), "{:?}", day_cursor);
        }
        if !is_expired_date(reference, day_cursor) {
            assert_ne!(tier, ExpiryTier::Danger, "{:?}", day_cursor);
        }
        day_cursor = day_cursor.and_then(|d| d.succ_opt());
    }

    // 过期 1~3 天: 已过期,但尚未进入 Danger
    for d in [12, 13, 14] {
        assert!(is_expired_date(reference, day(9, d)));
        assert_eq!(expiries_date_type(reference, day(9, d), &thresholds), ExpiryTier::Warning);
    }
}

#[test]
fn test_behind_with_only_recently_expired_line_is_warning() {
    let engine = StatusEngine::new();
    let product = create_product(2, Some(200));
    let (deliveries, completions) = create_sums(2, &[(0, day(9, 14))], 0, 0, 0);

    assert_eq!(
        engine.status_icon_type(&product, &deliveries, &completions),
        StatusIconType::Warning
    );
}

// ==========================================
// 场景 C: 缝制 100%,其余 60% → 字面规则不满足 warning
// ==========================================

#[test]
fn test_scenario_c_sewing_at_full_is_not_warning() {
    let engine = StatusEngine::new();
    let product = create_product(3, Some(100));
    let (deliveries, completions) = create_sums(3, &[(100, day(9, 1))], 60, 60, 60);

    assert_eq!(
        engine.status_icon_type(&product, &deliveries, &completions),
        StatusIconType::Normal
    );
}

#[test]
fn test_scenario_c_variant_every_stage_unfinished_is_warning() {
    let engine = StatusEngine::new();
    let product = create_product(3, Some(100));
    let (deliveries, completions) = create_sums(3, &[(99, day(9, 1))], 60, 60, 60);

    assert_eq!(
        engine.status_icon_type(&product, &deliveries, &completions),
        StatusIconType::Warning
    );
}

// ==========================================
// 判定顺序: success 优先于 danger
// ==========================================

#[test]
fn test_success_wins_over_other_rules() {
    let engine = StatusEngine::new();
    // PO 缺失: 全部达标; 一条已过期线 + 一条未过期线
    let product = create_product(4, None);
    let (deliveries, completions) = create_sums(4, &[(0, day(9, 1)), (0, day(10, 1))], 0, 0, 0);

    assert_eq!(
        engine.status_icon_type(&product, &deliveries, &completions),
        StatusIconType::Success
    );
}

#[test]
fn test_all_zero_product_without_lines_is_normal() {
    let engine = StatusEngine::new();
    for quantity_po in [None, Some(0)] {
        let product = create_product(5, quantity_po);
        assert_eq!(engine.status_icon_type(&product, &[], &[]), StatusIconType::Normal);
    }
}

#[test]
fn test_explain_status_reason_is_json() {
    let engine = StatusEngine::new();
    let product = create_product(6, Some(200));
    let (deliveries, completions) = create_sums(6, &[(10, day(9, 5))], 0, 0, 0);

    let decision = engine.explain_status(&product, &deliveries, &completions);
    assert_eq!(decision.status, StatusIconType::Danger);

    let reason: serde_json::Value = serde_json::from_str(&decision.reason).unwrap();
    assert_eq!(reason["status"], "danger");
    assert_eq!(reason["details"]["danger_line_date"], "2026-09-05");
}

// ==========================================
// 图标显示
// ==========================================

#[test]
fn test_show_status_icon() {
    for id in [0, 1, 42, -7] {
        assert!(!is_show_status_icon(id, &[], &[]));
    }

    let (deliveries, completions) = create_sums(8, &[(0, day(9, 1))], 0, 0, 2);
    assert!(is_show_status_icon(8, &deliveries, &completions));
    assert!(!is_show_status_icon(9, &deliveries, &completions));
}
