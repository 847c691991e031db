// ==========================================
// 成衣生产进度统计 - 目录级统计计数
// ==========================================
// 职责: 驾驶舱指标（已完成 / 进行中 / 风险）
// 输入: 产品目录 + 缝制线交付 + 完成工序记录
// 输出: 计数
// ==========================================
// 说明: 三个计数各自独立遍历目录,不共享分类结果,
//       回答的是三个不同的问题,不构成互斥分桶
// ==========================================

use crate::domain::product::Product;
use crate::domain::production::{Completion, SewingLineDelivery};
use crate::engine::date_rule::is_expired_date;
use crate::engine::summation::{deliveries_of, StageSums};
use crate::engine::threshold::{iron_passed, sew_passed};
use tracing::instrument;

// ==========================================
// 单产品判定
// ==========================================

/// 四道工序全部达标
///
/// 注意: 整烫/质检/包装三道工序统一使用 iron_passed 判定（与 sew_passed 同构）
pub fn is_product_completed(
    product: &Product,
    deliveries: &[SewingLineDelivery],
    completions: &[Completion],
) -> bool {
    let sums = StageSums::collect(product.id, deliveries, completions);
    let target = product.quantity_po;

    sew_passed(target, Some(sums.sewed))
        && iron_passed(target, Some(sums.ironed))
        && iron_passed(target, Some(sums.check_passed))
        && iron_passed(target, Some(sums.packaged))
}

/// 至少一道工序未达标（逐工序取反后求或）
pub fn is_product_progressing(
    product: &Product,
    deliveries: &[SewingLineDelivery],
    completions: &[Completion],
) -> bool {
    let sums = StageSums::collect(product.id, deliveries, completions);
    let target = product.quantity_po;

    !sew_passed(target, Some(sums.sewed))
        || !iron_passed(target, Some(sums.ironed))
        || !iron_passed(target, Some(sums.check_passed))
        || !iron_passed(target, Some(sums.packaged))
}

/// 存在日期已早于出货日（已过期）的缝制线
pub fn has_expired_delivery(product: &Product, deliveries: &[SewingLineDelivery]) -> bool {
    deliveries_of(product.id, deliveries)
        .any(|d| is_expired_date(product.date_output_fcr, d.expired_date))
}

// ==========================================
// 目录级计数
// ==========================================

/// 已完成产品数
#[instrument(skip_all, fields(products = products.len()))]
pub fn amount_product_completed(
    products: &[Product],
    deliveries: &[SewingLineDelivery],
    completions: &[Completion],
) -> usize {
    let count = products
        .iter()
        .filter(|p| is_product_completed(p, deliveries, completions))
        .count();
    tracing::debug!(count, "已完成产品计数");
    count
}

/// 进行中产品数
#[instrument(skip_all, fields(products = products.len()))]
pub fn amount_product_progressing(
    products: &[Product],
    deliveries: &[SewingLineDelivery],
    completions: &[Completion],
) -> usize {
    let count = products
        .iter()
        .filter(|p| is_product_progressing(p, deliveries, completions))
        .count();
    tracing::debug!(count, "进行中产品计数");
    count
}

/// 风险产品数: 进行中 且 存在已过期缝制线
///
/// 无缝制线记录的产品永远不计入
#[instrument(skip_all, fields(products = products.len()))]
pub fn amount_product_dangerous(
    products: &[Product],
    deliveries: &[SewingLineDelivery],
    completions: &[Completion],
) -> usize {
    let count = products
        .iter()
        .filter(|p| {
            is_product_progressing(p, deliveries, completions)
                && has_expired_delivery(p, deliveries)
        })
        .count();
    tracing::debug!(count, "风险产品计数");
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2026, m, d)
    }

    /// 测试目录:
    /// - 1: 全部完成
    /// - 2: 包装未完成,缝制线日期早于出货日（已过期）
    /// - 3: 仅缝制,缝制线日期晚于出货日（未过期）
    /// - 4: 无 PO 数量、无记录（视为完成）
    fn catalog() -> (Vec<Product>, Vec<SewingLineDelivery>, Vec<Completion>) {
        let products = vec![
            Product::new(1, Some(100), day(5, 1)),
            Product::new(2, Some(100), day(5, 1)),
            Product::new(3, Some(50), day(5, 1)),
            Product::new(4, None, None),
        ];
        let deliveries = vec![
            SewingLineDelivery::new(1, Some(60), day(5, 5)),
            SewingLineDelivery::new(1, Some(40), day(5, 10)),
            SewingLineDelivery::new(2, Some(100), day(4, 28)),
            SewingLineDelivery::new(3, Some(20), day(5, 3)),
        ];
        let completions = vec![
            Completion::new(1, Some(100), Some(100), Some(100)),
            Completion::new(2, Some(100), Some(100), Some(80)),
        ];
        (products, deliveries, completions)
    }

    #[test]
    fn test_amount_completed() {
        let (p, d, c) = catalog();
        assert_eq!(amount_product_completed(&p, &d, &c), 2);
    }

    #[test]
    fn test_amount_progressing() {
        let (p, d, c) = catalog();
        assert_eq!(amount_product_progressing(&p, &d, &c), 2);
    }

    #[test]
    fn test_completed_plus_progressing_is_total() {
        let (p, d, c) = catalog();
        assert_eq!(
            amount_product_completed(&p, &d, &c) + amount_product_progressing(&p, &d, &c),
            p.len()
        );
    }

    #[test]
    fn test_amount_dangerous() {
        let (p, d, c) = catalog();
        assert_eq!(amount_product_dangerous(&p, &d, &c), 1);
    }

    #[test]
    fn test_no_deliveries_never_dangerous() {
        let products = vec![Product::new(7, Some(1000), day(1, 1))];
        let completions = vec![Completion::new(7, Some(1), None, None)];
        assert_eq!(amount_product_progressing(&products, &[], &completions), 1);
        assert_eq!(amount_product_dangerous(&products, &[], &completions), 0);
    }

    #[test]
    fn test_completed_product_with_expired_line_not_dangerous() {
        let products = vec![Product::new(8, Some(10), day(3, 1))];
        let deliveries = vec![SewingLineDelivery::new(8, Some(10), day(2, 20))];
        let completions = vec![Completion::new(8, Some(10), Some(10), Some(10))];
        assert!(has_expired_delivery(&products[0], &deliveries));
        assert_eq!(amount_product_dangerous(&products, &deliveries, &completions), 0);
    }
}
