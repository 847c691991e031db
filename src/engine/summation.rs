// ==========================================
// 成衣生产进度统计 - 按产品汇总工序数量
// ==========================================
// 输入: 产品ID + 记录集合
// 输出: 该产品在某工序上的累计数量
// 红线: 只汇总 productID 匹配的记录,缺失数量视为 0
// ==========================================

use crate::domain::production::{Completion, SewingLineDelivery, StageRecord};
use crate::domain::types::{ProductId, Stage};
use crate::engine::threshold::normalize;
use serde::{Deserialize, Serialize};

fn sum_by_product<R, F>(product_id: ProductId, records: &[R], quantity: F) -> u64
where
    R: StageRecord,
    F: Fn(&R) -> Option<u64>,
{
    records
        .iter()
        .filter(|r| r.product_id() == product_id)
        .map(|r| normalize(quantity(r)))
        .sum()
}

/// 缝制累计（跨全部缝制线）
pub fn sum_sewed(product_id: ProductId, deliveries: &[SewingLineDelivery]) -> u64 {
    sum_by_product(product_id, deliveries, |d| d.quantity_sewed)
}

/// 整烫累计
pub fn sum_ironed(product_id: ProductId, completions: &[Completion]) -> u64 {
    sum_by_product(product_id, completions, |c| c.quantity_ironed)
}

/// 质检合格累计
pub fn sum_check_passed(product_id: ProductId, completions: &[Completion]) -> u64 {
    sum_by_product(product_id, completions, |c| c.quantity_check_passed)
}

/// 包装累计
pub fn sum_packaged(product_id: ProductId, completions: &[Completion]) -> u64 {
    sum_by_product(product_id, completions, |c| c.quantity_packaged)
}

/// 该产品的缝制线记录
pub fn deliveries_of(
    product_id: ProductId,
    deliveries: &[SewingLineDelivery],
) -> impl Iterator<Item = &SewingLineDelivery> {
    deliveries.iter().filter(move |d| d.product_id == product_id)
}

// ==========================================
// StageSums - 单产品四工序累计
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSums {
    pub sewed: u64,
    pub ironed: u64,
    pub check_passed: u64,
    pub packaged: u64,
}

impl StageSums {
    /// 汇总单产品四道工序
    pub fn collect(
        product_id: ProductId,
        deliveries: &[SewingLineDelivery],
        completions: &[Completion],
    ) -> Self {
        Self {
            sewed: sum_sewed(product_id, deliveries),
            ironed: sum_ironed(product_id, completions),
            check_passed: sum_check_passed(product_id, completions),
            packaged: sum_packaged(product_id, completions),
        }
    }

    /// 取某道工序的累计值
    pub fn get(&self, stage: Stage) -> u64 {
        match stage {
            Stage::Sewing => self.sewed,
            Stage::Ironing => self.ironed,
            Stage::Checking => self.check_passed,
            Stage::Packaging => self.packaged,
        }
    }

    /// 四道工序均无记录
    pub fn is_empty(&self) -> bool {
        Stage::ALL.iter().all(|&s| self.get(s) == 0)
    }
}
