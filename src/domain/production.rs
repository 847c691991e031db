// ==========================================
// 成衣生产进度统计 - 工序数量记录
// ==========================================
// SewingLineDelivery: 每条缝制线一条记录（一个产品可有多条）
// Completion: 整烫/质检/包装完成记录（实际每个产品至多一条）
// 红线: 记录不可变,数量缺失视为 0
// ==========================================

use crate::domain::date::deserialize_lenient_day;
use crate::domain::types::ProductId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 按产品归属的工序记录
///
/// 汇总时按 `product_id` 过滤,避免跨产品污染
pub trait StageRecord {
    fn product_id(&self) -> ProductId;
}

// ==========================================
// SewingLineDelivery - 缝制线交付记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SewingLineDelivery {
    #[serde(rename = "productID")]
    pub product_id: ProductId, // 所属产品

    #[serde(rename = "quantitySewed", default)]
    pub quantity_sewed: Option<u64>, // 已缝制数量

    #[serde(
        rename = "expiredDate",
        default,
        deserialize_with = "deserialize_lenient_day"
    )]
    pub expired_date: Option<NaiveDate>, // 线别预计完成日
}

impl SewingLineDelivery {
    pub fn new(
        product_id: ProductId,
        quantity_sewed: Option<u64>,
        expired_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            product_id,
            quantity_sewed,
            expired_date,
        }
    }
}

impl StageRecord for SewingLineDelivery {
    fn product_id(&self) -> ProductId {
        self.product_id
    }
}

// ==========================================
// Completion - 完成工序记录
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    #[serde(rename = "productID")]
    pub product_id: ProductId, // 所属产品

    #[serde(rename = "quantityIroned", default)]
    pub quantity_ironed: Option<u64>, // 整烫数量

    #[serde(rename = "quantityCheckPassed", default)]
    pub quantity_check_passed: Option<u64>, // 质检合格数量

    #[serde(rename = "quantityPackaged", default)]
    pub quantity_packaged: Option<u64>, // 包装数量
}

impl Completion {
    pub fn new(
        product_id: ProductId,
        quantity_ironed: Option<u64>,
        quantity_check_passed: Option<u64>,
        quantity_packaged: Option<u64>,
    ) -> Self {
        Self {
            product_id,
            quantity_ironed,
            quantity_check_passed,
            quantity_packaged,
        }
    }
}

impl StageRecord for Completion {
    fn product_id(&self) -> ProductId {
        self.product_id
    }
}
