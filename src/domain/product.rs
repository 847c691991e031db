// ==========================================
// 成衣生产进度统计 - 产品领域模型
// ==========================================
// 用途: 外部数据源提供,引擎只读
// 对齐: 后端 product 接口字段 (camelCase)
// ==========================================

use crate::domain::date::deserialize_lenient_day;
use crate::domain::types::{ProductId, ProductStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Product - 产品（款式）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId, // 产品ID

    #[serde(rename = "quantityPO", default)]
    pub quantity_po: Option<u64>, // PO 数量（目标数量,缺失视为 0）

    #[serde(
        rename = "dateOutputFCR",
        default,
        deserialize_with = "deserialize_lenient_day"
    )]
    pub date_output_fcr: Option<NaiveDate>, // 计划出货日（FCR）

    #[serde(default)]
    pub status: ProductStatus, // 生命周期状态（引擎不解释）
}

impl Product {
    /// 创建产品记录
    pub fn new(
        id: ProductId,
        quantity_po: Option<u64>,
        date_output_fcr: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            quantity_po,
            date_output_fcr,
            status: ProductStatus::Active,
        }
    }
}
