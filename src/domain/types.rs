// ==========================================
// 成衣生产进度统计 - 领域类型定义
// ==========================================
// 工序: 缝制 → 整烫 → 质检 → 包装
// 红线: 状态标签是"等级制",同一产品只有一个标签
// ==========================================

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// 产品ID（后端整数主键）
pub type ProductId = i64;

// ==========================================
// 生产工序 (Stage)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Sewing,    // 缝制
    Ironing,   // 整烫
    Checking,  // 质检
    Packaging, // 包装
}

impl Stage {
    /// 按工序顺序排列的全部工序
    pub const ALL: [Stage; 4] = [
        Stage::Sewing,
        Stage::Ironing,
        Stage::Checking,
        Stage::Packaging,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Sewing => write!(f, "sewing"),
            Stage::Ironing => write!(f, "ironing"),
            Stage::Checking => write!(f, "checking"),
            Stage::Packaging => write!(f, "packaging"),
        }
    }
}

// ==========================================
// 状态图标类型 (Status Icon Type)
// ==========================================
// 判定顺序: success → danger → warning → normal (命中即返回)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusIconType {
    Success, // 全部工序达标
    Danger,  // 进度严重落后且线别过期超出危险窗口
    Warning, // 各工序均未完成
    Normal,  // 默认
}

impl fmt::Display for StatusIconType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusIconType::Success => write!(f, "success"),
            StatusIconType::Danger => write!(f, "danger"),
            StatusIconType::Warning => write!(f, "warning"),
            StatusIconType::Normal => write!(f, "normal"),
        }
    }
}

// ==========================================
// 交期分级 (Expiry Tier)
// ==========================================
// 依据: 线别预计完成日 与 产品出货日(FCR) 的天数差
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryTier {
    Danger,  // 已过期且过期天数超出危险窗口
    Warning, // 刚过期,或距过期不足预警窗口
    Normal,  // 余量充足 / 日期缺失
}

impl fmt::Display for ExpiryTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpiryTier::Danger => write!(f, "danger"),
            ExpiryTier::Warning => write!(f, "warning"),
            ExpiryTier::Normal => write!(f, "normal"),
        }
    }
}

// ==========================================
// 产品生命周期状态 (Product Status)
// ==========================================
// 引擎不解释该字段,仅随记录透传
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Deleted,
}

/// 从字符串解析状态（未知值视为 Active,解析不会失败）
impl FromStr for ProductStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "deleted" | "delete" | "0" => ProductStatus::Deleted,
            _ => ProductStatus::Active,
        })
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductStatus::Active => write!(f, "active"),
            ProductStatus::Deleted => write!(f, "deleted"),
        }
    }
}
