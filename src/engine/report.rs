// ==========================================
// 成衣生产进度统计 - 驾驶舱报表
// ==========================================
// 职责: 组装单产品进度行 + 目录汇总
// 依赖: StatusEngine（状态判定） + statistic（目录计数）
// ==========================================

use crate::domain::product::Product;
use crate::domain::production::{Completion, SewingLineDelivery};
use crate::domain::types::{ProductId, StatusIconType};
use crate::engine::statistic::{
    amount_product_completed, amount_product_dangerous, amount_product_progressing,
};
use crate::engine::status::{is_show_status_icon, StagePercentages, StatusEngine};
use crate::engine::summation::StageSums;
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ==========================================
// ProductProgress - 单产品进度行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductProgress {
    pub product_id: ProductId,
    pub quantity_po: u64,
    pub sums: StageSums,
    pub percentages: StagePercentages,
    pub show_status_icon: bool,
    pub status: StatusIconType,
}

// ==========================================
// StatusCounts - 各状态标签数量
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub success: usize,
    pub danger: usize,
    pub warning: usize,
    pub normal: usize,
}

impl StatusCounts {
    fn record(&mut self, status: StatusIconType) {
        match status {
            StatusIconType::Success => self.success += 1,
            StatusIconType::Danger => self.danger += 1,
            StatusIconType::Warning => self.warning += 1,
            StatusIconType::Normal => self.normal += 1,
        }
    }
}

// ==========================================
// CatalogSummary - 目录汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub total: usize,
    pub completed: usize,
    pub progressing: usize,
    pub dangerous: usize,
    pub status_counts: StatusCounts, // 仅统计显示图标的产品
    pub hidden: usize,               // 无任何进度、隐藏图标的产品
}

// ==========================================
// ProgressReporter - 报表组装
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ProgressReporter {
    status_engine: StatusEngine,
}

impl ProgressReporter {
    pub fn new(status_engine: StatusEngine) -> Self {
        Self { status_engine }
    }

    /// 单产品进度行
    pub fn product_progress(
        &self,
        product: &Product,
        deliveries: &[SewingLineDelivery],
        completions: &[Completion],
    ) -> ProductProgress {
        let sums = StageSums::collect(product.id, deliveries, completions);
        ProductProgress {
            product_id: product.id,
            quantity_po: product.quantity_po.unwrap_or(0),
            sums,
            percentages: StagePercentages::from_sums(product.quantity_po, &sums),
            show_status_icon: is_show_status_icon(product.id, deliveries, completions),
            status: self
                .status_engine
                .status_icon_type(product, deliveries, completions),
        }
    }

    /// 批量生成进度行（保持目录顺序）
    #[instrument(skip_all, fields(products = products.len()))]
    pub fn build_progress_rows(
        &self,
        products: &[Product],
        deliveries: &[SewingLineDelivery],
        completions: &[Completion],
    ) -> Vec<ProductProgress> {
        products
            .iter()
            .map(|p| self.product_progress(p, deliveries, completions))
            .collect()
    }

    /// 目录汇总
    #[instrument(skip_all, fields(products = products.len()))]
    pub fn summarize_catalog(
        &self,
        products: &[Product],
        deliveries: &[SewingLineDelivery],
        completions: &[Completion],
    ) -> CatalogSummary {
        let mut status_counts = StatusCounts::default();
        let mut hidden = 0;
        for product in products {
            if !is_show_status_icon(product.id, deliveries, completions) {
                hidden += 1;
                continue;
            }
            status_counts.record(
                self.status_engine
                    .status_icon_type(product, deliveries, completions),
            );
        }

        let summary = CatalogSummary {
            total: products.len(),
            completed: amount_product_completed(products, deliveries, completions),
            progressing: amount_product_progressing(products, deliveries, completions),
            dangerous: amount_product_dangerous(products, deliveries, completions),
            status_counts,
            hidden,
        };

        tracing::info!(
            total = summary.total,
            completed = summary.completed,
            progressing = summary.progressing,
            dangerous = summary.dangerous,
            hidden = summary.hidden,
            "目录汇总完成"
        );
        summary
    }
}
