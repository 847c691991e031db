// ==========================================
// 成衣生产进度统计 - 产品状态判定引擎
// ==========================================
// 红线: 状态标签是"等级制",按顺序判定,命中即返回
// 职责: 计算单产品状态图标类型 + 图标是否显示
// 输入: 产品 + 缝制线交付 + 完成工序记录
// 输出: StatusIconType (success / danger / warning / normal) + reason
// ==========================================

use crate::config::StatisticThresholds;
use crate::domain::product::Product;
use crate::domain::production::{Completion, SewingLineDelivery};
use crate::domain::types::{ExpiryTier, ProductId, Stage, StatusIconType};
use crate::engine::date_rule::{expiries_date_type, is_expired_date};
use crate::engine::summation::{deliveries_of, StageSums};
use crate::engine::threshold::{
    below, check_passed, iron_passed, package_passed, percentage, sew_passed,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

// ==========================================
// StatusDecision - 判定结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusDecision {
    pub status: StatusIconType,
    pub reason: String, // JSON 格式，可解释性
}

// ==========================================
// StagePercentages - 四工序完成百分比
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StagePercentages {
    pub sewing: Option<f64>,
    pub ironing: Option<f64>,
    pub checking: Option<f64>,
    pub packaging: Option<f64>,
}

impl StagePercentages {
    /// 以 PO 数量为分母计算四工序百分比
    pub fn from_sums(target: Option<u64>, sums: &StageSums) -> Self {
        Self {
            sewing: percentage(target, Some(sums.sewed)),
            ironing: percentage(target, Some(sums.ironed)),
            checking: percentage(target, Some(sums.check_passed)),
            packaging: percentage(target, Some(sums.packaged)),
        }
    }

    pub fn get(&self, stage: Stage) -> Option<f64> {
        match stage {
            Stage::Sewing => self.sewing,
            Stage::Ironing => self.ironing,
            Stage::Checking => self.checking,
            Stage::Packaging => self.packaging,
        }
    }

    /// 四工序百分比全部严格低于阈值
    pub fn all_below(&self, threshold: f64) -> bool {
        Stage::ALL.iter().all(|&s| below(self.get(s), threshold))
    }
}

// ==========================================
// StatusEngine - 产品状态判定引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct StatusEngine {
    thresholds: StatisticThresholds,
}

impl StatusEngine {
    /// 使用默认阈值创建引擎
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定阈值创建引擎
    pub fn with_thresholds(thresholds: StatisticThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &StatisticThresholds {
        &self.thresholds
    }

    /// 状态图标类型
    pub fn status_icon_type(
        &self,
        product: &Product,
        deliveries: &[SewingLineDelivery],
        completions: &[Completion],
    ) -> StatusIconType {
        self.explain_status(product, deliveries, completions).status
    }

    /// 判定状态并给出原因
    ///
    /// 顺序（命中即返回）:
    /// 1) 四工序各自达标 且 存在未过期缝制线 → success
    /// 2) 四工序百分比均 < danger_percent 且 存在交期分级为 Danger 的缝制线 → danger
    /// 3) 四工序百分比均 < complete_percent → warning
    /// 4) 默认 → normal（含尚无任何进度的新产品）
    ///
    /// PO 数量为 0/缺失时百分比不适用,规则 2/3 不会命中
    pub fn explain_status(
        &self,
        product: &Product,
        deliveries: &[SewingLineDelivery],
        completions: &[Completion],
    ) -> StatusDecision {
        let target = product.quantity_po;
        let fcr = product.date_output_fcr;
        let sums = StageSums::collect(product.id, deliveries, completions);
        let lines: Vec<&SewingLineDelivery> = deliveries_of(product.id, deliveries).collect();

        // 规则1: 全部达标 且 有线别未过期
        let all_passed = sew_passed(target, Some(sums.sewed))
            && iron_passed(target, Some(sums.ironed))
            && check_passed(target, Some(sums.check_passed))
            && package_passed(target, Some(sums.packaged));
        if all_passed {
            if let Some(line) = lines.iter().find(|d| !is_expired_date(fcr, d.expired_date)) {
                let reason = json!({
                    "status": "success",
                    "primary_reason": "ALL_STAGES_PASSED",
                    "details": {
                        "product_id": product.id,
                        "quantity_po": target.unwrap_or(0),
                        "sums": sums,
                        "on_time_line_date": line.expired_date.map(|d| d.to_string()),
                    }
                });
                return StatusDecision {
                    status: StatusIconType::Success,
                    reason: reason.to_string(),
                };
            }
        }

        let percentages = StagePercentages::from_sums(target, &sums);

        // 规则2: 严重落后 且 有线别过期超出危险窗口
        if percentages.all_below(self.thresholds.danger_percent) {
            let danger_line = lines.iter().find(|d| {
                expiries_date_type(fcr, d.expired_date, &self.thresholds) == ExpiryTier::Danger
            });
            if let Some(line) = danger_line {
                let reason = json!({
                    "status": "danger",
                    "primary_reason": "BEHIND_AND_OVERDUE",
                    "details": {
                        "product_id": product.id,
                        "percentages": percentages,
                        "danger_percent": self.thresholds.danger_percent,
                        "date_output_fcr": fcr.map(|d| d.to_string()),
                        "danger_line_date": line.expired_date.map(|d| d.to_string()),
                        "danger_window_days": self.thresholds.danger_window_days,
                    }
                });
                return StatusDecision {
                    status: StatusIconType::Danger,
                    reason: reason.to_string(),
                };
            }
        }

        // 规则3: 各工序均未完成
        if percentages.all_below(self.thresholds.complete_percent) {
            let reason = json!({
                "status": "warning",
                "primary_reason": "ALL_STAGES_UNFINISHED",
                "details": {
                    "product_id": product.id,
                    "percentages": percentages,
                    "complete_percent": self.thresholds.complete_percent,
                }
            });
            return StatusDecision {
                status: StatusIconType::Warning,
                reason: reason.to_string(),
            };
        }

        // 规则4: 默认
        let reason = json!({
            "status": "normal",
            "primary_reason": "NO_RULE_MATCHED",
            "details": {
                "product_id": product.id,
                "sums": sums,
                "lines": lines.len(),
            }
        });
        StatusDecision {
            status: StatusIconType::Normal,
            reason: reason.to_string(),
        }
    }
}

/// 是否显示状态图标
///
/// 四道工序累计全为 0 时隐藏
pub fn is_show_status_icon(
    product_id: ProductId,
    deliveries: &[SewingLineDelivery],
    completions: &[Completion],
) -> bool {
    !StageSums::collect(product_id, deliveries, completions).is_empty()
}
