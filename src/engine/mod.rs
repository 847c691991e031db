// ==========================================
// 成衣生产进度统计 - 引擎层
// ==========================================
// 职责: 纯函数聚合引擎（无 I/O,不修改输入）
// 红线: 同样输入必须得到同样输出,状态规则必须输出 reason
// ==========================================

pub mod date_rule;
pub mod report;
pub mod statistic;
pub mod status;
pub mod summation;
pub mod threshold;

// 重导出核心引擎
pub use date_rule::{expiries_date_type, is_expired_date, overdue_days};
pub use report::{CatalogSummary, ProductProgress, ProgressReporter, StatusCounts};
pub use statistic::{
    amount_product_completed, amount_product_dangerous, amount_product_progressing,
};
pub use status::{is_show_status_icon, StagePercentages, StatusDecision, StatusEngine};
pub use summation::{sum_check_passed, sum_ironed, sum_packaged, sum_sewed, StageSums};
pub use threshold::{check_passed, iron_passed, package_passed, percentage, sew_passed};
