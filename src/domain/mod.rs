// ==========================================
// 成衣生产进度统计 - 领域模型层
// ==========================================
// 职责: 定义产品、缝制线交付、完成工序记录及领域类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod date;
pub mod product;
pub mod production;
pub mod types;

// 重导出核心类型
pub use product::Product;
pub use production::{Completion, SewingLineDelivery, StageRecord};
pub use types::{ExpiryTier, ProductId, ProductStatus, Stage, StatusIconType};
