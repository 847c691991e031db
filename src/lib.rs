// ==========================================
// 成衣生产进度统计 - 核心库
// ==========================================
// 工序: 缝制 / 整烫 / 质检 / 包装
// 系统定位: 纯函数聚合引擎（无持久化、无网络）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 统计与状态规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 阈值配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    Completion, ExpiryTier, Product, ProductId, ProductStatus, SewingLineDelivery, Stage,
    StatusIconType,
};

// 引擎
pub use engine::{
    CatalogSummary, ProductProgress, ProgressReporter, StageSums, StatusDecision, StatusEngine,
};

// 配置
pub use config::{ConfigManager, StatisticThresholds};

// 导入
pub use importer::ProductionDataset;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "成衣生产进度统计";
