// ==========================================
// 成衣生产进度统计 - 配置层
// ==========================================
// 职责: 阈值配置管理,支持文件覆写
// 存储: JSON 键值文件
// ==========================================

pub mod config_manager;
pub mod error;
pub mod statistic_config;

// 重导出核心配置管理器
pub use config_manager::{config_keys, default_config_path, ConfigManager};
pub use error::ConfigError;
pub use statistic_config::{StatisticConfigReader, StatisticThresholds};
