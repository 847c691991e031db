// ==========================================
// 成衣生产进度统计 - 统计阈值配置
// ==========================================
// 职责: 定义引擎所需的配置读取接口 + 阈值值对象
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::config_manager::defaults;
use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};

// ==========================================
// StatisticConfigReader Trait
// ==========================================
// 实现者: ConfigManager（从 JSON 键值文件读取）
pub trait StatisticConfigReader {
    /// danger 判定百分比上限（严格小于）
    ///
    /// # 默认值
    /// - 50
    fn get_danger_percent(&self) -> f64;

    /// warning 判定百分比上限（严格小于）
    ///
    /// # 默认值
    /// - 100
    fn get_complete_percent(&self) -> f64;

    /// 交期危险窗口（天）: 过期天数超过该值进入 Danger
    ///
    /// # 默认值
    /// - 3
    fn get_danger_window_days(&self) -> i64;

    /// 交期预警窗口（天）: 距过期不足该天数即进入 Warning
    ///
    /// # 默认值
    /// - 7
    fn get_warning_window_days(&self) -> i64;
}

// ==========================================
// StatisticThresholds - 阈值值对象
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticThresholds {
    pub danger_percent: f64,
    pub complete_percent: f64,
    pub danger_window_days: i64,
    pub warning_window_days: i64,
}

impl Default for StatisticThresholds {
    fn default() -> Self {
        Self {
            danger_percent: defaults::DANGER_PERCENT,
            complete_percent: defaults::COMPLETE_PERCENT,
            danger_window_days: defaults::DANGER_WINDOW_DAYS,
            warning_window_days: defaults::WARNING_WINDOW_DAYS,
        }
    }
}

impl StatisticThresholds {
    /// 从配置读取器构造并校验
    pub fn from_reader(reader: &dyn StatisticConfigReader) -> Result<Self, ConfigError> {
        let thresholds = Self {
            danger_percent: reader.get_danger_percent(),
            complete_percent: reader.get_complete_percent(),
            danger_window_days: reader.get_danger_window_days(),
            warning_window_days: reader.get_warning_window_days(),
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// 校验阈值
    ///
    /// - 百分比必须为正的有限值
    /// - 交期窗口不得为负（Danger 必须严格于过期判定）
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("danger_percent", self.danger_percent),
            ("complete_percent", self.complete_percent),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidThreshold(format!(
                    "{}={} 必须为正数",
                    name, value
                )));
            }
        }

        for (name, value) in [
            ("danger_window_days", self.danger_window_days),
            ("warning_window_days", self.warning_window_days),
        ] {
            if value < 0 {
                return Err(ConfigError::InvalidThreshold(format!(
                    "{}={} 不能为负",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config_manager::{config_keys, ConfigManager};

    #[test]
    fn test_from_reader_defaults() {
        let thresholds = StatisticThresholds::from_reader(&ConfigManager::new()).unwrap();
        assert_eq!(thresholds, StatisticThresholds::default());
    }

    #[test]
    fn test_negative_window_rejected() {
        let mut config = ConfigManager::new();
        config.set(config_keys::DANGER_WINDOW_DAYS, "-1");
        let err = StatisticThresholds::from_reader(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThreshold(_)));

        let mut config = ConfigManager::new();
        config.set(config_keys::WARNING_WINDOW_DAYS, "-2");
        assert!(StatisticThresholds::from_reader(&config).is_err());
    }

    #[test]
    fn test_zero_windows_accepted() {
        let mut config = ConfigManager::new();
        config.set(config_keys::DANGER_WINDOW_DAYS, "0");
        config.set(config_keys::WARNING_WINDOW_DAYS, "0");
        assert!(StatisticThresholds::from_reader(&config).is_ok());
    }

    #[test]
    fn test_non_positive_percent_rejected() {
        let mut config = ConfigManager::new();
        config.set(config_keys::COMPLETE_PERCENT, "0");
        assert!(StatisticThresholds::from_reader(&config).is_err());

        config.set(config_keys::COMPLETE_PERCENT, "NaN");
        assert!(StatisticThresholds::from_reader(&config).is_err());
    }
}
