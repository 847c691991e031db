// ==========================================
// 成衣生产进度统计 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: JSON 键值文件（不落库）
// ==========================================

use crate::config::error::ConfigError;
use crate::config::statistic_config::StatisticConfigReader;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "GARMENT_STATUS_CONFIG";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: BTreeMap<String, String>,
}

impl ConfigManager {
    /// 创建空配置（全部使用默认值）
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 对象文本加载
    ///
    /// 值可以是字符串、数字或布尔,统一按字符串保存;null 视为未配置
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let parsed: Value = serde_json::from_str(raw)?;
        let object = parsed
            .as_object()
            .ok_or_else(|| ConfigError::FormatError("顶层不是 JSON 对象".to_string()))?;

        let mut values = BTreeMap::new();
        for (key, value) in object {
            let text = match value {
                Value::Null => continue,
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => {
                    return Err(ConfigError::ConfigValueError {
                        key: key.clone(),
                        value: other.to_string(),
                        message: "仅支持标量值".to_string(),
                    })
                }
            };
            values.insert(key.clone(), text);
        }

        Ok(Self { values })
    }

    /// 从文件加载
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadError {
            path: path.display().to_string(),
            source,
        })?;
        let manager = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), keys = manager.values.len(), "配置文件已加载");
        Ok(manager)
    }

    /// 从文件加载,文件不存在时使用默认配置
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "配置文件不存在，使用默认配置");
            return Ok(Self::new());
        }
        Self::from_file(path)
    }

    /// 覆写单个配置项
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// 读取配置值（公开方法，供其他模块复用）
    pub fn get_config_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_config_value(key).unwrap_or(default).to_string()
    }

    /// 按类型解析配置值,缺失或非法时回退默认值
    fn parse_or_default<T>(&self, key: &str, default: T) -> T
    where
        T: std::str::FromStr + Copy + std::fmt::Display,
    {
        let value = self.get_config_or_default(key, &default.to_string());
        match value.trim().parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!(
                    config_key = key,
                    raw_value = %value,
                    "配置值格式错误，使用默认值"
                );
                default
            }
        }
    }

    /// 获取所有配置的快照（JSON格式）
    pub fn get_config_snapshot(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(&json!(self.values))?)
    }
}

// ==========================================
// StatisticConfigReader Trait 实现
// ==========================================
impl StatisticConfigReader for ConfigManager {
    fn get_danger_percent(&self) -> f64 {
        self.parse_or_default(config_keys::DANGER_PERCENT, defaults::DANGER_PERCENT)
    }

    fn get_complete_percent(&self) -> f64 {
        self.parse_or_default(config_keys::COMPLETE_PERCENT, defaults::COMPLETE_PERCENT)
    }

    fn get_danger_window_days(&self) -> i64 {
        self.parse_or_default(config_keys::DANGER_WINDOW_DAYS, defaults::DANGER_WINDOW_DAYS)
    }

    fn get_warning_window_days(&self) -> i64 {
        self.parse_or_default(config_keys::WARNING_WINDOW_DAYS, defaults::WARNING_WINDOW_DAYS)
    }
}

/// 默认配置文件路径
///
/// 优先级: 环境变量 GARMENT_STATUS_CONFIG > 用户配置目录 > 当前目录
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match dirs::config_dir() {
        Some(dir) => dir.join("garment-status").join("config.json"),
        None => PathBuf::from("./garment-status.json"),
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 状态判定百分比阈值
    pub const DANGER_PERCENT: &str = "danger_percent";
    pub const COMPLETE_PERCENT: &str = "complete_percent";

    // 交期窗口（天）
    pub const DANGER_WINDOW_DAYS: &str = "danger_window_days";
    pub const WARNING_WINDOW_DAYS: &str = "warning_window_days";
}

// ==========================================
// 默认值
// ==========================================
pub mod defaults {
    pub const DANGER_PERCENT: f64 = 50.0;
    pub const COMPLETE_PERCENT: f64 = 100.0;
    pub const DANGER_WINDOW_DAYS: i64 = 3;
    pub const WARNING_WINDOW_DAYS: i64 = 7;
}
