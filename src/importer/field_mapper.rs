// ==========================================
// 成衣生产进度统计 - 字段映射器实现
// ==========================================
// 职责: 原始行 → 领域记录 + 类型转换
// 列名: 与后端接口一致的 camelCase,兼容 snake_case 别名
// 红线: 空单元格 = 缺失值; 非法日期 = 缺失值（失败关闭）
// ==========================================

use crate::domain::date::parse_day;
use crate::domain::product::Product;
use crate::domain::production::{Completion, SewingLineDelivery};
use crate::domain::types::{ProductId, ProductStatus};
use crate::importer::error::{ImportError, ImportResult};
use chrono::NaiveDate;
use std::collections::HashMap;

pub struct FieldMapper;

impl FieldMapper {
    /// 产品行
    pub fn map_product(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<Product> {
        Ok(Product {
            id: self.require_id(row, "id", row_number)?,
            quantity_po: self.parse_quantity(row, "quantityPO", row_number)?,
            date_output_fcr: self.parse_date(row, "dateOutputFCR", row_number),
            status: self
                .get_string(row, "status")
                .and_then(|s| s.parse::<ProductStatus>().ok())
                .unwrap_or_default(),
        })
    }

    /// 缝制线交付行
    pub fn map_delivery(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<SewingLineDelivery> {
        Ok(SewingLineDelivery {
            product_id: self.require_id(row, "productID", row_number)?,
            quantity_sewed: self.parse_quantity(row, "quantitySewed", row_number)?,
            expired_date: self.parse_date(row, "expiredDate", row_number),
        })
    }

    /// 完成工序行
    pub fn map_completion(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<Completion> {
        Ok(Completion {
            product_id: self.require_id(row, "productID", row_number)?,
            quantity_ironed: self.parse_quantity(row, "quantityIroned", row_number)?,
            quantity_check_passed: self.parse_quantity(row, "quantityCheckPassed", row_number)?,
            quantity_packaged: self.parse_quantity(row, "quantityPackaged", row_number)?,
        })
    }

    /// 提取字符串字段，支持多个可能的列名（别名）
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        let aliases: &[&str] = match key {
            "id" => &["id", "productID", "product_id"],
            "productID" => &["productID", "productId", "product_id"],
            "quantityPO" => &["quantityPO", "quantity_po"],
            "dateOutputFCR" => &["dateOutputFCR", "date_output_fcr"],
            "quantitySewed" => &["quantitySewed", "quantity_sewed"],
            "expiredDate" => &["expiredDate", "expired_date"],
            "quantityIroned" => &["quantityIroned", "quantity_ironed"],
            "quantityCheckPassed" => &["quantityCheckPassed", "quantity_check_passed"],
            "quantityPackaged" => &["quantityPackaged", "quantity_packaged"],
            _ => &[],
        };

        std::iter::once(key)
            .chain(aliases.iter().copied())
            .filter_map(|alias| row.get(alias))
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// 必填整数ID
    fn require_id(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<ProductId> {
        let value = self
            .get_string(row, key)
            .ok_or_else(|| ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: "必填字段为空".to_string(),
            })?;

        value
            .parse::<ProductId>()
            .map_err(|_| ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: format!("无法解析为整数ID: {}", value),
            })
    }

    /// 解析非负整数数量
    fn parse_quantity(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<Option<u64>> {
        let value = match self.get_string(row, key) {
            None => return Ok(None),
            Some(v) => v,
        };

        if value.starts_with('-') && value[1..].parse::<u64>().is_ok() {
            return Err(ImportError::NegativeQuantity {
                row: row_number,
                field: key.to_string(),
                value,
            });
        }

        value
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: format!("无法解析为非负整数: {}", value),
            })
    }

    /// 解析日期（非法值记录告警后视为缺失）
    fn parse_date(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> Option<NaiveDate> {
        let value = self.get_string(row, key)?;
        let parsed = parse_day(&value);
        if parsed.is_none() {
            tracing::warn!(row = row_number, field = key, raw_value = %value, "日期格式无法识别，视为缺失");
        }
        parsed
    }
}
