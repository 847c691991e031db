// ==========================================
// 成衣生产进度统计 - 数据集加载
// ==========================================
// 来源:
// - JSON 快照文件（后端接口导出）
// - CSV 目录: products.csv / sewing_line_deliveries.csv / completions.csv
// 输出: ProductionDataset（只读快照,交给引擎）
// ==========================================

use crate::domain::product::Product;
use crate::domain::production::{Completion, SewingLineDelivery};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::{CsvParser, FileParser, RawRow};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::instrument;

pub const PRODUCTS_CSV: &str = "products.csv";
pub const DELIVERIES_CSV: &str = "sewing_line_deliveries.csv";
pub const COMPLETIONS_CSV: &str = "completions.csv";

// ==========================================
// ProductionDataset - 生产数据快照
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionDataset {
    #[serde(default)]
    pub products: Vec<Product>,

    #[serde(default, rename = "sewingLineDeliveries", alias = "deliveries")]
    pub deliveries: Vec<SewingLineDelivery>,

    #[serde(default)]
    pub completions: Vec<Completion>,
}

impl ProductionDataset {
    /// 按路径类型自动选择加载方式
    ///
    /// - 目录 → CSV 目录
    /// - .json → JSON 快照
    #[instrument]
    pub fn load(path: &Path) -> ImportResult<Self> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let dataset = if path.is_dir() {
            Self::load_csv_dir(path)?
        } else {
            match path.extension().and_then(|e| e.to_str()) {
                Some("json") => Self::load_json(path)?,
                other => {
                    return Err(ImportError::UnsupportedFormat(
                        other.unwrap_or("").to_string(),
                    ))
                }
            }
        };

        tracing::info!(
            products = dataset.products.len(),
            deliveries = dataset.deliveries.len(),
            completions = dataset.completions.len(),
            "数据集加载完成"
        );
        Ok(dataset)
    }

    /// 从 JSON 快照加载
    pub fn load_json(path: &Path) -> ImportResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// 从 JSON 文本解析
    pub fn from_json_str(raw: &str) -> ImportResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// 从 CSV 目录加载
    ///
    /// products.csv 必须存在; 其余两个文件缺失时视为无记录
    pub fn load_csv_dir(dir: &Path) -> ImportResult<Self> {
        let parser = CsvParser;
        let mapper = FieldMapper;

        let products = parser
            .parse_to_raw_records(&dir.join(PRODUCTS_CSV))?
            .iter()
            .map(|(line, row)| mapper.map_product(row, *line))
            .collect::<ImportResult<Vec<_>>>()?;

        let deliveries = match Self::optional_rows(&parser, &dir.join(DELIVERIES_CSV))? {
            Some(rows) => rows
                .iter()
                .map(|(line, row)| mapper.map_delivery(row, *line))
                .collect::<ImportResult<Vec<_>>>()?,
            None => Vec::new(),
        };

        let completions = match Self::optional_rows(&parser, &dir.join(COMPLETIONS_CSV))? {
            Some(rows) => rows
                .iter()
                .map(|(line, row)| mapper.map_completion(row, *line))
                .collect::<ImportResult<Vec<_>>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            products,
            deliveries,
            completions,
        })
    }

    fn optional_rows(parser: &CsvParser, path: &Path) -> ImportResult<Option<Vec<RawRow>>> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "可选 CSV 文件不存在，按空集合处理");
            return Ok(None);
        }
        parser.parse_to_raw_records(path).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_backend_shape() {
        let raw = r#"{
            "products": [{"id": 1, "quantityPO": 100, "dateOutputFCR": "2026-05-01T00:00:00.000Z", "status": "active"}],
            "sewingLineDeliveries": [{"productID": 1, "quantitySewed": 40, "expiredDate": "2026-04-20"}],
            "completions": [{"productID": 1, "quantityIroned": 10}]
        }"#;
        let dataset = ProductionDataset::from_json_str(raw).unwrap();
        assert_eq!(dataset.products.len(), 1);
        assert_eq!(dataset.deliveries[0].quantity_sewed, Some(40));
        assert_eq!(dataset.completions[0].quantity_check_passed, None);
    }

    #[test]
    fn test_from_json_accepts_deliveries_alias_and_missing_lists() {
        let raw = r#"{"products": [], "deliveries": [{"productID": 2}]}"#;
        let dataset = ProductionDataset::from_json_str(raw).unwrap();
        assert_eq!(dataset.deliveries.len(), 1);
        assert!(dataset.completions.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let err = ProductionDataset::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ImportError::JsonParseError(_)));
    }
}
