// ==========================================
// 成衣生产进度统计 - 导入层
// ==========================================
// 职责: 外部数据 → 领域记录（只读快照）
// 红线: 不含引擎逻辑
// ==========================================

pub mod dataset;
pub mod error;
pub mod field_mapper;
pub mod file_parser;

pub use dataset::ProductionDataset;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, FileParser};
