// ==========================================
// 成衣生产进度统计 - 命令行入口
// ==========================================
// 命令:
// - summary: 目录汇总（已完成 / 进行中 / 风险 / 各状态数量）
// - products: 单产品进度行
// ==========================================

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use garment_status::config::{default_config_path, ConfigManager, StatisticThresholds};
use garment_status::engine::{CatalogSummary, ProductProgress, ProgressReporter, StatusEngine};
use garment_status::importer::ProductionDataset;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "garment-status")]
#[command(version)]
#[command(about = "成衣生产进度统计（缝制/整烫/质检/包装）")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 阈值配置文件（JSON 键值）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 输出格式
    #[arg(long, short = 'f', global = true, value_enum, default_value = "table")]
    format: OutputFormat,

    /// 日志输出为 JSON 行
    #[arg(long, global = true)]
    json_log: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// 目录汇总
    Summary {
        /// 数据集路径（.json 快照 或 CSV 目录）
        #[arg(long)]
        data: PathBuf,
    },
    /// 单产品进度
    Products {
        /// 数据集路径（.json 快照 或 CSV 目录）
        #[arg(long)]
        data: PathBuf,

        /// 包含无任何进度（隐藏图标）的产品
        #[arg(long)]
        all: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    garment_status::logging::init(cli.json_log);

    tracing::info!(version = garment_status::VERSION, "{}", garment_status::APP_NAME);

    let thresholds = load_thresholds(cli.config.as_deref())?;
    let reporter = ProgressReporter::new(StatusEngine::with_thresholds(thresholds));

    match cli.command {
        Commands::Summary { data } => {
            let dataset = load_dataset(&data)?;
            let summary = reporter.summarize_catalog(
                &dataset.products,
                &dataset.deliveries,
                &dataset.completions,
            );
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
                OutputFormat::Table => print_summary(&summary),
            }
        }
        Commands::Products { data, all } => {
            let dataset = load_dataset(&data)?;
            let rows: Vec<ProductProgress> = reporter
                .build_progress_rows(&dataset.products, &dataset.deliveries, &dataset.completions)
                .into_iter()
                .filter(|row| all || row.show_status_icon)
                .collect();
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
                OutputFormat::Table => print_rows(&rows),
            }
        }
    }

    Ok(())
}

fn load_thresholds(explicit: Option<&Path>) -> anyhow::Result<StatisticThresholds> {
    let config = match explicit {
        Some(path) => ConfigManager::from_file(path)
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?,
        None => ConfigManager::load_or_default(&default_config_path())?,
    };
    Ok(StatisticThresholds::from_reader(&config)?)
}

fn load_dataset(path: &Path) -> anyhow::Result<ProductionDataset> {
    ProductionDataset::load(path).with_context(|| format!("无法加载数据集: {}", path.display()))
}

fn print_summary(summary: &CatalogSummary) {
    println!("产品总数    {}", summary.total);
    println!("已完成      {}", summary.completed);
    println!("进行中      {}", summary.progressing);
    println!("风险        {}", summary.dangerous);
    println!("未开工      {}", summary.hidden);
    println!(
        "状态分布    success={} danger={} warning={} normal={}",
        summary.status_counts.success,
        summary.status_counts.danger,
        summary.status_counts.warning,
        summary.status_counts.normal
    );
}

fn format_percent(percent: Option<f64>) -> String {
    match percent {
        Some(p) => format!("{:.1}%", p),
        None => "-".to_string(),
    }
}

fn print_rows(rows: &[ProductProgress]) {
    println!(
        "{:>8} {:>8} {:>14} {:>14} {:>14} {:>14}  {}",
        "ID", "PO", "缝制", "整烫", "质检", "包装", "状态"
    );
    for row in rows {
        let status = if row.show_status_icon {
            row.status.to_string()
        } else {
            "-".to_string()
        };
        println!(
            "{:>8} {:>8} {:>14} {:>14} {:>14} {:>14}  {}",
            row.product_id,
            row.quantity_po,
            format!("{} ({})", row.sums.sewed, format_percent(row.percentages.sewing)),
            format!("{} ({})", row.sums.ironed, format_percent(row.percentages.ironing)),
            format!("{} ({})", row.sums.check_passed, format_percent(row.percentages.checking)),
            format!("{} ({})", row.sums.packaged, format_percent(row.percentages.packaging)),
            status
        );
    }
}
