use delivery_analyzer_rust::{export, AppConfig, Catalog, DeliveryAnalyzer};
use tracing::{info, warn};
use tracing_subscriber::fmt::time::ChronoLocal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::load("config.json");
    info!("Starting with config: {:?}", config);

    let workbook_path = std::env::args()
        .nth(1)
        .ok_or("用法: delivery-analyzer-rust <订单导出文件.xlsx>")?;

    // 目录每次进程启动加载一次, 之后只读
    let catalog = Catalog::load(&config.catalog.path)?;

    // 处理上传的工作簿: 汇总提取 -> 订单解析 -> 对账
    let mut analyzer = DeliveryAnalyzer::new(catalog);
    let row_count = {
        let batch = analyzer.process_workbook(&workbook_path)?;
        info!(
            "批次处理完成: {} 行订单, {} 个汇总条目",
            batch.table.len(),
            batch.summary.len()
        );
        for d in &batch.discrepancies {
            warn!(
                "对账差异: {} 解析合计 {} != 汇总期望 {}",
                d.item_name, d.parsed_total, d.expected_total
            );
        }
        batch.table.len()
    };

    // 全选聚合 + 导出
    let all_rows: Vec<usize> = (0..row_count).collect();
    let totals = analyzer.analyze_selection(&all_rows)?;
    let batch = analyzer.current().ok_or("批次丢失")?;

    let table_path = format!(
        "{}/{}",
        config.export.dir,
        export::timestamped_name("delivery_analysis", "csv")
    );
    std::fs::write(&table_path, export::table_to_csv(&batch.table, analyzer.catalog())?)?;
    info!("宽表已导出: {}", table_path);

    let report_path = format!(
        "{}/{}",
        config.export.dir,
        export::timestamped_name("delivery_report", "txt")
    );
    std::fs::write(&report_path, export::render_report(batch, &all_rows, &totals))?;
    info!("分析报告已导出: {}", report_path);

    Ok(())
}
