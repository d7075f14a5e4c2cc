//! 面向外部展示层的薄输出适配: 宽表 CSV / 排名 CSV / 文本报告 / 标签数据。

use crate::error::AnalyzerError;
use crate::models::{normalize_name, Catalog, ItemTotal, ParsedTable};
use crate::service::BatchAnalysis;
use chrono::Local;
use serde::Serialize;

/// 标签打印需要的一行数据 (id + 简称来自目录)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelRow {
    pub id: i64,
    pub short_name: String,
    pub quantity: u32,
}

/// 宽表导出: 元数据列在前, 之后按目录顺序一列一菜品
pub fn table_to_csv(table: &ParsedTable, catalog: &Catalog) -> Result<String, AnalyzerError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    let mut header = vec![
        "序号".to_string(),
        "姓名".to_string(),
        "内容".to_string(),
        "手机号码".to_string(),
        "收货地址".to_string(),
        "所在城市".to_string(),
        "邮政编码".to_string(),
    ];
    header.extend(catalog.items().iter().map(|i| i.full_name.clone()));
    wtr.write_record(&header)?;

    for rec in table.records() {
        let mut row = vec![
            rec.sequence.to_string(),
            rec.customer.clone(),
            rec.items_text.clone(),
            rec.phone.clone(),
            rec.address.clone(),
            rec.city.clone(),
            rec.zip.clone(),
        ];
        row.extend(rec.quantities.iter().map(|q| q.to_string()));
        wtr.write_record(&row)?;
    }

    let bytes = wtr.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// 排名结果导出
pub fn totals_to_csv(totals: &[ItemTotal]) -> Result<String, AnalyzerError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["菜品", "数量"])?;
    for t in totals {
        wtr.write_record([t.name.as_str(), t.quantity.to_string().as_str()])?;
    }
    let bytes = wtr.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// 文本分析报告 (对应页面上可下载的 detailed report)
pub fn render_report(batch: &BatchAnalysis, selected: &[usize], totals: &[ItemTotal]) -> String {
    let grand_total: u32 = totals.iter().map(|t| t.quantity).sum();
    let unique: usize = totals.iter().filter(|t| t.quantity > 0).count();

    let mut report = String::new();
    report.push_str("**DELIVERY ORDER ANALYSIS REPORT**\n");
    report.push_str("================================\n\n");
    report.push_str(&format!(
        "**Analysis Date:** {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    report.push_str(&format!("**Orders Analyzed:** {}\n", selected.len()));
    report.push_str(&format!("**Unique Items Ordered:** {}\n", unique));
    report.push_str(&format!("**Total Items:** {}\n\n", grand_total));

    report.push_str("**SELECTED ORDERS:**\n");
    for &idx in selected {
        if let Some(rec) = batch.table.get(idx) {
            report.push_str(&format!(
                "\n• {} - {} ({})",
                rec.sequence, rec.customer, rec.city
            ));
        }
    }

    report.push_str("\n\n**ITEM QUANTITIES:**\n");
    for t in totals.iter().filter(|t| t.quantity > 0) {
        report.push_str(&format!("\n• {}: {}", t.name, t.quantity));
    }
    report
}

/// 标签数据: 非零菜品的 (id, 简称, 数量), 保持排名顺序
pub fn label_rows(totals: &[ItemTotal], catalog: &Catalog) -> Vec<LabelRow> {
    totals
        .iter()
        .filter(|t| t.quantity > 0)
        .filter_map(|t| {
            let pos = catalog.position_of(&normalize_name(&t.name))?;
            let item = catalog.get(pos)?;
            Some(LabelRow {
                id: item.id,
                short_name: item.short_name.clone(),
                quantity: t.quantity,
            })
        })
        .collect()
}

/// 带时间戳的导出文件名, 如 delivery_analysis_20240101_120000.csv
pub fn timestamped_name(prefix: &str, ext: &str) -> String {
    format!("{}_{}.{}", prefix, Local::now().format("%Y%m%d_%H%M%S"), ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CatalogItem, OrderRecord};

    fn catalog() -> Catalog {
        Catalog::from_items(vec![
            CatalogItem {
                id: 1,
                full_name: "烧卖20个/份".into(),
                short_name: "烧卖".into(),
                transliteration: String::new(),
            },
            CatalogItem {
                id: 2,
                full_name: "馄饨 50/份".into(),
                short_name: "馄饨".into(),
                transliteration: String::new(),
            },
        ])
        .unwrap()
    }

    #[test]
    fn wide_csv_has_metadata_then_catalog_columns() {
        let table = ParsedTable::new(vec![OrderRecord {
            sequence: 1,
            customer: "张三".into(),
            items_text: "烧卖 20个/份x2， 总价：$20.00".into(),
            phone: "138".into(),
            address: "某路".into(),
            city: "上海".into(),
            zip: "200000".into(),
            quantities: vec![2, 0],
        }]);
        let csv_text = table_to_csv(&table, &catalog()).unwrap();
        let mut lines = csv_text.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("序号,姓名,内容"));
        assert!(header.ends_with("烧卖20个/份,馄饨 50/份"));
        let row = lines.next().unwrap();
        assert!(row.ends_with("2,0"));
    }

    #[test]
    fn label_rows_resolve_id_and_short_name() {
        let totals = vec![
            ItemTotal {
                name: "馄饨 50/份".into(),
                quantity: 3,
            },
            ItemTotal {
                name: "烧卖20个/份".into(),
                quantity: 0,
            },
        ];
        let labels = label_rows(&totals, &catalog());
        assert_eq!(
            labels,
            vec![LabelRow {
                id: 2,
                short_name: "馄饨".into(),
                quantity: 3,
            }]
        );
    }
}
