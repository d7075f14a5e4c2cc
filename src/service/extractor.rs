use crate::models::SummaryMap;
use crate::sheet::{coerce_u32, text_cell};
use calamine::Data;

/// 汇总块起始哨兵: 表尾汇总表的表头首格
const SUMMARY_START: &str = "商品";
/// 汇总块终止哨兵
const SUMMARY_END: &str = "总计";

/// 从原始行数据中提取表尾汇总块
///
/// 汇总块位置随订单行数浮动, 不能按固定行号取, 只能按哨兵值线性扫描:
/// 找到首格为 "商品" 的行, 从下一行起逐行读 (菜品名, 数量),
/// 读到首格为 "总计" 的行停止, 之后的行忽略。
/// 找不到起始哨兵说明本文件没有汇总块, 返回空映射, 下游跳过对账。
pub fn extract_summary(rows: &[Vec<Data>]) -> SummaryMap {
    let mut summary = SummaryMap::new();

    let Some(start) = rows
        .iter()
        .position(|row| first_cell(row) == SUMMARY_START)
    else {
        tracing::warn!("未找到汇总块哨兵 {:?}, 跳过对账", SUMMARY_START);
        return summary;
    };

    for row in &rows[start + 1..] {
        let name = first_cell(row);
        if name == SUMMARY_END {
            break;
        }
        if name.is_empty() {
            continue;
        }
        let Some(qty) = row.get(1).and_then(coerce_u32) else {
            tracing::warn!("汇总行 {:?} 数量无法解析, 忽略", name);
            continue;
        };
        summary.insert(name, qty);
    }

    tracing::info!("汇总块提取完成: {} 个菜品", summary.len());
    summary
}

fn first_cell(row: &[Data]) -> String {
    row.first().map(text_cell).unwrap_or_default()
}
