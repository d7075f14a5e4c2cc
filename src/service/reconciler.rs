use crate::models::{normalize_name, Catalog, Discrepancy, ParsedTable, SummaryMap};

/// 解析合计 vs 汇总块期望值对账
///
/// 只遍历汇总块, 不遍历目录: 本批次没卖的菜品不出现在汇总块里,
/// "没下单"不算差异。返回顺序跟随汇总块顺序。
/// 纯函数, 同样输入两次调用产出完全相同的差异列表。
pub fn validate_against_summary(
    table: &ParsedTable,
    catalog: &Catalog,
    summary: &SummaryMap,
) -> Vec<Discrepancy> {
    let mut discrepancies = Vec::new();

    for (item_name, &expected) in summary {
        let Some(pos) = catalog.position_of(&normalize_name(item_name)) else {
            tracing::warn!("汇总块中的 {:?} 不在菜品目录里, 跳过对账", item_name);
            continue;
        };

        let parsed = table.column_total(pos);
        if parsed != expected {
            discrepancies.push(Discrepancy {
                item_name: item_name.clone(),
                parsed_total: parsed,
                expected_total: expected,
            });
        }
    }

    if !discrepancies.is_empty() {
        tracing::warn!("对账发现 {} 处差异", discrepancies.len());
    }
    discrepancies
}
