use crate::error::AnalyzerError;
use crate::models::{Catalog, ItemTotal, ParsedTable};

/// 选中订单聚合: 只对选中的行按列求和, 按数量降序排名
///
/// 下标越界是调用方错误, 防御性拒绝; 空选择合法, 产出全零。
/// 稳定排序保证同数量的菜品保持目录声明顺序; 零数量条目保留,
/// 是否展示由消费方决定。
pub fn analyze_selection(
    table: &ParsedTable,
    catalog: &Catalog,
    selected: &[usize],
) -> Result<Vec<ItemTotal>, AnalyzerError> {
    for &idx in selected {
        if idx >= table.len() {
            return Err(AnalyzerError::InvalidSelection {
                index: idx,
                rows: table.len(),
            });
        }
    }

    let mut totals: Vec<ItemTotal> = catalog
        .items()
        .iter()
        .enumerate()
        .map(|(pos, item)| {
            let quantity = selected
                .iter()
                .map(|&idx| table.records()[idx].quantities.get(pos).copied().unwrap_or(0))
                .sum();
            ItemTotal {
                name: item.full_name.clone(),
                quantity,
            }
        })
        .collect();

    totals.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CatalogItem, OrderRecord};

    fn catalog3() -> Catalog {
        let items = ["烧卖20个/份", "馄饨 50/份", "汤圆 10个/份"]
            .iter()
            .enumerate()
            .map(|(i, name)| CatalogItem {
                id: i as i64 + 1,
                full_name: name.to_string(),
                short_name: name.chars().take(2).collect(),
                transliteration: String::new(),
            })
            .collect();
        Catalog::from_items(items).unwrap()
    }

    fn row(seq: i64, quantities: Vec<u32>) -> OrderRecord {
        OrderRecord {
            sequence: seq,
            customer: String::new(),
            items_text: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            zip: String::new(),
            quantities,
        }
    }

    fn table5() -> ParsedTable {
        // 烧卖列: 行0=3, 行1=5, 行2=1, 行3=5, 行4=5
        ParsedTable::new(vec![
            row(1, vec![3, 0, 0]),
            row(2, vec![5, 0, 0]),
            row(3, vec![1, 2, 0]),
            row(4, vec![5, 0, 0]),
            row(5, vec![5, 0, 0]),
        ])
    }

    #[test]
    fn sums_only_selected_rows() {
        let catalog = catalog3();
        let table = table5();
        let totals = analyze_selection(&table, &catalog, &[0, 2]).unwrap();
        let shaomai = totals.iter().find(|t| t.name == "烧卖20个/份").unwrap();
        assert_eq!(shaomai.quantity, 4); // 3 + 1, 不含行1/3/4
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let catalog = catalog3();
        let table = table5();
        let result = analyze_selection(&table, &catalog, &[0, 5]);
        assert!(matches!(
            result,
            Err(AnalyzerError::InvalidSelection { index: 5, rows: 5 })
        ));
    }

    #[test]
    fn empty_selection_yields_all_zero_totals() {
        let catalog = catalog3();
        let table = table5();
        let totals = analyze_selection(&table, &catalog, &[]).unwrap();
        assert_eq!(totals.len(), 3);
        assert!(totals.iter().all(|t| t.quantity == 0));
    }

    #[test]
    fn sorted_desc_with_catalog_order_ties() {
        let catalog = catalog3();
        let table = ParsedTable::new(vec![row(1, vec![2, 5, 2])]);
        let totals = analyze_selection(&table, &catalog, &[0]).unwrap();
        assert_eq!(totals[0].name, "馄饨 50/份");
        // 烧卖与汤圆同为 2, 稳定排序保持目录顺序
        assert_eq!(totals[1].name, "烧卖20个/份");
        assert_eq!(totals[2].name, "汤圆 10个/份");
    }

    #[test]
    fn zero_quantity_items_are_kept() {
        let catalog = catalog3();
        let table = table5();
        let totals = analyze_selection(&table, &catalog, &[0]).unwrap();
        assert_eq!(totals.len(), catalog.len());
        assert!(totals.iter().any(|t| t.quantity == 0));
    }

    #[test]
    fn totals_monotonic_in_selection_size() {
        let catalog = catalog3();
        let table = table5();
        let small = analyze_selection(&table, &catalog, &[0, 2]).unwrap();
        let large = analyze_selection(&table, &catalog, &[0, 1, 2]).unwrap();
        for t1 in &small {
            let t2 = large.iter().find(|t| t.name == t1.name).unwrap();
            assert!(t2.quantity >= t1.quantity);
        }
    }
}
