use crate::error::AnalyzerError;
use crate::models::{normalize_name, Catalog, OrderRecord, ParseStats, ParsedTable};
use crate::sheet::{coerce_i64, id_string, text_cell};
use calamine::Data;
use once_cell::sync::Lazy;
use regex::Regex;

/// 平台横幅 3 行 + 表头 1 行
const HEADER_ROWS: usize = 4;

/// 列布局: 序号, 姓名, 内容, 标签(弃), 手机, 地址, 城市, 邮编
const COL_SEQUENCE: usize = 0;
const COL_CUSTOMER: usize = 1;
const COL_ITEMS: usize = 2;
const COL_PHONE: usize = 4;
const COL_ADDRESS: usize = 5;
const COL_CITY: usize = 6;
const COL_ZIP: usize = 7;

/// 数量 = x 右侧的前导数字 (后面可能还挂着别的字符)
static QTY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+").expect("quantity pattern"));

/// 解析订单行, 产出宽表
///
/// 序号列强转整数是区分订单行和表尾汇总行的机制:
/// 汇总行首格不是数字, 强转失败即被丢弃, 不需要知道汇总块的具体行号。
/// 过滤后一行不剩是硬错误 (本次上传无效); 单条商品文本的噪声只计数。
pub fn parse_orders(
    rows: &[Vec<Data>],
    catalog: &Catalog,
) -> Result<(ParsedTable, ParseStats), AnalyzerError> {
    let mut records = Vec::new();
    let mut stats = ParseStats::default();

    for row in rows.iter().skip(HEADER_ROWS) {
        let Some(sequence) = row.get(COL_SEQUENCE).and_then(coerce_i64) else {
            continue; // 汇总/表尾行
        };

        let items_text = cell(row, COL_ITEMS);
        let mut quantities = vec![0u32; catalog.len()];
        parse_items_text(&items_text, catalog, &mut quantities, &mut stats);

        records.push(OrderRecord {
            sequence,
            customer: cell(row, COL_CUSTOMER),
            items_text,
            phone: row.get(COL_PHONE).map(id_string).unwrap_or_default(),
            address: cell(row, COL_ADDRESS),
            city: cell(row, COL_CITY),
            zip: row.get(COL_ZIP).map(id_string).unwrap_or_default(),
            quantities,
        });
    }

    if records.is_empty() {
        return Err(AnalyzerError::EmptyOrderSet);
    }

    stats.order_rows = records.len();
    tracing::info!(
        "订单解析完成: {} 行, 匹配 {} 条, 未匹配 {} 条, 格式错 {} 条",
        stats.order_rows,
        stats.segments_matched,
        stats.segments_unmatched,
        stats.segments_malformed
    );
    Ok((ParsedTable::new(records), stats))
}

/// 解析单行的下单内容文本, 把数量累加进对应目录列
///
/// 格式: "菜名 规格x数量， 菜名 规格x数量， 总价：$xx.xx"
/// 按 "， " 切段, 末段固定是总价标注 (按位置丢弃, 不做文本匹配);
/// 每段从右侧最后一个 x 切成 (菜名+规格, 数量)。
fn parse_items_text(
    items_text: &str,
    catalog: &Catalog,
    quantities: &mut [u32],
    stats: &mut ParseStats,
) {
    let segments: Vec<&str> = items_text.split("， ").collect();
    let item_segments = &segments[..segments.len().saturating_sub(1)];

    for segment in item_segments {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let Some((name_part, qty_part)) = segment.rsplit_once('x') else {
            stats.segments_malformed += 1;
            tracing::debug!("条目缺少数量分隔: {:?}", segment);
            continue;
        };

        let Some(qty) = QTY_RE
            .find(qty_part.trim())
            .and_then(|m| m.as_str().parse::<u32>().ok())
        else {
            stats.segments_malformed += 1;
            tracing::debug!("条目数量无法解析: {:?}", segment);
            continue;
        };

        let key = normalize_name(name_part);
        match catalog.position_of(&key) {
            Some(pos) => {
                // 同一菜品在一条订单里可能出现多段, 累加而非覆盖
                quantities[pos] += qty;
                stats.segments_matched += 1;
            }
            None => {
                // 自由文本天然有损, 目录外菜名按预期噪声处理
                stats.segments_unmatched += 1;
                tracing::debug!("目录中无此菜品: {:?} (归一化 {:?})", name_part, key);
            }
        }
    }
}

fn cell(row: &[Data], idx: usize) -> String {
    row.get(idx).map(text_cell).unwrap_or_default()
}
