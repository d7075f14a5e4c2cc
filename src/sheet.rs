use crate::error::AnalyzerError;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// 把工作簿第一张表一次性读进内存
///
/// 汇总提取和订单解析是对同一份行数据的两次只读扫描,
/// 读进内存后天然满足"扫完即复位, 不存在两个读取游标"的约定。
pub fn load_sheet(path: impl AsRef<Path>) -> Result<Vec<Vec<Data>>, AnalyzerError> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AnalyzerError::SheetRead(calamine::Error::Msg("工作簿中没有工作表")))?;
    let range = workbook.worksheet_range(&sheet_name)?;
    let rows: Vec<Vec<Data>> = range.rows().map(|r| r.to_vec()).collect();
    tracing::info!("工作簿读取完成: {} ({} 行)", path.display(), rows.len());
    Ok(rows)
}

/// 单元格转为展示字符串 (空单元格 -> 空串)
pub fn text_cell(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Int(i) => i.to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// 手机号/邮编专用: 数值单元格去掉小数部分后转字符串, 避免 "12345.0" 之类的伪影
pub fn id_string(cell: &Data) -> String {
    match cell {
        Data::Float(f) => format!("{}", *f as i64),
        Data::Int(i) => i.to_string(),
        Data::String(s) => s.trim().to_string(),
        _ => String::new(),
    }
}

/// 单元格强转整数; 转不了返回 None (对应汇总/表尾行被过滤的机制)
pub fn coerce_i64(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(i) => Some(*i),
        Data::Float(f) if f.fract() == 0.0 => Some(*f as i64),
        Data::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.fract() == 0.0).map(|f| f as i64))
        }
        _ => None,
    }
}

/// 单元格强转非负数量
pub fn coerce_u32(cell: &Data) -> Option<u32> {
    coerce_i64(cell).and_then(|v| u32::try_from(v).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_string_keeps_digits_of_numeric_cells() {
        assert_eq!(id_string(&Data::Float(13816211234.0)), "13816211234");
        assert_eq!(id_string(&Data::String(" 07030 ".into())), "07030");
        assert_eq!(id_string(&Data::Empty), "");
    }

    #[test]
    fn coerce_i64_accepts_numeric_strings_only() {
        assert_eq!(coerce_i64(&Data::Float(12.0)), Some(12));
        assert_eq!(coerce_i64(&Data::String("7".into())), Some(7));
        assert_eq!(coerce_i64(&Data::String("12.0".into())), Some(12));
        assert_eq!(coerce_i64(&Data::String("商品".into())), None);
        assert_eq!(coerce_i64(&Data::Empty), None);
    }

    #[test]
    fn coerce_u32_rejects_negative() {
        assert_eq!(coerce_u32(&Data::Int(-3)), None);
        assert_eq!(coerce_u32(&Data::Int(3)), Some(3));
    }
}
