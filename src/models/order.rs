use serde::{Deserialize, Serialize};

/// 单条订单行: 元数据 + 按目录顺序的数量列
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub sequence: i64,       // 序号 (配送单号)
    pub customer: String,    // 姓名
    pub items_text: String,  // 原始下单内容
    pub phone: String,       // 手机号码 (字符串, 保留前导零)
    pub address: String,     // 收货地址
    pub city: String,        // 所在城市
    pub zip: String,         // 邮政编码 (字符串)
    /// 数量列, 下标 = 目录位置, 缺省 0
    pub quantities: Vec<u32>,
}

/// 宽表: 一行一订单, 一列一菜品, 按出现顺序保存
///
/// 每次上传生成一张新表, 覆盖而非合并上一张。
#[derive(Debug, Clone, Default)]
pub struct ParsedTable {
    records: Vec<OrderRecord>,
}

impl ParsedTable {
    pub fn new(records: Vec<OrderRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn get(&self, idx: usize) -> Option<&OrderRecord> {
        self.records.get(idx)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 某菜品列在全表的合计
    pub fn column_total(&self, catalog_pos: usize) -> u32 {
        self.records
            .iter()
            .map(|r| r.quantities.get(catalog_pos).copied().unwrap_or(0))
            .sum()
    }
}

/// 解析噪声统计
///
/// 单条目噪声 (缺 x 分隔 / 数量格式错 / 目录无此菜品) 不抛错,
/// 在这里计数并打日志, 测试按计数断言。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub order_rows: usize,          // 有效订单行数
    pub segments_matched: usize,    // 成功匹配并计入数量的条目数
    pub segments_unmatched: usize,  // 目录中查不到的条目数
    pub segments_malformed: usize,  // 缺 x 分隔或数量无法解析的条目数
}
