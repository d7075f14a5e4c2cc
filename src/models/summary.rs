use indexmap::IndexMap;
use serde::Serialize;

/// 汇总块映射: 菜品名 -> 期望总量, 保持文件内出现顺序
pub type SummaryMap = IndexMap<String, u32>;

/// 对账差异: 解析合计与汇总块期望值不一致
///
/// 差异是展示数据, 不是错误, 不以异常形式上抛。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discrepancy {
    pub item_name: String,
    pub parsed_total: u32,
    pub expected_total: u32,
}

/// 选中订单聚合结果的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemTotal {
    pub name: String,
    pub quantity: u32,
}
