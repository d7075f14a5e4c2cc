use crate::error::AnalyzerError;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 末尾规格标注: 数字 + 可选"个" + 可选斜杠(半角/全角) + 可选"份"
/// 例: "15个/份", "50/份", "3个／份", "10份"
static UNIT_SPEC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+个?[/／]?份?$").expect("unit spec pattern"));

/// 菜品名称归一化: 去掉末尾规格标注, 再去掉所有空白
///
/// 目录侧和订单文本侧共用同一个实现, 保证两边的匹配键不会漂移。
pub fn normalize_name(raw: &str) -> String {
    let stripped = UNIT_SPEC_RE.replace(raw.trim(), "");
    stripped.chars().filter(|c| !c.is_whitespace()).collect()
}

/// 菜品目录条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: i64,
    pub full_name: String,     // 含规格标注的全名, 归一化后作匹配键
    pub short_name: String,    // 标签用简称
    pub transliteration: String,
}

/// 菜品目录: 保序条目表 + 归一化名称索引
///
/// 进程内只加载一次, 之后只读; 各组件按引用传入, 便于用合成目录做测试。
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    index: IndexMap<String, usize>, // 归一化全名 -> 目录位置
}

impl Catalog {
    /// 从条目列表构建目录, 归一化键冲突在此拒绝 (不做静默覆盖)
    pub fn from_items(items: Vec<CatalogItem>) -> Result<Self, AnalyzerError> {
        let mut index = IndexMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            let key = normalize_name(&item.full_name);
            if key.is_empty() {
                return Err(AnalyzerError::catalog_load(format!(
                    "条目 {} 归一化后为空: {:?}",
                    item.id, item.full_name
                )));
            }
            if let Some(prev) = index.insert(key.clone(), pos) {
                return Err(AnalyzerError::catalog_load(format!(
                    "归一化键冲突: {:?} 与 {:?} 都归一化为 {:?}",
                    items[prev].full_name, item.full_name, key
                )));
            }
        }
        Ok(Self { items, index })
    }

    /// 从 CSV 文件加载目录 (4列: id, full_name, short_name, transliteration, 带表头)
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AnalyzerError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AnalyzerError::catalog_load(format!("无法打开 {}: {}", path.display(), e))
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader(rdr: impl Read) -> Result<Self, AnalyzerError> {
        let mut reader = csv::Reader::from_reader(rdr);
        let mut items = Vec::new();
        for record in reader.deserialize::<CatalogItem>() {
            let item = record
                .map_err(|e| AnalyzerError::catalog_load(format!("CSV 记录无效: {}", e)))?;
            items.push(item);
        }
        tracing::info!("目录加载完成: {} 个菜品", items.len());
        Self::from_items(items)
    }

    /// 按归一化键查找目录位置
    pub fn position_of(&self, normalized: &str) -> Option<usize> {
        self.index.get(normalized).copied()
    }

    pub fn get(&self, pos: usize) -> Option<&CatalogItem> {
        self.items.get(pos)
    }

    /// 按目录声明顺序遍历
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
