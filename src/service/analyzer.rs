use crate::error::AnalyzerError;
use crate::models::{Catalog, Discrepancy, ItemTotal, ParseStats, ParsedTable, SummaryMap};
use crate::service::{aggregator, extractor, parser, reconciler};
use crate::sheet;
use calamine::Data;
use std::path::Path;

/// 一次上传的完整处理结果
#[derive(Debug, Clone)]
pub struct BatchAnalysis {
    pub table: ParsedTable,
    pub summary: SummaryMap,
    pub discrepancies: Vec<Discrepancy>,
    pub stats: ParseStats,
}

/// 订单批次分析服务
///
/// 持有只读目录和当前批次; 每次上传整体替换当前批次, 不做合并。
pub struct DeliveryAnalyzer {
    catalog: Catalog,
    current: Option<BatchAnalysis>,
}

impl DeliveryAnalyzer {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            current: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current(&self) -> Option<&BatchAnalysis> {
        self.current.as_ref()
    }

    /// 处理一个上传的工作簿文件
    pub fn process_workbook(&mut self, path: impl AsRef<Path>) -> Result<&BatchAnalysis, AnalyzerError> {
        let rows = sheet::load_sheet(path)?;
        self.process_rows(&rows)
    }

    /// 两遍扫描同一份行数据: 先提取汇总块, 再从头解析订单行, 最后对账
    ///
    /// 解析失败时不更新当前批次, 上一批数据保持可用。
    pub fn process_rows(&mut self, rows: &[Vec<Data>]) -> Result<&BatchAnalysis, AnalyzerError> {
        let summary = extractor::extract_summary(rows);
        let (table, stats) = parser::parse_orders(rows, &self.catalog)?;
        let discrepancies = reconciler::validate_against_summary(&table, &self.catalog, &summary);

        let batch = BatchAnalysis {
            table,
            summary,
            discrepancies,
            stats,
        };
        Ok(self.current.insert(batch))
    }

    /// 对当前批次的选中行做聚合排名
    pub fn analyze_selection(&self, selected: &[usize]) -> Result<Vec<ItemTotal>, AnalyzerError> {
        let batch = self.current.as_ref().ok_or(AnalyzerError::NoBatchLoaded)?;
        aggregator::analyze_selection(&batch.table, &self.catalog, selected)
    }
}
