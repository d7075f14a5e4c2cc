use thiserror::Error;

/// 分析管道错误分类
///
/// 结构性失败 (目录加载失败 / 无有效订单行 / 下标越界) 以错误形式上抛;
/// 单条商品文本的噪声 (无法匹配/数量格式错) 只计数记录, 不算错误。
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// 菜品目录加载失败 (文件缺失/不可读/列缺失/键冲突) - 整条管道致命, 不重试
    #[error("菜品目录加载失败: {reason}")]
    CatalogLoad { reason: String },

    /// 本次上传没有任何可解析的订单行 - 当次上传致命, 可换文件重试
    #[error("上传文件中没有可解析的订单行")]
    EmptyOrderSet,

    /// 选择下标越界 (调用方错误, 防御性检查)
    #[error("选择下标 {index} 越界 (当前表共 {rows} 行)")]
    InvalidSelection { index: usize, rows: usize },

    /// 尚未成功处理过任何上传文件
    #[error("尚未加载任何订单批次")]
    NoBatchLoaded,

    /// 工作簿读取失败
    #[error("工作簿读取失败: {0}")]
    SheetRead(#[from] calamine::Error),

    /// 导出序列化失败
    #[error("CSV 导出失败: {0}")]
    Export(#[from] csv::Error),
}

impl AnalyzerError {
    pub fn catalog_load(reason: impl Into<String>) -> Self {
        Self::CatalogLoad {
            reason: reason.into(),
        }
    }
}
