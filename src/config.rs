use serde::{Deserialize, Serialize};
use std::path::Path;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                path: "data/food_items.csv".to_string(),
            },
            export: ExportConfig {
                dir: ".".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self {
            catalog: CatalogConfig {
                path: std::env::var("CATALOG_PATH")
                    .unwrap_or_else(|_| "data/food_items.csv".to_string()),
            },
            export: ExportConfig {
                dir: std::env::var("EXPORT_DIR").unwrap_or_else(|_| ".".to_string()),
            },
        }
    }

    /// 从 config.json 加载; 文件不存在时回退到环境变量
    pub fn load(path: impl AsRef<Path>) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                tracing::warn!("config.json 解析失败 ({}), 使用环境变量配置", e);
                Self::from_env()
            }),
            Err(_) => Self::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.catalog.path, "data/food_items.csv");
        assert_eq!(back.export.dir, ".");
    }
}
