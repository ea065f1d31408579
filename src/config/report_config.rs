// ==========================================
// 工作订单跟踪 - 报表配置
// ==========================================
// 职责: 报表标题、图表尺寸、PDF 版式参数
// 来源: 内置默认值,可由 JSON 文件部分覆写
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 配置加载错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置格式错误: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("配置值错误 (key: {key}): {message}")]
    InvalidValue { key: String, message: String },
}

// ==========================================
// ReportConfig - 报表配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// 报表标题（PDF 首行）
    pub title: String,

    /// 柱状图参数
    pub chart: ChartConfig,

    /// PDF 版式参数
    pub page: PageConfig,

    /// 图表临时文件目录（None 时使用系统临时目录）
    pub temp_dir: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Reporte de Órdenes de Trabajo".to_string(),
            chart: ChartConfig::default(),
            page: PageConfig::default(),
            temp_dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    pub width_px: u32,
    pub height_px: u32,
    /// 柱体颜色 RGB
    pub bar_rgb: (u8, u8, u8),
    pub status_title: String,
    pub area_title: String,
    pub y_label: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width_px: 640,
            height_px: 480,
            bar_rgb: (31, 119, 180),
            status_title: "Órdenes por Estatus".to_string(),
            area_title: "Órdenes por Área".to_string(),
            y_label: "Cantidad".to_string(),
        }
    }
}

/// 单位: mm / pt（A4 纵向）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_mm: f32,
    pub font_size_pt: f32,
    pub line_height_mm: f32,
    /// 订单段落之间的额外间距
    pub paragraph_gap_mm: f32,
    /// 图表在页面上的宽度（高度按像素比例换算）
    pub image_width_mm: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_mm: 10.0,
            font_size_pt: 12.0,
            line_height_mm: 10.0,
            paragraph_gap_mm: 2.0,
            image_width_mm: 180.0,
        }
    }
}

impl ReportConfig {
    /// 从 JSON 字符串加载（缺省字段取默认值）
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: ReportConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// 文件存在则加载,否则使用默认配置
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_json_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chart.width_px == 0 || self.chart.height_px == 0 {
            return Err(ConfigError::InvalidValue {
                key: "chart".to_string(),
                message: "图表尺寸必须大于 0".to_string(),
            });
        }

        let page = &self.page;
        let usable_width = page.width_mm - 2.0 * page.margin_mm;
        let usable_height = page.height_mm - 2.0 * page.margin_mm;
        if usable_width <= 0.0 || usable_height < page.line_height_mm {
            return Err(ConfigError::InvalidValue {
                key: "page".to_string(),
                message: format!("页边距 {}mm 过大", page.margin_mm),
            });
        }
        if page.font_size_pt <= 0.0 || page.line_height_mm <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "page.font_size_pt".to_string(),
                message: "字号与行高必须大于 0".to_string(),
            });
        }
        if page.image_width_mm <= 0.0 || page.image_width_mm > usable_width {
            return Err(ConfigError::InvalidValue {
                key: "page.image_width_mm".to_string(),
                message: format!("图表宽度需在 (0, {}] mm 之间", usable_width),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ReportConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            ReportConfig::from_json_str(r#"{"title":"Informe","chart":{"width_px":800}}"#).unwrap();

        assert_eq!(config.title, "Informe");
        assert_eq!(config.chart.width_px, 800);
        assert_eq!(config.chart.height_px, 480);
        assert_eq!(config.page, PageConfig::default());
    }

    #[test]
    fn test_rejects_oversized_image_width() {
        let result = ReportConfig::from_json_str(r#"{"page":{"image_width_mm":250.0}}"#);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_from_json_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"{{"page":{{"margin_mm":15.0}}}}"#).unwrap();

        let config = ReportConfig::from_json_file(temp_file.path()).unwrap();
        assert_eq!(config.page.margin_mm, 15.0);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = ReportConfig::load_or_default("no_such_report_config.json").unwrap();
        assert_eq!(config, ReportConfig::default());
    }
}
