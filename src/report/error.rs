// ==========================================
// 工作订单跟踪 - 报表模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 报表导出/回读错误类型
#[derive(Error, Debug)]
pub enum ReportError {
    // ===== 前置条件 =====
    #[error("订单列表为空,无法导出报表")]
    EmptyOrderSet,

    // ===== 导出错误 =====
    #[error("Excel 写入失败: {0}")]
    SpreadsheetWriteError(String),

    #[error("图表渲染失败: {0}")]
    ChartRenderError(String),

    #[error("PDF 生成失败: {0}")]
    DocumentError(String),

    #[error("图片解码失败: {0}")]
    ImageDecodeError(String),

    #[error("临时文件操作失败: {0}")]
    TempFileError(String),

    // ===== 回读错误 =====
    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("工作表不存在: {0}")]
    SheetNotFound(String),

    #[error("表头不匹配: 期望 {expected}, 实际 {actual}")]
    HeaderMismatch { expected: String, actual: String },

    #[error("字段解析失败 (行 {row}, 字段 {field}): {message}")]
    FieldParseError {
        row: usize,
        field: String,
        message: String,
    },
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::TempFileError(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ReportError::SpreadsheetWriteError(err.to_string())
    }
}

impl From<calamine::XlsxError> for ReportError {
    fn from(err: calamine::XlsxError) -> Self {
        ReportError::ExcelParseError(err.to_string())
    }
}

impl From<image::ImageError> for ReportError {
    fn from(err: image::ImageError) -> Self {
        ReportError::ImageDecodeError(err.to_string())
    }
}

/// Result 类型别名
pub type ReportResult<T> = Result<T, ReportError>;
