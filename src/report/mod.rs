// ==========================================
// 工作订单跟踪 - 报表层
// ==========================================
// 职责: 柱状图渲染、Excel/PDF 导出、Excel 回读
// ==========================================

pub mod chart;
pub mod document;
pub mod error;
pub mod reader;
pub mod spreadsheet;

pub use chart::{ChartArtifact, ChartRenderer};
pub use document::{DocumentExporter, RenderedDocument};
pub use error::{ReportError, ReportResult};
pub use reader::OrderSheetReader;
pub use spreadsheet::{
    SpreadsheetExporter, AREA_SUMMARY_SHEET, ORDERS_SHEET, ORDER_HEADERS, STATUS_SUMMARY_SHEET,
};

/// 导出文件描述
pub const EXCEL_FILE_NAME: &str = "reporte_ordenes.xlsx";
pub const EXCEL_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const PDF_FILE_NAME: &str = "reporte_ordenes.pdf";
pub const PDF_MIME_TYPE: &str = "application/pdf";
