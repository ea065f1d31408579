// ==========================================
// 工作订单跟踪 - Excel 报表导出
// ==========================================
// 输出: reporte_ordenes.xlsx
// 工作表: Órdenes / ResumenEstatus / ResumenÁreas
// ==========================================

use crate::domain::{Area, OrderStatus, WorkOrder};
use crate::engine::CountTable;
use crate::report::error::{ReportError, ReportResult};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::fmt::Display;
use tracing::info;

pub const ORDERS_SHEET: &str = "Órdenes";
pub const STATUS_SUMMARY_SHEET: &str = "ResumenEstatus";
pub const AREA_SUMMARY_SHEET: &str = "ResumenÁreas";

/// 订单表列头（与 WorkOrder 字段顺序一致）
pub const ORDER_HEADERS: [&str; 8] = [
    "ID",
    "Fecha",
    "Supervisor",
    "Área",
    "Materiales",
    "Actividades",
    "Requerimientos",
    "Estatus",
];

pub const COUNT_HEADER: &str = "Cantidad";

// 列宽（字符数）
const ORDER_COLUMN_WIDTHS: [f64; 8] = [6.0, 18.0, 18.0, 8.0, 30.0, 30.0, 30.0, 14.0];

// ==========================================
// SpreadsheetExporter - Excel 导出器
// ==========================================
pub struct SpreadsheetExporter;

impl SpreadsheetExporter {
    /// 导出订单表与两张汇总表
    ///
    /// # 返回
    /// - Ok(Vec<u8>): xlsx 文件内容
    /// - Err(ReportError::EmptyOrderSet): 订单为空
    pub fn export(
        &self,
        orders: &[WorkOrder],
        status_counts: &CountTable<OrderStatus>,
        area_counts: &CountTable<Area>,
    ) -> ReportResult<Vec<u8>> {
        if orders.is_empty() {
            return Err(ReportError::EmptyOrderSet);
        }

        let header_format = Format::new().set_bold();
        let mut workbook = Workbook::new();

        let sheet = workbook.add_worksheet();
        sheet.set_name(ORDERS_SHEET)?;
        write_orders(sheet, orders, &header_format)?;

        let sheet = workbook.add_worksheet();
        sheet.set_name(STATUS_SUMMARY_SHEET)?;
        write_counts(sheet, "Estatus", status_counts, &header_format)?;

        let sheet = workbook.add_worksheet();
        sheet.set_name(AREA_SUMMARY_SHEET)?;
        write_counts(sheet, "Área", area_counts, &header_format)?;

        let bytes = workbook.save_to_buffer()?;
        info!(orders = orders.len(), size = bytes.len(), "Excel 报表已生成");
        Ok(bytes)
    }
}

fn write_orders(sheet: &mut Worksheet, orders: &[WorkOrder], header_format: &Format) -> ReportResult<()> {
    for (col, header) in ORDER_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, header_format)?;
        sheet.set_column_width(col as u16, ORDER_COLUMN_WIDTHS[col])?;
    }

    for (index, order) in orders.iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write_number(row, 0, order.id)?;
        sheet.write_string(row, 1, order.created_at_display())?;
        sheet.write_string(row, 2, &order.supervisor)?;
        sheet.write_string(row, 3, order.area.label())?;
        sheet.write_string(row, 4, &order.materials)?;
        sheet.write_string(row, 5, &order.activities)?;
        sheet.write_string(row, 6, &order.requirements)?;
        sheet.write_string(row, 7, order.status.label())?;
    }

    Ok(())
}

fn write_counts<K: Copy + Eq + Display>(
    sheet: &mut Worksheet,
    key_header: &str,
    counts: &CountTable<K>,
    header_format: &Format,
) -> ReportResult<()> {
    sheet.write_string_with_format(0, 0, key_header, header_format)?;
    sheet.write_string_with_format(0, 1, COUNT_HEADER, header_format)?;
    sheet.set_column_width(0, 16.0)?;

    for (index, (key, count)) in counts.iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write_string(row, 0, key.to_string())?;
        sheet.write_number(row, 1, *count as f64)?;
    }

    Ok(())
}
