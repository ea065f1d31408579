// ==========================================
// 工作订单跟踪 - Excel 报表回读
// ==========================================
// 职责: 读取导出的 Órdenes 工作表,还原为 WorkOrder 列表
// 用途: 核对导出内容与内存订单表一致
// ==========================================

use crate::domain::{Area, OrderStatus, WorkOrder, TIMESTAMP_FORMAT};
use crate::report::error::{ReportError, ReportResult};
use crate::report::spreadsheet::{ORDERS_SHEET, ORDER_HEADERS};
use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use chrono::NaiveDateTime;
use std::io::Cursor;

pub struct OrderSheetReader;

impl OrderSheetReader {
    /// 工作表名称（按工作簿内顺序）
    pub fn sheet_names(&self, xlsx_bytes: &[u8]) -> ReportResult<Vec<String>> {
        let workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(xlsx_bytes))?;
        Ok(workbook.sheet_names())
    }

    /// 读取订单表
    ///
    /// # 规则
    /// - 第一行必须为标准表头
    /// - 完全空白的行跳过
    /// - 行号从 1 开始计（含表头）,用于错误定位
    pub fn read_orders(&self, xlsx_bytes: &[u8]) -> ReportResult<Vec<WorkOrder>> {
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(xlsx_bytes))?;

        if !workbook.sheet_names().iter().any(|name| name == ORDERS_SHEET) {
            return Err(ReportError::SheetNotFound(ORDERS_SHEET.to_string()));
        }
        let range = workbook.worksheet_range(ORDERS_SHEET)?;

        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| ReportError::ExcelParseError("订单表无表头".to_string()))?;
        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();
        if headers != ORDER_HEADERS {
            return Err(ReportError::HeaderMismatch {
                expected: ORDER_HEADERS.join(","),
                actual: headers.join(","),
            });
        }

        let mut orders = Vec::new();
        for (offset, data_row) in rows.enumerate() {
            let row = offset + 2;
            // 自由文本字段原样保留,仅解析型字段在 parse_order 中去空白
            let cells: Vec<String> = data_row.iter().map(|cell| cell.to_string()).collect();

            if cells.iter().all(|v| v.trim().is_empty()) {
                continue;
            }

            orders.push(parse_order(row, data_row, &cells)?);
        }

        Ok(orders)
    }
}

fn parse_order(row: usize, data_row: &[Data], cells: &[String]) -> ReportResult<WorkOrder> {
    let text = |col: usize| cells.get(col).cloned().unwrap_or_default();
    let trimmed = |col: usize| text(col).trim().to_string();
    let field_error = |col: usize, message: String| ReportError::FieldParseError {
        row,
        field: ORDER_HEADERS[col].to_string(),
        message,
    };

    let id = match data_row.first() {
        Some(Data::Float(value)) if *value >= 1.0 && value.fract() == 0.0 => *value as u32,
        Some(Data::Int(value)) if *value >= 1 => *value as u32,
        _ => trimmed(0)
            .parse::<u32>()
            .map_err(|e| field_error(0, format!("'{}': {}", trimmed(0), e)))?,
    };

    let created_at = NaiveDateTime::parse_from_str(&trimmed(1), TIMESTAMP_FORMAT)
        .map_err(|e| field_error(1, format!("'{}': {}", trimmed(1), e)))?;
    let area: Area = trimmed(3).parse().map_err(|e| field_error(3, format!("{}", e)))?;
    let status: OrderStatus = trimmed(7).parse().map_err(|e| field_error(7, format!("{}", e)))?;

    Ok(WorkOrder {
        id,
        created_at,
        supervisor: text(2),
        area,
        materials: text(4),
        activities: text(5),
        requirements: text(6),
        status,
    })
}
