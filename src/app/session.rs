// ==========================================
// 工作订单跟踪 - 会话
// ==========================================
// 职责: 持有会话内订单表,对输入端暴露登记/改状态/删除/导出
// 生命周期: Session::new 为会话开始,drop 为会话结束
// ==========================================

use crate::config::ReportConfig;
use crate::domain::{Area, NewWorkOrder, OrderStatus, WorkOrder};
use crate::engine::{count_by_area, count_by_status, CountTable};
use crate::repository::{OrderStore, StoreOutcome};
use crate::report::{
    ChartRenderer, DocumentExporter, ReportError, ReportResult, SpreadsheetExporter,
    EXCEL_FILE_NAME, EXCEL_MIME_TYPE, PDF_FILE_NAME, PDF_MIME_TYPE,
};
use chrono::{Local, NaiveDateTime};
use std::path::Path;
use tracing::{info, warn};

/// 导出文件（文件名 + MIME + 内容）
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportedFile {
    /// 写入目录,返回完整路径
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> std::io::Result<std::path::PathBuf> {
        let path = dir.as_ref().join(self.file_name);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

// ==========================================
// Session - 单用户会话
// ==========================================
// 订单表由会话独占,修改需 &mut self
pub struct Session {
    store: OrderStore,
    config: ReportConfig,
}

impl Session {
    pub fn new(config: ReportConfig) -> Self {
        info!(title = %config.title, "会话已创建");
        Self {
            store: OrderStore::new(),
            config,
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    // ==========================================
    // 订单操作
    // ==========================================

    pub fn submit_order(&mut self, new_order: NewWorkOrder) -> WorkOrder {
        let order = self.store.create(new_order);
        info!(id = order.id, supervisor = %order.supervisor, area = %order.area, "订单登记成功");
        order
    }

    pub fn update_status(&mut self, id: u32, status: OrderStatus) -> StoreOutcome {
        let outcome = self.store.update_status(id, status);
        if outcome.is_not_found() {
            warn!(id, "更新状态: 订单不存在,已忽略");
        } else {
            info!(id, status = %status, "订单状态已更新");
        }
        outcome
    }

    pub fn delete_order(&mut self, id: u32) -> StoreOutcome {
        let outcome = self.store.delete(id);
        if outcome.is_not_found() {
            warn!(id, "删除订单: 订单不存在,已忽略");
        } else {
            info!(id, remaining = self.store.len(), "订单已删除");
        }
        outcome
    }

    pub fn orders(&self) -> &[WorkOrder] {
        self.store.list()
    }

    pub fn status_summary(&self) -> CountTable<OrderStatus> {
        count_by_status(self.store.list())
    }

    pub fn area_summary(&self) -> CountTable<Area> {
        count_by_area(self.store.list())
    }

    // ==========================================
    // 报表导出
    // ==========================================
    // 前置条件: 订单表非空,否则返回 EmptyOrderSet,不做任何汇总/渲染

    pub fn export_excel(&self) -> ReportResult<ExportedFile> {
        let orders = self.non_empty_orders()?;
        let bytes = SpreadsheetExporter.export(
            orders,
            &count_by_status(orders),
            &count_by_area(orders),
        )?;

        Ok(ExportedFile {
            file_name: EXCEL_FILE_NAME,
            mime_type: EXCEL_MIME_TYPE,
            bytes,
        })
    }

    pub fn export_pdf(&self) -> ReportResult<ExportedFile> {
        self.export_pdf_at(Local::now().naive_local())
    }

    /// 以指定生成时间导出 PDF
    ///
    /// 图表临时文件在函数返回时释放（成功或失败）
    pub fn export_pdf_at(&self, generated_at: NaiveDateTime) -> ReportResult<ExportedFile> {
        let orders = self.non_empty_orders()?;
        let chart_config = &self.config.chart;
        let renderer = ChartRenderer::new(chart_config.clone(), self.config.temp_dir.clone());

        let status_chart = renderer.render_to_artifact(
            &chart_config.status_title,
            &chart_config.y_label,
            &count_by_status(orders).labeled(),
        )?;
        let area_chart = renderer.render_to_artifact(
            &chart_config.area_title,
            &chart_config.y_label,
            &count_by_area(orders).labeled(),
        )?;

        let exporter = DocumentExporter::new(self.config.title.clone(), self.config.page.clone());
        let document = exporter.export(
            orders,
            &status_chart.read_bytes()?,
            &area_chart.read_bytes()?,
            generated_at,
        )?;

        Ok(ExportedFile {
            file_name: PDF_FILE_NAME,
            mime_type: PDF_MIME_TYPE,
            bytes: document.bytes,
        })
    }

    fn non_empty_orders(&self) -> ReportResult<&[WorkOrder]> {
        if self.store.is_empty() {
            warn!("订单表为空,拒绝导出");
            return Err(ReportError::EmptyOrderSet);
        }
        Ok(self.store.list())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        info!(orders = self.store.len(), "会话结束,订单表已释放");
    }
}
