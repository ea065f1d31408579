// ==========================================
// 工作订单跟踪 - PDF 报表导出
// ==========================================
// 输出: reporte_ordenes.pdf
// 版式: 标题 / 生成时间 / 订单清单 / 状态图 / 区域图
// 分页: 写入游标越过下边距时自动换页
// ==========================================

use crate::config::PageConfig;
use crate::domain::{WorkOrder, TIMESTAMP_FORMAT};
use crate::report::error::{ReportError, ReportResult};
use chrono::NaiveDateTime;
use image::{DynamicImage, GenericImageView, ImageFormat};
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};
use tracing::info;

const PT_TO_MM: f32 = 25.4 / 72.0;
// Helvetica 平均字宽（em）,略大于实际均值以免行溢出
const AVG_CHAR_WIDTH_EM: f32 = 0.55;
// 标题与订单清单之间的间距
const HEADER_GAP_MM: f32 = 10.0;

/// 生成结果
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

// ==========================================
// DocumentExporter - PDF 导出器
// ==========================================
pub struct DocumentExporter {
    title: String,
    page: PageConfig,
}

impl DocumentExporter {
    pub fn new(title: impl Into<String>, page: PageConfig) -> Self {
        Self {
            title: title.into(),
            page,
        }
    }

    /// 生成 PDF 报表
    ///
    /// # 参数
    /// - orders: 订单快照（显示顺序）
    /// - status_chart_png: 状态柱状图
    /// - area_chart_png: 区域柱状图
    /// - generated_at: 生成时间
    pub fn export(
        &self,
        orders: &[WorkOrder],
        status_chart_png: &[u8],
        area_chart_png: &[u8],
        generated_at: NaiveDateTime,
    ) -> ReportResult<RenderedDocument> {
        if orders.is_empty() {
            return Err(ReportError::EmptyOrderSet);
        }

        let status_chart = image::load_from_memory_with_format(status_chart_png, ImageFormat::Png)?;
        let area_chart = image::load_from_memory_with_format(area_chart_png, ImageFormat::Png)?;

        let (doc, page_index, layer_index) = PdfDocument::new(
            self.title.as_str(),
            Mm(self.page.width_mm),
            Mm(self.page.height_mm),
            "Capa 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ReportError::DocumentError(e.to_string()))?;
        let layer = doc.get_page(page_index).get_layer(layer_index);

        let page_count = {
            let mut writer = PageWriter::new(&doc, layer, font, &self.page);

            writer.centered_line(&self.title);
            writer.centered_line(&format!(
                "Fecha de generación: {}",
                generated_at.format(TIMESTAMP_FORMAT)
            ));
            writer.gap(HEADER_GAP_MM);

            for order in orders {
                writer.paragraph(&order.summary_line());
                writer.gap(self.page.paragraph_gap_mm);
            }

            writer.image(&status_chart);
            writer.image(&area_chart);
            writer.pages
        };

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| ReportError::DocumentError(e.to_string()))?;

        info!(orders = orders.len(), pages = page_count, size = bytes.len(), "PDF 报表已生成");
        Ok(RenderedDocument { bytes, page_count })
    }
}

// ==========================================
// PageWriter - 写入游标
// ==========================================
// 游标以页面顶部为原点向下计量（PDF 坐标原点在左下角）
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    page: &'a PageConfig,
    cursor_mm: f32,
    pages: usize,
}

impl<'a> PageWriter<'a> {
    fn new(
        doc: &'a PdfDocumentReference,
        layer: PdfLayerReference,
        font: IndirectFontRef,
        page: &'a PageConfig,
    ) -> Self {
        Self {
            doc,
            layer,
            font,
            page,
            cursor_mm: page.margin_mm,
            pages: 1,
        }
    }

    fn bottom_limit(&self) -> f32 {
        self.page.height_mm - self.page.margin_mm
    }

    fn char_width_mm(&self) -> f32 {
        self.page.font_size_pt * AVG_CHAR_WIDTH_EM * PT_TO_MM
    }

    fn max_chars_per_line(&self) -> usize {
        let usable = self.page.width_mm - 2.0 * self.page.margin_mm;
        ((usable / self.char_width_mm()) as usize).max(1)
    }

    /// 剩余空间不足时换页（页首不再换页）
    fn ensure_space(&mut self, height_mm: f32) {
        if self.cursor_mm + height_mm > self.bottom_limit() && self.cursor_mm > self.page.margin_mm {
            self.new_page();
        }
    }

    fn new_page(&mut self) {
        self.pages += 1;
        let (page_index, layer_index) = self.doc.add_page(
            Mm(self.page.width_mm),
            Mm(self.page.height_mm),
            format!("Capa {}", self.pages),
        );
        self.layer = self.doc.get_page(page_index).get_layer(layer_index);
        self.cursor_mm = self.page.margin_mm;
    }

    fn gap(&mut self, height_mm: f32) {
        self.cursor_mm += height_mm;
    }

    fn line_at(&mut self, text: &str, x_mm: f32) {
        let line_height = self.page.line_height_mm;
        self.ensure_space(line_height);

        // 基线位于行框内约 70% 处
        let baseline_mm = self.cursor_mm + line_height * 0.7;
        self.layer.use_text(
            text,
            self.page.font_size_pt,
            Mm(x_mm),
            Mm(self.page.height_mm - baseline_mm),
            &self.font,
        );
        self.cursor_mm += line_height;
    }

    fn centered_line(&mut self, text: &str) {
        let text_width = text.chars().count() as f32 * self.char_width_mm();
        let x = ((self.page.width_mm - text_width) / 2.0).max(self.page.margin_mm);
        self.line_at(text, x);
    }

    fn paragraph(&mut self, text: &str) {
        for line in wrap_text(text, self.max_chars_per_line()) {
            self.line_at(&line, self.page.margin_mm);
        }
    }

    /// 在当前游标处放置图片,宽度取配置值,超出单页可用高度时等比缩小
    fn image(&mut self, chart: &DynamicImage) {
        let (width_px, height_px) = chart.dimensions();
        if width_px == 0 || height_px == 0 {
            return;
        }

        let aspect = height_px as f32 / width_px as f32;
        let usable_height = self.bottom_limit() - self.page.margin_mm;
        let width_mm = self.page.image_width_mm.min(usable_height / aspect);
        let height_mm = width_mm * aspect;

        self.ensure_space(height_mm);

        let dpi = width_px as f32 * 25.4 / width_mm;
        let transform = ImageTransform {
            translate_x: Some(Mm(self.page.margin_mm)),
            translate_y: Some(Mm(self.page.height_mm - self.cursor_mm - height_mm)),
            dpi: Some(dpi),
            ..Default::default()
        };
        Image::from_dynamic_image(chart).add_to_layer(self.layer.clone(), transform);

        self.cursor_mm += height_mm + self.page.paragraph_gap_mm;
    }
}

/// 按字符数折行: 保留原有换行,优先在空白处断开,超长单词强制截断
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in raw_line.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > max_chars {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(max_chars);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
            if needed > max_chars {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(word.iter());
            current_len += word.len();
        }

        lines.push(current);
    }

    lines
}
