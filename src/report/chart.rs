// ==========================================
// 工作订单跟踪 - 柱状图渲染
// ==========================================
// 职责: 将分类计数渲染为 PNG 柱状图
// 产物: 临时 PNG 文件（ChartArtifact 释放时自动删除）
// ==========================================

use crate::config::ChartConfig;
use crate::report::error::{ReportError, ReportResult};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_backend::DrawingErrorKind;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

// ==========================================
// ChartArtifact - 图表临时文件
// ==========================================
// 红线: 文件生命周期与对象绑定,任何路径下 drop 都会删除
#[derive(Debug)]
pub struct ChartArtifact {
    file: NamedTempFile,
}

impl ChartArtifact {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn read_bytes(&self) -> ReportResult<Vec<u8>> {
        Ok(std::fs::read(self.file.path())?)
    }
}

// ==========================================
// ChartRenderer - 柱状图渲染器
// ==========================================
pub struct ChartRenderer {
    config: ChartConfig,
    temp_dir: Option<PathBuf>,
}

impl ChartRenderer {
    pub fn new(config: ChartConfig, temp_dir: Option<PathBuf>) -> Self {
        Self { config, temp_dir }
    }

    /// 渲染柱状图并返回 PNG 字节
    pub fn render_bar_chart(
        &self,
        title: &str,
        y_label: &str,
        counts: &[(String, usize)],
    ) -> ReportResult<Vec<u8>> {
        let artifact = self.render_to_artifact(title, y_label, counts)?;
        artifact.read_bytes()
    }

    /// 渲染柱状图到临时 PNG 文件
    ///
    /// # 参数
    /// - title: 图表标题
    /// - y_label: 纵轴说明
    /// - counts: (分类显示名称, 数量)，每个分类一根柱
    ///
    /// # 说明
    /// 系统缺少可用字体时退化为无文字的纯柱状图,不中断导出
    pub fn render_to_artifact(
        &self,
        title: &str,
        y_label: &str,
        counts: &[(String, usize)],
    ) -> ReportResult<ChartArtifact> {
        if counts.is_empty() {
            return Err(ReportError::ChartRenderError(format!(
                "图表 '{}' 没有可绘制的分类",
                title
            )));
        }

        let mut builder = tempfile::Builder::new();
        builder.prefix("grafico_").suffix(".png");
        let file = match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };

        let size = (self.config.width_px, self.config.height_px);
        let (r, g, b) = self.config.bar_rgb;
        let bar_color = RGBColor(r, g, b);

        let labeled = {
            let root = BitMapBackend::new(file.path(), size).into_drawing_area();
            draw_labeled_chart(&root, title, y_label, counts, bar_color)
                .and_then(|_| root.present())
        };

        match labeled {
            Ok(()) => {}
            Err(DrawingAreaErrorKind::BackendError(DrawingErrorKind::FontError(err))) => {
                warn!(chart = title, error = %err, "字体不可用,图表改为无文字渲染");
                let root = BitMapBackend::new(file.path(), size).into_drawing_area();
                draw_bars_only(&root, counts, bar_color)
                    .and_then(|_| root.present())
                    .map_err(|e| ReportError::ChartRenderError(e.to_string()))?;
            }
            Err(err) => return Err(ReportError::ChartRenderError(err.to_string())),
        }

        debug!(chart = title, path = %file.path().display(), bars = counts.len(), "图表已渲染");
        Ok(ChartArtifact { file })
    }
}

fn y_upper_bound(counts: &[(String, usize)]) -> u32 {
    counts.iter().map(|(_, count)| *count).max().unwrap_or(0) as u32 + 1
}

fn draw_labeled_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    title: &str,
    y_label: &str,
    counts: &[(String, usize)],
    bar_color: RGBColor,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d((0..counts.len()).into_segmented(), 0u32..y_upper_bound(counts))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(counts.len())
        .x_label_formatter(&|value| match value {
            SegmentValue::CenterOf(index) => counts
                .get(*index)
                .map(|(label, _)| label.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .y_desc(y_label)
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(bar_color.filled())
            .margin(12)
            .data(counts.iter().enumerate().map(|(i, (_, count))| (i, *count as u32))),
    )?;

    Ok(())
}

fn draw_bars_only<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    counts: &[(String, usize)],
    bar_color: RGBColor,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .margin(16)
        .build_cartesian_2d((0..counts.len()).into_segmented(), 0u32..y_upper_bound(counts))?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(bar_color.filled())
            .margin(12)
            .data(counts.iter().enumerate().map(|(i, (_, count))| (i, *count as u32))),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn counts() -> Vec<(String, usize)> {
        vec![("Gats".to_string(), 2), ("Ford".to_string(), 1)]
    }

    #[test]
    fn test_render_bar_chart_produces_png() {
        let renderer = ChartRenderer::new(ChartConfig::default(), None);
        let bytes = renderer
            .render_bar_chart("Órdenes por Área", "Cantidad", &counts())
            .unwrap();

        assert!(bytes.starts_with(&PNG_MAGIC));
    }

    #[test]
    fn test_artifact_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = ChartRenderer::new(ChartConfig::default(), Some(dir.path().to_path_buf()));

        let artifact = renderer
            .render_to_artifact("Órdenes por Estatus", "Cantidad", &counts())
            .unwrap();
        let path = artifact.path().to_path_buf();
        assert!(path.exists());
        assert!(path.starts_with(dir.path()));

        drop(artifact);
        assert!(!path.exists());
    }

    #[test]
    fn test_bars_only_fallback_draws_bars() {
        let (width, height) = (120u32, 90u32);
        let mut buffer = vec![0u8; (width * height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            draw_bars_only(&root, &counts(), RGBColor(31, 119, 180)).unwrap();
            root.present().unwrap();
        }

        // 白底之上至少有柱体像素
        let bar_pixels = buffer
            .chunks(3)
            .filter(|px| px[0] == 31 && px[1] == 119 && px[2] == 180)
            .count();
        assert!(bar_pixels > 0);
        assert!(buffer.chunks(3).any(|px| px == [255, 255, 255]));
    }

    #[test]
    fn test_empty_counts_rejected() {
        let renderer = ChartRenderer::new(ChartConfig::default(), None);
        let result = renderer.render_bar_chart("vacío", "Cantidad", &[]);
        assert!(matches!(result, Err(ReportError::ChartRenderError(_))));
    }
}
