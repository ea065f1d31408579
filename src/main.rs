// ==========================================
// 工作订单跟踪 - 命令行入口
// ==========================================
// 输入: stdin 读取 NewWorkOrder JSON 数组
// 输出: 当前目录写入 reporte_ordenes.xlsx / reporte_ordenes.pdf
// 配置: 当前目录存在 work_order_report.json 时覆写报表参数
// ==========================================

use anyhow::Context;
use std::io::Read;
use work_order_tracker::{logging, NewWorkOrder, ReportConfig, Session};

const CONFIG_FILE: &str = "work_order_report.json";

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", work_order_tracker::APP_NAME);
    tracing::info!("系统版本: {}", work_order_tracker::VERSION);
    tracing::info!("==================================================");

    let config = ReportConfig::load_or_default(CONFIG_FILE)
        .with_context(|| format!("无法加载配置 {}", CONFIG_FILE))?;

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("读取 stdin 失败")?;
    let submissions: Vec<NewWorkOrder> =
        serde_json::from_str(&raw).context("stdin 不是合法的订单 JSON 数组")?;

    let mut session = Session::new(config);
    for submission in submissions {
        session.submit_order(submission);
    }

    if session.orders().is_empty() {
        tracing::warn!("没有订单,不生成报表");
        return Ok(());
    }

    let out_dir = std::env::current_dir()?;
    for file in [session.export_excel()?, session.export_pdf()?] {
        let path = file.write_to_dir(&out_dir)?;
        println!("{} ({}, {} bytes)", path.display(), file.mime_type, file.bytes.len());
    }

    Ok(())
}
