// ==========================================
// 演示数据 - 生成示例报表
// ==========================================
// 用途: 构造一个包含状态变更与删除的示例会话,导出两份报表到当前目录
// ==========================================

use work_order_tracker::{logging, Area, NewWorkOrder, OrderStatus, ReportConfig, Session};

fn main() -> anyhow::Result<()> {
    logging::init();

    let mut session = Session::new(ReportConfig::default());

    let demo = [
        ("Ana", Area::Gats, "Cable calibre 12", "Cambio de luminarias", "Escalera de 3 m"),
        ("Luis", Area::Ford, "Pintura epóxica", "Señalización de pasillos", ""),
        ("Marta", Area::Epu4, "Rodamientos 6204", "Mantenimiento de banda", "Paro de línea 2 h"),
        ("Jorge", Area::Gats, "Tornillería M8", "Fijación de guardas", ""),
        ("Sofía", Area::Ford, "Filtros de aire", "Limpieza de compresores", "Permiso de trabajo"),
    ];
    for (supervisor, area, materials, activities, requirements) in demo {
        session.submit_order(
            NewWorkOrder::new(supervisor, area)
                .materials(materials)
                .activities(activities)
                .requirements(requirements),
        );
    }

    session.update_status(1, OrderStatus::Done);
    session.update_status(3, OrderStatus::InProgress);
    session.delete_order(2);

    let out_dir = std::env::current_dir()?;
    for file in [session.export_excel()?, session.export_pdf()?] {
        let path = file.write_to_dir(&out_dir)?;
        tracing::info!(path = %path.display(), size = file.bytes.len(), "示例报表已写入");
    }

    Ok(())
}
