//! Compliance overview for `quality-iq certifications`.

use anyhow::Result;
use serde::Serialize;

use qiq_common::{Certification, CertificationStatus, Sector};
use quality_iq::analytics::{ComplianceHealth, ComplianceSummary};
use quality_iq::columns::certification_columns;
use quality_iq::details::RecordRef;
use quality_iq::filters::{filter_by_sector, filter_by_status};
use quality_iq::grid::{GridView, render_text};
use quality_iq::records::STATUS_FIELD;
use quality_iq::ui::charts::render_compliance;
use quality_iq::ui::icons::{SHIELD, WARNING};
use quality_iq::ui::panels::heading;

use super::{Context, apply_sorts, emit};

#[derive(Serialize)]
struct CertificationsView {
    sector: Sector,
    summary: ComplianceSummary,
    percentage: u32,
    health: ComplianceHealth,
    needs_attention: Vec<String>,
    grid: GridView,
    #[serde(skip)]
    cards: Vec<Certification>,
}

pub fn cmd_certifications(
    ctx: &Context,
    status: Option<CertificationStatus>,
    sorts: &[String],
) -> Result<()> {
    let sector = ctx.session.sector;
    let in_sector = filter_by_sector(&ctx.data.certifications, sector);
    let summary = ComplianceSummary::from_certifications(&in_sector);
    let records = filter_by_status(&in_sector, STATUS_FIELD, status.map(|s| s.as_str()));

    let mut grid = ctx.grid(certification_columns());
    apply_sorts(&mut grid, sorts)?;
    let cards: Vec<Certification> = grid.sorted(&records).into_iter().cloned().collect();

    let view = CertificationsView {
        sector,
        summary,
        percentage: summary.percentage(),
        health: summary.health(),
        needs_attention: in_sector
            .iter()
            .filter(|c| c.needs_attention())
            .map(|c| c.name.clone())
            .collect(),
        grid: grid.render(&records),
        cards,
    };
    tracing::debug!(percentage = view.percentage, "compliance computed");

    emit(ctx.format, &view, || {
        let mut out = heading(SHIELD, &format!("Certifications · {}", sector.title()));
        out.push_str("\n\n");
        out.push_str(&render_compliance(&view.summary));
        out.push_str("\n\n");
        out.push_str(&render_text(&view.grid, &ctx.render));
        for cert in &view.cards {
            out.push('\n');
            let panel = RecordRef::Certification(cert).panel(&ctx.data, ctx.config.date_format());
            out.push_str(&panel.render(ctx.render.max_width));
        }
        if !view.needs_attention.is_empty() {
            out.push('\n');
            out.push_str(&format!(
                "{}Needs attention: {}\n",
                WARNING,
                view.needs_attention.join(", ")
            ));
        }
        out
    })
}
