//! Checklist grid for `quality-iq checklists`.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;

use qiq_common::{ChecklistStatus, Sector, badge_label};
use quality_iq::columns::checklist_columns;
use quality_iq::filters::{RecordFilter, count_by_status, filter_by_sector};
use quality_iq::grid::{GridView, render_text};
use quality_iq::records::{CHECKLIST_TEXT_FIELDS, STATUS_FIELD};
use quality_iq::ui::badges::paint_status;
use quality_iq::ui::icons::CLIPBOARD;
use quality_iq::ui::panels::heading;

use super::{Context, apply_sorts, emit};

#[derive(Serialize)]
struct ChecklistsView {
    sector: Sector,
    filter: RecordFilter,
    counts: BTreeMap<String, usize>,
    grid: GridView,
}

pub fn cmd_checklists(
    ctx: &Context,
    search: Option<&str>,
    status: Option<ChecklistStatus>,
    sorts: &[String],
) -> Result<()> {
    let sector = ctx.session.sector;
    let filter = RecordFilter::new(sector)
        .with_query(search.unwrap_or_default())
        .with_status(status.map(|s| s.as_str().to_string()));

    let counts = count_by_status(&filter_by_sector(&ctx.data.checklists, sector), STATUS_FIELD);
    let records = filter.apply(&ctx.data.checklists, CHECKLIST_TEXT_FIELDS, STATUS_FIELD);
    tracing::debug!(matched = records.len(), narrowed = filter.is_narrowed(), "checklists filtered");

    let mut grid = ctx.grid(checklist_columns(&ctx.config.column_options()));
    apply_sorts(&mut grid, sorts)?;

    let view = ChecklistsView {
        sector,
        filter,
        counts,
        grid: grid.render(&records),
    };

    emit(ctx.format, &view, || {
        let mut out = heading(CLIPBOARD, &format!("Checklists · {}", sector.title()));
        out.push('\n');
        out.push_str(&status_summary(&view.counts));
        out.push_str("\n\n");
        out.push_str(&render_text(&view.grid, &ctx.render));
        out
    })
}

/// "Pending 1  In Progress 1  Completed 1  Failed 0", every status listed.
fn status_summary(counts: &BTreeMap<String, usize>) -> String {
    ChecklistStatus::ALL
        .iter()
        .map(|status| {
            let wire = status.as_str();
            let count = counts.get(wire).copied().unwrap_or(0);
            paint_status(wire, &format!("{} {}", badge_label(wire), count))
        })
        .collect::<Vec<_>>()
        .join("  ")
}
