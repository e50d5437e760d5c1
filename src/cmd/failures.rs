//! Failure records, hotspots and analysis for `quality-iq failures`.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;

use qiq_common::{FailureHotspot, Sector};
use quality_iq::analytics::{Heatmap, TrendChart};
use quality_iq::columns::{failure_columns, hotspot_columns};
use quality_iq::details::RecordRef;
use quality_iq::filters::{RecordFilter, count_by_status, filter_by_sector};
use quality_iq::grid::{GridView, render_text};
use quality_iq::records::{FAILURE_TEXT_FIELDS, HOTSPOT_TEXT_FIELDS, STATUS_FIELD};
use quality_iq::ui::charts::{render_heatmap, render_trend};
use quality_iq::ui::icons::{CHART, FIRE, WRENCH};
use quality_iq::ui::panels::heading;

use super::{Context, apply_sorts, emit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureTab {
    #[default]
    Records,
    Hotspots,
    Analysis,
}

impl fmt::Display for FailureTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureTab::Records => write!(f, "records"),
            FailureTab::Hotspots => write!(f, "hotspots"),
            FailureTab::Analysis => write!(f, "analysis"),
        }
    }
}

impl FromStr for FailureTab {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "records" => Ok(FailureTab::Records),
            "hotspots" => Ok(FailureTab::Hotspots),
            "analysis" => Ok(FailureTab::Analysis),
            _ => anyhow::bail!(
                "Invalid tab '{}'. Valid values: records, hotspots, analysis",
                s
            ),
        }
    }
}

pub fn cmd_failures(
    ctx: &Context,
    search: Option<&str>,
    tab: FailureTab,
    sorts: &[String],
) -> Result<()> {
    tracing::debug!(tab = %tab, "failures view");
    match tab {
        FailureTab::Records => records(ctx, search.unwrap_or_default(), sorts),
        FailureTab::Hotspots => hotspots(ctx, search.unwrap_or_default(), sorts),
        FailureTab::Analysis => {
            if !sorts.is_empty() {
                anyhow::bail!("--sort applies to the records and hotspots tabs only");
            }
            analysis(ctx)
        }
    }
}

#[derive(Serialize)]
struct RecordsView {
    sector: Sector,
    filter: RecordFilter,
    open: usize,
    resolved: usize,
    grid: GridView,
}

fn records(ctx: &Context, search: &str, sorts: &[String]) -> Result<()> {
    let sector = ctx.session.sector;
    let filter = RecordFilter::new(sector).with_query(search);
    let counts = count_by_status(&filter_by_sector(&ctx.data.failures, sector), STATUS_FIELD);
    let records = filter.apply(&ctx.data.failures, FAILURE_TEXT_FIELDS, STATUS_FIELD);

    let mut grid = ctx.grid(failure_columns(&ctx.config.column_options()));
    apply_sorts(&mut grid, sorts)?;

    let view = RecordsView {
        sector,
        filter,
        open: counts.get("open").copied().unwrap_or(0),
        resolved: counts.get("resolved").copied().unwrap_or(0),
        grid: grid.render(&records),
    };

    emit(ctx.format, &view, || {
        let mut out = heading(FIRE, &format!("Failure Records · {}", sector.title()));
        out.push('\n');
        out.push_str(&format!("Open {}  Resolved {}\n\n", view.open, view.resolved));
        out.push_str(&render_text(&view.grid, &ctx.render));
        out
    })
}

#[derive(Serialize)]
struct HotspotsView {
    sector: Sector,
    grid: GridView,
    hotspots: Vec<FailureHotspot>,
}

fn hotspots(ctx: &Context, search: &str, sorts: &[String]) -> Result<()> {
    let sector = ctx.session.sector;
    let records = RecordFilter::new(sector)
        .with_query(search)
        .apply(&ctx.data.hotspots, HOTSPOT_TEXT_FIELDS, STATUS_FIELD);

    let mut grid = ctx.grid(hotspot_columns(&ctx.config.column_options()));
    apply_sorts(&mut grid, sorts)?;
    let hotspots: Vec<FailureHotspot> = grid.sorted(&records).into_iter().cloned().collect();

    let view = HotspotsView {
        sector,
        grid: grid.render(&records),
        hotspots,
    };

    emit(ctx.format, &view, || {
        let mut out = heading(WRENCH, &format!("Failure Hotspots · {}", sector.title()));
        out.push_str("\n\n");
        out.push_str(&render_text(&view.grid, &ctx.render));
        let width = ctx.render.max_width;
        for hotspot in &view.hotspots {
            out.push('\n');
            let panel = RecordRef::Hotspot(hotspot).panel(&ctx.data, ctx.config.date_format());
            out.push_str(&panel.render(width));
        }
        out
    })
}

#[derive(Serialize)]
struct AnalysisView {
    sector: Sector,
    heatmap: Heatmap,
    trend: TrendChart,
}

fn analysis(ctx: &Context) -> Result<()> {
    let sector = ctx.session.sector;
    let view = AnalysisView {
        sector,
        heatmap: Heatmap::build(ctx.data.heatmap(sector)),
        trend: TrendChart::new(ctx.data.trend_labels.clone(), ctx.data.trend.clone()),
    };

    emit(ctx.format, &view, || {
        let mut out = heading(FIRE, &format!("Failure Heatmap · {}", sector.title()));
        out.push_str("\n\n");
        if view.heatmap.is_empty() {
            out.push_str(quality_iq::grid::NO_DATA);
            out.push('\n');
        } else {
            out.push_str(&render_heatmap(&view.heatmap));
        }
        out.push_str(&heading(CHART, "Failure Trend"));
        out.push_str("\n\n");
        out.push_str(&render_trend(&view.trend));
        out
    })
}
