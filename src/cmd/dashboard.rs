//! Sector overview for `quality-iq dashboard`.

use anyhow::Result;
use serde::Serialize;

use qiq_common::{Certification, Checklist, FailureRecord, Sector};
use quality_iq::analytics::stats::pending;
use quality_iq::analytics::{DashboardStats, RankedEntry, TrendChart, top_entries};
use quality_iq::columns::{checklist_columns, failure_columns};
use quality_iq::grid::render_text;
use quality_iq::ui::badges::{badge, muted};
use quality_iq::ui::charts::{render_compliance, render_trend};
use quality_iq::ui::icons::{CHART, CLIPBOARD, FIRE, SHIELD, TROPHY, USER};
use quality_iq::ui::panels::{StatCard, heading, render_cards};

use super::{Context, emit};

#[derive(Serialize)]
struct DashboardView<'a> {
    user: &'a str,
    sector: Sector,
    stats: DashboardStats,
    trend: TrendChart,
    pending_checklists: Vec<&'a Checklist>,
    certifications: Vec<&'a Certification>,
    recent_failures: Vec<&'a FailureRecord>,
    leaderboard: Vec<RankedEntry>,
}

pub fn cmd_dashboard(ctx: &Context) -> Result<()> {
    let sector = ctx.session.sector;
    let data = &ctx.data;
    tracing::debug!(sector = %sector, "rendering dashboard");

    let stats = DashboardStats::compute(data, sector);
    let trend = TrendChart::new(data.trend_labels.clone(), data.trend.clone());
    let pending_checklists = pending(&data.checklists, sector);
    let certifications = data.certifications_by_sector(sector);

    let recent_failures: Vec<&FailureRecord> =
        data.failures.iter().filter(|f| f.sector == sector).collect();

    let leaderboard = top_entries(&data.leaderboard, ctx.config.leaderboard_limit());

    let view = DashboardView {
        user: &ctx.session.user.name,
        sector,
        stats,
        trend,
        pending_checklists,
        certifications,
        recent_failures,
        leaderboard,
    };

    emit(ctx.format, &view, || render(ctx, &view))
}

fn render(ctx: &Context, view: &DashboardView<'_>) -> String {
    let mut out = String::new();
    let options = ctx.config.column_options();

    out.push_str(&format!(
        "{}{} · {}\n",
        USER,
        console::style(ctx.session.describe()).bold(),
        view.sector.title()
    ));
    out.push('\n');

    let user = &ctx.session.user;
    out.push_str(&render_cards(&[
        StatCard::new("Pending", view.stats.pending_checklists, "checklists"),
        StatCard::new("Open Issues", view.stats.open_issues, "failures"),
        StatCard::new(
            "Compliance",
            format!("{}%", view.stats.compliance_percentage),
            "certifications",
        ),
        StatCard::new("Your Checks", user.stats.checks_completed, "completed"),
    ]));

    out.push_str(&heading(CHART, "Failure Trend"));
    out.push('\n');
    out.push_str(&render_trend(&view.trend));

    out.push_str(&heading(CLIPBOARD, "Pending Checklists"));
    out.push('\n');
    let pending: Vec<Checklist> = view.pending_checklists.iter().map(|c| (*c).clone()).collect();
    let grid = ctx
        .grid(checklist_columns(&options))
        .with_empty_message("All checklists are complete");
    out.push_str(&render_text(&grid.render(&pending), &ctx.render));

    out.push_str(&heading(SHIELD, "Certification Status"));
    out.push('\n');
    out.push_str(&render_compliance(&view.stats.compliance));
    out.push('\n');
    for cert in &view.certifications {
        let expires = cert
            .expires_at
            .map(|t| format!("expires {}", t.format(ctx.config.date_format())))
            .unwrap_or_default();
        out.push_str(&format!(
            "  {} {} {}\n",
            badge(cert.status.as_str()),
            cert.name,
            muted(&expires)
        ));
    }

    out.push_str(&heading(FIRE, "Recent Failures"));
    out.push('\n');
    let recent: Vec<FailureRecord> = view.recent_failures.iter().map(|f| (*f).clone()).collect();
    let grid = ctx
        .grid(failure_columns(&options))
        .with_empty_message("No failures reported");
    out.push_str(&render_text(&grid.render(&recent), &ctx.render));

    out.push_str(&heading(TROPHY, "Leaderboard"));
    out.push('\n');
    if view.leaderboard.is_empty() {
        out.push_str(&format!("{}\n", muted(quality_iq::grid::NO_DATA)));
    }
    for ranked in &view.leaderboard {
        out.push_str(&format!(
            "  {:<3} {:<16} {:>3}  {}\n",
            ranked.medal(),
            ranked.entry.name,
            ranked.entry.score,
            muted(&ranked.entry.department)
        ));
    }

    out
}
