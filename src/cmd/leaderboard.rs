//! Ranked inspectors for `quality-iq leaderboard`.

use std::collections::HashMap;

use anyhow::Result;
use serde::Serialize;

use qiq_common::LeaderboardEntry;
use quality_iq::analytics::top_entries;
use quality_iq::columns::leaderboard_columns;
use quality_iq::grid::{Column, GridView, render_text};
use quality_iq::ui::icons::TROPHY;
use quality_iq::ui::panels::heading;

use super::{Context, apply_sorts, emit};

#[derive(Serialize)]
struct LeaderboardView {
    limit: usize,
    grid: GridView,
}

pub fn cmd_leaderboard(ctx: &Context, limit: Option<usize>, sorts: &[String]) -> Result<()> {
    let limit = limit.unwrap_or_else(|| ctx.config.leaderboard_limit());
    let ranked = top_entries(&ctx.data.leaderboard, limit);

    let medals: HashMap<String, String> = ranked
        .iter()
        .map(|r| (r.entry.id.clone(), r.medal()))
        .collect();
    let entries: Vec<LeaderboardEntry> = ranked.into_iter().map(|r| r.entry).collect();

    let mut columns = vec![Column::derived("Rank", move |e: &LeaderboardEntry| {
        medals.get(&e.id).cloned().unwrap_or_default()
    })];
    columns.extend(leaderboard_columns());

    let mut grid = ctx.grid(columns);
    apply_sorts(&mut grid, sorts)?;

    let view = LeaderboardView {
        limit,
        grid: grid.render(&entries),
    };

    emit(ctx.format, &view, || {
        let mut out = heading(TROPHY, "Quality Leaderboard");
        out.push_str("\n\n");
        out.push_str(&render_text(&view.grid, &ctx.render));
        out
    })
}
