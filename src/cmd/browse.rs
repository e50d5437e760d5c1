//! Interactive grid for `quality-iq browse`.
//!
//! Each round renders the grid and offers a menu: picking a sortable header
//! clicks it, picking a row opens that record's detail panel.

use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use dialoguer::{Select, theme::ColorfulTheme};

use quality_iq::columns::{
    certification_columns, checklist_columns, failure_columns, hotspot_columns,
};
use quality_iq::details::{RecordKind, find};
use quality_iq::filters::filter_by_sector;
use quality_iq::grid::{Column, DataGrid, Record, render_text};
use quality_iq::records::KEY_FIELD;

use super::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseTarget {
    Checklists,
    Failures,
    Hotspots,
    Certifications,
}

impl BrowseTarget {
    fn kind(&self) -> RecordKind {
        match self {
            BrowseTarget::Checklists => RecordKind::Checklist,
            BrowseTarget::Failures => RecordKind::Failure,
            BrowseTarget::Hotspots => RecordKind::Hotspot,
            BrowseTarget::Certifications => RecordKind::Certification,
        }
    }
}

impl fmt::Display for BrowseTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowseTarget::Checklists => write!(f, "checklists"),
            BrowseTarget::Failures => write!(f, "failures"),
            BrowseTarget::Hotspots => write!(f, "hotspots"),
            BrowseTarget::Certifications => write!(f, "certifications"),
        }
    }
}

impl FromStr for BrowseTarget {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "checklists" => Ok(BrowseTarget::Checklists),
            "failures" => Ok(BrowseTarget::Failures),
            "hotspots" => Ok(BrowseTarget::Hotspots),
            "certifications" => Ok(BrowseTarget::Certifications),
            _ => anyhow::bail!(
                "Invalid target '{}'. Valid values: checklists, failures, hotspots, certifications",
                s
            ),
        }
    }
}

pub fn cmd_browse(ctx: &Context, target: BrowseTarget) -> Result<()> {
    if !console::Term::stdout().is_term() {
        anyhow::bail!("browse needs an interactive terminal; use `show` or --format json instead");
    }

    let sector = ctx.session.sector;
    let options = ctx.config.column_options();
    let data = &ctx.data;
    match target {
        BrowseTarget::Checklists => browse(
            ctx,
            target,
            &filter_by_sector(&data.checklists, sector),
            checklist_columns(&options),
        ),
        BrowseTarget::Failures => browse(
            ctx,
            target,
            &filter_by_sector(&data.failures, sector),
            failure_columns(&options),
        ),
        BrowseTarget::Hotspots => browse(
            ctx,
            target,
            &filter_by_sector(&data.hotspots, sector),
            hotspot_columns(&options),
        ),
        BrowseTarget::Certifications => browse(
            ctx,
            target,
            &filter_by_sector(&data.certifications, sector),
            certification_columns(),
        ),
    }
}

enum Choice {
    Header(usize),
    Row(usize),
    Quit,
}

fn browse<T: Record>(
    ctx: &Context,
    target: BrowseTarget,
    records: &[T],
    columns: Vec<Column<T>>,
) -> Result<()> {
    let opened: RefCell<Option<String>> = RefCell::new(None);
    let mut grid: DataGrid<'_, T> = ctx.grid(columns).with_row_click(|record: &T| {
        *opened.borrow_mut() = record.field(KEY_FIELD).map(|v| v.to_string());
    });
    let theme = ColorfulTheme::default();

    loop {
        let view = grid.render(records);
        println!();
        println!("{}", render_text(&view, &ctx.render));

        let mut labels = Vec::new();
        let mut choices = Vec::new();
        for (i, column) in grid.columns().iter().enumerate() {
            if column.is_sortable() {
                labels.push(format!("Sort by {}", column.label));
                choices.push(Choice::Header(i));
            }
        }
        for (i, key) in view.keys().iter().enumerate() {
            labels.push(format!("Open [{}] {}", i + 1, key));
            choices.push(Choice::Row(i));
        }
        labels.push("Quit".to_string());
        choices.push(Choice::Quit);

        let selection = Select::with_theme(&theme)
            .with_prompt(format!("Browse {target}"))
            .items(&labels)
            .default(0)
            .interact_opt()?;

        match selection.and_then(|i| choices.get(i)) {
            Some(Choice::Header(i)) => {
                grid.click_header(*i);
            }
            Some(Choice::Row(i)) => {
                if grid.click_row(records, *i)? {
                    let key = opened.borrow_mut().take();
                    if let Some(key) = key {
                        let record = find(&ctx.data, target.kind(), &key)?;
                        println!();
                        print!(
                            "{}",
                            record
                                .panel(&ctx.data, ctx.config.date_format())
                                .render(ctx.render.max_width)
                        );
                    }
                }
            }
            Some(Choice::Quit) | None => break,
        }
    }

    Ok(())
}
