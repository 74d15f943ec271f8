//! Month calendar commands.

use clap::Subcommand;
use std::fmt::Write as _;
use wellnest_core::calendar::{CalendarGrid, WEEKDAY_LABELS};
use wellnest_core::{CalendarView, EventKind, MonthAnchor, WellnessStore};

use super::{Context, StoreHandle};

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Print a month grid
    Show {
        /// Year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Month 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<i32>,
        /// Months to move from the chosen month (negative goes back)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset: i32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List events of the displayed month
    Events {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<i32>,
    },
}

const YEAR_OUT_OF_RANGE: &str = "year out of range";

fn resolve_anchor(
    ctx: &Context,
    year: Option<i32>,
    month: Option<i32>,
    offset: i32,
) -> Result<MonthAnchor, Box<dyn std::error::Error>> {
    let mut view = CalendarView::new(ctx.today);
    if year.is_some() || month.is_some() {
        let current = view.anchor();
        let month0 = match month {
            Some(m) if (1..=12).contains(&m) => m - 1,
            Some(m) => return Err(format!("month must be between 1 and 12, got {m}").into()),
            None => current.month0() as i32,
        };
        let anchor = MonthAnchor::new(year.unwrap_or(current.year()), month0)
            .ok_or(YEAR_OUT_OF_RANGE)?;
        view = CalendarView::at(anchor);
    }
    view.anchor().offset(offset).ok_or_else(|| YEAR_OUT_OF_RANGE.into())
}

fn render(grid: &CalendarGrid, ctx: &Context) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:^42}", grid.anchor().to_string());
    for label in WEEKDAY_LABELS {
        let _ = write!(out, "{label:<6}");
    }
    out.push('\n');

    for row in grid.rows() {
        for cell in row {
            let mark = if grid.is_today(cell, ctx.today) {
                '*'
            } else if cell.in_displayed_month {
                ' '
            } else {
                '~'
            };
            let mut indicators: String = cell
                .visible_events()
                .iter()
                .map(|e| e.kind.indicator())
                .collect();
            if cell.hidden_event_count() > 0 {
                indicators.push('+');
            }
            let _ = write!(out, "{mark}{:>2}{indicators:<3}", cell.day);
        }
        out.push('\n');
    }

    out.push('\n');
    for kind in [EventKind::Task, EventKind::Mood, EventKind::Journal] {
        let _ = write!(out, "{} = {}   ", kind.indicator(), kind.legend());
    }
    out.push_str("* = today   ~ = adjacent month");
    out
}

pub fn run(ctx: &Context, action: CalendarAction) -> Result<(), Box<dyn std::error::Error>> {
    let handle = StoreHandle::open(ctx)?;
    let events = handle.store.event_index();

    match action {
        CalendarAction::Show {
            year,
            month,
            offset,
            json,
        } => {
            let anchor = resolve_anchor(ctx, year, month, offset)?;
            let grid = CalendarGrid::build(anchor, &events).ok_or(YEAR_OUT_OF_RANGE)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&grid)?);
            } else {
                println!("{}", render(&grid, ctx));
            }
        }
        CalendarAction::Events { year, month } => {
            let anchor = resolve_anchor(ctx, year, month, 0)?;
            let grid = CalendarGrid::build(anchor, &events).ok_or(YEAR_OUT_OF_RANGE)?;
            for cell in grid.cells().iter().filter(|c| !c.events.is_empty()) {
                for event in &cell.events {
                    println!("{}  [{}] {}", cell.date, event.kind, event.title);
                }
            }
        }
    }
    Ok(())
}
