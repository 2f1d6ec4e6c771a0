// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod text;

use clap::{Parser, Subcommand, ValueEnum};
use leavecal::{
    CalendarPage, Clock, DisplayBudget, LeaveRow, MonthCursor, MonthGrid, SeedData, SortKey,
    SystemClock, TableFilter,
};
use leavecal_domain::{DateKey, Holiday, LeaveStatus, YearMonth};
use time::{Date, Month};
use tracing::{debug, info};

/// leavecal - leave and attendance calendar viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show one month of the calendar
    Month(MonthArgs),
    /// List leave requests
    Requests(RequestsArgs),
    /// List upcoming holidays
    Holidays(HolidaysArgs),
    /// Show the remaining leave balance
    Balance,
}

#[derive(clap::Args, Debug)]
struct MonthArgs {
    /// Year to show. Defaults to the current year
    #[arg(long)]
    year: Option<i32>,

    /// Month to show, 1-12. Defaults to the current month
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
    month: Option<u8>,

    /// Day cell layout preset
    #[arg(long, value_enum, default_value_t = Layout::Wide)]
    layout: Layout,

    /// Events shown per day before the "+N" marker. Overrides the layout
    #[arg(long)]
    max_visible: Option<usize>,

    /// Characters of status text per event. Overrides the layout
    #[arg(long)]
    label_chars: Option<usize>,

    /// Day to select, as YYYY-MM-DD
    #[arg(long)]
    select: Option<DateKey>,

    /// Also mark the days of approved leave requests
    #[arg(long)]
    approved_leave: bool,

    /// Print the month grid as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args, Debug)]
struct RequestsArgs {
    /// Only show requests with this status
    #[arg(long)]
    status: Option<LeaveStatus>,

    /// Only show requests whose type, details, or duration contain this text
    #[arg(long)]
    search: Option<String>,

    /// Order the rows by this column
    #[arg(long, value_enum)]
    sort: Option<SortColumn>,

    /// Print the rows as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args, Debug)]
struct HolidaysArgs {
    /// First day to consider, as YYYY-MM-DD. Defaults to today
    #[arg(long)]
    from: Option<DateKey>,

    /// Maximum number of holidays to list
    #[arg(long, default_value_t = 5)]
    limit: usize,

    /// Print the holidays as JSON
    #[arg(long)]
    json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Layout {
    /// One event of four characters per day
    Narrow,
    /// Two events of six characters per day
    Wide,
}

impl Layout {
    const fn budget(self) -> DisplayBudget {
        match self {
            Self::Narrow => DisplayBudget::narrow(),
            Self::Wide => DisplayBudget::wide(),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SortColumn {
    Days,
    Status,
}

impl From<SortColumn> for SortKey {
    fn from(column: SortColumn) -> Self {
        match column {
            SortColumn::Days => Self::Days,
            SortColumn::Status => Self::Status,
        }
    }
}

impl MonthArgs {
    fn budget(&self) -> DisplayBudget {
        let preset: DisplayBudget = self.layout.budget();
        DisplayBudget::new(
            self.max_visible.unwrap_or(preset.max_visible),
            self.label_chars.unwrap_or(preset.label_chars),
        )
    }

    /// The cursor to open the page on, or `None` to stay on today.
    fn cursor(&self, today: Date) -> Result<Option<MonthCursor>, Box<dyn std::error::Error>> {
        if self.year.is_none() && self.month.is_none() && self.select.is_none() {
            return Ok(None);
        }

        let selected: Date = self.select.as_ref().map_or(today, DateKey::date);
        let shown: YearMonth = YearMonth::containing(selected);
        let month: Month = match self.month {
            Some(number) => Month::try_from(number)?,
            None => shown.month(),
        };
        let displayed: YearMonth = YearMonth::new(self.year.unwrap_or_else(|| shown.year()), month);

        Ok(Some(MonthCursor::with_month(selected, displayed)))
    }
}

fn run_month(args: &MonthArgs, clock: &dyn Clock) -> Result<(), Box<dyn std::error::Error>> {
    let budget: DisplayBudget = args.budget();
    debug!(?budget, "Using day cell budget");

    let mut page: CalendarPage = CalendarPage::load(&SeedData, clock, budget)?;
    if let Some(cursor) = args.cursor(clock.today())? {
        page.set_cursor(cursor);
    }
    if args.approved_leave {
        let added: usize = page.show_approved_leave();
        debug!(added, "Marked approved leave");
    }
    let grid: MonthGrid = page.grid(clock)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
    } else {
        print!("{}", text::month(&grid, CalendarPage::legend()));
    }
    Ok(())
}

fn run_requests(args: &RequestsArgs, clock: &dyn Clock) -> Result<(), Box<dyn std::error::Error>> {
    let page: CalendarPage = CalendarPage::load(&SeedData, clock, DisplayBudget::default())?;
    let filter: TableFilter = TableFilter {
        status: args.status,
        search: args.search.clone(),
        sort: args.sort.map(SortKey::from),
    };
    let rows: Vec<LeaveRow<'_>> = page.table().query(&filter);
    debug!(rows = rows.len(), "Filtered leave requests");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", text::requests(&rows));
    }
    Ok(())
}

fn run_holidays(args: &HolidaysArgs, clock: &dyn Clock) -> Result<(), Box<dyn std::error::Error>> {
    let page: CalendarPage = CalendarPage::load(&SeedData, clock, DisplayBudget::default())?;
    let from: Date = args.from.as_ref().map_or_else(|| clock.today(), DateKey::date);
    let holidays: Vec<&Holiday> = page.upcoming_holidays(from, args.limit);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&holidays)?);
    } else {
        print!("{}", text::holidays(&holidays));
    }
    Ok(())
}

fn run_balance(clock: &dyn Clock) -> Result<(), Box<dyn std::error::Error>> {
    let page: CalendarPage = CalendarPage::load(&SeedData, clock, DisplayBudget::default())?;
    print!("{}", text::balance(&page.balance()));
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting leavecal");

    let clock: SystemClock = SystemClock;
    match &args.command {
        Command::Month(month) => run_month(month, &clock),
        Command::Requests(requests) => run_requests(requests, &clock),
        Command::Holidays(holidays) => run_holidays(holidays, &clock),
        Command::Balance => run_balance(&clock),
    }
}
