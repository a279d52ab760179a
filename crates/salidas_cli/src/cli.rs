//! Argument groups shared by the `salidas` subcommands.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use salidas_report::{EnumReportCategory, N_DAYS_WINDOW_DEFAULT, ReportError, SpecDateWindow};

/// Input file and date window.
#[derive(Debug, Clone, Args)]
pub struct WindowArgs {
    /// JSON file with the material exits
    #[arg(short, long, env = "SALIDAS_INPUT")]
    pub input: PathBuf,
    /// First day of the window (YYYY-MM-DD, inclusive)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,
    /// Last day of the window (YYYY-MM-DD, inclusive)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,
    /// Do not fall back to the last 30 days when no bound is given
    #[arg(long)]
    pub no_default_window: bool,
}

impl WindowArgs {
    /// Window from the flags; with no bounds at all it covers the last
    /// [`N_DAYS_WINDOW_DEFAULT`] days up to `today`.
    pub fn resolve_window(&self, today: NaiveDate) -> Result<SpecDateWindow, ReportError> {
        if self.from.is_none() && self.to.is_none() && !self.no_default_window {
            return Ok(SpecDateWindow::last_days(
                today,
                N_DAYS_WINDOW_DEFAULT.unsigned_abs(),
            ));
        }
        SpecDateWindow::parse(
            self.from.as_deref().unwrap_or_default(),
            self.to.as_deref().unwrap_or_default(),
        )
    }
}

#[derive(Debug, Clone, Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub window: WindowArgs,
}

#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub window: WindowArgs,
    /// Category to export: all, ersa or unbw (repeatable; default: every one)
    #[arg(short, long = "category", value_name = "CATEGORY")]
    pub categories: Vec<EnumReportCategory>,
    /// Directory the spreadsheets are written to
    #[arg(short, long, env = "SALIDAS_OUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,
    /// Export workers; 0 lets the pool decide
    #[arg(long, default_value_t = 0)]
    pub workers: usize,
}

impl ExportArgs {
    /// Requested categories without repeats, in request order.
    pub fn resolve_categories(&self) -> Vec<EnumReportCategory> {
        if self.categories.is_empty() {
            return EnumReportCategory::ALL.to_vec();
        }
        let mut l_categories = Vec::with_capacity(self.categories.len());
        for category in &self.categories {
            if !l_categories.contains(category) {
                l_categories.push(*category);
            }
        }
        l_categories
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        export: ExportArgs,
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn no_bounds_defaults_to_last_thirty_days() {
        let harness = Harness::try_parse_from(["salidas", "--input", "x.json"]).expect("parse");
        let window = harness
            .export
            .window
            .resolve_window(ymd(2024, 3, 31))
            .expect("window");
        assert_eq!(window.from, Some(ymd(2024, 3, 1)));
        assert_eq!(window.to, Some(ymd(2024, 3, 31)));
    }

    #[test]
    fn explicit_and_disabled_windows() {
        let harness = Harness::try_parse_from([
            "salidas", "--input", "x.json", "--from", "2024-01-01", "--to", "2024-01-31",
        ])
        .expect("parse");
        let window = harness
            .export
            .window
            .resolve_window(ymd(2030, 1, 1))
            .expect("window");
        assert_eq!(window.bound_strings().0, "2024-01-01");
        assert_eq!(window.bound_strings().1, "2024-01-31");

        let harness =
            Harness::try_parse_from(["salidas", "--input", "x.json", "--no-default-window"])
                .expect("parse");
        let window = harness
            .export
            .window
            .resolve_window(ymd(2030, 1, 1))
            .expect("window");
        assert_eq!(window, SpecDateWindow::unbounded());
    }

    #[test]
    fn bad_bound_is_rejected() {
        let harness =
            Harness::try_parse_from(["salidas", "--input", "x.json", "--from", "31/01/2024"])
                .expect("parse");
        assert!(matches!(
            harness.export.window.resolve_window(ymd(2024, 2, 1)),
            Err(ReportError::InvalidWindowBound { .. })
        ));
    }

    #[test]
    fn categories_parse_and_dedupe() {
        let harness = Harness::try_parse_from([
            "salidas", "--input", "x.json", "-c", "UNBW", "-c", "todas", "-c", "unbw",
        ])
        .expect("parse");
        assert_eq!(
            harness.export.resolve_categories(),
            vec![EnumReportCategory::Unbw, EnumReportCategory::All]
        );

        let harness = Harness::try_parse_from(["salidas", "--input", "x.json"]).expect("parse");
        assert_eq!(
            harness.export.resolve_categories(),
            EnumReportCategory::ALL.to_vec()
        );
        assert!(Harness::try_parse_from(["salidas", "--input", "x.json", "-c", "misc"]).is_err());
    }
}
