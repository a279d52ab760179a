//! Report specification models and top-level error types.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use salidas_io_xlsx::SpecXlsxReport;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::conf::C_DATE_FORMAT;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Material-type discriminator of one exit.
///
/// Upstream sends an open string; unknown codes land in `Other` so they stay
/// visible in the `All` view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EnumMaterialType {
    /// `ERSA` spare parts.
    Ersa,
    /// `UNBW` non-valuated material.
    Unbw,
    /// Any other upstream code, kept verbatim.
    Other(String),
}

impl EnumMaterialType {
    /// Upstream code as written in the source data.
    pub fn code(&self) -> &str {
        match self {
            Self::Ersa => "ERSA",
            Self::Unbw => "UNBW",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for EnumMaterialType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "ERSA" => Self::Ersa,
            "UNBW" => Self::Unbw,
            _ => Self::Other(code),
        }
    }
}

impl From<EnumMaterialType> for String {
    fn from(material_type: EnumMaterialType) -> Self {
        match material_type {
            EnumMaterialType::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for EnumMaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Report view selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumReportCategory {
    /// Every filtered exit.
    All,
    /// Only `ERSA` exits.
    Ersa,
    /// Only `UNBW` exits.
    Unbw,
}

impl EnumReportCategory {
    /// All selectable views, in display order.
    pub const ALL: [EnumReportCategory; 3] = [Self::All, Self::Ersa, Self::Unbw];

    /// File-name tag: `todas`, `ersa` or `unbw`.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::All => "todas",
            Self::Ersa => "ersa",
            Self::Unbw => "unbw",
        }
    }

    /// Sheet-label text: `Todas`, `ERSA` or `UNBW`.
    pub fn display(&self) -> &'static str {
        match self {
            Self::All => "Todas",
            Self::Ersa => "ERSA",
            Self::Unbw => "UNBW",
        }
    }
}

impl fmt::Display for EnumReportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

impl FromStr for EnumReportCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "todas" => Ok(Self::All),
            "ersa" => Ok(Self::Ersa),
            "unbw" => Ok(Self::Unbw),
            other => Err(format!(
                "Unknown report category {other:?}; expected all, ersa or unbw."
            )),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Records

/// One material exit as supplied by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecMaterialExit {
    /// Unique identifier.
    pub id: String,
    /// Calendar date of the exit, `YYYY-MM-DD`.
    pub exit_date: String,
    /// Time of day, display only.
    pub exit_time: String,
    /// Material category discriminator.
    pub material_type: EnumMaterialType,
    pub material_code: String,
    pub material_name: String,
    pub material_location: String,
    /// Amount removed.
    pub quantity: f64,
    /// Amount left after the exit.
    pub remaining_stock: f64,
    pub person_name: String,
    pub person_last_name: String,
    /// Destination organizational unit.
    pub area: String,
    /// Cost center.
    #[serde(default)]
    pub ceco: Option<String>,
    #[serde(default)]
    pub sap_code: Option<String>,
    #[serde(default)]
    pub work_order: Option<String>,
    /// Creation timestamp; ordering only.
    #[serde(default)]
    pub created_at: String,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region DateWindow

/// Inclusive `[from, to]` date window; `None` leaves that side unbounded.
///
/// An inverted window (`from > to`) is accepted and selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecDateWindow {
    /// Lower bound (inclusive).
    pub from: Option<NaiveDate>,
    /// Upper bound (inclusive).
    pub to: Option<NaiveDate>,
}

impl SpecDateWindow {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Window with no bounds at all.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Window covering `n_days` before `today` up to `today`, both inclusive.
    pub fn last_days(today: NaiveDate, n_days: u64) -> Self {
        Self {
            from: today.checked_sub_days(Days::new(n_days)),
            to: Some(today),
        }
    }

    /// Parse literal `YYYY-MM-DD` bounds; blank strings mean unbounded.
    pub fn parse(from: &str, to: &str) -> Result<Self, ReportError> {
        Ok(Self {
            from: parse_window_bound(from)?,
            to: parse_window_bound(to)?,
        })
    }

    /// Whether `date` falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.from
            && date < from
        {
            return false;
        }
        if let Some(to) = self.to
            && date > to
        {
            return false;
        }
        true
    }

    /// Whether both bounds are set and `from > to`.
    pub fn is_inverted(&self) -> bool {
        matches!((self.from, self.to), (Some(from), Some(to)) if from > to)
    }

    /// Literal bound strings, empty when unbounded.
    pub fn bound_strings(&self) -> (String, String) {
        let format_bound = |bound: Option<NaiveDate>| {
            bound
                .map(|date| date.format(C_DATE_FORMAT).to_string())
                .unwrap_or_default()
        };
        (format_bound(self.from), format_bound(self.to))
    }
}

fn parse_window_bound(value: &str) -> Result<Option<NaiveDate>, ReportError> {
    let c_value = value.trim();
    if c_value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(c_value, C_DATE_FORMAT)
        .map(Some)
        .map_err(|_| ReportError::InvalidWindowBound {
            value: value.to_string(),
        })
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region TableAndArtifact

/// One column of the export schema.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecColumn {
    /// Header label.
    pub label: &'static str,
    /// Display width in character units.
    pub width: f64,
}

impl SpecColumn {
    pub const fn new(label: &'static str, width: f64) -> Self {
        Self { label, width }
    }
}

/// Fixed 14-column projection of a [`SpecMaterialExit`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpecExportRow {
    pub exit_date: String,
    pub exit_time: String,
    pub material_type: String,
    pub material_code: String,
    pub material_name: String,
    pub material_location: String,
    pub quantity: f64,
    pub remaining_stock: f64,
    pub person_name: String,
    pub person_last_name: String,
    pub area: String,
    /// Empty when the record has no cost center.
    pub ceco: String,
    pub sap_code: String,
    pub work_order: String,
}

/// Filtered counters shown before exporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecReportSummary {
    /// Records inside the window.
    pub cnt_total: usize,
    pub cnt_ersa: usize,
    pub cnt_unbw: usize,
    /// Records with an unknown material type.
    pub cnt_other: usize,
    /// Records dropped for an unparseable `exitDate`.
    pub cnt_malformed: usize,
}

/// One generated spreadsheet, ready for a download sink.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecArtifact {
    /// Category the artifact was produced for.
    pub category: EnumReportCategory,
    /// Deterministic output file name.
    pub file_name: String,
    /// Worksheet label.
    pub sheet_name: String,
    /// XLSX payload.
    pub bytes: Vec<u8>,
    /// Data rows below the header.
    pub n_rows: usize,
    /// Records dropped for an unparseable `exitDate`.
    pub cnt_malformed: usize,
    /// Kernel write report.
    pub report: SpecXlsxReport,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Pipeline failures surfaced to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// The requested category has no rows inside the window.
    #[error("no exits to export for category {category} in the selected window")]
    EmptySelection {
        /// Requested category.
        category: EnumReportCategory,
    },
    /// A window bound is not a `YYYY-MM-DD` date.
    #[error("invalid window bound {value:?}: expected YYYY-MM-DD")]
    InvalidWindowBound {
        /// Offending literal.
        value: String,
    },
    /// The encoder could not represent a row.
    #[error("spreadsheet serialization failed: {0}")]
    Serialization(String),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
