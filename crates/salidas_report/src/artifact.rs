//! Pipeline entry points: records + window + category -> artifact.

use tracing::{debug, info, warn};

use crate::category::{SpecCategorized, categorize};
use crate::filter::filter_by_window;
use crate::naming::{derive_file_name, derive_sheet_name};
use crate::serializer::write_export_sheet;
use crate::spec::{
    EnumReportCategory, ReportError, SpecArtifact, SpecDateWindow, SpecMaterialExit,
    SpecReportSummary,
};
use crate::table::build_rows;

/// One filter and categorize pass over the records, shared by every
/// category built from it.
///
/// Holds only borrows and owned strings, so it can be shared across export
/// workers.
#[derive(Debug, Clone)]
pub struct ReportSelection<'a> {
    window: SpecDateWindow,
    categorized: SpecCategorized<'a>,
    cnt_malformed: usize,
    warnings: Vec<String>,
}

impl<'a> ReportSelection<'a> {
    /// Filter `records` to `window` and split the result by category.
    pub fn new(records: &'a [SpecMaterialExit], window: &SpecDateWindow) -> Self {
        let report_filter = filter_by_window(records, window);
        Self {
            window: *window,
            categorized: categorize(&report_filter.records),
            cnt_malformed: report_filter.cnt_malformed,
            warnings: report_filter.warnings,
        }
    }

    pub fn window(&self) -> &SpecDateWindow {
        &self.window
    }

    /// Selected records of one category, in input order.
    pub fn records(&self, category: EnumReportCategory) -> &[&'a SpecMaterialExit] {
        self.categorized.select(category)
    }

    /// Counters for the window, as shown before exporting.
    pub fn summary(&self) -> SpecReportSummary {
        SpecReportSummary {
            cnt_malformed: self.cnt_malformed,
            ..self.categorized.summary()
        }
    }

    /// Build the spreadsheet for one category.
    ///
    /// Returns [`ReportError::EmptySelection`] when the category has no rows
    /// in the window; no artifact is built in that case.
    pub fn produce(&self, category: EnumReportCategory) -> Result<SpecArtifact, ReportError> {
        let l_selected = self.records(category);
        if l_selected.is_empty() {
            warn!(%category, "no exits to export for category");
            return Err(ReportError::EmptySelection { category });
        }

        let rows = build_rows(l_selected);
        debug!(%category, n_rows = rows.len(), "built export rows");

        let sheet_name = derive_sheet_name(category);
        let (v_bytes, mut report) = write_export_sheet(&rows, &sheet_name)?;
        report.warnings.extend(self.warnings.iter().cloned());

        let file_name = derive_file_name(category, &self.window);
        info!(%category, file_name = %file_name, n_rows = rows.len(), "produced artifact");

        Ok(SpecArtifact {
            category,
            file_name,
            sheet_name,
            bytes: v_bytes,
            n_rows: rows.len(),
            cnt_malformed: self.cnt_malformed,
            report,
        })
    }
}

/// Produce the spreadsheet for one category.
///
/// For several categories over the same records, build one
/// [`ReportSelection`] and call [`ReportSelection::produce`] instead.
pub fn produce_artifact(
    records: &[SpecMaterialExit],
    window: &SpecDateWindow,
    category: EnumReportCategory,
) -> Result<SpecArtifact, ReportError> {
    ReportSelection::new(records, window).produce(category)
}
