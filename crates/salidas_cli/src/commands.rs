//! `summary` and `export` command bodies.

use std::path::PathBuf;

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use salidas_report::conf::C_MSG_EMPTY_SELECTION;
use salidas_report::{
    EnumReportCategory, N_ROWS_PREVIEW, ReportError, ReportSelection, SpecDateWindow,
    SpecReportSummary, build_preview,
};
use tracing::{info, warn};

use crate::error::CliError;
use crate::sink::ArtifactSink;
use crate::store::RecordStore;

const C_MSG_NO_RECORDS: &str = "No hay salidas de materiales en el rango de fechas seleccionado.";

/// Result of one `export` run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecExportOutcome {
    /// Delivered artifacts, in request order.
    pub written: Vec<(EnumReportCategory, PathBuf)>,
    /// Categories skipped for having no rows.
    pub skipped: Vec<EnumReportCategory>,
}

/// Counters plus a preview of the newest exits, rendered as text.
pub fn run_summary(
    store: &dyn RecordStore,
    window: &SpecDateWindow,
) -> Result<(SpecReportSummary, String), CliError> {
    let records = store.fetch_exits()?;
    let selection = ReportSelection::new(&records, window);
    let summary = selection.summary();
    Ok((summary, render_summary(&selection, &summary)))
}

fn render_summary(selection: &ReportSelection<'_>, summary: &SpecReportSummary) -> String {
    let (c_from, c_to) = selection.window().bound_strings();
    let mut l_lines = vec![
        format!("Rango: {c_from} .. {c_to}"),
        format!("Total Salidas: {}", summary.cnt_total),
        format!("Salidas ERSA: {}", summary.cnt_ersa),
        format!("Salidas UNBW: {}", summary.cnt_unbw),
    ];
    if summary.cnt_other > 0 {
        l_lines.push(format!("Otros tipos: {}", summary.cnt_other));
    }
    if summary.cnt_malformed > 0 {
        l_lines.push(format!("Fechas inválidas: {}", summary.cnt_malformed));
    }

    if summary.cnt_total == 0 {
        l_lines.push(String::new());
        l_lines.push(C_MSG_NO_RECORDS.to_string());
        return l_lines.join("\n");
    }

    let preview = build_preview(selection.records(EnumReportCategory::All), N_ROWS_PREVIEW);

    l_lines.push(String::new());
    l_lines.push("Fecha\tTipo\tMaterial\tCantidad\tPersona\tÁrea".to_string());
    for row in &preview.rows {
        l_lines.push(format!(
            "{} {}\t{}\t{}\t{}\t{} {}\t{}",
            row.exit_date,
            row.exit_time,
            row.material_type,
            row.material_name,
            row.quantity,
            row.person_name,
            row.person_last_name,
            row.area
        ));
    }
    if preview.cnt_remaining > 0 {
        l_lines.push(format!("...y {} salidas más", preview.cnt_remaining));
    }
    l_lines.join("\n")
}

/// Produce and deliver one spreadsheet per category.
///
/// Records are filtered and categorized once; only the per-category build
/// and delivery run on the pool. Empty categories are skipped with a warning.
/// The run fails only when nothing at all was delivered, or on a
/// serialization or sink failure.
pub fn run_export(
    store: &dyn RecordStore,
    sink: &dyn ArtifactSink,
    window: &SpecDateWindow,
    categories: &[EnumReportCategory],
    n_workers_max: usize,
) -> Result<SpecExportOutcome, CliError> {
    let records = store.fetch_exits()?;
    if window.is_inverted() {
        warn!(?window, "window start is after its end; nothing will match");
    }

    let selection = ReportSelection::new(&records, window);

    let export_one = |category: &EnumReportCategory| -> Result<Option<PathBuf>, CliError> {
        match selection.produce(*category) {
            Ok(artifact) => sink.deliver(&artifact).map(Some),
            Err(ReportError::EmptySelection { .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    };

    let thread_pool = ThreadPoolBuilder::new().num_threads(n_workers_max).build();
    let l_results: Vec<Result<Option<PathBuf>, CliError>> = match thread_pool {
        Ok(thread_pool) => thread_pool.install(|| categories.par_iter().map(export_one).collect()),
        Err(e) => {
            warn!(error = %e, "failed to build export pool; exporting serially");
            categories.iter().map(export_one).collect()
        }
    };

    let mut outcome = SpecExportOutcome::default();
    for (category, result) in categories.iter().zip(l_results) {
        match result? {
            Some(path_file) => outcome.written.push((*category, path_file)),
            None => {
                warn!(%category, "{C_MSG_EMPTY_SELECTION}");
                outcome.skipped.push(*category);
            }
        }
    }

    if outcome.written.is_empty() {
        return Err(CliError::NothingExported(C_MSG_EMPTY_SELECTION.to_string()));
    }
    info!(
        n_written = outcome.written.len(),
        n_skipped = outcome.skipped.len(),
        "export finished"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use salidas_report::{EnumMaterialType, SpecArtifact, SpecMaterialExit};

    use super::*;

    struct MemoryStore(Vec<SpecMaterialExit>);

    impl RecordStore for MemoryStore {
        fn fetch_exits(&self) -> Result<Vec<SpecMaterialExit>, CliError> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct MemorySink(Mutex<Vec<String>>);

    impl ArtifactSink for MemorySink {
        fn deliver(&self, artifact: &SpecArtifact) -> Result<PathBuf, CliError> {
            if let Ok(mut l_names) = self.0.lock() {
                l_names.push(artifact.file_name.clone());
            }
            Ok(PathBuf::from(&artifact.file_name))
        }
    }

    fn create_exit(id: usize, exit_date: &str, material_type: &str) -> SpecMaterialExit {
        SpecMaterialExit {
            id: format!("e{id}"),
            exit_date: exit_date.to_string(),
            exit_time: "10:00".to_string(),
            material_type: EnumMaterialType::from(material_type.to_string()),
            material_code: format!("M-{id}"),
            material_name: format!("Material {id}"),
            material_location: "A-1".to_string(),
            quantity: 1.0,
            remaining_stock: 9.0,
            person_name: "Ana".to_string(),
            person_last_name: "Rojas".to_string(),
            area: "Planta".to_string(),
            ceco: None,
            sap_code: None,
            work_order: None,
            created_at: String::new(),
        }
    }

    fn january() -> SpecDateWindow {
        SpecDateWindow::parse("2024-01-01", "2024-01-31").expect("window")
    }

    #[test]
    fn summary_shows_counts_and_truncated_preview() {
        let mut records: Vec<SpecMaterialExit> = (1..=12)
            .map(|i| create_exit(i, "2024-01-10", "ERSA"))
            .collect();
        records.push(create_exit(13, "2024-01-11", "UNBW"));
        records.push(create_exit(14, "2024-03-01", "UNBW"));

        let (summary, c_text) = run_summary(&MemoryStore(records), &january()).expect("summary");
        assert_eq!(summary.cnt_total, 13);
        assert_eq!(summary.cnt_ersa, 12);
        assert_eq!(summary.cnt_unbw, 1);
        assert!(c_text.contains("Rango: 2024-01-01 .. 2024-01-31"));
        assert!(c_text.contains("Total Salidas: 13"));
        assert!(c_text.contains("2024-01-10 10:00\tERSA\tMaterial 1\t1\tAna Rojas\tPlanta"));
        assert!(!c_text.contains("Material 11"));
        assert!(c_text.ends_with("...y 3 salidas más"));
        assert!(!c_text.contains("Otros tipos"));
    }

    #[test]
    fn summary_of_empty_window_says_so() {
        let records = vec![create_exit(1, "2023-12-31", "ERSA")];
        let (summary, c_text) = run_summary(&MemoryStore(records), &january()).expect("summary");
        assert_eq!(summary, SpecReportSummary::default());
        assert!(c_text.ends_with(C_MSG_NO_RECORDS));
    }

    #[test]
    fn export_skips_empty_categories() {
        let store = MemoryStore(vec![
            create_exit(1, "2024-01-05", "ERSA"),
            create_exit(2, "2024-01-06", "ERSA"),
        ]);
        let sink = MemorySink::default();

        let outcome = run_export(&store, &sink, &january(), &EnumReportCategory::ALL, 2)
            .expect("export");
        assert_eq!(
            outcome.written,
            vec![
                (
                    EnumReportCategory::All,
                    PathBuf::from("salidas_materiales_todas_2024-01-01_2024-01-31.xlsx")
                ),
                (
                    EnumReportCategory::Ersa,
                    PathBuf::from("salidas_materiales_ersa_2024-01-01_2024-01-31.xlsx")
                ),
            ]
        );
        assert_eq!(outcome.skipped, vec![EnumReportCategory::Unbw]);
        assert_eq!(sink.0.lock().map(|l| l.len()).unwrap_or_default(), 2);
    }

    #[test]
    fn malformed_record_is_counted_and_does_not_block_export() {
        let store = MemoryStore(vec![
            create_exit(1, "2024-01-05", "ERSA"),
            create_exit(2, "2024-01-06", "UNBW"),
            create_exit(3, "05/01/2024", "ERSA"),
        ]);
        let sink = MemorySink::default();

        let outcome = run_export(&store, &sink, &january(), &EnumReportCategory::ALL, 0)
            .expect("export");
        assert_eq!(outcome.written.len(), 3);
        assert!(outcome.skipped.is_empty());

        let (summary, c_text) = run_summary(&store, &january()).expect("summary");
        assert_eq!(summary.cnt_total, 2);
        assert_eq!(summary.cnt_malformed, 1);
        assert!(c_text.contains("Fechas inválidas: 1"));
    }

    #[test]
    fn export_with_nothing_to_write_fails() {
        let store = MemoryStore(vec![create_exit(1, "2024-01-05", "ERSA")]);
        let sink = MemorySink::default();

        let result = run_export(&store, &sink, &january(), &[EnumReportCategory::Unbw], 0);
        assert!(matches!(result, Err(CliError::NothingExported(_))));
    }
}
