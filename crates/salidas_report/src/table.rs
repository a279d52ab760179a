//! 14-column projection of exits and the DataFrame hand-off to the XLSX kernel.

use polars::prelude::{Column, DataFrame};

use crate::conf::COLUMNS;
use crate::spec::{ReportError, SpecExportRow, SpecMaterialExit};

/// First rows of a selection plus how many were left out.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecPreview {
    pub rows: Vec<SpecExportRow>,
    /// Records beyond the preview limit.
    pub cnt_remaining: usize,
}

impl SpecExportRow {
    /// Project one record; absent optional references become `""`.
    pub fn from_record(record: &SpecMaterialExit) -> Self {
        Self {
            exit_date: record.exit_date.clone(),
            exit_time: record.exit_time.clone(),
            material_type: record.material_type.code().to_string(),
            material_code: record.material_code.clone(),
            material_name: record.material_name.clone(),
            material_location: record.material_location.clone(),
            quantity: record.quantity,
            remaining_stock: record.remaining_stock,
            person_name: record.person_name.clone(),
            person_last_name: record.person_last_name.clone(),
            area: record.area.clone(),
            ceco: record.ceco.clone().unwrap_or_default(),
            sap_code: record.sap_code.clone().unwrap_or_default(),
            work_order: record.work_order.clone().unwrap_or_default(),
        }
    }
}

/// Map a selection to export rows, one per record, in input order.
pub fn build_rows(records: &[&SpecMaterialExit]) -> Vec<SpecExportRow> {
    records
        .iter()
        .map(|record| SpecExportRow::from_record(record))
        .collect()
}

/// First `n_rows_max` rows of a selection, for on-screen review.
pub fn build_preview(records: &[&SpecMaterialExit], n_rows_max: usize) -> SpecPreview {
    let n_rows_shown = usize::min(n_rows_max, records.len());
    SpecPreview {
        rows: build_rows(&records[..n_rows_shown]),
        cnt_remaining: records.len() - n_rows_shown,
    }
}

/// Lay export rows out column-wise under the fixed [`COLUMNS`] labels.
///
/// `Cantidad` and `Stock Restante` are `Float64`; every other column is text.
pub fn build_dataframe(rows: &[SpecExportRow]) -> Result<DataFrame, ReportError> {
    let l_columns = vec![
        derive_text_column(rows, 0, |row| &row.exit_date),
        derive_text_column(rows, 1, |row| &row.exit_time),
        derive_text_column(rows, 2, |row| &row.material_type),
        derive_text_column(rows, 3, |row| &row.material_code),
        derive_text_column(rows, 4, |row| &row.material_name),
        derive_text_column(rows, 5, |row| &row.material_location),
        derive_number_column(rows, 6, |row| row.quantity),
        derive_number_column(rows, 7, |row| row.remaining_stock),
        derive_text_column(rows, 8, |row| &row.person_name),
        derive_text_column(rows, 9, |row| &row.person_last_name),
        derive_text_column(rows, 10, |row| &row.area),
        derive_text_column(rows, 11, |row| &row.ceco),
        derive_text_column(rows, 12, |row| &row.sap_code),
        derive_text_column(rows, 13, |row| &row.work_order),
    ];

    DataFrame::new(l_columns)
        .map_err(|err| ReportError::Serialization(format!("Failed to build table: {err}")))
}

fn derive_text_column(
    rows: &[SpecExportRow],
    n_idx_col: usize,
    get: fn(&SpecExportRow) -> &String,
) -> Column {
    Column::new(
        COLUMNS[n_idx_col].label.into(),
        rows.iter()
            .map(|row| get(row).clone())
            .collect::<Vec<String>>(),
    )
}

fn derive_number_column(
    rows: &[SpecExportRow],
    n_idx_col: usize,
    get: fn(&SpecExportRow) -> f64,
) -> Column {
    Column::new(
        COLUMNS[n_idx_col].label.into(),
        rows.iter().map(get).collect::<Vec<f64>>(),
    )
}
