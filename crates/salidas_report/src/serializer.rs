//! Single-sheet XLSX encoding of export rows.

use salidas_io_xlsx::{
    SpecXlsxReport, SpecXlsxWriteOptions, XlsxWriter, derive_default_xlsx_formats,
};
use tracing::debug;

use crate::conf::COLUMNS;
use crate::spec::{ReportError, SpecExportRow};
use crate::table::build_dataframe;

/// Encode `rows` as one worksheet labeled `sheet_name`.
///
/// The header row carries the fixed labels, widths come from [`COLUMNS`] and
/// the header is frozen. Zero rows is valid here and yields a header-only sheet.
pub fn write_export_sheet(
    rows: &[SpecExportRow],
    sheet_name: &str,
) -> Result<(Vec<u8>, SpecXlsxReport), ReportError> {
    let df_rows = build_dataframe(rows)?;
    let l_widths: Vec<f64> = COLUMNS.iter().map(|col| col.width).collect();

    let mut writer = XlsxWriter::new(
        derive_default_xlsx_formats(),
        SpecXlsxWriteOptions::default(),
    );
    writer
        .write_sheet_from_dataframe(&df_rows, sheet_name, &l_widths)
        .map_err(ReportError::Serialization)?;
    let v_bytes = writer
        .save_to_buffer()
        .map_err(ReportError::Serialization)?;
    let report = writer.report().clone();

    debug!(
        sheet_name,
        n_rows = rows.len(),
        n_bytes = v_bytes.len(),
        "serialized export sheet"
    );
    Ok((v_bytes, report))
}
