//! XLSX writer kernel that converts a DataFrame into workbook output.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, DataFrame};
use rust_xlsxwriter::{
    DocProperties, ExcelDateTime, Format, FormatAlign, FormatBorder, Workbook, Worksheet,
    XlsxError,
};

use crate::conf::{N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, N_WIDTH_EXCEL_MAX};
use crate::spec::{
    EnumCellAlign, EnumCellValue, SpecCellFormat, SpecSheetWritten, SpecXlsxFormats,
    SpecXlsxReport, SpecXlsxWriteOptions,
};
use crate::util::{convert_cell_value, sanitize_sheet_name, validate_unique_columns};

/// Stateful workbook writer.
///
/// Sheets are buffered in memory; the workbook is emitted by
/// [`Self::save_to_buffer`] with a pinned creation date, so equal input gives
/// equal bytes. Every sheet has its header row frozen.
pub struct XlsxWriter {
    workbook: Workbook,
    formats: SpecXlsxFormats,
    write_options: SpecXlsxWriteOptions,
    report: SpecXlsxReport,
}

impl XlsxWriter {
    /// Create writer bound to format/options presets.
    pub fn new(formats: SpecXlsxFormats, write_options: SpecXlsxWriteOptions) -> Self {
        Self {
            workbook: Workbook::new(),
            formats,
            write_options,
            report: SpecXlsxReport::default(),
        }
    }

    /// Sheets written so far plus non-fatal warnings.
    pub fn report(&self) -> &SpecXlsxReport {
        &self.report
    }

    /// Serialize the workbook into XLSX bytes.
    pub fn save_to_buffer(&mut self) -> Result<Vec<u8>, String> {
        self.apply_doc_properties()?;
        self.workbook
            .save_to_buffer()
            .map_err(derive_xlsx_error_text)
    }

    /// Write one sheet from an in-memory dataframe.
    ///
    /// Column names become the header row; body rows follow in dataframe order.
    /// `l_widths` holds one width per column, in character units. Numeric
    /// dtypes are written as numbers, everything else as text.
    pub fn write_sheet_from_dataframe(
        &mut self,
        df_data: &DataFrame,
        sheet_name: &str,
        l_widths: &[f64],
    ) -> Result<SpecSheetWritten, String> {
        let l_colnames_df: Vec<String> = df_data
            .get_column_names_str()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        validate_unique_columns(&l_colnames_df)?;

        let n_width_df = l_colnames_df.len();
        let n_height_df = df_data.height();
        if n_width_df > N_NCOLS_EXCEL_MAX {
            return Err(format!(
                "Too many columns: {n_width_df} exceeds Excel limit {N_NCOLS_EXCEL_MAX}."
            ));
        }
        if n_height_df >= N_NROWS_EXCEL_MAX {
            return Err(format!(
                "Too many rows: {n_height_df} (+1 header) exceeds Excel limit {N_NROWS_EXCEL_MAX}."
            ));
        }
        validate_column_widths(l_widths, n_width_df)?;

        let set_cols_idx_numeric: BTreeSet<usize> =
            derive_numeric_column_indices(df_data).into_iter().collect();

        let c_sheet_name_clean = sanitize_sheet_name(sheet_name, "_");
        if c_sheet_name_clean != sheet_name {
            self.report.warn(format!(
                "Sheet name {sheet_name:?} was sanitized to {c_sheet_name_clean:?}."
            ));
        }

        let fmt_header = derive_rust_xlsx_format(&self.formats.header);
        let fmt_text = derive_rust_xlsx_format(&self.formats.text);
        let fmt_number = derive_rust_xlsx_format(&self.formats.number);

        let worksheet = self.workbook.add_worksheet();
        worksheet
            .set_name(&c_sheet_name_clean)
            .map_err(derive_xlsx_error_text)?;

        write_header(worksheet, &l_colnames_df, &fmt_header)?;

        let l_cols = df_data.get_columns();
        for n_idx_row in 0..n_height_df {
            for (n_idx_col, col) in l_cols.iter().enumerate() {
                let if_is_numeric_col = set_cols_idx_numeric.contains(&n_idx_col);
                let value_raw = derive_cell_value_from_any_value(
                    col.get(n_idx_row)
                        .map_err(|err| format!("Failed to access cell value: {err}"))?,
                );
                let value = convert_cell_value(&value_raw, if_is_numeric_col);
                let fmt_cell = if if_is_numeric_col {
                    &fmt_number
                } else {
                    &fmt_text
                };

                write_cell_with_format(worksheet, 1 + n_idx_row, n_idx_col, &value, fmt_cell)?;
            }
        }

        for (n_idx_col, n_width) in l_widths.iter().enumerate() {
            worksheet
                .set_column_width(cast_col_num(n_idx_col)?, *n_width)
                .map_err(derive_xlsx_error_text)?;
        }
        worksheet
            .set_freeze_panes(1, 0)
            .map_err(derive_xlsx_error_text)?;

        let sheet_written = SpecSheetWritten {
            sheet_name: c_sheet_name_clean,
            n_rows_data: n_height_df,
            n_cols: n_width_df,
        };
        self.report.sheets.push(sheet_written.clone());
        Ok(sheet_written)
    }

    fn apply_doc_properties(&mut self) -> Result<(), String> {
        let (n_year, n_month, n_day) = self.write_options.doc_created_ymd;
        let dt_created =
            ExcelDateTime::from_ymd(n_year, n_month, n_day).map_err(derive_xlsx_error_text)?;
        let properties = DocProperties::new().set_creation_datetime(&dt_created);
        self.workbook.set_properties(&properties);
        Ok(())
    }
}

/// Check there is one width per column, each inside `(0, 255]`.
fn validate_column_widths(l_widths: &[f64], n_cols: usize) -> Result<(), String> {
    if l_widths.len() != n_cols {
        return Err(format!(
            "Column widths length {} must equal column count {n_cols}.",
            l_widths.len()
        ));
    }
    if let Some(n_bad) = l_widths
        .iter()
        .find(|n_width| !(**n_width > 0.0 && **n_width <= N_WIDTH_EXCEL_MAX))
    {
        return Err(format!(
            "Column width {n_bad} out of range (0, {N_WIDTH_EXCEL_MAX}]."
        ));
    }
    Ok(())
}

fn derive_numeric_column_indices(df: &DataFrame) -> Vec<usize> {
    df.get_columns()
        .iter()
        .enumerate()
        .filter(|(_, c_col)| c_col.dtype().is_numeric())
        .map(|(n_idx, _)| n_idx)
        .collect()
}

fn derive_cell_value_from_any_value(value: AnyValue<'_>) -> EnumCellValue {
    match value {
        AnyValue::Null => EnumCellValue::None,
        AnyValue::String(val) => EnumCellValue::String(val.to_string()),
        AnyValue::StringOwned(val) => EnumCellValue::String(val.to_string()),
        AnyValue::Boolean(val) => {
            EnumCellValue::String(if val { "True" } else { "False" }.to_string())
        }
        AnyValue::UInt8(val) => EnumCellValue::Number(val as f64),
        AnyValue::UInt16(val) => EnumCellValue::Number(val as f64),
        AnyValue::UInt32(val) => EnumCellValue::Number(val as f64),
        AnyValue::UInt64(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int8(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int16(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int32(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int64(val) => EnumCellValue::Number(val as f64),
        AnyValue::Float32(val) => EnumCellValue::Number(val as f64),
        AnyValue::Float64(val) => EnumCellValue::Number(val),
        _ => EnumCellValue::String(value.to_string()),
    }
}

fn write_header(
    worksheet: &mut Worksheet,
    header: &[String],
    fmt_header: &Format,
) -> Result<(), String> {
    for (col_idx, cell_value) in header.iter().enumerate() {
        worksheet
            .write_string_with_format(0, cast_col_num(col_idx)?, cell_value, fmt_header)
            .map_err(derive_xlsx_error_text)?;
    }
    Ok(())
}

fn write_cell_with_format(
    worksheet: &mut Worksheet,
    row_idx: usize,
    col_idx: usize,
    value: &EnumCellValue,
    format: &Format,
) -> Result<(), String> {
    match value {
        EnumCellValue::None => {
            worksheet
                .write_blank(cast_row_num(row_idx)?, cast_col_num(col_idx)?, format)
                .map_err(derive_xlsx_error_text)?;
        }
        // Excel has no empty-string cells; keep the cell styled but blank.
        EnumCellValue::String(val) if val.is_empty() => {
            worksheet
                .write_blank(cast_row_num(row_idx)?, cast_col_num(col_idx)?, format)
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::String(val) => {
            worksheet
                .write_string_with_format(
                    cast_row_num(row_idx)?,
                    cast_col_num(col_idx)?,
                    val,
                    format,
                )
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::Number(val) => {
            worksheet
                .write_number_with_format(
                    cast_row_num(row_idx)?,
                    cast_col_num(col_idx)?,
                    *val,
                    format,
                )
                .map_err(derive_xlsx_error_text)?;
        }
    }
    Ok(())
}

fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new()
        .set_font_name(spec.font_name.as_str())
        .set_font_size(spec.font_size)
        .set_align(FormatAlign::VerticalCenter);

    if spec.bold {
        format = format.set_bold();
    }
    format = match spec.align {
        EnumCellAlign::General => format,
        EnumCellAlign::Left => format.set_align(FormatAlign::Left),
        EnumCellAlign::Center => format.set_align(FormatAlign::Center),
        EnumCellAlign::Right => format.set_align(FormatAlign::Right),
    };
    if spec.bordered {
        format = format.set_border(FormatBorder::Thin);
    }
    if let Some(val) = &spec.num_format {
        format = format.set_num_format(val.as_str());
    }
    if let Some(val) = &spec.bg_color {
        format = format.set_background_color(val.as_str());
    }

    format
}

fn cast_row_num(value: usize) -> Result<u32, String> {
    u32::try_from(value).map_err(|_| format!("row index overflow: {value}"))
}

fn cast_col_num(value: usize) -> Result<u16, String> {
    u16::try_from(value).map_err(|_| format!("column index overflow: {value}"))
}

fn derive_xlsx_error_text(err: XlsxError) -> String {
    format!("xlsx write error: {err}")
}
