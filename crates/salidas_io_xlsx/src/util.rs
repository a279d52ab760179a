//! Stateless helper utilities used by the XLSX writer kernel.

use std::collections::{BTreeMap, BTreeSet};

use crate::conf::{N_LEN_EXCEL_SHEET_NAME_MAX, TUP_EXCEL_ILLEGAL};
use crate::spec::EnumCellValue;

////////////////////////////////////////////////////////////////////////////////
// #region CellValueConversion

/// Normalize a cell value for its column kind.
///
/// Text columns keep strings verbatim and render numbers as text; numeric
/// columns keep finite numbers and blank out `NaN`/`Inf`.
pub fn convert_cell_value(value: &EnumCellValue, if_is_numeric_col: bool) -> EnumCellValue {
    match value {
        EnumCellValue::None => EnumCellValue::None,
        EnumCellValue::String(s) => EnumCellValue::String(s.clone()),
        EnumCellValue::Number(n) if !if_is_numeric_col => EnumCellValue::String(n.to_string()),
        EnumCellValue::Number(n) if n.is_finite() => EnumCellValue::Number(*n),
        EnumCellValue::Number(_) => EnumCellValue::None,
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ColumnUtils

/// Validate that `columns` has no duplicated names.
pub fn validate_unique_columns(columns: &[String]) -> Result<(), String> {
    if columns.len() == columns.iter().collect::<BTreeSet<_>>().len() {
        return Ok(());
    }

    let mut dict_pos: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (n_idx, c_name) in columns.iter().enumerate() {
        dict_pos.entry(c_name).or_default().push(n_idx);
    }

    let c_msg = dict_pos
        .iter()
        .filter(|(_, l_pos)| l_pos.len() > 1)
        .map(|(c_name, l_pos)| format!("{c_name:?} x{} at indices {:?}", l_pos.len(), l_pos))
        .collect::<Vec<_>>()
        .join("; ");

    Err(format!("Duplicate column names detected: {c_msg}"))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_cell_value_text_column_keeps_strings() {
        assert_eq!(
            convert_cell_value(&EnumCellValue::String("07".to_string()), false),
            EnumCellValue::String("07".to_string())
        );
        assert_eq!(
            convert_cell_value(&EnumCellValue::Number(3.5), false),
            EnumCellValue::String("3.5".to_string())
        );
    }

    #[test]
    fn convert_cell_value_numeric_non_finite_is_blank() {
        assert_eq!(
            convert_cell_value(&EnumCellValue::Number(12.25), true),
            EnumCellValue::Number(12.25)
        );
        assert_eq!(
            convert_cell_value(&EnumCellValue::Number(f64::NAN), true),
            EnumCellValue::None
        );
        assert_eq!(
            convert_cell_value(&EnumCellValue::Number(f64::NEG_INFINITY), true),
            EnumCellValue::None
        );
    }

    #[test]
    fn validate_unique_columns_reports_positions() {
        assert!(validate_unique_columns(&["a".to_string(), "b".to_string()]).is_ok());

        let err = validate_unique_columns(&["a".to_string(), "b".to_string(), "a".to_string()])
            .unwrap_err();
        assert!(err.contains("\"a\" x2 at indices [0, 2]"));
    }

    #[test]
    fn sanitize_sheet_name_replaces_illegal_chars_and_truncates() {
        assert_eq!(sanitize_sheet_name("Salidas ERSA", "_"), "Salidas ERSA");
        assert_eq!(sanitize_sheet_name("a/b:c", "_"), "a_b_c");
        assert_eq!(sanitize_sheet_name("   ", "_"), "Sheet");
        assert_eq!(sanitize_sheet_name(&"x".repeat(40), "_").len(), 31);
    }
}
