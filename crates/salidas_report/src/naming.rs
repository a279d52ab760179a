//! Deterministic file and sheet names.

use crate::conf::{C_FILE_NAME_EXT, C_FILE_NAME_PREFIX, C_SHEET_NAME_PREFIX};
use crate::spec::{EnumReportCategory, SpecDateWindow};

/// `salidas_materiales_<tag>_<from>_<to>.xlsx`; unbounded sides are empty.
pub fn derive_file_name(category: EnumReportCategory, window: &SpecDateWindow) -> String {
    let (c_from, c_to) = window.bound_strings();
    format!(
        "{C_FILE_NAME_PREFIX}_{}_{c_from}_{c_to}.{C_FILE_NAME_EXT}",
        category.tag()
    )
}

/// `Salidas <Todas|ERSA|UNBW>`.
pub fn derive_sheet_name(category: EnumReportCategory) -> String {
    format!("{C_SHEET_NAME_PREFIX} {}", category.display())
}
