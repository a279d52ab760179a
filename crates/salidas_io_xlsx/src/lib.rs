//! `salidas_io_xlsx` v1:
//! Single-sheet XLSX writer kernel used by the material-exit reports.
//!
//! Layout:
//! - `conf`   : Excel limits and default format presets
//! - `spec`   : formats, write options, write report
//! - `util`   : pure helper functions
//! - `writer` : `polars::DataFrame` -> workbook kernel
pub mod conf;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    C_FONT_NAME_DEFAULT, N_FONT_SIZE_DEFAULT, N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX,
    N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL, derive_default_xlsx_formats,
};
pub use spec::{
    EnumCellAlign, EnumCellValue, SpecCellFormat, SpecSheetWritten, SpecXlsxFormats,
    SpecXlsxReport, SpecXlsxWriteOptions,
};
pub use util::{convert_cell_value, sanitize_sheet_name, validate_unique_columns};
pub use writer::XlsxWriter;
