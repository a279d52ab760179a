//! `salidas_report` v1:
//! Material-exit report pipeline (filter -> categorize -> tabulate -> serialize).
//!
//! Layout:
//! - `conf`       : column schema, naming prefixes, defaults
//! - `spec`       : records, window, categories, rows, artifacts, errors
//! - `filter`     : inclusive date-window selection
//! - `category`   : ERSA/UNBW partition
//! - `table`      : 14-column projection and DataFrame hand-off
//! - `naming`     : file and sheet names
//! - `serializer` : single-sheet XLSX encoding
//! - `artifact`   : `ReportSelection` and `produce_artifact` entry points
pub mod artifact;
pub mod category;
pub mod conf;
pub mod filter;
pub mod naming;
pub mod serializer;
pub mod spec;
pub mod table;

pub use artifact::{ReportSelection, produce_artifact};
pub use category::{SpecCategorized, categorize};
pub use conf::{COLUMNS, N_DAYS_WINDOW_DEFAULT, N_ROWS_PREVIEW};
pub use filter::{ReportFilter, filter_by_window, order_by_created_desc, parse_exit_date};
pub use naming::{derive_file_name, derive_sheet_name};
pub use serializer::write_export_sheet;
pub use spec::{
    EnumMaterialType, EnumReportCategory, ReportError, SpecArtifact, SpecColumn, SpecDateWindow,
    SpecExportRow, SpecMaterialExit, SpecReportSummary,
};
pub use table::{SpecPreview, build_dataframe, build_preview, build_rows};
