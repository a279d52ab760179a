//! Shared XLSX specification models.

use crate::conf::{C_FONT_NAME_DEFAULT, N_FONT_SIZE_DEFAULT, TUP_DOC_CREATED_YMD};

////////////////////////////////////////////////////////////////////////////////
// #region CellFormats

/// Horizontal placement of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumCellAlign {
    /// Excel decides: text left, numbers right.
    #[default]
    General,
    Left,
    Center,
    Right,
}

/// Style of one class of cells (header, text body or number body).
///
/// Content is always vertically centered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpecCellFormat {
    pub font_name: String,
    /// Font size in points.
    pub font_size: u16,
    pub bold: bool,
    pub align: EnumCellAlign,
    /// Thin border on all four sides.
    pub bordered: bool,
    /// Excel number format code; `None` leaves the cell on `General`.
    pub num_format: Option<String>,
    /// Fill color as `#RRGGBB`.
    pub bg_color: Option<String>,
}

impl Default for SpecCellFormat {
    fn default() -> Self {
        Self {
            font_name: C_FONT_NAME_DEFAULT.to_string(),
            font_size: N_FONT_SIZE_DEFAULT,
            bold: false,
            align: EnumCellAlign::General,
            bordered: false,
            num_format: None,
            bg_color: None,
        }
    }
}

/// Named format presets used by one writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecXlsxFormats {
    /// Text body cells.
    pub text: SpecCellFormat,
    /// Numeric body cells.
    pub number: SpecCellFormat,
    /// Header row cells.
    pub header: SpecCellFormat,
}

/// Normalized cell value between the dataframe and the worksheet.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Missing/blank value.
    None,
    /// Text value.
    String(String),
    /// Numeric value.
    Number(f64),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WriteOptions

/// Writer-wide workbook metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecXlsxWriteOptions {
    /// Document creation date `(year, month, day)`.
    pub doc_created_ymd: (u16, u8, u8),
}

impl Default for SpecXlsxWriteOptions {
    fn default() -> Self {
        Self {
            doc_created_ymd: TUP_DOC_CREATED_YMD,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// One worksheet emitted to the workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSheetWritten {
    /// Sheet name as written, after sanitizing.
    pub sheet_name: String,
    /// Body rows written below the header.
    pub n_rows_data: usize,
    /// Columns written.
    pub n_cols: usize,
}

/// Per-writer report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecXlsxReport {
    /// Sheets written, in order.
    pub sheets: Vec<SpecSheetWritten>,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecXlsxReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_format_defaults_to_plain_calibri() {
        let format = SpecCellFormat::default();
        assert_eq!(format.font_name, "Calibri");
        assert_eq!(format.font_size, 11);
        assert!(!format.bold && !format.bordered);
        assert_eq!(format.align, EnumCellAlign::General);
        assert_eq!(format.num_format, None);
    }

    #[test]
    fn write_options_pin_creation_date() {
        let options = SpecXlsxWriteOptions::default();
        assert_eq!(options.doc_created_ymd, TUP_DOC_CREATED_YMD);
    }
}
