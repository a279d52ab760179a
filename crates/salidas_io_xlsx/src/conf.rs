//! XLSX constants and default preset factories.

use crate::spec::{EnumCellAlign, SpecCellFormat, SpecXlsxFormats};

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];
/// Maximum column width accepted by Excel.
pub const N_WIDTH_EXCEL_MAX: f64 = 255.0;

/// Creation date stamped into document properties.
///
/// Pinned so two writes of the same data are byte-identical.
pub const TUP_DOC_CREATED_YMD: (u16, u8, u8) = (2000, 1, 1);

/// Body and header font.
pub const C_FONT_NAME_DEFAULT: &str = "Calibri";
/// Body and header font size, in points.
pub const N_FONT_SIZE_DEFAULT: u16 = 11;
/// Header row fill.
pub const C_COLOR_HEADER_FILL: &str = "#D9E1F2";

/// Default presets for [`crate::writer::XlsxWriter`]: left-aligned text,
/// right-aligned numbers and a bold, centered, boxed header on a light fill.
pub fn derive_default_xlsx_formats() -> SpecXlsxFormats {
    SpecXlsxFormats {
        text: SpecCellFormat {
            align: EnumCellAlign::Left,
            ..Default::default()
        },
        number: SpecCellFormat {
            align: EnumCellAlign::Right,
            num_format: Some("General".to_string()),
            ..Default::default()
        },
        header: SpecCellFormat {
            bold: true,
            align: EnumCellAlign::Center,
            bordered: true,
            bg_color: Some(C_COLOR_HEADER_FILL.to_string()),
            ..Default::default()
        },
    }
}
