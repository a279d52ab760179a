//! Report constants: column schema, naming prefixes and defaults.

use crate::spec::SpecColumn;

/// Fixed export schema: label and display width per column, in sheet order.
pub const COLUMNS: [SpecColumn; 14] = [
    SpecColumn::new("Fecha", 12.0),
    SpecColumn::new("Hora", 10.0),
    SpecColumn::new("Tipo Material", 12.0),
    SpecColumn::new("Código Material", 15.0),
    SpecColumn::new("Nombre Material", 30.0),
    SpecColumn::new("Ubicación", 15.0),
    SpecColumn::new("Cantidad", 10.0),
    SpecColumn::new("Stock Restante", 12.0),
    SpecColumn::new("Nombre Persona", 15.0),
    SpecColumn::new("Apellido Persona", 15.0),
    SpecColumn::new("Área Destino", 20.0),
    SpecColumn::new("CECO", 10.0),
    SpecColumn::new("Código SAP", 15.0),
    SpecColumn::new("Orden de Trabajo", 15.0),
];

/// Prefix of every generated file name.
pub const C_FILE_NAME_PREFIX: &str = "salidas_materiales";
/// Extension of every generated file name.
pub const C_FILE_NAME_EXT: &str = "xlsx";
/// Prefix of every sheet label.
pub const C_SHEET_NAME_PREFIX: &str = "Salidas";

/// Calendar date layout of `exitDate` and window bounds.
pub const C_DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the default look-back window, in days.
pub const N_DAYS_WINDOW_DEFAULT: i64 = 30;
/// Rows shown in a report preview.
pub const N_ROWS_PREVIEW: usize = 10;

/// Operator-facing message for an empty selection.
pub const C_MSG_EMPTY_SELECTION: &str =
    "No hay datos para exportar con los filtros seleccionados";
