//! Table to sheet conversion

use table_builder_core::units::{self, Dpi};
use table_builder_core::{
    Cell, CellContent, CellValue, CellsSet, ConverterParameters, EmittedMerges, FormulaKind,
    FunctionNames, ImageContent, LineSize, Table, TableConverter,
};

use crate::autofit;
use crate::document::{
    FreezePanes, Picture, Sheet, SheetCell, SheetDocument, SheetLine, SheetValue,
    MAX_SHEET_NAME_LEN,
};
use crate::error::{SheetError, SheetResult};
use crate::style::{SheetHorizontal, SheetStyle, SheetVertical, StylePool};

/// Characters a sheet name may not contain
const INVALID_SHEET_NAME_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

/// Renders tables into [`SheetDocument`] sheets
///
/// Cells are written column by column, top to bottom within a column.
///
/// ```
/// use table_builder_core::{ConverterParameters, TableBuilder, TableConverter};
/// use table_builder_sheet::{SheetConverter, SheetValue};
///
/// let mut builder = TableBuilder::with_size(1, 2);
/// builder.row(0).unwrap().fill([1.5, 2.5]).unwrap();
/// let table = builder.build();
///
/// let document = SheetConverter::new()
///     .convert(&table, ConverterParameters::new().with_section_name("Data"))
///     .unwrap();
/// let sheet = document.sheet("Data").unwrap();
/// assert_eq!(sheet.cell(1, 2).unwrap().value, SheetValue::Number(2.5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SheetConverter {
    functions: FunctionNames,
    dpi: Option<Dpi>,
}

impl SheetConverter {
    /// Converter with the standard spreadsheet function names and the screen DPI
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the function name used for one formula kind
    pub fn with_function_name<S: Into<String>>(mut self, kind: FormulaKind, name: S) -> Self {
        self.functions = self.functions.with(kind, name);
        self
    }

    /// Replace the whole function name mapping
    pub fn with_function_names(mut self, functions: FunctionNames) -> Self {
        self.functions = functions;
        self
    }

    /// Use a fixed DPI for image placement instead of the screen DPI
    pub fn with_dpi(mut self, dpi: Dpi) -> Self {
        self.dpi = Some(dpi);
        self
    }

    /// The function name mapping
    pub fn function_names(&self) -> &FunctionNames {
        &self.functions
    }

    /// Render `table` as a new sheet of `document`
    ///
    /// The `target_document` of `parameters` is ignored. On error `document`
    /// is left unchanged.
    pub fn append(
        &self,
        table: &Table,
        document: &mut SheetDocument,
        parameters: &ConverterParameters<SheetDocument>,
    ) -> SheetResult<()> {
        let name = parameters.section_name_or_default();
        validate_sheet_name(name)?;
        if document.sheet(name).is_some() {
            return Err(SheetError::DuplicateSheet(name.to_string()));
        }

        log::debug!(
            "converting {}x{} table into sheet {:?}",
            table.row_count(),
            table.column_count(),
            name
        );

        let mut styles = document.styles.clone();
        let sheet = self.render(table, name, parameters, &mut styles)?;

        log::debug!(
            "sheet {:?}: {} cells, {} merges, {} pictures, {} styles",
            name,
            sheet.cells.len(),
            sheet.merges.len(),
            sheet.pictures.len(),
            styles.len()
        );

        document.styles = styles;
        document.sections.push(sheet);
        Ok(())
    }

    fn render(
        &self,
        table: &Table,
        name: &str,
        parameters: &ConverterParameters<SheetDocument>,
        styles: &mut StylePool,
    ) -> SheetResult<Sheet> {
        let dpi = self.dpi.unwrap_or_else(units::screen_dpi);
        let mut sheet = Sheet::new(name);

        for row in table.rows() {
            let line = match table.line_size(row) {
                LineSize::AutoFit => sheet_line(row.index(), autofit::row_height(table, row)?, true),
                fixed => sheet_line(row.index(), fixed.fixed().unwrap_or_default(), false),
            };
            sheet.rows.push(line);
        }

        let mut emitted = EmittedMerges::new();
        for column in table.columns() {
            let line = match table.line_size(column) {
                LineSize::AutoFit => {
                    sheet_line(column.index(), autofit::column_width(table, column)?, true)
                }
                fixed => sheet_line(column.index(), fixed.fixed().unwrap_or_default(), false),
            };
            sheet.columns.push(line);

            for cell in column.cells(table) {
                let row_height = sheet
                    .rows
                    .get(cell.row_index())
                    .map_or(table_builder_core::DEFAULT_ROW_HEIGHT, |row| row.size);
                let size_px = (dpi.width_to_pixels(line.size), dpi.height_to_pixels(row_height));
                self.write_cell(table, cell, size_px, &mut sheet, styles)?;

                if let Some(id) = cell.merge_area() {
                    if emitted.first_visit(id) {
                        if let Some(range) = table.merge_area(id) {
                            log::trace!("merging {} in sheet {:?}", range, name);
                            sheet.merges.push(range);
                        }
                    }
                }
            }
        }

        if parameters.freeze_leading_rows > 0 {
            sheet.freeze = Some(FreezePanes {
                rows: parameters.freeze_leading_rows,
                columns: u32::try_from(table.column_count()).unwrap_or(u32::MAX),
            });
        }

        sheet.auto_filter = parameters
            .enabled_auto_filter()
            .and_then(|filter| filter.to_cell_range());

        Ok(sheet)
    }

    /// Write one cell; `size_px` is the pixel size of its column and row
    fn write_cell(
        &self,
        table: &Table,
        cell: &Cell,
        size_px: (f64, f64),
        sheet: &mut Sheet,
        styles: &mut StylePool,
    ) -> SheetResult<()> {
        let addr = cell.address();
        let format = table.resolve_format(addr)?;
        let style = SheetStyle::from_resolved(&format, addr)?;

        let (row, column) = (sheet_index(addr.row), sheet_index(addr.column));
        let mut number_format = None;

        // Only the top-left cell of a merge area carries content.
        let value = if !table.is_merge_origin(addr) {
            SheetValue::Empty
        } else {
            match cell.content() {
                CellContent::Value(value) => plain_value(value),
                CellContent::Numeric { value, format } => {
                    number_format = Some(format.clone());
                    SheetValue::Number(*value)
                }
                CellContent::Formula { kind, range } => {
                    let text = self
                        .functions
                        .formula_text(*kind, *range, (0, 0))
                        .map_err(|e| SheetError::at_cell(e, addr))?;
                    SheetValue::Formula(text)
                }
                CellContent::Image(image) => {
                    let picture = place_image(image, row, column, &style, size_px);
                    log::trace!(
                        "placing {}x{} px image at {} offset ({}, {})",
                        picture.width_px,
                        picture.height_px,
                        addr,
                        picture.offset_x,
                        picture.offset_y
                    );
                    sheet.pictures.push(picture);
                    SheetValue::Empty
                }
            }
        };

        sheet.cells.push(SheetCell {
            row,
            column,
            value,
            number_format,
            style: styles.get_or_insert(style),
        });
        Ok(())
    }
}

impl TableConverter for SheetConverter {
    type Document = SheetDocument;
    type Error = SheetError;

    /// Render `table` into the target document, or into a new one
    ///
    /// The target document is moved out of `parameters` and dropped when
    /// rendering fails. Use [`SheetConverter::append`] to keep an existing
    /// document on failure.
    fn convert(
        &self,
        table: &Table,
        mut parameters: ConverterParameters<SheetDocument>,
    ) -> SheetResult<SheetDocument> {
        let mut document = parameters.target_document.take().unwrap_or_default();
        self.append(table, &mut document, &parameters)?;
        Ok(document)
    }
}

fn plain_value(value: &CellValue) -> SheetValue {
    match value {
        CellValue::Empty => SheetValue::Empty,
        CellValue::Text(s) => SheetValue::Text(s.clone()),
        CellValue::Number(n) => SheetValue::Number(*n),
        CellValue::Boolean(b) => SheetValue::Boolean(*b),
    }
}

/// Anchor an image to its cell, offset by the cell's alignment
fn place_image(
    image: &ImageContent,
    row: u32,
    column: u32,
    style: &SheetStyle,
    (column_px, row_px): (f64, f64),
) -> Picture {
    let (width_px, height_px) = image.scaled_size();

    let left = match style.horizontal {
        SheetHorizontal::Center => (column_px - width_px) / 2.0,
        SheetHorizontal::Right => column_px - width_px,
        _ => 0.0,
    };
    let top = match style.vertical {
        SheetVertical::Center => (row_px - height_px) / 2.0,
        SheetVertical::Bottom => row_px - height_px,
        SheetVertical::Top => 0.0,
    };

    Picture {
        row,
        column,
        offset_x: left.trunc() as i64,
        offset_y: top.trunc() as i64,
        width_px,
        height_px,
        image: image.clone(),
    }
}

fn sheet_line(index: usize, size: f64, auto_fit: bool) -> SheetLine {
    SheetLine {
        index: sheet_index(index),
        size,
        auto_fit,
    }
}

/// 1-based sheet position of a 0-based table index
fn sheet_index(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

fn validate_sheet_name(name: &str) -> SheetResult<()> {
    let len = name.chars().count();
    if len == 0 || len > MAX_SHEET_NAME_LEN || name.contains(INVALID_SHEET_NAME_CHARS) {
        return Err(SheetError::InvalidSheetName(name.to_string()));
    }
    Ok(())
}
