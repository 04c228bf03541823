//! End-to-end tests for rendering tables into sheets

use pretty_assertions::assert_eq;
use table_builder::prelude::*;
use table_builder::units::Dpi;

fn converter() -> SheetConverter {
    SheetConverter::new().with_dpi(Dpi::STANDARD)
}

/// N x M numbers with formats come back unchanged, one cell each
#[test]
fn test_numeric_round_trip() {
    let (rows, columns) = (7, 5);
    let value = |r: usize, c: usize| (r as f64) * 1000.0 + (c as f64) / 3.0;
    let format = |c: usize| if c % 2 == 0 { "0.000".to_string() } else { "#,##0.00".to_string() };

    let mut builder = TableBuilder::with_size(rows, columns);
    for r in 0..rows {
        for c in 0..columns {
            builder.cell(r, c).unwrap().set_number(value(r, c), format(c));
        }
    }
    let document = converter()
        .convert(&builder.build(), ConverterParameters::new())
        .unwrap();
    let sheet = &document.sheets()[0];

    assert_eq!(sheet.cells.len(), rows * columns);
    for r in 0..rows {
        for c in 0..columns {
            let cell = sheet.cell(r as u32 + 1, c as u32 + 1).unwrap();
            assert_eq!(cell.value, SheetValue::Number(value(r, c)));
            assert_eq!(cell.number_format.as_deref(), Some(format(c).as_str()));
        }
    }
}

#[test]
fn test_merge_emitted_once_per_area() {
    let mut builder = TableBuilder::with_size(4, 4);
    builder.cell(0, 0).unwrap().merge_area(2, 4).unwrap();
    builder.cell(2, 0).unwrap().merge_down(2).unwrap();
    builder.cell(3, 2).unwrap().merge_next(2).unwrap();
    let table = builder.build();

    let document = converter()
        .convert(&table, ConverterParameters::new())
        .unwrap();
    let merges: Vec<String> = document.sheets()[0]
        .merges
        .iter()
        .map(|r| r.to_string())
        .collect();

    assert_eq!(merges, vec!["A1:D2", "A3:A4", "C4:D4"]);
}

#[test]
fn test_unsupported_formula_kind_returns_no_document() {
    let mut builder = TableBuilder::with_size(2, 1);
    builder.cell(0, 0).unwrap().set_number(4.0, "0");
    builder
        .cell(1, 0)
        .unwrap()
        .set_formula(FormulaKind::Average, CellRange::from_indices(0, 0, 0, 0));
    let table = builder.build();

    let names = table_builder::FunctionNames::empty().with(FormulaKind::Sum, "SUM");
    let result = converter()
        .with_function_names(names)
        .convert(&table, ConverterParameters::new());

    match result {
        Err(SheetError::UnsupportedVariant { kind, cell, .. }) => {
            assert_eq!(kind, "formula kind");
            assert_eq!(cell, "A2");
        }
        other => panic!("expected UnsupportedVariant, got {:?}", other),
    }
}

#[test]
fn test_sheets_share_styles() {
    let mut builder = TableBuilder::with_size(1, 1);
    builder
        .cell(0, 0)
        .unwrap()
        .set_text("x")
        .update_format(|f| f.bold(true));
    let table = builder.build();

    let converter = converter();
    let first = converter
        .convert(&table, ConverterParameters::new().with_section_name("One"))
        .unwrap();
    let both = converter
        .convert(
            &table,
            ConverterParameters::new()
                .with_target_document(first)
                .with_section_name("Two"),
        )
        .unwrap();

    assert_eq!(both.sheet_count(), 2);
    assert_eq!(both.styles().len(), 2);
    let one = both.sheet("One").unwrap().cell(1, 1).unwrap().style;
    let two = both.sheet("Two").unwrap().cell(1, 1).unwrap().style;
    assert_eq!(one, two);
}

#[test]
fn test_plain_values() {
    let mut builder = TableBuilder::with_size(1, 4);
    builder
        .row(0)
        .unwrap()
        .fill([
            CellContent::from("text"),
            CellContent::from(true),
            CellContent::from(7),
            CellContent::default(),
        ])
        .unwrap();
    let document = converter()
        .convert(&builder.build(), ConverterParameters::new())
        .unwrap();

    let values: Vec<SheetValue> = document.sheets()[0]
        .cells
        .iter()
        .map(|c| c.value.clone())
        .collect();
    assert_eq!(
        values,
        vec![
            SheetValue::Text("text".into()),
            SheetValue::Boolean(true),
            SheetValue::Number(7.0),
            SheetValue::Empty,
        ]
    );
}
