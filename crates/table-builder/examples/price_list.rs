//! Build a small price list and render it into a sheet
//!
//! Prints every written cell, the column widths and the merged ranges.

use table_builder::prelude::*;

struct Item {
    name: &'static str,
    quantity: u32,
    price: f64,
}

fn main() -> anyhow::Result<()> {
    let items = [
        Item { name: "Bolt M6", quantity: 120, price: 0.08 },
        Item { name: "Nut M6", quantity: 120, price: 0.03 },
        Item { name: "Washer 6 mm", quantity: 240, price: 0.01 },
    ];

    let mut builder = TableBuilder::with_size(2, 3);
    builder.set_default_format(
        CellFormatStyle::new()
            .font_family("Arial")
            .borders(CellBorders::all(BorderType::Thin)),
    );
    builder
        .cell(0, 0)?
        .set_text("Price list")
        .set_format(
            CellFormatStyle::new()
                .bold(true)
                .text_size(14.0)
                .horizontal_alignment(HorizontalAlignment::Center),
        )
        .merge_next(3)?;
    builder
        .row(1)?
        .fill(["Item", "Qty", "Price"])?
        .set_format(CellFormatStyle::new().bold(true).background(Color::LIGHT_GRAY));
    builder.column(0)?.set_auto_fit(true);
    builder.column(2)?.set_width(12.0)?;

    builder.add_rows_from_list(&items, 0, |item| {
        vec![
            CellContent::from(item.name),
            CellContent::from(item.quantity as f64),
            CellContent::numeric(item.price, "0.00"),
        ]
    })?;

    let last = builder.table().row_count() - 1;
    builder
        .add_row()
        .fill_from(1, [CellContent::formula(FormulaKind::Sum, CellRange::from_indices(2, 1, last, 1))])?
        .set_format(CellFormatStyle::new().italic(true));

    let table = builder.build();
    let parameters = ConverterParameters::new()
        .with_section_name("Prices")
        .with_freeze_leading_rows(2)
        .with_auto_filter(AutoFilterRange::new(2, 1, last as i64 + 1, 3));
    let document = SheetConverter::new().convert(&table, parameters)?;

    for sheet in document.sheets() {
        println!("sheet {:?}", sheet.name);
        for cell in &sheet.cells {
            println!("  {:>4} {:?} {:?}", cell.reference(), cell.value, cell.number_format);
        }
        for column in &sheet.columns {
            println!("  column {} width {:.2}", column.index, column.size);
        }
        println!("  merges: {:?}", sheet.merges.iter().map(|r| r.to_string()).collect::<Vec<_>>());
        println!("  freeze: {:?}, filter: {:?}", sheet.freeze, sheet.auto_filter.map(|r| r.to_string()));
    }
    println!("{} distinct styles", document.styles().len());

    Ok(())
}
