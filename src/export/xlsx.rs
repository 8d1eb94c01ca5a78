// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::excel_date::{DATETIME_FORMAT, parse_to_excel_date, to_excel_serial};
use crate::export::{Cell, ExportTable, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet, XlsxError,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADER_BG: u32 = 0x0E7490;
const STRIPE_BG: u32 = 0xE0F2FE;
const PLAIN_BG: u32 = 0xFFFFFF;

/// One styled worksheet: teal header, striped rows, frozen header row and
/// columns sized to their widest value.
pub(crate) fn export_xlsx(table: &ExportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    fill_sheet(sheet, table)?;
    workbook.save(path)?;

    let label = if table.is_empty() {
        "XLSX (empty dataset)"
    } else {
        "XLSX"
    };
    notify_export_success(label, path);
    Ok(())
}

fn fill_sheet(sheet: &mut Worksheet, table: &ExportTable) -> Result<(), XlsxError> {
    sheet.set_name(table.title.chars().take(31).collect::<String>())?;

    if table.is_empty() {
        sheet.write(0, 0, "No data available")?;
        return Ok(());
    }

    let heading = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_BG))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let mut widths: Vec<usize> = Vec::with_capacity(table.headers.len());
    for (c, h) in table.headers.iter().enumerate() {
        sheet.write_with_format(0, c as u16, *h, &heading)?;
        widths.push(h.width());
    }
    sheet.set_freeze_panes(1, 0)?;

    for (r, cells) in table.rows.iter().enumerate() {
        let bg = Color::RGB(if r % 2 == 0 { STRIPE_BG } else { PLAIN_BG });

        for (c, cell) in cells.iter().enumerate() {
            put_cell(sheet, r as u32 + 1, c as u16, cell, bg)?;
            if let Some(w) = widths.get_mut(c) {
                *w = (*w).max(cell_width(cell));
            }
        }
    }

    for (c, w) in widths.into_iter().enumerate() {
        sheet.set_column_width(c as u16, w as f64 + 2.0)?;
    }

    Ok(())
}

fn cell_width(cell: &Cell) -> usize {
    match cell {
        Cell::Timestamp(_) => DATETIME_FORMAT.len(),
        other => other.display().as_str().width(),
    }
}

fn striped(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

/// Numbers stay numeric; timestamps and date-like text become Excel serials.
fn put_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    bg: Color,
) -> Result<(), XlsxError> {
    let base = striped(bg);

    match cell {
        Cell::Timestamp(dt) => {
            let fmt = base.set_num_format(DATETIME_FORMAT);
            sheet.write_with_format(row, col, to_excel_serial(dt), &fmt)?;
        }
        Cell::Number(n) => {
            sheet.write_with_format(row, col, *n, &base.set_align(FormatAlign::Right))?;
        }
        Cell::Integer(n) => {
            let fmt = base.set_align(FormatAlign::Right).set_num_format("#,##0");
            sheet.write_with_format(row, col, *n as f64, &fmt)?;
        }
        Cell::Text(s) => match parse_to_excel_date(s) {
            Some((num_format, serial)) => {
                sheet.write_with_format(row, col, serial, &base.set_num_format(num_format))?;
            }
            None => {
                sheet.write_with_format(row, col, s.as_str(), &base)?;
            }
        },
    }

    Ok(())
}
