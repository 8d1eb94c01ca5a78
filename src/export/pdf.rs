use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs;
use std::path::Path;

const FONT: Name<'static> = Name(b"F1");
const CELL_PAD: f32 = 4.0;

/// Sequential object ids; 1..=3 are reserved for catalog, page tree, font.
struct RefAlloc(i32);

impl RefAlloc {
    fn next(&mut self) -> Ref {
        let r = Ref::new(self.0);
        self.0 += 1;
        r
    }
}

/// Landscape A4 in points.
#[derive(Debug, Clone, Copy)]
struct Geometry {
    width: f32,
    height: f32,
    margin: f32,
    row_h: f32,
}

impl Geometry {
    fn landscape_a4() -> Self {
        Self {
            width: 842.0,
            height: 595.0,
            margin: 40.0,
            row_h: 18.0,
        }
    }

    /// y of the table header row.
    fn table_top(&self) -> f32 {
        self.height - self.margin - 40.0
    }

    /// Body rows that fit below the header row.
    fn rows_per_page(&self) -> usize {
        let usable = self.table_top() - self.margin;
        ((usable / self.row_h).floor() as usize).saturating_sub(1).max(1)
    }

    fn usable_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }
}

/// Table metadata drawn on every page.
pub struct TableLayout<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub headers: &'a [&'a str],
    /// Right-align these columns.
    pub numeric: &'a [bool],
}

/// Paginated table writer, Helvetica with WinAnsi encoding.
pub struct PdfManager {
    pdf: Pdf,
    refs: RefAlloc,
    catalog: Ref,
    page_tree: Ref,
    font: Ref,
    pages: Vec<Ref>,
    geo: Geometry,

    body_size: f32,
    header_size: f32,
    title_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();
        let catalog = Ref::new(1);
        let page_tree = Ref::new(2);
        let font = Ref::new(3);

        // WinAnsi so that °, μ and accented names render
        pdf.type1_font(font)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            refs: RefAlloc(4),
            catalog,
            page_tree,
            font,
            pages: Vec::new(),
            geo: Geometry::landscape_a4(),
            body_size: 8.5,
            header_size: 9.0,
            title_size: 14.0,
        }
    }

    /// Registers a page object; returns the id its content stream must use.
    fn add_page(&mut self) -> Ref {
        let page_id = self.refs.next();
        let content_id = self.refs.next();
        self.pages.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.page_tree)
            .media_box(Rect::new(0.0, 0.0, self.geo.width, self.geo.height))
            .contents(content_id);
        page.resources().fonts().pair(FONT, self.font);

        content_id
    }

    fn column_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let pad = 2.0 * CELL_PAD + 2.0;
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| text_width(h, self.header_size) + pad)
            .collect();

        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = w.max(text_width(cell, self.body_size) + pad);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.geo.usable_width();
        if total > max {
            let scale = max / total;
            widths.iter_mut().for_each(|w| *w *= scale);
        }

        widths
    }

    /// Multi-page table; an empty table still yields one page with the header.
    pub fn write_table(&mut self, layout: &TableLayout, rows: &[Vec<String>]) {
        let widths = self.column_widths(layout.headers, rows);
        let table_w: f32 = widths.iter().sum();
        let header: Vec<String> = layout.headers.iter().map(|h| h.to_string()).collect();
        let per_page = self.geo.rows_per_page();

        let chunks: Vec<&[Vec<String>]> = if rows.is_empty() {
            vec![rows]
        } else {
            rows.chunks(per_page).collect()
        };

        for (n, chunk) in chunks.iter().enumerate() {
            let content_id = self.add_page();
            let mut c = Content::new();
            let g = self.geo;

            text_at(&mut c, g.margin, g.height - g.margin, self.title_size, layout.title);
            if !layout.subtitle.is_empty() {
                let y = g.height - g.margin - 16.0;
                text_at(&mut c, g.margin, y, self.body_size, layout.subtitle);
            }
            let footer = format!("Page {} of {}", n + 1, chunks.len());
            let x = g.width - g.margin - 60.0;
            text_at(&mut c, x, g.margin - 20.0, self.body_size, &footer);

            let mut y = g.table_top();
            band(&mut c, g.margin, y, table_w, g.row_h, (0.80, 0.90, 0.94));
            self.row(&mut c, y, &widths, &header, &[], self.header_size);

            for (i, r) in chunk.iter().enumerate() {
                y -= g.row_h;
                if i % 2 == 0 {
                    band(&mut c, g.margin, y, table_w, g.row_h, (0.95, 0.97, 0.99));
                }
                self.row(&mut c, y, &widths, r, layout.numeric, self.body_size);
            }

            self.pdf.stream(content_id, &c.finish());
        }
    }

    fn row(
        &self,
        c: &mut Content,
        y: f32,
        widths: &[f32],
        cells: &[String],
        numeric: &[bool],
        size: f32,
    ) {
        let mut x = self.geo.margin;

        for (i, w) in widths.iter().enumerate() {
            let raw = cells.get(i).map(String::as_str).unwrap_or("");
            let text = fit(raw, *w, size);

            let tx = if numeric.get(i).copied().unwrap_or(false) {
                x + w - CELL_PAD - text_width(&text, size)
            } else {
                x + CELL_PAD
            };

            text_at(c, tx, y + 5.0, size, &text);
            cell_border(c, x, y, *w, self.geo.row_h);
            x += w;
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog).pages(self.page_tree);
        self.pdf
            .pages(self.page_tree)
            .count(self.pages.len() as i32)
            .kids(self.pages.iter().copied());

        fs::write(path, self.pdf.finish())
    }
}

fn text_at(c: &mut Content, x: f32, y: f32, size: f32, text: &str) {
    let bytes = win_ansi(text);
    c.begin_text();
    c.set_font(FONT, size);
    c.next_line(x, y);
    c.show(Str(&bytes));
    c.end_text();
}

fn cell_border(c: &mut Content, x: f32, y: f32, w: f32, h: f32) {
    c.save_state();
    c.set_stroke_rgb(0.70, 0.75, 0.80);
    c.rect(x, y, w, h);
    c.stroke();
    c.restore_state();
}

fn band(c: &mut Content, x: f32, y: f32, w: f32, h: f32, (r, g, b): (f32, f32, f32)) {
    c.save_state();
    c.set_fill_rgb(r, g, b);
    c.rect(x, y, w, h);
    c.fill_nonzero();
    c.restore_state();
}

/// Approximate Helvetica advance: ~0.5 em per glyph.
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5
}

/// Truncates with "..." so the text fits in a cell of width `w`.
fn fit(text: &str, w: f32, size: f32) -> String {
    if text_width(text, size) + 2.0 * CELL_PAD <= w {
        return text.to_string();
    }

    let max_chars = ((w - 2.0 * CELL_PAD) / (size * 0.5)).floor().max(3.0) as usize;
    let mut s: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    s.push_str("...");
    s
}

/// Maps text to WinAnsi bytes; unmappable characters become '?'.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            'μ' => 0xB5,
            '\u{A0}'..='\u{FF}' => c as u32 as u8,
            '–' => 0x96,
            '—' => 0x97,
            '•' => 0x95,
            _ => b'?',
        })
        .collect()
}
