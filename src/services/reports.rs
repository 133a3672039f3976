//! Booked-products report generation

use chrono::{DateTime, Utc};
use printpdf::{
    path::{PaintMode, WindingOrder},
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Polygon, Rgb,
};

use crate::{
    config::ReportConfig,
    error::{AppError, AppResult},
    models::product::Product,
    repository::Repository,
};

/// A rendered report ready to be sent as a download
pub struct BookedReport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

// Letter page with half-inch margins, matching the original report layout
const PAGE_WIDTH: f64 = 215.9;
const PAGE_HEIGHT: f64 = 279.4;
const MARGIN: f64 = 12.7;

const ROW_HEIGHT: f64 = 9.0;
const TITLE_SIZE: f64 = 16.0;
const BODY_SIZE: f64 = 11.0;
const FOOTER_SIZE: f64 = 9.0;
// Vertical space the title block occupies on the first page
const TITLE_BLOCK: f64 = 20.0;
// Room kept under the table for the generation-timestamp line
const FOOTER_BLOCK: f64 = 16.0;
// Share of the table width given to the name column
const NAME_COLUMN_RATIO: f64 = 0.75;

#[derive(Clone)]
pub struct ReportService {
    repository: Repository,
    config: ReportConfig,
}

impl ReportService {
    pub fn new(repository: Repository, config: ReportConfig) -> Self {
        Self { repository, config }
    }

    /// Render the booked-products report.
    ///
    /// An empty booking set is reported as `NotFound` rather than rendered as
    /// an empty document.
    pub async fn booked_products_pdf(&self) -> AppResult<BookedReport> {
        let products = self.repository.products.list_booked().await?;

        if products.is_empty() {
            return Err(AppError::NotFound(
                "No booked products to report".to_string(),
            ));
        }

        let generated_at = Utc::now();
        let bytes = render_booked_report(&products, generated_at, &self.config)?;
        let filename = format!("booked_items_{}.pdf", generated_at.format("%Y%m%d_%H%M%S"));

        tracing::info!(rows = products.len(), %filename, "booking report generated");

        Ok(BookedReport { filename, bytes })
    }
}

/// Render the PDF document: title, name/price table, generation timestamp
fn render_booked_report(
    products: &[Product],
    generated_at: DateTime<Utc>,
    config: &ReportConfig,
) -> AppResult<Vec<u8>> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(config.title.as_str(), Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "report");

    let font = match load_font(&doc, &config.font_path) {
        Some(font) => font,
        None => {
            tracing::warn!(
                path = %config.font_path,
                "report font not available, falling back to Helvetica; \
                 non-Latin text may render incorrectly"
            );
            doc.add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| AppError::Internal(format!("Failed to load report font: {}", e)))?
        }
    };

    let pages = paginate(
        products.len(),
        body_rows_per_page(true),
        body_rows_per_page(false),
    );

    for (index, range) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "report");
            doc.get_page(page).get_layer(layer)
        };

        let table_top = if index == 0 {
            let title_y = PAGE_HEIGHT - MARGIN - 8.0;
            layer.set_fill_color(black());
            layer.use_text(
                config.title.as_str(),
                TITLE_SIZE,
                Mm(MARGIN),
                Mm(title_y),
                &font,
            );
            PAGE_HEIGHT - MARGIN - TITLE_BLOCK
        } else {
            PAGE_HEIGHT - MARGIN
        };

        let table_bottom = draw_table(&layer, &font, &products[range.clone()], table_top);

        // Timestamp line under the table on the last page
        if index == pages.len() - 1 {
            let stamp = format!(
                "Отчет сгенерирован: {}",
                generated_at.format("%Y-%m-%d %H:%M:%S")
            );
            layer.set_fill_color(black());
            layer.use_text(stamp, FOOTER_SIZE, Mm(MARGIN), Mm(table_bottom - 8.0), &font);
        }
    }

    doc.save_to_bytes()
        .map_err(|e| AppError::Internal(format!("Failed to assemble PDF: {}", e)))
}

/// Draw the header band and body rows starting at `top`, returning the table bottom
fn draw_table(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    products: &[Product],
    top: f64,
) -> f64 {
    let left = MARGIN;
    let right = PAGE_WIDTH - MARGIN;
    let split = left + (right - left) * NAME_COLUMN_RATIO;
    let bottom = top - ROW_HEIGHT * (products.len() + 1) as f64;

    // Header band, filled grey with white labels
    layer.set_fill_color(Color::Rgb(Rgb::new(0.5, 0.5, 0.5, None)));
    layer.add_polygon(filled_rect(left, top - ROW_HEIGHT, right, top));
    layer.set_fill_color(Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None)));
    layer.use_text("Название", BODY_SIZE, Mm(left + 2.0), Mm(top - 6.0), font);
    layer.use_text("Цена (руб.)", BODY_SIZE, Mm(split + 2.0), Mm(top - 6.0), font);

    // Body rows
    layer.set_fill_color(black());
    for (row, product) in products.iter().enumerate() {
        let row_top = top - ROW_HEIGHT * (row + 1) as f64;
        layer.use_text(
            product.name.as_str(),
            BODY_SIZE,
            Mm(left + 2.0),
            Mm(row_top - 6.0),
            font,
        );
        layer.use_text(
            product.price.to_string(),
            BODY_SIZE,
            Mm(split + 2.0),
            Mm(row_top - 6.0),
            font,
        );
    }

    // Grid lines
    layer.set_outline_color(black());
    layer.set_outline_thickness(0.5);
    for row in 0..=products.len() + 1 {
        let y = top - ROW_HEIGHT * row as f64;
        layer.add_line(straight_line((left, y), (right, y)));
    }
    for x in [left, split, right] {
        layer.add_line(straight_line((x, bottom), (x, top)));
    }

    bottom
}

/// Body rows that fit on a page, below the title block and above the footer room
fn body_rows_per_page(first_page: bool) -> usize {
    let top = if first_page {
        PAGE_HEIGHT - MARGIN - TITLE_BLOCK
    } else {
        PAGE_HEIGHT - MARGIN
    };
    let available = top - MARGIN - FOOTER_BLOCK - ROW_HEIGHT;
    (available / ROW_HEIGHT).floor().max(1.0) as usize
}

/// Split `total` rows into per-page ranges
fn paginate(total: usize, first: usize, rest: usize) -> Vec<std::ops::Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;
    let mut capacity = first.max(1);

    while start < total {
        let end = (start + capacity).min(total);
        ranges.push(start..end);
        start = end;
        capacity = rest.max(1);
    }

    ranges
}

fn load_font(doc: &PdfDocumentReference, path: &str) -> Option<IndirectFontRef> {
    let file = std::fs::File::open(path).ok()?;
    doc.add_external_font(file).ok()
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn filled_rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Polygon {
    Polygon {
        rings: vec![vec![
            (Point::new(Mm(x1), Mm(y1)), false),
            (Point::new(Mm(x2), Mm(y1)), false),
            (Point::new(Mm(x2), Mm(y2)), false),
            (Point::new(Mm(x1), Mm(y2)), false),
        ]],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    }
}

fn straight_line(from: (f64, f64), to: (f64, f64)) -> Line {
    Line {
        points: vec![
            (Point::new(Mm(from.0), Mm(from.1)), false),
            (Point::new(Mm(to.0), Mm(to.1)), false),
        ],
        is_closed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    fn sample_products(count: usize) -> Vec<Product> {
        (0..count)
            .map(|i| Product {
                id: i as i32 + 1,
                name: format!("Товар {:03}", i),
                price: Decimal::new(1000 + i as i64, 2),
                is_booked: true,
                image_url: None,
            })
            .collect()
    }

    fn test_config() -> ReportConfig {
        ReportConfig {
            // Deliberately missing so rendering exercises the Helvetica fallback
            font_path: "definitely-missing-font.ttf".to_string(),
            title: "Список забронированных товаров".to_string(),
        }
    }

    #[test]
    fn paginate_splits_rows_across_pages() {
        assert_eq!(paginate(5, 3, 4), vec![0..3, 3..5]);
        assert_eq!(paginate(3, 3, 4), vec![0..3]);
        assert_eq!(paginate(0, 3, 4), Vec::<std::ops::Range<usize>>::new());
        assert_eq!(paginate(2, 0, 0), vec![0..1, 1..2]);
    }

    #[test]
    fn pages_hold_a_reasonable_row_count() {
        assert!(body_rows_per_page(true) >= 10);
        assert!(body_rows_per_page(false) > body_rows_per_page(true));
    }

    #[test]
    fn renders_a_pdf_with_fallback_font() {
        let bytes = render_booked_report(
            &sample_products(2),
            Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap(),
            &test_config(),
        )
        .expect("rendering should succeed");

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn renders_row_counts_that_span_multiple_pages() {
        let many = body_rows_per_page(true) + body_rows_per_page(false) + 5;
        let bytes = render_booked_report(
            &sample_products(many),
            Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap(),
            &test_config(),
        )
        .expect("rendering should succeed");

        assert!(bytes.starts_with(b"%PDF"));
        // A three-page document is clearly larger than a single-page one
        let single = render_booked_report(
            &sample_products(1),
            Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap(),
            &test_config(),
        )
        .unwrap();
        assert!(bytes.len() > single.len());
    }
}
