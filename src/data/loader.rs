use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{SaleRecord, SalesTable};
use super::parse::{parse_quantity, parse_sale_date, parse_unit_price};

// ---------------------------------------------------------------------------
// Column names of the point-of-sale export
// ---------------------------------------------------------------------------

/// pandas writes its index with an empty header and reads it back as `Unnamed: 0`.
const ID_COLUMNS: &[&str] = &["", "Unnamed: 0", "id"];
const PRODUCT_COLUMNS: &[&str] = &["article", "product"];
const QUANTITY_COLUMNS: &[&str] = &["Quantity", "quantity"];
const PRICE_COLUMN: &str = "unit_price";
const DATE_COLUMN: &str = "date";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and clean a bakery sales export from disk.
pub fn load_sales(path: &Path) -> Result<SalesTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_sales(file).with_context(|| format!("loading {}", path.display()))
}

/// Clean a sales export from any reader.
///
/// Renames the index/article/Quantity columns, parses the euro price,
/// derives `sales`, drops rows whose sales are zero and parses the date.
pub fn read_sales<R: io::Read>(input: R) -> Result<SalesTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let id_idx = find_column(&headers, ID_COLUMNS);
    let product_idx =
        find_column(&headers, PRODUCT_COLUMNS).context("CSV missing 'article' column")?;
    let quantity_idx =
        find_column(&headers, QUANTITY_COLUMNS).context("CSV missing 'Quantity' column")?;
    let price_idx =
        find_column(&headers, &[PRICE_COLUMN]).context("CSV missing 'unit_price' column")?;
    let date_idx = find_column(&headers, &[DATE_COLUMN]).context("CSV missing 'date' column")?;

    let known = [Some(product_idx), Some(quantity_idx), Some(price_idx), Some(date_idx), id_idx];

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let field = |idx: usize| row.get(idx).unwrap_or("");

        let id = match id_idx {
            Some(idx) => field(idx)
                .trim()
                .parse::<i64>()
                .with_context(|| format!("Row {row_no}, id: '{}' is not an integer", field(idx)))?,
            None => row_no as i64,
        };
        let quantity = parse_quantity(field(quantity_idx))
            .with_context(|| format!("Row {row_no}, Quantity"))?;
        let unit_price = parse_unit_price(field(price_idx))
            .with_context(|| format!("Row {row_no}, unit_price"))?;
        let date =
            parse_sale_date(field(date_idx)).with_context(|| format!("Row {row_no}, date"))?;

        let product = field(product_idx).trim();
        let mut record = SaleRecord::new(id, date, product, quantity, unit_price);
        if record.sales == 0.0 {
            dropped += 1;
            continue;
        }

        record.extra = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| !known.contains(&Some(*idx)))
            .map(|(idx, name)| (name.clone(), field(idx).to_string()))
            .collect::<BTreeMap<_, _>>();
        records.push(record);
    }

    if dropped > 0 {
        log::debug!("Dropped {dropped} rows with zero sales");
    }

    Ok(SalesTable::from_records(records))
}

fn find_column(headers: &[String], candidates: &[&str]) -> Option<usize> {
    candidates
        .iter()
        .find_map(|name| headers.iter().position(|h| h == name))
}
