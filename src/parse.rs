//! Turns lines of the scraped product export into [`Product`]s.
//!
//! The export has a fixed 20 column layout and no quoting, so a line is simply split on commas.

use crate::error::ParseError;
use crate::product::Product;

/// Column headers of the export, in order.
pub const COLUMNS: [&str; 20] = [
    "CATEGORY",
    "DATE_SCRAPED",
    "SORT_BY",
    "RUN_START_DATE",
    "SUBCATEGORY",
    "SHIPPING_LOCATION",
    "SKU",
    "COUNTRY",
    "BRAND",
    "PRICE_RETAIL",
    "PRICE_CURRENT",
    "SELLER",
    "PRODUCT_URL",
    "CURRENCY",
    "BREADCRUMBS",
    "DEPARTMENT",
    "PROMOTION",
    "BESTSELLER_RANK",
    "PRODUCT_NAME",
    "WEBSITE_URL",
];

const CATEGORY: usize = 0;
const SKU: usize = 6;
const PRICE_RETAIL: usize = 9;
const PRICE_CURRENT: usize = 10;
const PRODUCT_NAME: usize = 18;

/// Parses one data line (not the header) into a product.
///
/// # Examples
///
/// ```
/// use catalog_index::parse::parse_line;
///
/// let line = "Toys,2023-01-01,Popular,2023-01-01,Blocks,US,SKU-7,US,Acme,\
///             19.99,$14.99,Acme,http://x,USD,Home>Toys,Home,None,4,Blocks,http://x";
/// let product = parse_line(line).unwrap();
///
/// assert_eq!(product.sku, "SKU-7");
/// assert_eq!(product.price_current, 14.99);
/// ```
pub fn parse_line(line: &str) -> Result<Product, ParseError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < COLUMNS.len() {
        return Err(ParseError::MissingFields {
            expected: COLUMNS.len(),
            found: fields.len(),
        });
    }

    let sku = fields[SKU];
    if sku.is_empty() {
        return Err(ParseError::EmptySku);
    }

    Ok(Product::new(
        sku,
        parse_price(fields[PRICE_RETAIL], COLUMNS[PRICE_RETAIL])?,
        parse_price(fields[PRICE_CURRENT], COLUMNS[PRICE_CURRENT])?,
        fields[PRODUCT_NAME],
        fields[CATEGORY],
    ))
}

/// Strips everything but ASCII digits and `.` from `raw` and parses what's left.
fn parse_price(raw: &str, column: &'static str) -> Result<f64, ParseError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    cleaned.parse().map_err(|_| ParseError::InvalidPrice {
        column,
        value: raw.to_string(),
    })
}
