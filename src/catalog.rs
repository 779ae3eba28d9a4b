//! A product catalog indexed by SKU.
//!
//! Products live in a [`Tree`] ordered by SKU. Price listings are built on demand from one
//! in-order dump followed by a stable sort, so products with the same price stay in SKU order.
//!
//! # Examples
//!
//! ```
//! use catalog_index::catalog::Catalog;
//! use catalog_index::product::Product;
//!
//! let mut catalog = Catalog::new();
//! catalog.insert(Product::new("B", 199.99, 199.99, "Chair", "Furniture"));
//! catalog.insert(Product::new("A", 499.99, 499.99, "TV", "Electronics"));
//!
//! assert_eq!(catalog.search_by_sku("A").map(|p| p.name.as_str()), Some("TV"));
//!
//! let cheapest_first: Vec<_> = catalog
//!     .list_by_price_ascending()
//!     .into_iter()
//!     .map(|p| p.sku.as_str())
//!     .collect();
//! assert_eq!(cheapest_first, ["B", "A"]);
//! ```

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::error::{ParseError, Result};
use crate::parse;
use crate::product::Product;
use crate::tree::Tree;

/// An in-memory product index.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Tree<Product>,
}

/// A line that couldn't be loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedRecord {
    /// 1-based line number in the source, counting the header.
    pub line: usize,
    /// Why the line was rejected.
    pub error: ParseError,
}

/// Outcome of a best-effort load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadReport {
    /// Records inserted, including ones that replaced an earlier record with the same SKU.
    pub loaded: usize,
    /// Records that were rejected, in file order.
    pub skipped: Vec<SkippedRecord>,
}

impl LoadReport {
    fn record(mut self, line: usize, outcome: std::result::Result<(), ParseError>) -> Self {
        match outcome {
            Ok(()) => self.loaded += 1,
            Err(error) => self.skipped.push(SkippedRecord { line, error }),
        }
        self
    }
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product, replacing any product with the same SKU.
    pub fn insert(&mut self, product: Product) {
        if let Some(previous) = self.products.insert(product) {
            debug!("replaced existing product {}", previous);
        }
    }

    /// Loads every parseable record of the CSV file at `path` into the catalog. See
    /// [`load_from_reader`][Self::load_from_reader].
    pub fn load_csv(&mut self, path: impl AsRef<Path>) -> Result<LoadReport> {
        let path = path.as_ref();
        info!("loading products from {}", path.display());
        let file = File::open(path)?;
        self.load_from_reader(BufReader::new(file))
    }

    /// Loads records from `reader`. The first line is a header and is skipped, as are blank
    /// lines. A record that fails to parse is logged, recorded in the returned report and never
    /// inserted; it doesn't stop the load. Bytes that aren't valid UTF-8 are replaced with
    /// U+FFFD rather than rejecting the line. Only an I/O error stops the load.
    pub fn load_from_reader(&mut self, mut reader: impl BufRead) -> Result<LoadReport> {
        let mut report = LoadReport::default();
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;
            if line_number == 1 {
                continue;
            }

            let line = String::from_utf8_lossy(&buf);
            if let Cow::Owned(_) = line {
                warn!("line {} is not valid UTF-8, decoding lossily", line_number);
            }
            if line.trim().is_empty() {
                continue;
            }

            let outcome = parse::parse_line(&line).map(|product| self.insert(product));
            if let Err(err) = &outcome {
                warn!("skipping line {}: {}", line_number, err);
            }
            report = report.record(line_number, outcome);
        }

        info!(
            "loaded {} records ({} skipped), catalog holds {} products",
            report.loaded,
            report.skipped.len(),
            self.len()
        );
        Ok(report)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by its exact SKU.
    pub fn search_by_sku(&self, sku: &str) -> Option<&Product> {
        self.products.search(&Product::probe(sku))
    }

    /// Every product in SKU order.
    pub fn products(&self) -> Vec<&Product> {
        self.products.in_order()
    }

    /// Every product, cheapest current price first.
    pub fn list_by_price_ascending(&self) -> Vec<&Product> {
        let mut products = self.products.in_order();
        products.sort_by(|a, b| a.price_current.total_cmp(&b.price_current));
        products
    }

    /// Every product, most expensive current price first.
    pub fn list_by_price_descending(&self) -> Vec<&Product> {
        let mut products = self.products.in_order();
        products.sort_by(|a, b| b.price_current.total_cmp(&a.price_current));
        products
    }
}

impl Extend<Product> for Catalog {
    fn extend<I: IntoIterator<Item = Product>>(&mut self, iter: I) {
        for product in iter {
            self.insert(product);
        }
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut catalog = Self::new();
        catalog.extend(iter);
        catalog
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const HEADER: &str = "CATEGORY,DATE_SCRAPED,SORT_BY,RUN_START_DATE,SUBCATEGORY,\
                          SHIPPING_LOCATION,SKU,COUNTRY,BRAND,PRICE_RETAIL,PRICE_CURRENT,SELLER,\
                          PRODUCT_URL,CURRENCY,BREADCRUMBS,DEPARTMENT,PROMOTION,BESTSELLER_RANK,\
                          PRODUCT_NAME,WEBSITE_URL";

    fn row(sku: &str, current: &str) -> String {
        format!(
            "Cat,2023-01-01,Popular,2023-01-01,Sub,US,{},US,Brand,1.00,{},Seller,http://e,USD,\
             Home,Home,None,1,Name {},http://e",
            sku, current, sku
        )
    }

    fn skus(products: Vec<&Product>) -> Vec<&str> {
        products.into_iter().map(|p| p.sku.as_str()).collect()
    }

    #[test]
    fn price_listings_are_independent_of_sku_order() {
        let catalog: Catalog = vec![
            Product::new("SKU-1", 0.0, 199.99, "a", "c"),
            Product::new("SKU-2", 0.0, 499.99, "b", "c"),
            Product::new("SKU-3", 0.0, 99.99, "c", "c"),
        ]
        .into_iter()
        .collect();

        let prices: Vec<f64> = catalog
            .list_by_price_ascending()
            .into_iter()
            .map(|p| p.price_current)
            .collect();
        assert_eq!(prices, [99.99, 199.99, 499.99]);
        assert_eq!(skus(catalog.list_by_price_descending()), ["SKU-2", "SKU-1", "SKU-3"]);
        assert_eq!(skus(catalog.products()), ["SKU-1", "SKU-2", "SKU-3"]);
    }

    #[test]
    fn equal_prices_keep_sku_order_both_ways() {
        let catalog: Catalog = vec![
            Product::new("C", 0.0, 5.0, "", ""),
            Product::new("A", 0.0, 5.0, "", ""),
            Product::new("B", 0.0, 1.0, "", ""),
        ]
        .into_iter()
        .collect();

        assert_eq!(skus(catalog.list_by_price_ascending()), ["B", "A", "C"]);
        assert_eq!(skus(catalog.list_by_price_descending()), ["A", "C", "B"]);
    }

    #[test]
    fn load_skips_bad_rows_and_keeps_going() {
        let csv = [
            HEADER.to_string(),
            row("S-1", "10.00"),
            "truncated,row".to_string(),
            String::new(),
            row("S-2", "not a price"),
            row("S-3", "$30.00"),
        ]
        .join("\n");
        let mut catalog = Catalog::new();

        let report = catalog.load_from_reader(Cursor::new(csv)).unwrap();

        assert_eq!(report.loaded, 2);
        assert_eq!(
            report.skipped,
            vec![
                SkippedRecord {
                    line: 3,
                    error: ParseError::MissingFields {
                        expected: 20,
                        found: 2
                    },
                },
                SkippedRecord {
                    line: 5,
                    error: ParseError::InvalidPrice {
                        column: "PRICE_CURRENT",
                        value: "not a price".to_string()
                    },
                },
            ]
        );
        assert_eq!(catalog.len(), 2);
        assert!(catalog.search_by_sku("S-2").is_none());
        assert_eq!(catalog.search_by_sku("S-3").map(|p| p.price_current), Some(30.0));
    }

    #[test]
    fn invalid_utf8_row_is_decoded_and_load_continues() {
        let mut csv = [HEADER.to_string(), row("S-1", "10.00")].join("\n").into_bytes();
        csv.extend_from_slice(b"\nCat,d,s,r,Sub,US,S-2,US,B,5.00,4.00,Sel,u,USD,b,d,p,1,Caf\xe9,u\n");
        csv.extend_from_slice(row("S-3", "30.00").as_bytes());
        let mut catalog = Catalog::new();

        let report = catalog.load_from_reader(Cursor::new(csv)).unwrap();

        assert_eq!(report.loaded, 3);
        assert!(report.skipped.is_empty());
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.search_by_sku("S-2").map(|p| p.name.as_str()),
            Some("Caf\u{FFFD}")
        );
        assert!(catalog.search_by_sku("S-3").is_some());
    }

    #[test]
    fn duplicate_sku_replaces_and_is_counted_once() {
        let csv = [HEADER.to_string(), row("S-1", "10.00"), row("S-1", "12.00")].join("\n");
        let mut catalog = Catalog::new();

        let report = catalog.load_from_reader(Cursor::new(csv)).unwrap();

        assert_eq!(report.loaded, 2);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.search_by_sku("S-1").map(|p| p.price_current), Some(12.0));
    }

    #[test]
    fn header_only_and_empty_input() {
        let mut catalog = Catalog::new();

        assert_eq!(
            catalog.load_from_reader(Cursor::new(HEADER)).unwrap(),
            LoadReport::default()
        );
        assert_eq!(
            catalog.load_from_reader(Cursor::new("")).unwrap(),
            LoadReport::default()
        );
        assert!(catalog.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut catalog = Catalog::new();
        let result = catalog.load_csv("/definitely/not/here/datos.csv");

        assert!(matches!(result, Err(crate::error::CatalogError::Io(_))));
    }
}
