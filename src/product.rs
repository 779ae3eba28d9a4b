//! The record stored in the catalog.

use std::cmp::Ordering;
use std::fmt;

/// A single catalog entry. Products are identified, compared and ordered by their SKU alone; the
/// remaining fields are payload.
#[derive(Clone, Debug)]
pub struct Product {
    /// Stock keeping unit. Unique within a catalog.
    pub sku: String,
    /// List price.
    pub price_retail: f64,
    /// Price the product currently sells for. Listings are sorted by this.
    pub price_current: f64,
    /// Human readable product name.
    pub name: String,
    /// Top level category.
    pub category: String,
}

impl Product {
    /// Creates a product from all of its fields.
    pub fn new(
        sku: impl Into<String>,
        price_retail: f64,
        price_current: f64,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            sku: sku.into(),
            price_retail,
            price_current,
            name: name.into(),
            category: category.into(),
        }
    }

    /// A product with only its SKU filled in, used to search a tree of products.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_index::product::Product;
    ///
    /// let stored = Product::new("SKU-1", 10.0, 8.0, "Kettle", "Kitchen");
    /// assert_eq!(Product::probe("SKU-1"), stored);
    /// ```
    pub fn probe(sku: impl Into<String>) -> Self {
        Self::new(sku, 0.0, 0.0, "", "")
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.sku == other.sku
    }
}

impl Eq for Product {}

impl PartialOrd for Product {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Product {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sku.cmp(&other.sku)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) [{}] retail ${:.2}, current ${:.2}",
            self.sku, self.name, self.category, self.price_retail, self.price_current
        )
    }
}
