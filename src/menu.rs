//! The interactive text menu: search by SKU or list products by price until the user exits.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use log::trace;

use crate::catalog::Catalog;
use crate::config::{Config, DEFAULT_LIMIT};
use crate::product::Product;

/// Widest a product name may be in a listing before it's truncated.
pub const NAME_WIDTH: usize = 40;

/// Display settings for the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuConfig {
    /// Rows printed per listing.
    pub limit: usize,
    /// Characters of product name printed per row.
    pub name_width: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            name_width: NAME_WIDTH,
        }
    }
}

impl From<&Config> for MenuConfig {
    fn from(config: &Config) -> Self {
        Self {
            limit: config.limit,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum PriceOrder {
    Ascending,
    Descending,
}

/// Runs the menu until the user picks "Exit" or `input` ends.
pub fn run(
    catalog: &Catalog,
    mut input: impl BufRead,
    mut output: impl Write,
    config: &MenuConfig,
) -> io::Result<()> {
    loop {
        writeln!(output)?;
        writeln!(output, "Menu:")?;
        writeln!(output, "1. Search for a product by SKU")?;
        writeln!(output, "2. List products by price (ascending)")?;
        writeln!(output, "3. List products by price (descending)")?;
        writeln!(output, "4. Exit")?;
        write!(output, "Enter your choice: ")?;
        output.flush()?;

        let choice = match read_line(&mut input)? {
            Some(choice) => choice,
            None => break,
        };
        trace!("menu choice {:?}", choice);

        match choice.trim() {
            "1" => search(catalog, &mut input, &mut output)?,
            "2" => list(catalog, PriceOrder::Ascending, &mut output, config)?,
            "3" => list(catalog, PriceOrder::Descending, &mut output, config)?,
            "4" => break,
            _ => writeln!(output, "Invalid choice.")?,
        }
    }

    Ok(())
}

/// Reads one line without its terminator, or `None` at end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

fn search(catalog: &Catalog, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
    write!(output, "Enter the SKU: ")?;
    output.flush()?;
    let sku = match read_line(input)? {
        Some(sku) => sku,
        None => return Ok(()),
    };

    match catalog.search_by_sku(sku.trim()) {
        Some(product) => print_product(product, output),
        None => writeln!(output, "Product not found."),
    }
}

fn print_product(product: &Product, output: &mut impl Write) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Product found:")?;
    writeln!(output, "SKU: {}", product.sku)?;
    writeln!(output, "Name: {}", product.name)?;
    writeln!(output, "Category: {}", product.category)?;
    writeln!(output, "Retail Price: ${:.2}", product.price_retail)?;
    writeln!(output, "Current Price: ${:.2}", product.price_current)
}

fn list(
    catalog: &Catalog,
    order: PriceOrder,
    output: &mut impl Write,
    config: &MenuConfig,
) -> io::Result<()> {
    writeln!(output)?;
    let products = match order {
        PriceOrder::Ascending => {
            writeln!(output, "Products sorted by price (ascending):")?;
            catalog.list_by_price_ascending()
        }
        PriceOrder::Descending => {
            writeln!(output, "Products sorted by price (descending):")?;
            catalog.list_by_price_descending()
        }
    };

    for product in products.iter().take(config.limit) {
        writeln!(
            output,
            "{:<20} | {:<width$} | ${:<10.2} | ${:<10.2} | {}",
            product.sku,
            truncate(&product.name, config.name_width),
            product.price_retail,
            product.price_current,
            product.category,
            width = config.name_width,
        )?;
    }
    if products.len() > config.limit {
        writeln!(output, "... and {} more products.", products.len() - config.limit)?;
    }

    Ok(())
}

/// Shortens `s` to at most `max` characters, marking the cut with `...`.
///
/// # Examples
///
/// ```
/// use catalog_index::menu::truncate;
///
/// assert_eq!(truncate("Washing Machine", 10), "Washing...");
/// assert_eq!(truncate("TV", 10), "TV");
/// ```
pub fn truncate(s: &str, max: usize) -> Cow<'_, str> {
    if s.chars().count() <= max {
        return Cow::Borrowed(s);
    }

    const ELLIPSIS: &str = "...";
    if max <= ELLIPSIS.len() {
        return Cow::Owned(s.chars().take(max).collect());
    }

    let mut shortened: String = s.chars().take(max - ELLIPSIS.len()).collect();
    shortened.push_str(ELLIPSIS);
    Cow::Owned(shortened)
}
