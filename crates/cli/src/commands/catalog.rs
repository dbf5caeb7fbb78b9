//! Catalog listing command.

use std::fmt::Write as _;

use tagsmith_storefront::catalog::Catalog;

use super::CommandError;

/// Print the stock catalog to stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn list(json: bool) -> Result<(), CommandError> {
    let catalog = Catalog::stock();
    let output = if json {
        serde_json::to_string_pretty(catalog.products())?
    } else {
        render_table(&catalog)
    };

    #[allow(clippy::print_stdout)]
    {
        println!("{output}");
    }
    Ok(())
}

fn render_table(catalog: &Catalog) -> String {
    let mut out = format!("{:<15} {:<22} {:<10} {:>7}\n", "SKU", "NAME", "SHAPE", "PRICE");
    for product in catalog.products() {
        let _ = writeln!(
            out,
            "{:<15} {:<22} {:<10} {:>7}",
            product.sku.as_str(),
            product.name,
            product.shape.as_str(),
            product.price.display()
        );
    }
    out
}
