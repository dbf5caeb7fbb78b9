//! Custom tag quote command.

use tagsmith_core::{
    CustomQuote, Material,
    custom_order::{parse_quantity, parse_size},
    quote,
};

use super::CommandError;

/// Price a custom tag and print the breakdown.
///
/// Input is validated exactly like the storefront's custom order form.
///
/// # Errors
///
/// Returns an error if the size or quantity is invalid.
pub fn print(size: &str, material: &str, quantity: &str) -> Result<(), CommandError> {
    let breakdown = price(size, material, quantity)?;

    #[allow(clippy::print_stdout)]
    {
        println!("Price per tag: {}", breakdown.unit_price);
        println!("Total price:   {}", breakdown.line_total);
    }
    Ok(())
}

fn price(size: &str, material: &str, quantity: &str) -> Result<CustomQuote, CommandError> {
    let size = parse_size(size)?;
    let quantity = parse_quantity(quantity)?;
    Ok(quote(size, Material::from_form_value(material.trim()), quantity))
}
