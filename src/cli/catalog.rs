//! Catalog CLI command
//!
//! Lists the suggested values for the charge form. Any other value is
//! accepted as well.

use crate::config::Catalog;

/// Print the suggestion lists
pub fn handle_catalog_command(catalog: &Catalog) {
    print_section("Providing units", &catalog.providers);
    println!();
    print_section("Services", &catalog.services);
    println!();
    print_section("Receiving units", &catalog.receivers);
}

fn print_section(title: &str, values: &[String]) {
    println!("{}:", title);
    if values.is_empty() {
        println!("  (none)");
    }
    for value in values {
        println!("  {}", value);
    }
}
