//! Basic usage demo for countrydb-rs
//!
//! This demo shows how to:
//! - List the full country collection through the gateway
//! - Narrow it with the filter engine
//! - Derive the region universe
//! - Look up a single country and resolve its borders

use countrydb_core::{filter_countries, region_universe, CountryGateway, Result};

#[tokio::main]
async fn main() -> Result<()> {
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .ok();

    println!("=== countrydb-rs Basic Usage ===\n");

    let gateway = CountryGateway::new();

    // Example 1: the full collection (remote, else bundled snapshot)
    println!("--- Example 1: List all countries ---");
    let countries = gateway.list_all().await?;
    println!("Total countries: {}", countries.len());
    for (i, country) in countries.iter().take(5).enumerate() {
        println!("{}. {} ({})", i + 1, country.name(), country.code());
    }
    println!();

    // Example 2: the derived region universe
    println!("--- Example 2: Region universe ---");
    println!("{:?}\n", region_universe(&countries));

    // Example 3: filter by name and region
    println!("--- Example 3: Filter ---");
    let hits = filter_countries(&countries, "land", "Europe");
    println!("'land' in Europe: {} hits", hits.len());
    for country in hits.iter().take(5) {
        println!("- {} ({})", country.name(), country.code());
    }
    println!();

    // Example 4: one record plus resolved borders
    println!("--- Example 4: Detail view ---");
    if let Some(detail) = gateway.load_detail("CHE").await? {
        let country = &detail.country;
        println!("Found: {}", country.name());
        println!("Official: {}", country.official_name());
        println!("Capital: {}", country.display_capital().unwrap_or("N/A"));
        println!("Region: {} / {}", country.region(), country.subregion().unwrap_or("N/A"));
        println!("Population: {}", country.population());
        println!("Currencies: {}", country.currency_summary());
        println!("Languages: {}", country.language_summary());
        print!("Borders: ");
        let names: Vec<&str> = detail.borders.iter().map(|b| b.name()).collect();
        println!("{}", names.join(", "));
    }

    Ok(())
}
