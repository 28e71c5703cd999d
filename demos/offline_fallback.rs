//! Offline fallback demo for countrydb-rs
//!
//! Points the remote tier at an address nothing listens on and shows the
//! gateway serving a fully populated view from the bundled snapshot.

use countrydb_core::{
    filter_countries, region_universe, CountryGateway, LocalSnapshot, RemoteSource, Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .ok();

    println!("=== countrydb-rs Offline Fallback ===\n");

    // A remote tier that cannot be reached.
    let gateway = CountryGateway::with_sources(
        RemoteSource::with_base_url("http://127.0.0.1:1"),
        LocalSnapshot::new(),
    );

    let countries = gateway.list_all().await?;
    println!("Countries served offline: {}", countries.len());
    println!("Regions: {:?}", region_universe(&countries));

    let europe = filter_countries(&countries, "", "Europe");
    println!("In Europe: {}", europe.len());

    if let Some(detail) = gateway.load_detail("DEU").await? {
        println!("\n{} borders:", detail.country.name());
        for border in &detail.borders {
            println!("- {} ({})", border.name(), border.code());
        }
    }

    Ok(())
}
