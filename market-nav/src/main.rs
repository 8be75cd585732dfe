use std::process::ExitCode;

use market_nav::domain::Catalog;
use market_nav::market::Market;
use market_nav::search::find_line;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(catalog_path), Some(query)) = (args.next(), args.next()) else {
        eprintln!("Usage: market-nav <catalog.json> <query>");
        eprintln!();
        eprintln!("Example: market-nav marketway.json \"where can I find shoes\"");
        return ExitCode::FAILURE;
    };

    let catalog = match Catalog::from_path(&catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Failed to load catalog from {catalog_path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let market = Market::bamenda();

    let Some(found) = find_line(&query, &catalog) else {
        println!("I'm sorry, I couldn't find that product in the market.");
        return ExitCode::SUCCESS;
    };

    match found.item {
        Some(item) => println!(
            "You can find {item} in {} ({}).",
            found.entry.name, found.entry.id
        ),
        None => println!(
            "You can find that in {} ({}).",
            found.entry.name, found.entry.id
        ),
    }

    let route = market.plan_route(&found.entry.id);
    if route.is_empty() {
        println!("No route is available for {}.", found.entry.id);
        return ExitCode::SUCCESS;
    }

    println!("Route from the entrance ({:.0} m):", route.length_meters());
    for point in route.waypoints() {
        println!("  ({:.6}, {:.6})", point.lat, point.lng);
    }

    ExitCode::SUCCESS
}
