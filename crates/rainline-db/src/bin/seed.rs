//! # Catalog Seed Tool
//!
//! Populates the catalog with the standard guttering product range
//! for development.
//!
//! ## Usage
//! ```bash
//! # Seed into the default development database
//! cargo run -p rainline-db --bin seed
//!
//! # Specify database path
//! cargo run -p rainline-db --bin seed -- --db ./data/rainline.db
//! ```
//!
//! ## Seeded Catalog
//! - Gutters: Storm Cloud and Classic profiles, Marley range, 1.5/3/5 m stock
//! - Brackets: one per profile (inferred by the expansion engine)
//! - Downpipes and downpipe joiners, 65 mm and 80 mm
//! - Droppers, saddle clips, adjustable clips
//! - Stainless screws (the shared fastener)
//! - Standard labour rate (unit "hour")
//!
//! Costs are in cents, markups in basis points.

use rainline_db::{CatalogProduct, Database, DbConfig};
use std::env;

/// The standard catalog: (id, name, cost_cents, markup_bps, unit).
const CATALOG: &[(&str, &str, i64, i64, &str)] = &[
    // Gutters (priced per stock length)
    ("GUT-SC-MAR-1.5M", "Marley Storm Cloud Gutter 1.5m", 1450, 2500, "each"),
    ("GUT-SC-MAR-3M", "Marley Storm Cloud Gutter 3m", 2750, 2500, "each"),
    ("GUT-SC-MAR-5M", "Marley Storm Cloud Gutter 5m", 4390, 2500, "each"),
    ("GUT-CL-MAR-1.5M", "Marley Classic Gutter 1.5m", 1280, 2500, "each"),
    ("GUT-CL-MAR-3M", "Marley Classic Gutter 3m", 2460, 2500, "each"),
    ("GUT-CL-MAR-5M", "Marley Classic Gutter 5m", 3980, 2500, "each"),
    // Brackets (auto-expanded alongside gutters)
    ("BRK-SC-MAR", "Storm Cloud Gutter Bracket", 120, 2500, "each"),
    ("BRK-CL-MAR", "Classic Gutter Bracket", 95, 2500, "each"),
    // Downpipes and joiners
    ("DP-65-3M", "Round Downpipe 65mm 3m", 1890, 2500, "each"),
    ("DP-80-3M", "Round Downpipe 80mm 3m", 2340, 2500, "each"),
    ("DPJ-65", "Downpipe Joiner 65mm", 310, 2500, "each"),
    ("DPJ-80", "Downpipe Joiner 80mm", 380, 2500, "each"),
    // Droppers
    ("DRP-65", "Gutter Dropper 65mm", 520, 2500, "each"),
    ("DRP-80", "Gutter Dropper 80mm", 610, 2500, "each"),
    // Clips
    ("SCL-65", "Saddle Clip 65mm", 145, 2500, "each"),
    ("SCL-80", "Saddle Clip 80mm", 170, 2500, "each"),
    ("ACL-65", "Adjustable Clip 65mm", 230, 2500, "each"),
    ("ACL-80", "Adjustable Clip 80mm", 260, 2500, "each"),
    // Fasteners
    ("SCR-SS", "Stainless Steel Screw", 8, 10000, "each"),
    // Labour (resolved through the same catalog lookup as materials)
    ("LAB-STD", "Standard Installation Labour", 6500, 3000, "hour"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./rainline_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Rainline Catalog Seed Tool");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./rainline_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    // Surface db-layer tracing (migrations, pool) when RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("🌱 Rainline Catalog Seed Tool");
    println!("=============================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing catalog
    let existing = db.catalog().count().await?;
    if existing > 0 {
        println!("⚠ Catalog already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding catalog...");

    let mut seeded = 0;
    for (id, name, cost_cents, markup_bps, unit) in CATALOG {
        let product = CatalogProduct::new(*id, *name, Some(*cost_cents), *markup_bps, *unit);
        if let Err(e) = db.catalog().insert(&product).await {
            eprintln!("Failed to insert {}: {}", id, e);
            continue;
        }
        seeded += 1;
    }

    println!("✓ Seeded {} products", seeded);

    // Verify the batch pricing read
    println!();
    println!("Verifying pricing lookup...");
    let ids: Vec<String> = ["GUT-SC-MAR-3M", "BRK-SC-MAR", "SCR-SS", "LAB-STD"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows = db.catalog().fetch_pricing(&ids).await?;
    println!("  Batch of {} ids: {} rows", ids.len(), rows.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
