//! Development data seeder.
//!
//! Fills an empty sales database with plausible ledger rows spread across
//! the hours of the current local day, so the report view and date filter
//! have something to show.
//!
//! ```bash
//! cargo run -p ventas-db --bin seed -- --count 200 --db ./sales.db
//! ```

use chrono::{Duration, Utc};

use ventas_core::types::{Business, Salesperson};
use ventas_core::StoreZone;
use ventas_db::{Database, DbConfig};

const DEFAULT_COUNT: usize = 120;
const DEFAULT_DB_PATH: &str = "./sales.db";

/// Preset prices in cents, matching the amounts the stores actually ring up.
const PRICES: [i64; 9] = [
    5_000, 10_000, 25_000, 35_000, 40_000, 50_000, 60_000, 80_000, 100_000,
];

const DESCRIPTIONS: [&str; 6] = [
    "Anillo de oro",
    "Cadena de plata",
    "Aretes de perla",
    "Pulsera ajustable",
    "Dije de corazón",
    "Reloj para caballero",
];

fn print_help() {
    println!("Seed the sales database with development data");
    println!();
    println!("Usage: seed [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --count <N>    Number of sales to insert (default: {DEFAULT_COUNT})");
    println!("  -d, --db <PATH>    Database file path (default: {DEFAULT_DB_PATH})");
    println!("  -h, --help         Show this help");
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut count = DEFAULT_COUNT;
    let mut db_path = DEFAULT_DB_PATH.to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse::<usize>().ok()) {
                    Some(n) => count = n,
                    None => {
                        eprintln!("⚠ --count expects a number");
                        std::process::exit(1);
                    }
                }
            }
            "--db" | "-d" => {
                i += 1;
                match args.get(i) {
                    Some(path) => db_path = path.clone(),
                    None => {
                        eprintln!("⚠ --db expects a path");
                        std::process::exit(1);
                    }
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            other => {
                eprintln!("⚠ Unknown argument: {other}");
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    println!("Seeding {count} sales into {db_path}");

    let db = match Database::new(DbConfig::new(&db_path)).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("⚠ Failed to open database: {e}");
            std::process::exit(1);
        }
    };

    let existing = match db.sales().count().await {
        Ok(n) => n,
        Err(e) => {
            eprintln!("⚠ Failed to inspect database: {e}");
            std::process::exit(1);
        }
    };

    if existing > 0 {
        println!("⚠ Database already contains {existing} sales, refusing to seed");
        db.close().await;
        std::process::exit(1);
    }

    let now = Utc::now();
    let zone = StoreZone::Local;
    // Anchor at local midnight so every row lands on today's calendar day.
    let day_start = zone
        .day_bounds(zone.local_date(now))
        .map(|(start, _)| start)
        .unwrap_or(now);

    for i in 0..count {
        let business = Business::ALL[i % Business::ALL.len()];
        let salesperson = Salesperson::ALL[(i * 3) % Salesperson::ALL.len()];
        let price_cents = PRICES[(i * 7) % PRICES.len()];

        // Every third row gets a description, cycling through the presets.
        let description = (i % 3 == 0).then(|| DESCRIPTIONS[(i / 3) % DESCRIPTIONS.len()]);

        // Walk the 24 hour buckets so the hourly chart fills out.
        let created_at = day_start
            + Duration::hours(((i * 5) % 24) as i64)
            + Duration::minutes(((i * 11) % 60) as i64);

        let result = sqlx::query(
            r#"
            INSERT INTO sales (business, salesperson, price_cents, description, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(business)
        .bind(salesperson)
        .bind(price_cents)
        .bind(description)
        .bind(created_at)
        .execute(db.pool())
        .await;

        if let Err(e) = result {
            eprintln!("⚠ Insert failed at row {i}: {e}");
            db.close().await;
            std::process::exit(1);
        }
    }

    println!("✓ Seeded {count} sales");
    db.close().await;
}
