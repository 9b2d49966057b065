use clap::{Parser, Subcommand, ValueEnum};
use facility_catalog::karachi::{area_coordinates, AREAS, BLOOD_GROUPS};
use facility_catalog::{nearest_search, Catalog, NearestResult, NearestSearchParams};
use facility_core::Coordinate;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser)]
#[command(name = "find-facility")]
#[command(about = "Find the nearest facility stocking a required category")]
struct Cli {
    /// Path to the catalog JSON file
    #[arg(long, default_value = "data/facilities.json")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print catalog information
    Info,
    /// List the named reference areas
    Areas,
    /// Search for the nearest facilities stocking a category
    Search {
        /// Required category (blood group, e.g. O+)
        category: String,
        /// Named reference area (see `areas` for the list)
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        area: Option<String>,
        /// Reference latitude in degrees (with --lon)
        #[arg(long, requires = "lon")]
        lat: Option<f64>,
        /// Reference longitude in degrees (with --lat)
        #[arg(long, requires = "lat")]
        lon: Option<f64>,
        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
        /// Print query timing on stderr
        #[arg(long)]
        timing: bool,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info => {
            let catalog = Catalog::load(&cli.catalog)?;
            let categories: Vec<&str> = catalog.categories().into_iter().collect();
            println!("Facilities: {}", catalog.len());
            println!("Categories in stock: {}", categories.join(", "));
        }
        Commands::Areas => {
            for (name, coord) in AREAS {
                println!(
                    "{:<18} ({:.4}, {:.4})",
                    name, coord.latitude_deg, coord.longitude_deg
                );
            }
            println!("\nCategories: {}", BLOOD_GROUPS.join(", "));
        }
        Commands::Search {
            category,
            area,
            lat,
            lon,
            limit,
            timing,
            format,
        } => {
            let catalog = Catalog::load(&cli.catalog)?;
            let reference = resolve_reference(area.as_deref(), lat, lon)?;

            let params = NearestSearchParams {
                reference,
                category: category.clone(),
                max_results: limit,
            };

            let start = if timing { Some(Instant::now()) } else { None };

            let results = nearest_search(&catalog, &params)?;

            if let Some(start_time) = start {
                let elapsed = start_time.elapsed();
                eprintln!(
                    "Query completed in {:.2} ms",
                    elapsed.as_secs_f64() * 1000.0
                );
            }

            match format {
                OutputFormat::Table => print_table(&results, &category),
                OutputFormat::Json => print_json(&results)?,
                OutputFormat::Csv => print_csv(&results),
            }
        }
    }

    Ok(())
}

fn resolve_reference(
    area: Option<&str>,
    lat: Option<f64>,
    lon: Option<f64>,
) -> anyhow::Result<Coordinate> {
    if let Some(name) = area {
        return area_coordinates(name).ok_or_else(|| {
            let known: Vec<&str> = AREAS.iter().map(|(n, _)| *n).collect();
            anyhow::anyhow!("Unknown area '{}'. Known areas: {}", name, known.join(", "))
        });
    }
    if let (Some(lat), Some(lon)) = (lat, lon) {
        return Ok(Coordinate::from_degrees(lat, lon));
    }
    anyhow::bail!("Provide a reference point: --area NAME, or --lat and --lon")
}

fn print_table(results: &[NearestResult], category: &str) {
    for (i, result) in results.iter().enumerate() {
        println!(
            "{:2}: {}  —  {:.2} km",
            i + 1,
            result.facility.name,
            result.distance_km
        );
        println!("    Location: {}", result.facility.location);
        println!("    Contact:  {}", result.facility.contact);
        println!("    Email:    {}", result.facility.email);
        println!(
            "    In stock: {}",
            result.facility.available_categories.join(", ")
        );
    }

    if results.is_empty() {
        println!("No facility stocking {} was found.", category);
    } else {
        println!("\nTotal results: {}", results.len());
    }
}

#[derive(serde::Serialize)]
struct JsonFacility<'a> {
    name: &'a str,
    location: &'a str,
    contact: &'a str,
    email: &'a str,
    available_categories: &'a [String],
    distance_km: f64,
}

fn print_json(results: &[NearestResult]) -> anyhow::Result<()> {
    let rows: Vec<JsonFacility> = results
        .iter()
        .map(|r| JsonFacility {
            name: &r.facility.name,
            location: &r.facility.location,
            contact: &r.facility.contact,
            email: &r.facility.email,
            available_categories: &r.facility.available_categories,
            distance_km: r.distance_km,
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn print_csv(results: &[NearestResult]) {
    println!("name,location,contact,email,categories,distance_km");
    for r in results {
        println!(
            "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",{:.2}",
            r.facility.name,
            r.facility.location,
            r.facility.contact,
            r.facility.email,
            r.facility.available_categories.join("/"),
            r.distance_km
        );
    }
}
