use facility_catalog::karachi::area_coordinates;
use facility_catalog::query::{nearest_search, NearestSearchParams};
use facility_catalog::Catalog;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/facilities.json".to_string());

    let catalog = Catalog::load(&path)?;
    println!("Loaded {} facilities from {}", catalog.len(), path);

    let params = NearestSearchParams {
        reference: area_coordinates("Saddar").expect("Saddar is a known area"),
        category: "O+".to_string(),
        max_results: Some(5),
    };

    let results = nearest_search(&catalog, &params)?;
    println!(
        "\n{} facilities stocking {} near Saddar:\n",
        results.len(),
        params.category,
    );

    for r in &results {
        println!(
            "  {:<42}  {:.2} km  ({})",
            r.facility.name, r.distance_km, r.facility.location,
        );
    }

    Ok(())
}
