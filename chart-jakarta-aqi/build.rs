use std::env;
use std::fs;
use std::path::Path;

const HEADER: [&str; 5] = ["date", "AQI", "traffic_congestion", "temperature", "wind_speed"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let src = Path::new("../fixtures/jakarta_aqi.csv");
    let dest = Path::new(&out_dir).join("jakarta_aqi.csv");

    // Check the fixture's shape at build time so a malformed file fails the
    // build instead of showing an error page in the browser.
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(src)
        .expect("Failed to open fixtures/jakarta_aqi.csv");

    let headers = rdr.headers().expect("Missing CSV header").clone();
    let found: Vec<&str> = headers.iter().map(str::trim).collect();
    assert_eq!(found, HEADER, "unexpected jakarta_aqi.csv header");

    let mut rows = 0;
    for record in rdr.records() {
        let record = record.expect("Malformed row in jakarta_aqi.csv");
        assert_eq!(record.len(), HEADER.len(), "row {} has wrong column count", rows + 1);
        rows += 1;
    }
    assert!(rows > 0, "jakarta_aqi.csv has no rows");

    fs::copy(src, &dest).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/jakarta_aqi.csv");
}
