//! Build script for FitCalc
//!
//! Bumps the build counter and embeds build metadata as env vars.

use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=src");

    let counter_path = Path::new("build_number.txt");

    let previous: u64 = fs::read_to_string(counter_path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);
    let build_number = previous + 1;

    if let Err(e) = fs::write(counter_path, build_number.to_string()) {
        println!("cargo:warning=Could not update build_number.txt: {}", e);
    }

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=FITCALC_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=FITCALC_BUILD_TIMESTAMP={}", timestamp);
}
