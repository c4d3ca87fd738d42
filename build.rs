use chrono::Datelike;

fn main() {
    // Footer copyright year, read back with env!
    let now = chrono::Utc::now();
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
