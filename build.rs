use chrono::Utc;

fn main() {
    // shown in the footer as the last build date
    println!("cargo:rustc-env=BUILD_TIME={}", Utc::now().to_rfc3339());
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/gallery/catalog.rs");
}
