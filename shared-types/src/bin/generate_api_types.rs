use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for API types
    let mut types = Vec::new();

    // Contact types
    types.push(clean_type(Contact::export_to_string()?));
    types.push(clean_type(ContactMutation::export_to_string()?));

    // Navigation types
    types.push(clean_type(Location::export_to_string()?));
    types.push(clean_type(NavigationState::export_to_string()?));
    types.push(clean_type(Navigation::export_to_string()?));

    // Loader payloads
    types.push(clean_type(SidebarData::export_to_string()?));
    types.push(clean_type(ContactData::export_to_string()?));
    types.push(clean_type(Outlet::export_to_string()?));
    types.push(clean_type(Page::export_to_string()?));

    types.push(clean_type(ErrorResponse::export_to_string()?));

    let output = format!(
        "// This file is generated by `cargo run --bin generate_api_types`. Do not edit.\n\n{}\n",
        types.join("\n\n")
    );

    let out_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "../gui/src/api-types".to_string());
    let out_dir = Path::new(&out_dir);
    fs::create_dir_all(out_dir)?;

    let out_file = out_dir.join("types.ts");
    fs::write(&out_file, output)?;
    println!("Wrote {}", out_file.display());

    Ok(())
}

/// Drops the per-file import lines ts-rs adds; everything lands in one module.
fn clean_type(ts: String) -> String {
    ts.lines()
        .filter(|line| !line.starts_with("import ") && !line.starts_with("// This file was generated"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
