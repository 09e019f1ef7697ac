use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct IconManifest {
    id: String,
    label: String,
    icon: String,
    app_type: String,
    window_title: String,
    column: u32,
    row: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesktopManifest {
    schema_version: u32,
    #[serde(default)]
    layout: toml::Table,
    icons: Vec<IconManifest>,
}

fn validate(path: &std::path::Path, manifest: &DesktopManifest) {
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }

    let mut ids = BTreeSet::new();
    let mut cells = BTreeSet::new();
    for icon in &manifest.icons {
        if !ids.insert(icon.id.as_str()) {
            panic!("duplicate icon id `{}` in {}", icon.id, path.display());
        }
        if icon.column == 0 || icon.row == 0 {
            panic!(
                "icon `{}` in {} uses a 0 cell; cells are 1-based",
                icon.id,
                path.display()
            );
        }
        if !cells.insert((icon.column, icon.row)) {
            panic!(
                "icon `{}` in {} shares cell ({}, {}) with another icon",
                icon.id,
                path.display(),
                icon.column,
                icon.row
            );
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop.manifest.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: DesktopManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&path, &manifest);

    let json = serde_json::to_string_pretty(&manifest).expect("serialize desktop catalog");
    let generated = format!(
        "/// Build-time generated desktop catalog JSON.\n\
pub const DESKTOP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
