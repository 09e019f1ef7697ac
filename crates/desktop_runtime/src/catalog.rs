//! Desktop catalog: initial icon set and layout configuration.
//!
//! The catalog is declared in `desktop.manifest.toml`, validated by the build script, and embedded
//! as JSON. A catalog that fails to parse at runtime degrades to the built-in default rather than
//! leaving the desktop empty.

use std::sync::OnceLock;

use leptos::logging;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    icon_grid::IconGridState,
    model::{DesktopLayoutConfig, GridCell, IconCell, IconId},
};

include!(concat!(env!("OUT_DIR"), "/desktop_catalog_generated.rs"));

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("desktop catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported desktop catalog schema version {0}")]
    Schema(u32),
    #[error("icons `{first}` and `{second}` share cell {cell}")]
    Overlap {
        first: String,
        second: String,
        cell: GridCell,
    },
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogIconEntry {
    id: String,
    label: String,
    icon: String,
    app_type: String,
    window_title: String,
    column: u32,
    row: u32,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogDocument {
    schema_version: u32,
    #[serde(default)]
    layout: DesktopLayoutConfig,
    icons: Vec<CatalogIconEntry>,
}

/// Parsed desktop catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopCatalog {
    pub layout: DesktopLayoutConfig,
    pub icons: Vec<IconCell>,
}

impl DesktopCatalog {
    pub fn icon_grid(&self) -> IconGridState {
        IconGridState::new(self.icons.clone())
    }
}

impl Default for DesktopCatalog {
    fn default() -> Self {
        let icon = |id: &str, label: &str, column: u32, row: u32| IconCell {
            id: IconId::new(id),
            label: label.to_string(),
            icon_ref: "assets/images/desktop-icons/folder-empty.png".to_string(),
            app_type: id.to_string(),
            window_title: label.to_string(),
            cell: GridCell::new(column, row),
        };
        Self {
            layout: DesktopLayoutConfig::default(),
            icons: vec![
                icon("memory-game", "Memory Game", 1, 1),
                icon("chat", "Chat", 2, 1),
            ],
        }
    }
}

/// Parses a catalog JSON document.
///
/// # Errors
///
/// Returns [`CatalogError`] for malformed JSON, an unknown schema version, or overlapping cells.
pub fn parse_catalog(raw: &str) -> Result<DesktopCatalog, CatalogError> {
    let document: CatalogDocument = serde_json::from_str(raw)?;
    if document.schema_version != 1 {
        return Err(CatalogError::Schema(document.schema_version));
    }

    let icons: Vec<IconCell> = document
        .icons
        .into_iter()
        .map(|entry| IconCell {
            id: IconId::new(entry.id),
            label: entry.label,
            icon_ref: entry.icon,
            app_type: entry.app_type,
            window_title: entry.window_title,
            cell: GridCell::new(entry.column.max(1), entry.row.max(1)),
        })
        .collect();

    for (index, icon) in icons.iter().enumerate() {
        if let Some(other) = icons[index + 1..].iter().find(|o| o.cell == icon.cell) {
            return Err(CatalogError::Overlap {
                first: icon.id.as_str().to_string(),
                second: other.id.as_str().to_string(),
                cell: icon.cell,
            });
        }
    }

    Ok(DesktopCatalog {
        layout: document.layout,
        icons,
    })
}

/// Returns the embedded desktop catalog, parsed once.
pub fn desktop_catalog() -> &'static DesktopCatalog {
    static CATALOG: OnceLock<DesktopCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| match parse_catalog(DESKTOP_CATALOG_JSON) {
        Ok(catalog) => catalog,
        Err(err) => {
            logging::warn!("desktop catalog unusable, falling back to defaults: {err}");
            DesktopCatalog::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_catalog_parses_without_overlap() {
        let catalog = parse_catalog(DESKTOP_CATALOG_JSON).expect("embedded catalog");
        assert!(!catalog.icons.is_empty());
        assert!(catalog.icon_grid().is_valid());
        assert_eq!(catalog.layout.taskbar_height, 32);
    }

    #[test]
    fn missing_layout_uses_defaults() {
        let catalog = parse_catalog(
            r#"{ "schema_version": 1, "icons": [
                { "id": "chat", "label": "Chat", "icon": "chat.png", "app_type": "chat",
                  "window_title": "Chat", "column": 1, "row": 1 }
            ] }"#,
        )
        .expect("catalog");
        assert_eq!(catalog.layout, DesktopLayoutConfig::default());
        assert_eq!(catalog.icons[0].cell, GridCell::new(1, 1));
    }

    #[test]
    fn overlapping_cells_are_rejected() {
        let err = parse_catalog(
            r#"{ "schema_version": 1, "icons": [
                { "id": "a", "label": "A", "icon": "a.png", "app_type": "chat",
                  "window_title": "A", "column": 2, "row": 1 },
                { "id": "b", "label": "B", "icon": "b.png", "app_type": "quiz",
                  "window_title": "B", "column": 2, "row": 1 }
            ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Overlap { .. }));
    }

    #[test]
    fn unknown_schema_is_rejected() {
        let err = parse_catalog(r#"{ "schema_version": 2, "icons": [] }"#).unwrap_err();
        assert!(matches!(err, CatalogError::Schema(2)));
    }
}
