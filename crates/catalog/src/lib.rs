//! Static lookup tables consumed by the folio pipeline stages.
//!
//! Catalogs are loaded once (built-in JSON tables, optionally overridden from
//! a directory), then shared read-only. A missing entry is never an error:
//! every lookup has a hardcoded fallback.

pub mod component;
pub mod error;
pub mod layout;
pub mod palette;
pub mod style;

pub use component::{ComponentCatalog, ComponentDescriptor};
pub use error::CatalogError;
pub use layout::{FALLBACK_GRID_CLASSES, LayoutCatalog, LayoutPattern};
pub use palette::{ColorScheme, ColorSchemeCatalog};
pub use style::{StyleCatalog, StyleDescriptor};

use std::fs;
use std::path::Path;

const BUILTIN_COMPONENTS: &str = include_str!("../data/components.json");
const BUILTIN_LAYOUTS: &str = include_str!("../data/layouts.json");
const BUILTIN_COLOR_SCHEMES: &str = include_str!("../data/color_schemes.json");
const BUILTIN_STYLES: &str = include_str!("../data/styles.json");

pub const COMPONENTS_FILE: &str = "components.json";
pub const LAYOUTS_FILE: &str = "layouts.json";
pub const COLOR_SCHEMES_FILE: &str = "color_schemes.json";
pub const STYLES_FILE: &str = "styles.json";

/// The four catalogs, bundled for injection into the pipeline stages.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    pub components: ComponentCatalog,
    pub layouts: LayoutCatalog,
    pub color_schemes: ColorSchemeCatalog,
    pub styles: StyleCatalog,
}

impl Catalogs {
    /// The tables shipped with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self {
            components: ComponentCatalog::from_json(BUILTIN_COMPONENTS)?,
            layouts: LayoutCatalog::from_json(BUILTIN_LAYOUTS)?,
            color_schemes: ColorSchemeCatalog::from_json(BUILTIN_COLOR_SCHEMES)?,
            styles: StyleCatalog::from_json(BUILTIN_STYLES)?,
        })
    }

    /// Starts from the built-in tables and replaces each one whose file is
    /// present in `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(CatalogError::MissingDirectory(dir.to_path_buf()));
        }

        let mut catalogs = Self::builtin()?;
        if let Some(json) = read_if_present(dir, COMPONENTS_FILE)? {
            catalogs.components = ComponentCatalog::from_json(&json)?;
        }
        if let Some(json) = read_if_present(dir, LAYOUTS_FILE)? {
            catalogs.layouts = LayoutCatalog::from_json(&json)?;
        }
        if let Some(json) = read_if_present(dir, COLOR_SCHEMES_FILE)? {
            catalogs.color_schemes = ColorSchemeCatalog::from_json(&json)?;
        }
        if let Some(json) = read_if_present(dir, STYLES_FILE)? {
            catalogs.styles = StyleCatalog::from_json(&json)?;
        }
        Ok(catalogs)
    }
}

fn read_if_present(dir: &Path, file: &str) -> Result<Option<String>, CatalogError> {
    let path = dir.join(file);
    if !path.is_file() {
        return Ok(None);
    }
    log::debug!("Loading catalog override from {}", path.display());
    fs::read_to_string(&path)
        .map(Some)
        .map_err(|source| CatalogError::Io { path, source })
}
