//! API server state

use crate::catalog::Catalog;
use crate::error::Result;
use crate::types::Variant;

/// API server state, built once at startup and shared by every request
#[derive(Debug, Clone)]
pub struct AppState {
    /// Articles served by `GET /articles`
    pub catalog: Catalog,

    /// Whether `GET /articles` serves the catalog or fails
    pub variant: Variant,
}

impl AppState {
    pub fn new(catalog: Catalog, variant: Variant) -> Self {
        Self { catalog, variant }
    }

    /// State serving the reference catalog
    pub fn healthy() -> Result<Self> {
        Ok(Self::new(Catalog::reference()?, Variant::Healthy))
    }

    /// State whose `/articles` route always fails
    pub fn faulty() -> Result<Self> {
        Ok(Self::new(Catalog::reference()?, Variant::Faulty))
    }
}
