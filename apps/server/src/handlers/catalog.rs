//! Vocabulary catalog.
//!
//! Serves the closed business/salesperson vocabularies with display labels
//! so client forms never hardcode them.

use axum::Json;
use serde::Serialize;

use ventas_core::types::{Business, Salesperson};

#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub token: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub businesses: Vec<CatalogEntry>,
    pub salespersons: Vec<CatalogEntry>,
}

/// `GET /api/catalog`
pub async fn catalog() -> Json<CatalogResponse> {
    let businesses = Business::ALL
        .iter()
        .map(|business| CatalogEntry {
            token: business.as_str(),
            label: business.label(),
        })
        .collect();

    let salespersons = Salesperson::ALL
        .iter()
        .map(|salesperson| CatalogEntry {
            token: salesperson.as_str(),
            label: salesperson.label(),
        })
        .collect();

    Json(CatalogResponse {
        businesses,
        salespersons,
    })
}
