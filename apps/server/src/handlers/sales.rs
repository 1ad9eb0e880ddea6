//! Sale intake, listing, and reporting.
//!
//! The handlers keep to extraction and response shaping. Validation comes
//! from [`ventas_core::SaleSubmission`], aggregation from
//! [`ventas_core::aggregate`], persistence from [`ventas_db`].

use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ventas_core::aggregate::{HourlyHistogram, SalesTotals};
use ventas_core::types::{Business, SaleRecord, Salesperson};
use ventas_core::{aggregate, hourly_histogram, SaleFilter, SaleSubmission, StoreZone};
use ventas_core::{Money, ValidationError};

use crate::error::ApiError;
use crate::AppState;

// =============================================================================
// Response DTOs
// =============================================================================

/// A sale as rendered to API clients.
///
/// Prices leave as 2-digit decimal strings and timestamps in store-local
/// `YYYY-MM-DD HH:MM:SS`, so clients never re-derive either.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDto {
    pub id: i64,
    pub business: Business,
    pub salesperson: Salesperson,
    pub price: String,
    pub description: Option<String>,
    pub created_at: String,
}

impl SaleDto {
    fn from_record(record: &SaleRecord, zone: &StoreZone) -> Self {
        Self {
            id: record.id,
            business: record.business,
            salesperson: record.salesperson,
            price: record.price().to_decimal_string(),
            description: record.description.clone(),
            created_at: zone.format_timestamp(record.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateSaleResponse {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct ListSalesResponse {
    pub sales: Vec<SaleDto>,
}

/// Totals with money rendered as decimal strings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsDto {
    pub overall: String,
    pub by_business: BTreeMap<Business, String>,
    pub by_salesperson: BTreeMap<Salesperson, String>,
}

impl From<&SalesTotals> for TotalsDto {
    fn from(totals: &SalesTotals) -> Self {
        Self {
            overall: totals.overall.to_decimal_string(),
            by_business: totals
                .by_business
                .iter()
                .map(|(business, total)| (*business, total.to_decimal_string()))
                .collect(),
            by_salesperson: totals
                .by_salesperson
                .iter()
                .map(|(salesperson, total)| (*salesperson, total.to_decimal_string()))
                .collect(),
        }
    }
}

/// 24 aligned buckets: `labels[h]`, `sums[h]`, `counts[h]` describe hour `h`.
#[derive(Debug, Serialize)]
pub struct HourlyDto {
    pub labels: Vec<String>,
    pub sums: Vec<String>,
    pub counts: Vec<u32>,
}

impl From<&HourlyHistogram> for HourlyDto {
    fn from(histogram: &HourlyHistogram) -> Self {
        Self {
            labels: HourlyHistogram::labels().to_vec(),
            sums: histogram.sums.iter().map(Money::to_decimal_string).collect(),
            counts: histogram.counts.to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub totals: TotalsDto,
    pub hourly: HourlyDto,
    pub sales: Vec<SaleDto>,
    pub filtered_count: usize,
    pub total_count: usize,
}

// =============================================================================
// Query parameters
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub date: Option<String>,
    pub business: Option<String>,
    pub salesperson: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// `POST /api/sales` — validate and record one sale.
///
/// Body fields may be absent or null; `price` accepts a JSON number or a
/// decimal string. Malformed JSON gets the same validation envelope as a
/// failed field check.
pub async fn create_sale(
    State(state): State<AppState>,
    payload: Result<Json<SaleSubmission>, JsonRejection>,
) -> Result<Json<CreateSaleResponse>, ApiError> {
    let Json(submission) =
        payload.map_err(|rejection| ApiError::validation(rejection.body_text()))?;

    let sale = submission.validate()?;
    let id = state.db.sales().insert(&sale).await?;

    Ok(Json(CreateSaleResponse { id }))
}

/// `GET /api/sales` — all sales, newest first, optionally scoped to one
/// store-local calendar day via `?date=YYYY-MM-DD`.
pub async fn list_sales(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListSalesResponse>, ApiError> {
    let records = fetch_records(&state, query.date.as_deref()).await?;

    let sales = records
        .iter()
        .map(|record| SaleDto::from_record(record, &state.zone))
        .collect();

    Ok(Json(ListSalesResponse { sales }))
}

/// `GET /api/sales/report` — totals, hourly histogram, and rows, all
/// honoring the optional business/salesperson filter.
pub async fn report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ReportResponse>, ApiError> {
    let records = fetch_records(&state, query.date.as_deref()).await?;
    let total_count = records.len();

    let mut filter = SaleFilter::new();
    if let Some(token) = present(query.business.as_deref()) {
        filter = filter.with_business(token.parse::<Business>()?);
    }
    if let Some(token) = present(query.salesperson.as_deref()) {
        filter = filter.with_salesperson(token.parse::<Salesperson>()?);
    }

    let filtered = filter.apply(records);

    let totals = aggregate(&filtered);
    let hourly = hourly_histogram(&filtered, &state.zone);
    let sales: Vec<SaleDto> = filtered
        .iter()
        .map(|record| SaleDto::from_record(record, &state.zone))
        .collect();

    Ok(Json(ReportResponse {
        totals: TotalsDto::from(&totals),
        hourly: HourlyDto::from(&hourly),
        filtered_count: sales.len(),
        total_count,
        sales,
    }))
}

// =============================================================================
// Helpers
// =============================================================================

async fn fetch_records(state: &AppState, date: Option<&str>) -> Result<Vec<SaleRecord>, ApiError> {
    match parse_date_param(date)? {
        Some(day) => Ok(state.db.sales().list_by_date(day, &state.zone).await?),
        None => Ok(state.db.sales().list_all().await?),
    }
}

/// Parse the `date` query parameter. Absent or blank means unconstrained.
fn parse_date_param(raw: Option<&str>) -> Result<Option<NaiveDate>, ApiError> {
    let Some(trimmed) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let day = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        }
    })?;

    Ok(Some(day))
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}
