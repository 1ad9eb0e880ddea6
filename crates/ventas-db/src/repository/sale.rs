//! # Sale Repository
//!
//! CRUD operations for the `sales` table.
//!
//! ## Timestamp Contract
//!
//! `created_at` is always assigned here, at insert time, from the server
//! clock in UTC. Every row therefore carries the same textual timestamp
//! encoding, which makes `ORDER BY created_at` and range comparisons in
//! SQL agree with chronological order.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use ventas_core::types::{NewSale, SaleRecord};
use ventas_core::StoreZone;

use crate::error::{DbError, DbResult};

/// Repository for sale records.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Create a new repository backed by the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a validated sale and return its assigned id.
    ///
    /// The record is stamped with the current UTC time.
    pub async fn insert(&self, sale: &NewSale) -> DbResult<i64> {
        debug!(
            business = %sale.business,
            salesperson = %sale.salesperson,
            price = %sale.price,
            "Inserting sale"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO sales (business, salesperson, price_cents, description, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(sale.business)
        .bind(sale.salesperson)
        .bind(sale.price.cents())
        .bind(sale.description.as_deref())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// All sales, newest first.
    ///
    /// Rows with identical timestamps fall back to id order, so the most
    /// recently inserted row still comes first.
    pub async fn list_all(&self) -> DbResult<Vec<SaleRecord>> {
        let records = sqlx::query_as::<_, SaleRecord>(
            r#"
            SELECT id, business, salesperson, price_cents, description, created_at
            FROM sales
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Sales within the half-open UTC window `[start, end)`, newest first.
    pub async fn list_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DbResult<Vec<SaleRecord>> {
        let records = sqlx::query_as::<_, SaleRecord>(
            r#"
            SELECT id, business, salesperson, price_cents, description, created_at
            FROM sales
            WHERE created_at >= ?1 AND created_at < ?2
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Sales that fall on the given calendar day in the store timezone.
    pub async fn list_by_date(&self, day: NaiveDate, zone: &StoreZone) -> DbResult<Vec<SaleRecord>> {
        let (start, end) = zone.day_bounds(day).ok_or(DbError::InvalidDate { day })?;
        self.list_between(start, end).await
    }

    /// Total number of recorded sales.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use ventas_core::types::{Business, Salesperson};
    use ventas_core::Money;

    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn sample_sale(price_cents: i64, description: Option<&str>) -> NewSale {
        NewSale {
            business: Business::Perlita,
            salesperson: Salesperson::Luis,
            price: Money::from_cents(price_cents),
            description: description.map(String::from),
        }
    }

    /// Insert a row with an explicit timestamp, bypassing the repository's
    /// clock. Uses the same bind encoding as the repository so ordering and
    /// range comparisons behave identically.
    async fn insert_at(
        db: &Database,
        business: Business,
        salesperson: Salesperson,
        price_cents: i64,
        at: DateTime<Utc>,
    ) -> i64 {
        sqlx::query(
            r#"
            INSERT INTO sales (business, salesperson, price_cents, description, created_at)
            VALUES (?1, ?2, ?3, NULL, ?4)
            "#,
        )
        .bind(business)
        .bind(salesperson)
        .bind(price_cents)
        .bind(at)
        .execute(db.pool())
        .await
        .unwrap()
        .last_insert_rowid()
    }

    #[tokio::test]
    async fn test_insert_assigns_ids() {
        let db = test_db().await;
        let sales = db.sales();

        let first = sales.insert(&sample_sale(10_000, None)).await.unwrap();
        let second = sales.insert(&sample_sale(25_000, None)).await.unwrap();

        assert!(first >= 1);
        assert_eq!(second, first + 1);
    }

    #[tokio::test]
    async fn test_insert_round_trips_fields() {
        let db = test_db().await;
        let sales = db.sales();

        let id = sales
            .insert(&NewSale {
                business: Business::Patron,
                salesperson: Salesperson::WalterJr,
                price: Money::from_cents(35_050),
                description: Some("Anillo de oro".to_string()),
            })
            .await
            .unwrap();

        let all = sales.list_all().await.unwrap();
        assert_eq!(all.len(), 1);

        let record = &all[0];
        assert_eq!(record.id, id);
        assert_eq!(record.business, Business::Patron);
        assert_eq!(record.salesperson, Salesperson::WalterJr);
        assert_eq!(record.price(), Money::from_cents(35_050));
        assert_eq!(record.description.as_deref(), Some("Anillo de oro"));
    }

    #[tokio::test]
    async fn test_missing_description_round_trips_as_none() {
        let db = test_db().await;
        let sales = db.sales();

        sales.insert(&sample_sale(5_000, None)).await.unwrap();

        let all = sales.list_all().await.unwrap();
        assert_eq!(all[0].description, None);
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let db = test_db().await;

        let t1 = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2024, 3, 10, 14, 0, 0).unwrap();
        let t3 = Utc.with_ymd_and_hms(2024, 3, 10, 13, 0, 0).unwrap();

        let id1 = insert_at(&db, Business::Perlita, Salesperson::Luis, 100, t1).await;
        let id2 = insert_at(&db, Business::Perlita, Salesperson::Luis, 200, t2).await;
        let id3 = insert_at(&db, Business::Perlita, Salesperson::Luis, 300, t3).await;

        let all = db.sales().list_all().await.unwrap();
        let ids: Vec<i64> = all.iter().map(|r| r.id).collect();

        assert_eq!(ids, vec![id2, id3, id1]);
    }

    #[tokio::test]
    async fn test_identical_timestamps_break_ties_by_id() {
        let db = test_db().await;

        let t = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let first = insert_at(&db, Business::Perlita, Salesperson::Luis, 100, t).await;
        let second = insert_at(&db, Business::Perlita, Salesperson::Luis, 200, t).await;

        let all = db.sales().list_all().await.unwrap();
        let ids: Vec<i64> = all.iter().map(|r| r.id).collect();

        assert_eq!(ids, vec![second, first]);
    }

    #[tokio::test]
    async fn test_list_between_is_half_open() {
        let db = test_db().await;

        let start = Utc.with_ymd_and_hms(2024, 3, 10, 6, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 11, 6, 0, 0).unwrap();

        let before = insert_at(
            &db,
            Business::Perlita,
            Salesperson::Luis,
            100,
            Utc.with_ymd_and_hms(2024, 3, 10, 5, 59, 59).unwrap(),
        )
        .await;
        let at_start = insert_at(&db, Business::Perlita, Salesperson::Luis, 200, start).await;
        let inside = insert_at(
            &db,
            Business::Perlita,
            Salesperson::Luis,
            300,
            Utc.with_ymd_and_hms(2024, 3, 10, 18, 30, 0).unwrap(),
        )
        .await;
        let at_end = insert_at(&db, Business::Perlita, Salesperson::Luis, 400, end).await;

        let window = db.sales().list_between(start, end).await.unwrap();
        let ids: Vec<i64> = window.iter().map(|r| r.id).collect();

        assert!(ids.contains(&at_start));
        assert!(ids.contains(&inside));
        assert!(!ids.contains(&before));
        assert!(!ids.contains(&at_end));
    }

    #[tokio::test]
    async fn test_list_by_date_uses_store_timezone() {
        let db = test_db().await;
        let zone = StoreZone::Fixed(FixedOffset::west_opt(6 * 3600).unwrap());

        // Local 2024-03-10 runs 06:00Z on the 10th to 06:00Z on the 11th.
        let previous_day = insert_at(
            &db,
            Business::Perlita,
            Salesperson::Luis,
            100,
            Utc.with_ymd_and_hms(2024, 3, 10, 5, 30, 0).unwrap(),
        )
        .await;
        let morning = insert_at(
            &db,
            Business::Perlita,
            Salesperson::Luis,
            200,
            Utc.with_ymd_and_hms(2024, 3, 10, 6, 10, 0).unwrap(),
        )
        .await;
        let late_night = insert_at(
            &db,
            Business::Perlita,
            Salesperson::Luis,
            300,
            Utc.with_ymd_and_hms(2024, 3, 11, 5, 59, 0).unwrap(),
        )
        .await;
        let next_day = insert_at(
            &db,
            Business::Perlita,
            Salesperson::Luis,
            400,
            Utc.with_ymd_and_hms(2024, 3, 11, 6, 0, 0).unwrap(),
        )
        .await;

        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let records = db.sales().list_by_date(day, &zone).await.unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();

        assert!(ids.contains(&morning));
        assert!(ids.contains(&late_night));
        assert!(!ids.contains(&previous_day));
        assert!(!ids.contains(&next_day));
    }

    #[tokio::test]
    async fn test_count() {
        let db = test_db().await;
        let sales = db.sales();

        assert_eq!(sales.count().await.unwrap(), 0);

        sales.insert(&sample_sale(100, None)).await.unwrap();
        sales.insert(&sample_sale(200, None)).await.unwrap();

        assert_eq!(sales.count().await.unwrap(), 2);
    }
}
