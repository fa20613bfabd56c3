use async_trait::async_trait;
use sqlx::FromRow;

use super::TourStore;
use crate::{
    db::DbPool,
    editor::range::{format_date, parse_date, DateRange},
    error::{AppError, AppResult},
    models::tour::{LocalizedText, Tour, TourCategory},
};

/// Local table in the legacy shape: one untagged title/country/city per tour,
/// so per-language values collapse to their save-time generic value.
#[derive(Debug, FromRow)]
struct TourRow {
    id: String,
    title: String,
    country: String,
    city: String,
    start_date: String,
    end_date: String,
    adults_min: i64,
    adults_max: i64,
    price_from: f64,
    nights: i64,
    image_url: String,
    is_hot: i64,
    tour_type: Option<String>,
    gallery_urls: Option<String>,
}

impl TryFrom<TourRow> for Tour {
    type Error = AppError;

    fn try_from(row: TourRow) -> Result<Self, Self::Error> {
        let bad_date = |e: chrono::ParseError| {
            AppError::Storage(format!("tour {} has an invalid date: {e}", row.id))
        };
        let start = parse_date(&row.start_date).map_err(bad_date)?;
        let end = parse_date(&row.end_date).map_err(bad_date)?;
        let gallery_urls = match row.gallery_urls.as_deref() {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str(raw)?,
            _ => Vec::new(),
        };

        Ok(Tour {
            title: LocalizedText::from_legacy(row.title),
            country: LocalizedText::from_legacy(row.country),
            city: LocalizedText::from_legacy(row.city),
            dates: DateRange::from_bounds(start, end),
            adults_min: to_u32(row.adults_min),
            adults_max: to_u32(row.adults_max),
            price_from: row.price_from,
            nights: to_u32(row.nights),
            image_url: row.image_url,
            gallery_urls,
            category: TourCategory::infer(row.tour_type.as_deref(), row.is_hot != 0),
            id: row.id,
        })
    }
}

fn to_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone)]
pub struct SqliteTourStore {
    pool: DbPool,
}

impl SqliteTourStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TourStore for SqliteTourStore {
    async fn list(&self) -> AppResult<Vec<Tour>> {
        let rows = sqlx::query_as::<_, TourRow>(
            r#"
            SELECT id, title, country, city, start_date, end_date, adults_min, adults_max,
                   price_from, nights, image_url, is_hot, tour_type, gallery_urls
            FROM tours
            ORDER BY start_date ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Tour::try_from).collect()
    }

    async fn create(&self, tour: &Tour) -> AppResult<()> {
        let result = bind_tour(
            sqlx::query(
                r#"
                INSERT INTO tours (
                    title, country, city, start_date, end_date,
                    adults_min, adults_max, price_from, nights, image_url, is_hot,
                    tour_type, gallery_urls, id
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            ),
            tour,
        )?
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(AppError::Conflict(
                format!("Tour {} already exists", tour.id),
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, tour: &Tour) -> AppResult<()> {
        let result = bind_tour(
            sqlx::query(
                r#"
                UPDATE tours SET
                    title = ?, country = ?, city = ?, start_date = ?, end_date = ?,
                    adults_min = ?, adults_max = ?, price_from = ?, nights = ?,
                    image_url = ?, is_hot = ?, tour_type = ?, gallery_urls = ?
                WHERE id = ?
                "#,
            ),
            tour,
        )?
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Tour {} not found", tour.id)));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM tours WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Tour {id} not found")));
        }
        Ok(())
    }
}

type SqliteQuery<'q> = sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>;

// Column order shared by INSERT and UPDATE, id last.
fn bind_tour<'q>(query: SqliteQuery<'q>, tour: &Tour) -> AppResult<SqliteQuery<'q>> {
    let gallery = serde_json::to_string(&tour.gallery_urls)?;
    Ok(query
        .bind(tour.title.generic().to_string())
        .bind(tour.country.generic().to_string())
        .bind(tour.city.generic().to_string())
        .bind(tour.dates.start().map(format_date).unwrap_or_default())
        .bind(tour.dates.end().map(format_date).unwrap_or_default())
        .bind(i64::from(tour.adults_min))
        .bind(i64::from(tour.adults_max))
        .bind(tour.price_from)
        .bind(i64::from(tour.nights))
        .bind(tour.image_url.clone())
        .bind(i64::from(tour.is_hot()))
        .bind(tour.category.code().to_string())
        .bind(gallery)
        .bind(tour.id.clone()))
}
