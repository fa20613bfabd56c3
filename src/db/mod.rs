use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    Pool, Row, Sqlite,
};

// Alias for the local SQLite pool
pub type DbPool = Pool<Sqlite>;

pub async fn init_db(db_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(db_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    ensure_schema(&pool).await?;
    Ok(pool)
}

/// Creates the `tours` table and adds columns that older databases lack.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tours (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            country TEXT NOT NULL,
            city TEXT NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            adults_min INTEGER NOT NULL,
            adults_max INTEGER NOT NULL,
            price_from REAL NOT NULL,
            nights INTEGER NOT NULL,
            image_url TEXT NOT NULL,
            is_hot INTEGER NOT NULL DEFAULT 0,
            tour_type TEXT DEFAULT 'regular',
            gallery_urls TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    let columns: Vec<String> = sqlx::query("PRAGMA table_info(tours)")
        .fetch_all(pool)
        .await?
        .iter()
        .map(|row| row.get::<String, _>("name"))
        .collect();

    if !columns.iter().any(|c| c == "tour_type") {
        tracing::info!("adding tours.tour_type column");
        sqlx::query("ALTER TABLE tours ADD COLUMN tour_type TEXT DEFAULT 'regular'")
            .execute(pool)
            .await?;
    }
    if !columns.iter().any(|c| c == "gallery_urls") {
        tracing::info!("adding tours.gallery_urls column");
        sqlx::query("ALTER TABLE tours ADD COLUMN gallery_urls TEXT")
            .execute(pool)
            .await?;
    }

    Ok(())
}
