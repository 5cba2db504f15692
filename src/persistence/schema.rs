use anyhow::Result;
use sqlx::PgPool;

/// Initialize PostgreSQL schema for the record store
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    tracing::info!("Initializing PostgreSQL schema...");

    sqlx::query(CREATE_CUSTOMERS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", "Failed to create customers_tb", e))?;

    sqlx::query(CREATE_ORDERS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", "Failed to create orders_tb", e))?;

    tracing::info!("PostgreSQL schema initialized successfully");
    Ok(())
}

const CREATE_CUSTOMERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS customers_tb (
    id          BIGSERIAL PRIMARY KEY,
    name        TEXT NOT NULL,
    email       TEXT NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

// quantity CHECK is the store constraint the transactional bulk path
// relies on for all-or-nothing rollback
const CREATE_ORDERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS orders_tb (
    id            BIGSERIAL PRIMARY KEY,
    customer_id   BIGINT,
    product_name  TEXT NOT NULL,
    quantity      INT NOT NULL CHECK (quantity > 0),
    price         NUMERIC(18, 2) NOT NULL,
    created_at    TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;
