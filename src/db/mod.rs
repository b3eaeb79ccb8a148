// src/db/mod.rs

use sqlx::{query_as, Pool, Postgres};

use crate::models::{Property, Reservation};

pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Pool<Postgres>> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    tracing::info!(max_connections, "connected to PostgreSQL");
    Ok(pool)
}

/// Read the whole portfolio. Read-only: nothing here writes back.
pub async fn load_snapshot(pool: &Pool<Postgres>) -> sqlx::Result<(Vec<Property>, Vec<Reservation>)> {
    let properties = query_as::<_, Property>(
        r#"SELECT id::text AS id, name, internal_name
           FROM public.properties
           ORDER BY id"#
    )
    .fetch_all(pool)
    .await?;

    let reservations = query_as::<_, Reservation>(
        r#"SELECT id::text AS id, property_id::text AS property_id, guest_name,
                  check_in, check_out,
                  check_in_time::text AS check_in_time, check_out_time::text AS check_out_time
           FROM public.reservations
           ORDER BY check_in, id"#
    )
    .fetch_all(pool)
    .await?;

    Ok((properties, reservations))
}
