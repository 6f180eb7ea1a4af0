use anyhow::Context;
use diesel::{ExpressionMethods, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{models::Pizza, schema::pizzas, telemetry::spawn_blocking_with_tracing, utils::DbConnection};

#[tracing::instrument(
    "Getting pizzas from db",
    skip_all
)]
pub async fn get_pizzas(
    mut conn: DbConnection
) -> Result<Vec<Pizza>, anyhow::Error>{
    let res = spawn_blocking_with_tracing(move || {
        pizzas::table
            .order(pizzas::id.asc())
            .select(Pizza::as_select())
            .load::<Pizza>(&mut conn)
            .context("Failed to get pizzas")
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}
