use std::{error::Error, fmt::Debug};

use diesel::{result::DatabaseErrorKind, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};
use thiserror::Error;

use crate::{models::{NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza, RestaurantPizzaDetails}, schema::{pizzas, restaurant_pizzas, restaurants}, telemetry::spawn_blocking_with_tracing, utils::{error_fmt_chain, DbConnection}};

// Error associated with inserting into restaurant_pizzas table
#[derive(Error)]
pub enum RestaurantPizzaInsertError{
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("restaurant id: {0} doesn't exist")]
    NoRestaurantIdError(i32),
    #[error("pizza id: {0} doesn't exist")]
    NoPizzaIdError(i32),
    // References and price are checked before insert, this only catches what slips past them
    #[error("Value rejected by database constraint")]
    ConstraintError(#[source] diesel::result::Error),
    #[error("Failed to run query")]
    QueryError(#[source] diesel::result::Error)
}

impl From<diesel::result::Error> for RestaurantPizzaInsertError {
    fn from(e: diesel::result::Error) -> Self {
        match e {
            diesel::result::Error::DatabaseError(
                DatabaseErrorKind::CheckViolation
                    | DatabaseErrorKind::NotNullViolation
                    | DatabaseErrorKind::ForeignKeyViolation,
                _
            ) => RestaurantPizzaInsertError::ConstraintError(e),

            _ => RestaurantPizzaInsertError::QueryError(e)
        }
    }
}

impl Debug for RestaurantPizzaInsertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

// Checks both references and inserts the link within one write transaction.
// The restaurant is checked first.
#[tracing::instrument(
    "Inserting restaurant_pizza into the database",
    skip(conn)
)]
pub async fn insert_restaurant_pizza(
    mut conn: DbConnection,
    new_link: NewRestaurantPizza
) -> Result<RestaurantPizzaDetails, RestaurantPizzaInsertError>{

    let res = spawn_blocking_with_tracing(move || {
        conn.immediate_transaction::<_, RestaurantPizzaInsertError, _>(|conn| {
            let restaurant = restaurants::table
                .find(new_link.restaurant_id)
                .select(Restaurant::as_select())
                .first::<Restaurant>(conn)
                .optional()?
                .ok_or(RestaurantPizzaInsertError::NoRestaurantIdError(new_link.restaurant_id))?;

            let pizza = pizzas::table
                .find(new_link.pizza_id)
                .select(Pizza::as_select())
                .first::<Pizza>(conn)
                .optional()?
                .ok_or(RestaurantPizzaInsertError::NoPizzaIdError(new_link.pizza_id))?;

            let link = diesel::insert_into(restaurant_pizzas::table)
                .values(&new_link)
                .returning(RestaurantPizza::as_returning())
                .get_result::<RestaurantPizza>(conn)?;

            Ok(RestaurantPizzaDetails::new(link, restaurant, pizza))
        })
    })
    .await??;

    Ok(res)
}
