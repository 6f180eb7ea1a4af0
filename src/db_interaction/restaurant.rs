use std::{error::Error, fmt::Debug};

use diesel::{BelongingToDsl, ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};
use thiserror::Error;

use crate::{models::{Pizza, Restaurant, RestaurantDetails, RestaurantPizza}, schema::{pizzas, restaurant_pizzas, restaurants}, telemetry::spawn_blocking_with_tracing, utils::{error_fmt_chain, DbConnection}};

// Error associated with reading restaurants
#[derive(Error)]
pub enum RestaurantQueryError{
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to run query")]
    QueryError(#[from] diesel::result::Error)
}

impl Debug for RestaurantQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

#[tracing::instrument(
    "Getting restaurants from db",
    skip_all
)]
pub async fn get_restaurants(
    mut conn: DbConnection
) -> Result<Vec<Restaurant>, RestaurantQueryError>{
    let res = spawn_blocking_with_tracing(move || {
        restaurants::table
            .order(restaurants::id.asc())
            .select(Restaurant::as_select())
            .load::<Restaurant>(&mut conn)
    })
    .await??;

    Ok(res)
}

// Function to query a restaurant together with the pizzas it serves
#[tracing::instrument(
    "Getting restaurant details from db",
    skip(conn)
)]
pub async fn get_restaurant_details(
    mut conn: DbConnection,
    restaurant_id: i32
) -> Result<Option<RestaurantDetails>, RestaurantQueryError>{
    let res = spawn_blocking_with_tracing(move || -> Result<Option<RestaurantDetails>, diesel::result::Error> {
        let restaurant = restaurants::table
            .find(restaurant_id)
            .select(Restaurant::as_select())
            .first::<Restaurant>(&mut conn)
            .optional()?;

        let Some(restaurant) = restaurant else {
            return Ok(None)
        };

        let menu = RestaurantPizza::belonging_to(&restaurant)
            .inner_join(pizzas::table)
            .order(restaurant_pizzas::id.asc())
            .select((RestaurantPizza::as_select(), Pizza::as_select()))
            .load::<(RestaurantPizza, Pizza)>(&mut conn)?;

        Ok(Some(RestaurantDetails::new(restaurant, menu)))
    })
    .await??;

    Ok(res)
}

// Error associated with deleting a restaurant
#[derive(Error)]
pub enum RestaurantDeleteError{
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to run query")]
    QueryError(#[from] diesel::result::Error),
    #[error("restaurant id: {0} doesn't exist")]
    NoRestaurantIdError(i32)
}

impl Debug for RestaurantDeleteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

// Deletes the restaurant and every restaurant_pizza row pointing at it
#[tracing::instrument(
    "Deleting restaurant from db",
    skip(conn)
)]
pub async fn delete_restaurant_from_database(
    mut conn: DbConnection,
    restaurant_id: i32
) -> Result<(), RestaurantDeleteError>{

    spawn_blocking_with_tracing(move || {
        conn.immediate_transaction::<(), RestaurantDeleteError, _>(|conn| {
            let removed_links = diesel::delete(
                    restaurant_pizzas::table.filter(restaurant_pizzas::restaurant_id.eq(restaurant_id))
                )
                .execute(conn)?;

            let affected_rows = diesel::delete(restaurants::table.find(restaurant_id))
                .execute(conn)?;

            if affected_rows == 0 {
                return Err(RestaurantDeleteError::NoRestaurantIdError(restaurant_id))
            }

            tracing::info!(removed_links, "Deleted restaurant");
            Ok(())
        })
    })
    .await??;

    Ok(())
}
