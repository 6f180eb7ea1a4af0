use std::{error::Error, fmt::Debug};

use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use anyhow::Context;
use thiserror::Error;

use crate::{db_interaction::{get_restaurant_details, get_restaurants, RestaurantQueryError}, utils::{error_fmt_chain, get_pooled_connection, DbPool, ErrorMessage}};

#[derive(Error)]
pub enum ListRestaurantsError{
    #[error("Error fetching restaurants")]
    QueryError(#[from] RestaurantQueryError),
    #[error("Error fetching restaurants")]
    UnexpectedError(#[from] anyhow::Error)
}

impl Debug for ListRestaurantsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for ListRestaurantsError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code()).json(ErrorMessage{ error: self.to_string() })
    }
}

#[tracing::instrument(
    "Listing restaurants",
    skip(pool)
)]
pub async fn list_restaurants(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, ListRestaurantsError>{
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let restaurants = get_restaurants(conn).await?;

    Ok(HttpResponse::Ok().json(restaurants))
}

#[derive(Error)]
pub enum GetRestaurantError{
    #[error("Restaurant not found")]
    NotFound,
    #[error("Error fetching restaurant")]
    QueryError(#[from] RestaurantQueryError),
    #[error("Error fetching restaurant")]
    UnexpectedError(#[from] anyhow::Error)
}

impl Debug for GetRestaurantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for GetRestaurantError {
    fn status_code(&self) -> StatusCode {
        match self {
            GetRestaurantError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code()).json(ErrorMessage{ error: self.to_string() })
    }
}

#[tracing::instrument(
    "Getting restaurant by id",
    skip(pool)
)]
pub async fn get_restaurant(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, GetRestaurantError>{
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    match get_restaurant_details(conn, path.into_inner()).await? {
        Some(restaurant) => Ok(HttpResponse::Ok().json(restaurant)),
        None => Err(GetRestaurantError::NotFound)
    }
}
