use std::{error::Error, fmt::Debug};

use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use anyhow::Context;
use thiserror::Error;

use crate::{db_interaction::{delete_restaurant_from_database, RestaurantDeleteError}, utils::{error_fmt_chain, get_pooled_connection, DbPool, ErrorMessage}};

#[derive(Error)]
pub enum DeleteRestaurantError{
    #[error("Restaurant not found")]
    NotFound(#[source] RestaurantDeleteError),
    #[error("Error deleting restaurant")]
    DeleteError(#[source] RestaurantDeleteError),
    #[error("Error deleting restaurant")]
    UnexpectedError(#[from] anyhow::Error)
}

impl From<RestaurantDeleteError> for DeleteRestaurantError {
    fn from(e: RestaurantDeleteError) -> Self {
        match e {
            RestaurantDeleteError::NoRestaurantIdError(_) => DeleteRestaurantError::NotFound(e),
            _ => DeleteRestaurantError::DeleteError(e)
        }
    }
}

impl Debug for DeleteRestaurantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for DeleteRestaurantError {
    fn status_code(&self) -> StatusCode {
        match self {
            DeleteRestaurantError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code()).json(ErrorMessage{ error: self.to_string() })
    }
}

#[tracing::instrument(
    "Deleting restaurant by id",
    skip(pool)
)]
pub async fn delete_restaurant(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, DeleteRestaurantError>{
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    delete_restaurant_from_database(conn, path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
