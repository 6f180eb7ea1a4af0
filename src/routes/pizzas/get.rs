use std::{error::Error, fmt::Debug};

use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use anyhow::Context;
use thiserror::Error;

use crate::{db_interaction::get_pizzas, utils::{error_fmt_chain, get_pooled_connection, DbPool, ErrorMessage}};

#[derive(Error)]
#[error("Error fetching pizzas")]
pub struct ListPizzasError(#[from] anyhow::Error);

impl Debug for ListPizzasError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for ListPizzasError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code()).json(ErrorMessage{ error: self.to_string() })
    }
}

#[tracing::instrument(
    "Listing pizzas",
    skip(pool)
)]
pub async fn list_pizzas(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, ListPizzasError>{
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let pizzas = get_pizzas(conn).await?;

    Ok(HttpResponse::Ok().json(pizzas))
}
