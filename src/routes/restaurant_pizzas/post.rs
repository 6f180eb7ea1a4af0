use std::{error::Error, fmt::Debug};

use actix_web::{error::JsonPayloadError, http::StatusCode, web, HttpRequest, HttpResponse, ResponseError};
use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;

use crate::{db_interaction::{insert_restaurant_pizza, RestaurantPizzaInsertError}, domain::RestaurantPizzaCandidate, utils::{error_fmt_chain, get_pooled_connection, DbPool, ErrorMessages}};

// Every field is optional so that missing ones are reported individually
#[derive(Deserialize, Debug)]
pub struct RestaurantPizzaJson{
    price: Option<f64>,
    pizza_id: Option<i32>,
    restaurant_id: Option<i32>
}

#[derive(Error)]
pub enum PostRestaurantPizzaError{
    #[error("validation errors")]
    ValidationError(Vec<String>),
    #[error("Restaurant does not exist")]
    RestaurantNotFound(#[source] RestaurantPizzaInsertError),
    #[error("Pizza does not exist")]
    PizzaNotFound(#[source] RestaurantPizzaInsertError),
    #[error("Invalid value for restaurant_pizza")]
    InvalidValueError(#[source] RestaurantPizzaInsertError),
    #[error("Unexpected error while creating restaurant_pizza")]
    UnexpectedError(#[from] anyhow::Error)
}

impl From<RestaurantPizzaInsertError> for PostRestaurantPizzaError {
    fn from(e: RestaurantPizzaInsertError) -> Self {
        match e {
            RestaurantPizzaInsertError::NoRestaurantIdError(_) => PostRestaurantPizzaError::RestaurantNotFound(e),
            RestaurantPizzaInsertError::NoPizzaIdError(_) => PostRestaurantPizzaError::PizzaNotFound(e),
            RestaurantPizzaInsertError::ConstraintError(_) => PostRestaurantPizzaError::InvalidValueError(e),
            _ => PostRestaurantPizzaError::UnexpectedError(anyhow::Error::new(e))
        }
    }
}

impl Debug for PostRestaurantPizzaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        if let PostRestaurantPizzaError::ValidationError(errors) = self {
            write!(f, ": {:?}", errors)?;
        }
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for PostRestaurantPizzaError {
    fn status_code(&self) -> StatusCode {
        match self {
            PostRestaurantPizzaError::ValidationError(_)
                | PostRestaurantPizzaError::InvalidValueError(_) => StatusCode::BAD_REQUEST,
            PostRestaurantPizzaError::RestaurantNotFound(_)
                | PostRestaurantPizzaError::PizzaNotFound(_) => StatusCode::NOT_FOUND,
            PostRestaurantPizzaError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let errors = match self {
            PostRestaurantPizzaError::ValidationError(errors) => errors.clone(),
            _ => vec![self.to_string()]
        };

        HttpResponse::build(self.status_code()).json(ErrorMessages{ errors })
    }
}

// Malformed bodies and mistyped fields are rejected before the handler runs
pub fn restaurant_pizza_json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error{
    PostRestaurantPizzaError::ValidationError(vec![err.to_string()]).into()
}

#[tracing::instrument(
    "Creating restaurant_pizza",
    skip(pool)
)]
pub async fn post_restaurant_pizza(
    pool: web::Data<DbPool>,
    json: web::Json<RestaurantPizzaJson>
) -> Result<HttpResponse, PostRestaurantPizzaError>{
    let json = json.into_inner();

    let candidate = RestaurantPizzaCandidate::parse(json.price, json.pizza_id, json.restaurant_id)
        .map_err(PostRestaurantPizzaError::ValidationError)?;

    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let restaurant_pizza = insert_restaurant_pizza(conn, candidate.into()).await?;

    Ok(HttpResponse::Created().json(restaurant_pizza))
}
