use actix_web::{http::header::ContentType, HttpResponse};

#[tracing::instrument(
    "Serving index page"
)]
pub async fn index() -> HttpResponse{
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body("<h1>Code challenge</h1>")
}

// Liveness only, the database is not touched
#[tracing::instrument(
    "Checking if api is online"
)]
pub async fn health_check() -> HttpResponse{
    HttpResponse::Ok().body("Working")
}
