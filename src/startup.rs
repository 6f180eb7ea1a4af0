use std::net::TcpListener;

use actix_web::{dev::Server, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{configuration::Settings, routes::{delete_restaurant, get_restaurant, health_check, index, list_pizzas, list_restaurants, post_restaurant_pizza, restaurant_pizza_json_error}, utils::{get_connection_pool, run_migrations, DbPool}};

pub struct Application{
    pub host: String,
    pub port: u16,
    pub server: Server
}

impl Application {
    pub fn new(settings: Settings) -> Result<Self, anyhow::Error>{
        let pool = get_connection_pool(&settings.database)?;
        run_migrations(&pool)?;

        let listener = TcpListener::bind((settings.application.host.as_str(), settings.application.port))?;
        let port = listener.local_addr()?.port();

        tracing::info!(host = %settings.application.host, port, "Starting server");
        let server = get_server(listener, pool)?;

        Ok(Application{
            host: settings.application.host,
            port,
            server
        })
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error>{
        self.server.await
    }
}

pub fn get_server(listener: TcpListener, pool: DbPool) -> Result<Server, anyhow::Error>{
    let pool = web::Data::new(pool);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(pool.clone())
            .route("/", web::get().to(index))
            .route("/health", web::get().to(health_check))
            .service(
                web::resource("/restaurants")
                    .route(web::get().to(list_restaurants))
            )
            .service(
                web::resource("/restaurants/{id}")
                    .route(web::get().to(get_restaurant))
                    .route(web::delete().to(delete_restaurant))
            )
            .service(
                web::resource("/pizzas")
                    .route(web::get().to(list_pizzas))
            )
            .service(
                web::resource("/restaurant_pizzas")
                    .app_data(web::JsonConfig::default().error_handler(restaurant_pizza_json_error))
                    .route(web::post().to(post_restaurant_pizza))
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
