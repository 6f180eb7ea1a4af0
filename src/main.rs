use pizza_restaurants::{configuration::Settings, startup::Application, telemetry::{get_subscriber, init_subscriber}};

#[actix_web::main]
async fn main() -> anyhow::Result<()>{
    let subscriber = get_subscriber("pizza_restaurants".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = Settings::get()?;

    let application = Application::new(config)?;
    application.run_until_stopped().await?;
    Ok(())
}
