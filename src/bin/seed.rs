use anyhow::Context;
use diesel::{Connection, RunQueryDsl, SelectableHelper};
use pizza_restaurants::{configuration::Settings, models::{NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant}, schema::{pizzas, restaurant_pizzas, restaurants}, telemetry::{get_subscriber, init_subscriber}, utils::{get_connection_pool, run_migrations}};

// Replaces the contents of the configured database with a small fixed dataset
fn main() -> anyhow::Result<()>{
    let subscriber = get_subscriber("pizza_restaurants-seed".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = Settings::get()?;
    let pool = get_connection_pool(&settings.database)?;
    run_migrations(&pool)?;

    let mut conn = pool.get()?;

    conn.transaction::<(), anyhow::Error, _>(|conn| {
        diesel::delete(restaurant_pizzas::table).execute(conn).context("Failed to clear restaurant_pizzas")?;
        diesel::delete(restaurants::table).execute(conn).context("Failed to clear restaurants")?;
        diesel::delete(pizzas::table).execute(conn).context("Failed to clear pizzas")?;

        let restaurants = [
                NewRestaurant{ name: "Karen's Pizza Shack".to_string(), address: "address1".to_string() },
                NewRestaurant{ name: "Sanjay's Pizza".to_string(), address: "address2".to_string() },
                NewRestaurant{ name: "Kiki's Pizza".to_string(), address: "address3".to_string() },
            ]
            .iter()
            .map(|restaurant| {
                diesel::insert_into(restaurants::table)
                    .values(restaurant)
                    .returning(Restaurant::as_returning())
                    .get_result::<Restaurant>(conn)
                    .context("Failed to insert restaurant")
            })
            .collect::<Result<Vec<Restaurant>, anyhow::Error>>()?;

        let pizzas = [
                NewPizza{ name: "Emma".to_string(), ingredients: "Dough, Tomato Sauce, Cheese".to_string() },
                NewPizza{ name: "Geri".to_string(), ingredients: "Dough, Tomato Sauce, Cheese, Pepperoni".to_string() },
                NewPizza{ name: "Melanie".to_string(), ingredients: "Dough, Sauce, Ricotta, Red peppers, Mustard".to_string() },
            ]
            .iter()
            .map(|pizza| {
                diesel::insert_into(pizzas::table)
                    .values(pizza)
                    .returning(Pizza::as_returning())
                    .get_result::<Pizza>(conn)
                    .context("Failed to insert pizza")
            })
            .collect::<Result<Vec<Pizza>, anyhow::Error>>()?;

        let links: Vec<NewRestaurantPizza> = restaurants.iter()
            .zip(pizzas.iter())
            .map(|(restaurant, pizza)| NewRestaurantPizza{
                price: 1.0,
                restaurant_id: restaurant.id,
                pizza_id: pizza.id
            })
            .collect();

        for link in links.iter() {
            diesel::insert_into(restaurant_pizzas::table)
                .values(link)
                .execute(conn)
                .context("Failed to insert restaurant_pizza")?;
        }

        tracing::info!(
            restaurants = restaurants.len(),
            pizzas = pizzas.len(),
            restaurant_pizzas = links.len(),
            "Seeded database"
        );
        Ok(())
    })?;

    Ok(())
}
