use validator::Validate;

use crate::models::NewRestaurantPizza;

/// A restaurant-pizza link whose fields are all present and whose price is in range.
///
/// Only structural checks happen here; whether the referenced restaurant and
/// pizza exist is decided against the store when the row is inserted.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct RestaurantPizzaCandidate{
    #[validate(range(min = 1.0, max = 30.0, message = "Price must be between 1 and 30."))]
    pub price: f64,
    pub pizza_id: i32,
    pub restaurant_id: i32
}

impl RestaurantPizzaCandidate {
    pub fn parse(
        price: Option<f64>,
        pizza_id: Option<i32>,
        restaurant_id: Option<i32>
    ) -> Result<Self, Vec<String>>{
        let mut errors = Vec::new();

        if price.is_none(){
            errors.push("price is required".to_string());
        }
        if pizza_id.is_none(){
            errors.push("pizza_id is required".to_string());
        }
        if restaurant_id.is_none(){
            errors.push("restaurant_id is required".to_string());
        }

        let (Some(price), Some(pizza_id), Some(restaurant_id)) = (price, pizza_id, restaurant_id) else {
            return Err(errors)
        };

        if !price.is_finite(){
            return Err(vec!["Price must be between 1 and 30.".to_string()])
        }

        let candidate = RestaurantPizzaCandidate{
            price,
            pizza_id,
            restaurant_id
        };

        candidate.validate().map_err(|e| {
            e.field_errors()
                .into_iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |error| match &error.message {
                        Some(message) => message.to_string(),
                        None => format!("{} is invalid", field)
                    })
                })
                .collect::<Vec<String>>()
        })?;

        Ok(candidate)
    }
}

impl From<RestaurantPizzaCandidate> for NewRestaurantPizza {
    fn from(candidate: RestaurantPizzaCandidate) -> Self {
        NewRestaurantPizza{
            price: candidate.price,
            restaurant_id: candidate.restaurant_id,
            pizza_id: candidate.pizza_id
        }
    }
}
