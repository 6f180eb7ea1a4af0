mod restaurant_pizza_candidate;

pub use restaurant_pizza_candidate::RestaurantPizzaCandidate;
