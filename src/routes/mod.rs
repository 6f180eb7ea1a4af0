mod index;
mod pizzas;
mod restaurant_pizzas;
mod restaurants;

pub use index::*;
pub use pizzas::*;
pub use restaurant_pizzas::*;
pub use restaurants::*;
