mod pizza;
mod restaurant;
mod restaurant_pizza;

pub use pizza::*;
pub use restaurant::*;
pub use restaurant_pizza::*;
