use diesel::prelude::{Associations, Identifiable, Insertable, Queryable, Selectable};
use serde::Deserialize;
use serde::Serialize;

use crate::schema::pizzas;
use crate::schema::restaurant_pizzas;
use crate::schema::restaurants;

#[derive(Queryable, Selectable, Identifiable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = restaurants)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Restaurant{
    pub id: i32,
    pub name: String,
    pub address: String
}

#[derive(Insertable, Debug)]
#[diesel(table_name = restaurants)]
pub struct NewRestaurant{
    pub name: String,
    pub address: String
}

#[derive(Queryable, Selectable, Identifiable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = pizzas)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Pizza{
    pub id: i32,
    pub name: String,
    pub ingredients: String
}

#[derive(Insertable, Debug)]
#[diesel(table_name = pizzas)]
pub struct NewPizza{
    pub name: String,
    pub ingredients: String
}

#[derive(Queryable, Selectable, Identifiable, Associations, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(belongs_to(Restaurant))]
#[diesel(belongs_to(Pizza))]
#[diesel(table_name = restaurant_pizzas)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RestaurantPizza{
    pub id: i32,
    pub price: f64,
    pub restaurant_id: i32,
    pub pizza_id: i32
}

#[derive(Insertable, Debug)]
#[diesel(table_name = restaurant_pizzas)]
pub struct NewRestaurantPizza{
    pub price: f64,
    pub restaurant_id: i32,
    pub pizza_id: i32
}

// Restaurant with its menu, as returned by GET /restaurants/{id}
#[derive(Serialize, Deserialize, Debug)]
pub struct RestaurantDetails{
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<MenuEntry>
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MenuEntry{
    pub id: i32,
    pub price: f64,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: Pizza
}

// Created link with both ends resolved, as returned by POST /restaurant_pizzas
#[derive(Serialize, Deserialize, Debug)]
pub struct RestaurantPizzaDetails{
    pub id: i32,
    pub price: f64,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: Pizza,
    pub restaurant: Restaurant
}

impl RestaurantDetails {
    pub fn new(restaurant: Restaurant, menu: Vec<(RestaurantPizza, Pizza)>) -> Self{
        RestaurantDetails{
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            restaurant_pizzas: menu
                .into_iter()
                .map(|(link, pizza)| MenuEntry{
                    id: link.id,
                    price: link.price,
                    pizza_id: link.pizza_id,
                    restaurant_id: link.restaurant_id,
                    pizza
                })
                .collect()
        }
    }
}

impl RestaurantPizzaDetails {
    pub fn new(link: RestaurantPizza, restaurant: Restaurant, pizza: Pizza) -> Self{
        RestaurantPizzaDetails{
            id: link.id,
            price: link.price,
            pizza_id: link.pizza_id,
            restaurant_id: link.restaurant_id,
            pizza,
            restaurant
        }
    }
}
