use pizza_restaurants::{models::{Restaurant, RestaurantDetails}, utils::ErrorMessage};

use crate::helpers::TestApp;

#[actix_web::test]
async fn list_restaurants_returns_every_restaurant_in_id_order(){
    let app = TestApp::spawn_app().await;

    let first = app.insert_random_restaurant();
    let second = app.insert_random_restaurant();

    let response = app.get_restaurants().await;
    assert_eq!(response.status().as_u16(), 200);

    let body = response.json::<Vec<Restaurant>>().await.unwrap();
    assert_eq!(body, vec![first, second]);
}

#[actix_web::test]
async fn list_restaurants_does_not_include_menu(){
    let app = TestApp::spawn_app().await;

    let restaurant = app.insert_random_restaurant();
    let pizza = app.insert_pizza("Margherita");
    app.insert_restaurant_pizza(&restaurant, &pizza, 12.0);

    let body = app.get_restaurants().await
                .json::<Vec<serde_json::Value>>()
                .await
                .unwrap();

    let mut keys: Vec<&String> = body[0].as_object().unwrap().keys().collect();
    keys.sort();
    assert_eq!(keys, vec!["address", "id", "name"]);
}

#[actix_web::test]
async fn get_restaurant_returns_restaurant_with_its_pizzas(){
    let app = TestApp::spawn_app().await;

    let restaurant = app.insert_restaurant("Dough");
    let other = app.insert_random_restaurant();
    let margherita = app.insert_pizza("Margherita");
    let marinara = app.insert_pizza("Marinara");
    let link = app.insert_restaurant_pizza(&restaurant, &margherita, 12.0);
    app.insert_restaurant_pizza(&other, &marinara, 9.5);

    let response = app.get_restaurant(&restaurant.id.to_string()).await;
    assert_eq!(response.status().as_u16(), 200);

    let body = response.json::<RestaurantDetails>().await.unwrap();
    assert_eq!(body.id, restaurant.id);
    assert_eq!(body.name, "Dough");
    assert_eq!(body.address, restaurant.address);
    assert_eq!(body.restaurant_pizzas.len(), 1);

    let entry = &body.restaurant_pizzas[0];
    assert_eq!(entry.id, link.id);
    assert_eq!(entry.price, 12.0);
    assert_eq!(entry.restaurant_id, restaurant.id);
    assert_eq!(entry.pizza_id, margherita.id);
    assert_eq!(entry.pizza, margherita);
}

#[actix_web::test]
async fn get_unknown_restaurant_returns_404(){
    let app = TestApp::spawn_app().await;

    let response = app.get_restaurant("4242").await;
    assert_eq!(response.status().as_u16(), 404);

    let body = response.json::<ErrorMessage>().await.unwrap();
    assert_eq!(body.error, "Restaurant not found");
}

#[actix_web::test]
async fn get_restaurant_with_non_integer_id_returns_404(){
    let app = TestApp::spawn_app().await;
    app.insert_random_restaurant();

    let response = app.get_restaurant("dough").await;
    assert_eq!(response.status().as_u16(), 404);
}

#[actix_web::test]
async fn delete_restaurant_removes_it_and_its_restaurant_pizzas(){
    let app = TestApp::spawn_app().await;

    let restaurant = app.insert_random_restaurant();
    let other = app.insert_random_restaurant();
    let margherita = app.insert_pizza("Margherita");
    let marinara = app.insert_pizza("Marinara");
    app.insert_restaurant_pizza(&restaurant, &margherita, 12.0);
    app.insert_restaurant_pizza(&restaurant, &marinara, 8.0);
    app.insert_restaurant_pizza(&other, &marinara, 8.0);

    let response = app.delete_restaurant(&restaurant.id.to_string()).await;
    assert_eq!(response.status().as_u16(), 204);
    assert!(response.text().await.unwrap().is_empty());

    assert_eq!(app.count_restaurants(), 1);
    assert_eq!(app.count_restaurant_pizzas(), 1);
    assert_eq!(app.count_pizzas(), 2);

    let response = app.get_restaurant(&restaurant.id.to_string()).await;
    assert_eq!(response.status().as_u16(), 404);
}

#[actix_web::test]
async fn delete_unknown_restaurant_returns_404_and_leaves_store_unchanged(){
    let app = TestApp::spawn_app().await;

    let restaurant = app.insert_random_restaurant();
    let pizza = app.insert_pizza("Margherita");
    app.insert_restaurant_pizza(&restaurant, &pizza, 12.0);

    let response = app.delete_restaurant(&(restaurant.id + 1).to_string()).await;
    assert_eq!(response.status().as_u16(), 404);

    let body = response.json::<ErrorMessage>().await.unwrap();
    assert_eq!(body.error, "Restaurant not found");

    assert_eq!(app.count_restaurants(), 1);
    assert_eq!(app.count_restaurant_pizzas(), 1);
}

#[actix_web::test]
async fn deleting_twice_returns_404_the_second_time(){
    let app = TestApp::spawn_app().await;

    let restaurant = app.insert_random_restaurant();

    let first = app.delete_restaurant(&restaurant.id.to_string()).await;
    assert_eq!(first.status().as_u16(), 204);

    let second = app.delete_restaurant(&restaurant.id.to_string()).await;
    assert_eq!(second.status().as_u16(), 404);
}
