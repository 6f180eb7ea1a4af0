use pizza_restaurants::models::Pizza;

use crate::helpers::TestApp;

#[actix_web::test]
async fn list_pizzas_returns_every_pizza(){
    let app = TestApp::spawn_app().await;

    let margherita = app.insert_pizza("Margherita");
    let pepperoni = app.insert_pizza("Pepperoni");

    let response = app.get_pizzas().await;
    assert_eq!(response.status().as_u16(), 200);

    let body = response.json::<Vec<Pizza>>().await.unwrap();
    assert_eq!(body, vec![margherita, pepperoni]);
}

#[actix_web::test]
async fn list_pizzas_only_exposes_pizza_fields(){
    let app = TestApp::spawn_app().await;

    let restaurant = app.insert_random_restaurant();
    let pizza = app.insert_pizza("Margherita");
    app.insert_restaurant_pizza(&restaurant, &pizza, 10.0);

    let body = app.get_pizzas().await
                .json::<Vec<serde_json::Value>>()
                .await
                .unwrap();

    let mut keys: Vec<&String> = body[0].as_object().unwrap().keys().collect();
    keys.sort();
    assert_eq!(keys, vec!["id", "ingredients", "name"]);
}

#[actix_web::test]
async fn list_pizzas_on_empty_store_returns_empty_array(){
    let app = TestApp::spawn_app().await;

    let response = app.get_pizzas().await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.json::<Vec<Pizza>>().await.unwrap().len(), 0);
}
