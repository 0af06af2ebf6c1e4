use storefront_lib::store::{MemoryStore, StateStore, CART_ID_KEY};
use storefront_lib::{CartSession, Client, SessionError};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn json_response(status: u16, body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(status)
        .set_body_json(body)
        .insert_header("content-type", "application/json")
}

fn line(item_id: &str, product_id: i64, price_cents: i64, quantity: u32) -> serde_json::Value {
    serde_json::json!({
        "id": item_id,
        "quantity": quantity,
        "product": {
            "id": product_id,
            "name": format!("Product {}", product_id),
            "image": null,
            "price": price_cents,
            "stock": 100,
            "categoryId": 1,
            "shopId": 1
        }
    })
}

fn cart_body(cart_id: &str, items: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({
        "message": "ok",
        "statusCode": 200,
        "data": {"id": cart_id, "items": items}
    })
}

#[tokio::test]
async fn first_add_persists_server_assigned_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/carts"))
        .and(body_json(serde_json::json!({"productId": 42, "quantity": 2})))
        .respond_with(json_response(
            201,
            cart_body("c-77", vec![line("i-1", 42, 1999, 2)]),
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/carts"))
        .and(query_param("cartId", "c-77"))
        .respond_with(json_response(
            200,
            cart_body("c-77", vec![line("i-1", 42, 1999, 2)]),
        ))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri()).unwrap();
    let mut session = CartSession::new(&client, MemoryStore::new());

    assert_eq!(session.cart_id(), None);
    session.add_item(42, 2).await.unwrap();
    assert_eq!(session.cart_id(), Some("c-77".to_string()));

    // A subsequent read returns the same cart.
    let cart = session.fetch().await.unwrap().unwrap();
    assert_eq!(cart.id, "c-77");
}

#[tokio::test]
async fn item_count_accumulates_across_adds() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/carts"))
        .respond_with(json_response(
            201,
            cart_body("c-1", vec![line("i-1", 42, 1999, 3)]),
        ))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/carts/c-1/items"))
        .respond_with(json_response(200, serde_json::json!({"message": "added"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/carts"))
        .and(query_param("cartId", "c-1"))
        .respond_with(json_response(
            200,
            cart_body("c-1", vec![line("i-1", 42, 1999, 3), line("i-2", 57, 3450, 3)]),
        ))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri()).unwrap();
    let mut session = CartSession::new(&client, MemoryStore::new());

    session.add_item(42, 3).await.unwrap();
    assert_eq!(session.item_count(), 3);

    session.add_item(57, 3).await.unwrap();
    // Two additions of quantity 3 each.
    assert_eq!(session.item_count(), 6);
    assert_eq!(session.total_cents(), 3 * 1999 + 3 * 3450);
}

#[tokio::test]
async fn fetch_without_stored_id_skips_network() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would be recorded below.

    let client = Client::new(&server.uri()).unwrap();
    let mut session = CartSession::new(&client, MemoryStore::new());

    let result = session.fetch().await.unwrap();
    assert!(result.is_none());
    assert_eq!(session.item_count(), 0);
    assert_eq!(session.total_cents(), 0);

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn failed_mutation_preserves_cart_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/carts/c-9/items"))
        .respond_with(json_response(
            500,
            serde_json::json!({"message": "out of stock", "statusCode": 500}),
        ))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri()).unwrap();
    let store = MemoryStore::new();
    store.set(CART_ID_KEY, "c-9");
    let mut session = CartSession::new(&client, store);

    let err = session.add_item(42, 1).await.unwrap_err();
    assert!(matches!(err, SessionError::Api(_)));
    assert_eq!(session.cart_id(), Some("c-9".to_string()));
}

#[tokio::test]
async fn failed_create_leaves_no_id_behind() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/carts"))
        .respond_with(json_response(
            500,
            serde_json::json!({"message": "unavailable", "statusCode": 500}),
        ))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri()).unwrap();
    let mut session = CartSession::new(&client, MemoryStore::new());

    assert!(session.add_item(42, 1).await.is_err());
    assert_eq!(session.cart_id(), None);
}

#[tokio::test]
async fn mutation_without_cart_fails_fast() {
    let server = MockServer::start().await;

    let client = Client::new(&server.uri()).unwrap();
    let mut session = CartSession::new(&client, MemoryStore::new());

    let err = session.update_quantity("i-1", 5).await.unwrap_err();
    assert!(matches!(err, SessionError::NoActiveCart));

    let err = session.remove_item("i-1").await.unwrap_err();
    assert!(matches!(err, SessionError::NoActiveCart));

    // The precondition failure happened before any request went out.
    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn zero_quantity_is_rejected() {
    let server = MockServer::start().await;

    let client = Client::new(&server.uri()).unwrap();
    let mut session = CartSession::new(&client, MemoryStore::new());

    assert!(matches!(
        session.add_item(42, 0).await.unwrap_err(),
        SessionError::InvalidQuantity
    ));
}

#[tokio::test]
async fn clear_drops_local_id_and_next_read_stays_offline() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/carts/c-5/clear"))
        .respond_with(json_response(200, serde_json::json!({"message": "cleared"})))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri()).unwrap();
    let store = MemoryStore::new();
    store.set(CART_ID_KEY, "c-5");
    let mut session = CartSession::new(&client, store);

    session.clear().await;
    assert_eq!(session.cart_id(), None);
    assert!(session.fetch().await.unwrap().is_none());

    // Only the clear call reached the server; the fetch stayed local.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method.to_string(), "DELETE");
}

#[tokio::test]
async fn clear_survives_server_failure() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/carts/c-5/clear"))
        .respond_with(json_response(
            500,
            serde_json::json!({"message": "boom", "statusCode": 500}),
        ))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri()).unwrap();
    let store = MemoryStore::new();
    store.set(CART_ID_KEY, "c-5");
    let mut session = CartSession::new(&client, store);

    session.clear().await;
    assert_eq!(session.cart_id(), None);
}

#[tokio::test]
async fn add_update_remove_scenario() {
    let server = MockServer::start().await;
    let price = 1999;

    Mock::given(method("POST"))
        .and(path("/carts"))
        .and(body_json(serde_json::json!({"productId": 42, "quantity": 2})))
        .respond_with(json_response(
            201,
            cart_body("c-1", vec![line("i-1", 42, price, 2)]),
        ))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/carts/c-1/items/i-1"))
        .and(body_json(serde_json::json!({"quantity": 5})))
        .respond_with(json_response(200, serde_json::json!({"message": "updated"})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/carts/c-1/items/i-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    // Successive reads see the cart after each mutation. Mocks are matched
    // in mount order, so each snapshot is served exactly once.
    Mock::given(method("GET"))
        .and(path("/carts"))
        .and(query_param("cartId", "c-1"))
        .respond_with(json_response(
            200,
            cart_body("c-1", vec![line("i-1", 42, price, 2)]),
        ))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/carts"))
        .and(query_param("cartId", "c-1"))
        .respond_with(json_response(
            200,
            cart_body("c-1", vec![line("i-1", 42, price, 5)]),
        ))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/carts"))
        .and(query_param("cartId", "c-1"))
        .respond_with(json_response(200, cart_body("c-1", vec![])))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri()).unwrap();
    let mut session = CartSession::new(&client, MemoryStore::new());

    session.add_item(42, 2).await.unwrap();
    session.fetch().await.unwrap();
    assert_eq!(session.item_count(), 2);

    session.update_quantity("i-1", 5).await.unwrap();
    assert_eq!(session.item_count(), 5);
    assert_eq!(session.total_cents(), 5 * price);

    session.remove_item("i-1").await.unwrap();
    assert_eq!(session.item_count(), 0);
    assert_eq!(session.total_cents(), 0);
}
