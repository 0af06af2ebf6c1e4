//! HTTP client for the storefront REST backend.

use std::sync::RwLock;
use std::time::{Duration, Instant};

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{
    query::PageQuery,
    types::{
        AddItemRequest, AuthTokens, Cart, Category, CategoryId, CreateCartRequest, DeliveryZone,
        LoginRequest, Order, Page, Payload, PlaceOrderRequest, Product, ProductId, Profile,
        RefreshRequest, RegisterRequest, Shop, ShopId, UpdateItemRequest,
    },
    Error,
};

/// Request timeout for all backend calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable naming the backend base URL.
const BASE_URL_ENV: &str = "STOREFRONT_API_URL";

/// HTTP client for the storefront backend.
///
/// A single choke point for outbound calls: holds the base URL, a shared
/// `reqwest::Client` with a 30-second timeout, and an optional bearer token.
/// Constructed explicitly and passed by reference; there is no process-wide
/// instance. Every call is a single attempt, with no retry or circuit
/// breaking, and emits two diagnostic log lines (request issued, response
/// received with its wall-clock duration).
pub struct Client {
    base_url: String,
    http: reqwest::Client,
    /// Bearer token sent as `Authorization` when set. In-memory only; the
    /// session layer owns durable persistence.
    token: RwLock<Option<String>>,
}

impl Client {
    /// Creates a client pointing at the given base URL.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            token: RwLock::new(None),
        })
    }

    /// Creates a client from the `STOREFRONT_API_URL` environment variable,
    /// read exactly once here.
    pub fn from_env() -> Result<Self, Error> {
        let base_url = std::env::var(BASE_URL_ENV)
            .map_err(|_| Error::Config(format!("{} is not set", BASE_URL_ENV)))?;
        Self::new(&base_url)
    }

    /// Sets the bearer token attached to subsequent requests.
    pub fn set_token(&self, token: &str) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
    }

    /// Removes the bearer token; subsequent requests go out unauthenticated.
    pub fn clear_token(&self) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// Returns the current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn get_url(&self, path: &str, query: Option<&PageQuery>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&PageQuery>,
        body: Option<&B>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = self.get_url(path, query)?;
        let started = Instant::now();
        tracing::debug!("{} {}", method, url);

        let mut req = self.http.request(method.clone(), url);
        if let Some(token) = self.token() {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::error!("{} {} failed: {}", method, path, e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_lowercase();
        let body_text = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body from {}: {}", path, e);
            Error::RequestFailed
        })?;
        tracing::debug!(
            "{} {} -> {} in {:?}",
            method,
            path,
            status,
            started.elapsed()
        );

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthorized);
        }
        if !status.is_success() {
            let message = error_message(status.as_u16(), &content_type, &body_text);
            tracing::error!("{} {} failed with status {}: {}", method, path, status, message);
            return Err(Error::Http {
                status: status.as_u16(),
                message,
            });
        }

        // JSON when the Content-Type says so, plain text otherwise.
        let value = if content_type.contains("application/json") {
            if body_text.trim().is_empty() {
                serde_json::Value::Null
            } else {
                serde_json::from_str::<serde_json::Value>(&body_text).map_err(|e| {
                    tracing::error!(
                        "Failed to parse response from {}: {} | body: {}",
                        path,
                        e,
                        truncate_body(&body_text)
                    );
                    Error::InvalidBody
                })?
            }
        } else if body_text.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::Value::String(body_text)
        };

        serde_json::from_value::<T>(value).map_err(|e| {
            tracing::error!("Unexpected response shape from {}: {}", path, e);
            Error::InvalidBody
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&PageQuery>,
    ) -> Result<T, Error> {
        self.request::<T, ()>(Method::GET, path, query, None).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        self.request(Method::POST, path, None, Some(body)).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.request::<T, ()>(Method::POST, path, None, None).await
    }

    async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        self.request(Method::PUT, path, None, Some(body)).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.request::<T, ()>(Method::DELETE, path, None, None)
            .await
    }

    // -- Shops --

    /// Fetches the paginated shop listing for the storefront.
    pub async fn list_shops(&self, query: &PageQuery) -> Result<Page<Shop>, Error> {
        self.get("/shops/list-frontend", Some(query)).await
    }

    /// Fetches a single shop by its numeric ID.
    pub async fn get_shop(&self, shop_id: ShopId) -> Result<Shop, Error> {
        let path = format!("/shops/by/{}", shop_id);
        let payload: Payload<Shop> = self.get(&path, None).await?;
        unwrap_data(payload, &path)
    }

    // -- Products --

    /// Fetches the paginated product listing for the storefront.
    pub async fn list_products(&self, query: &PageQuery) -> Result<Page<Product>, Error> {
        self.get("/products/all-frontend", Some(query)).await
    }

    /// Fetches a single product by its numeric ID.
    pub async fn get_product(&self, product_id: ProductId) -> Result<Product, Error> {
        let path = format!("/products/by/{}", product_id);
        let payload: Payload<Product> = self.get(&path, None).await?;
        unwrap_data(payload, &path)
    }

    /// Fetches the products belonging to one shop.
    pub async fn products_by_shop(
        &self,
        shop_id: ShopId,
        query: &PageQuery,
    ) -> Result<Page<Product>, Error> {
        self.get(&format!("/products/shop/{}", shop_id), Some(query))
            .await
    }

    /// Fetches the products in one category.
    pub async fn products_by_category(
        &self,
        category_id: CategoryId,
        query: &PageQuery,
    ) -> Result<Page<Product>, Error> {
        self.get(&format!("/products/category/{}", category_id), Some(query))
            .await
    }

    // -- Cart --

    /// Fetches a cart snapshot. The cart id travels as the `cartId` query
    /// parameter; callers must supply an already-valid identifier.
    pub async fn get_cart(&self, cart_id: &str) -> Result<Cart, Error> {
        let path = format!("/carts?cartId={}", cart_id);
        let payload: Payload<Cart> = self.get(&path, None).await?;
        unwrap_data(payload, "/carts")
    }

    /// Creates a cart seeded with one product. The server assigns the id.
    pub async fn create_cart(&self, req: &CreateCartRequest) -> Result<Cart, Error> {
        let payload: Payload<Cart> = self.post("/carts", req).await?;
        unwrap_data(payload, "/carts")
    }

    /// Adds a product to an existing cart. Callers re-fetch the cart for the
    /// authoritative item list.
    pub async fn add_cart_item(&self, cart_id: &str, req: &AddItemRequest) -> Result<(), Error> {
        self.post::<serde_json::Value, _>(&format!("/carts/{}/items", cart_id), req)
            .await?;
        Ok(())
    }

    /// Changes the quantity of one cart line.
    pub async fn update_cart_item(
        &self,
        cart_id: &str,
        item_id: &str,
        req: &UpdateItemRequest,
    ) -> Result<(), Error> {
        self.put::<serde_json::Value, _>(&format!("/carts/{}/items/{}", cart_id, item_id), req)
            .await?;
        Ok(())
    }

    /// Removes one line from the cart.
    pub async fn remove_cart_item(&self, cart_id: &str, item_id: &str) -> Result<(), Error> {
        self.delete::<serde_json::Value>(&format!("/carts/{}/items/{}", cart_id, item_id))
            .await?;
        Ok(())
    }

    /// Empties the server-side cart.
    pub async fn clear_cart(&self, cart_id: &str) -> Result<(), Error> {
        self.delete::<serde_json::Value>(&format!("/carts/{}/clear", cart_id))
            .await?;
        Ok(())
    }

    // -- Orders --

    /// Places an order: contact info plus line items, sent atomically.
    pub async fn place_order(&self, req: &PlaceOrderRequest) -> Result<Order, Error> {
        let payload: Payload<Order> = self.post("/orders/place", req).await?;
        unwrap_data(payload, "/orders/place")
    }

    /// Fetches a single order by its opaque ID.
    pub async fn get_order(&self, order_id: &str) -> Result<Order, Error> {
        let path = format!("/orders/get/{}", order_id);
        let payload: Payload<Order> = self.get(&path, None).await?;
        unwrap_data(payload, &path)
    }

    /// Fetches the paginated order listing for the authenticated account.
    pub async fn list_orders(&self, query: &PageQuery) -> Result<Page<Order>, Error> {
        self.get("/orders", Some(query)).await
    }

    // -- Categories & delivery zones --

    /// Fetches all product categories.
    pub async fn list_categories(&self) -> Result<Vec<Category>, Error> {
        let payload: Payload<Vec<Category>> = self.get("/categories/all", None).await?;
        unwrap_data(payload, "/categories/all")
    }

    /// Fetches the delivery zones available to the client at checkout.
    pub async fn client_delivery_zones(&self) -> Result<Vec<DeliveryZone>, Error> {
        let payload: Payload<Vec<DeliveryZone>> = self.get("/delivery-zones/client", None).await?;
        unwrap_data(payload, "/delivery-zones/client")
    }

    // -- Auth --

    /// Exchanges credentials for bearer tokens. Does not store them; the
    /// session layer decides what to persist.
    pub async fn login(&self, req: &LoginRequest) -> Result<AuthTokens, Error> {
        let payload: Payload<AuthTokens> = self.post("/auth/login", req).await?;
        unwrap_data(payload, "/auth/login")
    }

    /// Registers a new customer account.
    pub async fn register(&self, req: &RegisterRequest) -> Result<Profile, Error> {
        let payload: Payload<Profile> = self.post("/clients", req).await?;
        unwrap_data(payload, "/clients")
    }

    /// Fetches the authenticated customer's profile.
    pub async fn get_profile(&self) -> Result<Profile, Error> {
        let payload: Payload<Profile> = self.get("/auth/profile", None).await?;
        unwrap_data(payload, "/auth/profile")
    }

    /// Exchanges the current token for a fresh one.
    pub async fn refresh_token(&self, req: &RefreshRequest) -> Result<AuthTokens, Error> {
        let payload: Payload<AuthTokens> = self.post("/auth/refresh", req).await?;
        unwrap_data(payload, "/auth/refresh")
    }

    /// Invalidates the server-side session.
    pub async fn logout(&self) -> Result<(), Error> {
        self.post_empty::<serde_json::Value>("/auth/logout").await?;
        Ok(())
    }
}

fn unwrap_data<T>(payload: Payload<T>, path: &str) -> Result<T, Error> {
    payload.into_data().ok_or_else(|| {
        tracing::error!("Response from {} carried no data", path);
        Error::InvalidBody
    })
}

fn error_message(status: u16, content_type: &str, body: &str) -> String {
    if content_type.contains("application/json") {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
            if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
                return message.to_string();
            }
        }
    }
    format!("HTTP {}", status)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
