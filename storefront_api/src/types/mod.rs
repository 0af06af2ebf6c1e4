mod envelope;
pub use self::envelope::{Envelope, Page, Payload};

mod product;
pub use self::product::{CategoryId, Product, ProductId, ShopId};

mod cart;
pub use self::cart::{AddItemRequest, Cart, CartItem, CreateCartRequest, ProductSnapshot, UpdateItemRequest};

mod shop;
pub use self::shop::{Category, DeliveryZone, Shop};

mod order;
pub use self::order::{ContactInfo, Order, OrderLine, PlaceOrderRequest};

mod auth;
pub use self::auth::{AuthTokens, LoginRequest, Profile, RefreshRequest, RegisterRequest};
