pub mod account;
pub mod cart;
pub mod categories;
pub mod orders;
pub mod products;
pub mod shops;
pub mod zones;
