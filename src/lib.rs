pub mod auth;
pub mod config;
pub mod core;
pub mod feed;
pub mod models;
pub mod posts;
pub mod session;
pub mod store;
pub mod users;

pub use crate::core::errors::AppError;
pub use crate::feed::{Delay, Feed, NoDelay, SystemDelay};
pub use crate::models::models::{Post, User};
pub use crate::session::Session;
pub use crate::store::{Storage, Store};
