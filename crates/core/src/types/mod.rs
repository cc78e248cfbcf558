//! Core types for Swift Menu.
//!
//! This module provides the shop document and type-safe wrappers for its
//! identifiers and prices.

pub mod id;
pub mod price;
pub mod shop;

pub use id::{ImageSlug, MenuItemId};
pub use price::{Price, PriceError};
pub use shop::{MenuItem, MenuItemPatch, ShopData, ShopInfo, ShopInfoPatch, SocialMedia};
