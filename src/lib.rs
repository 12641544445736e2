//! Minimal Shop storefront library
//!
//! A static product catalog, search and category filtering, an in-memory
//! cart and section navigation, all driven through a single view state.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod errors;
pub mod format;
pub mod models;
pub mod render;
pub mod services;
pub mod session;

pub use errors::{ServiceError, ServiceResult};
pub use models::{CartLine, Category, Product, ProductId, Section};
pub use services::{reduce, Action, Cart, Catalog, ViewState};
