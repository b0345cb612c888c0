//! # Point of Sale
//!
//! [`Cart`] holds the pure pricing rules; [`ring_up`] loads the catalog and customer,
//! fills a cart from a checkout request and hands the result to the sale actor.

mod cart;
mod register;

pub use cart::*;
pub use register::*;
