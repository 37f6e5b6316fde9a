//! Page metadata service: resolves per-route document head metadata (base
//! tags, Open Graph, Twitter card) and serves pages that mount an externally
//! owned client component.

pub mod config;
pub mod metadata;
pub mod pages;
pub mod routes;
pub mod state;
