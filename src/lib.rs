//! Canvas Filters - per-pixel color filters for RGBA images.
//!
//! The pixel math lives in the `pixel-filter` crate. This crate wires it to
//! image sources (HTTP or file), PNG encoding, presets from config.yaml, an
//! HTTP API and a CLI.

pub mod api;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
