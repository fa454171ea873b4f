// src/lib.rs

//! hbre2ip: posts new Hatena Blog staff picks to Instapaper.

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
