pub mod analysis;
pub mod config;
pub mod model;
pub mod output;

#[cfg(feature = "web")]
pub mod web;
