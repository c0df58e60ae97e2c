//! Persistence layer for the pereBlaise game table: a single MongoDB-backed
//! game document, timestamped snapshots, and a typed settings view.

pub mod config;
pub mod dao;
pub mod error;
pub mod services;
