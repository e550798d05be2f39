// src/lib.rs

pub mod api;
pub mod config;
pub mod file_system;
pub mod state;
