// src/services/mod.rs
pub mod auth_service;
pub mod servico_service;
pub mod user_service;
