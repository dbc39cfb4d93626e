// src/models/mod.rs
pub mod servico;
pub mod user;
