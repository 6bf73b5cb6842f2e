//! HTTP inbound adapter exposing REST endpoints.

pub mod authors;
pub mod error;
pub mod health;
pub mod recipes;
pub mod recipes_dto;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
