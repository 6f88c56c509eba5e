pub mod commands;
pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod resolvers;
pub mod services;

pub use error::ApplicationResult;
