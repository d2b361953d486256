#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod delete;
pub mod error;
pub mod resource;
pub mod store;
pub mod utils;
