// src/lib.rs

pub mod command;
pub mod config;
pub mod host;
pub mod map;
pub mod maze;
pub mod session;
