// src/lib.rs

pub mod checkpoint;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod lock;
pub mod net;
pub mod nomenclator;
pub mod output;
pub mod progress;
pub mod runner;
pub mod scope;
pub mod score;
