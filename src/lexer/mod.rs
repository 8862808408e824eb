//! Lexer module - classification, configuration, and the token-production engine

pub mod analyzer;
pub mod classify;
pub mod config;
pub mod region;
pub mod token;
