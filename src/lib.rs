//! # Nutrigap Library
//!
//! Nutrient-gap food recommendation engine.
//! Resolves per-user nutrient requirements, aggregates logged intake,
//! computes shortfalls, and ranks a food catalog by cosine similarity.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod logger;
pub mod storage;
