//! Core library for MST-based flood-risk clustering over a synthetic grid

pub mod config;
pub mod data;
pub mod graph;
pub mod cluster;
pub mod engine;
pub mod storage;

pub use anyhow::{Result, anyhow};
