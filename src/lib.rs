//! Cartas CLI Library
//!
//! 手紙アーカイブのカタログを端末で閲覧・保守する。

pub mod browse;
pub mod catalog;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod stats;
