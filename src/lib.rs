//! Hedgebook - paired surebet tracking with AI slip extraction.
//!
//! Surebets are placed as two opposing legs at different betting
//! houses. This crate records both legs of a pair, extracts slip data
//! from screenshots through a multimodal vision model, validates the
//! pair before it is committed, and derives the pair-level outcome
//! from the individual leg statuses.
//!
//! # Architecture
//!
//! Ports-and-adapters: pure domain logic behind trait seams, with the
//! infrastructure swappable underneath.
//!
//! - [`domain`] - bets, pair outcome resolution, metrics, validation
//! - [`extract`] - layered raw-text slip parser and its vocabulary
//! - [`port`] - trait seams: [`port::BetStore`], [`port::VisionModel`]
//! - [`adapter`] - HTTP surface, SQLite store, vision backends
//! - [`app`] - wiring and the aggregate pair report
//! - [`config`] - TOML configuration and logging setup
//! - [`error`] - error types for the crate
//!
//! # Features
//!
//! - `testkit` - scripted vision doubles and bet builders for tests
//! - `vision-integration` - tests that call real vision APIs

pub mod adapter;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod extract;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
