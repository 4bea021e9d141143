//! Loglens Core
//!
//! Core types shared by the loglens client crates.
//!
//! This crate contains:
//! - Domain types: the entities owned by the log-analysis service (ErrorLog records)
//! - DTOs: request/response wire shapes for talking to the service

pub mod domain;
pub mod dto;
