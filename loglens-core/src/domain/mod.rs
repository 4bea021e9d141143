//! Domain types owned by the log-analysis service

pub mod log;
