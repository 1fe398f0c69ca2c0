//! Paperscore Core Library
//!
//! Domain logic for scoring student papers: DOCX paragraph extraction,
//! rubric scoring, and CSV report output.

pub mod config;
pub mod docx;
pub mod error;
pub mod logging;
pub mod paper;
pub mod report;
