//! Morris engine - Nine Men's Morris search core
//!
//! A move-search engine for Nine Men's Morris built from:
//! - an immutable 21-point board model with mill detection
//! - phase-dependent move generators (placement, slide-or-fly) with
//!   mill-capture branching
//! - three static evaluators of increasing sophistication
//! - minimax and alpha-beta tree search, guaranteed to agree on the
//!   chosen successor and value
//! - a file-in/file-out driver with a black-side color-flip wrapper

pub mod types;
pub mod board;
pub mod move_generator;
pub mod evaluation;
pub mod search;
pub mod driver;
