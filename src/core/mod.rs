//! Core domain models for color-selection survey analytics.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: survey rows, stimulus dimensions, experimental conditions, and
//! the derived score points the charts consume.

pub mod domain;
