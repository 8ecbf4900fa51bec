//! # ar_view - Autonomous Referee Field View
//!
//! Per-frame renderer that turns the tracking subsystem's current
//! estimates (raw vision percepts, particle-filter hypotheses and fused
//! object models) plus the rule engine's violation log into an annotated
//! 2D overlay of the playing field.
//!
//! ## Features
//! - Integer midpoint arc rasterizer for full and quadrant-limited circles
//! - Field geometry derived entirely from one set of dimension constants
//! - Per-frame aggregation of the fixed team x id roster into flat draw lists
//! - Time-windowed rule-violation overlay with per-event optional parts
//!
//! The renderer emits plain serializable [`render::Primitive`] values into
//! a [`render::Canvas`]; no graphics API is part of the contract. All
//! collaborator state is consumed through the [`filter::FilterView`] trait
//! and re-fetched on every render call.

// Draw routines mirror the collaborator's call surface
#![allow(clippy::too_many_arguments)]

pub mod error;
pub mod field;
pub mod filter;
pub mod fixtures;
pub mod model;
pub mod render;

pub use error::ViewError;
pub use filter::FilterView;
pub use render::{Canvas, FieldView, Primitive};
