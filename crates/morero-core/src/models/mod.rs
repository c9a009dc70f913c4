//! Data models for scenarios, stages and scoring results.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so the data structures stay free of
//! presentation logic.
//!
//! # Model Overview
//!
//! - [`catalog`]: the fixed enumerations ([`StageKind`], [`RiskFactor`],
//!   [`DurationUnit`])
//! - [`stage`]: [`StageDraft`] (editable, fields may be blank) and [`Stage`]
//!   (validated, ready to score)
//! - [`scenario`]: [`Scenario`], the immutable snapshot handed to scoring
//! - [`result`]: [`StageResult`], [`RiskLevel`] and [`Assessment`]
//! - [`requests`]: [`StageUpdate`], a typed single-field edit
//!
//! # Examples
//!
//! ```rust
//! use morero_core::models::{
//!     DurationUnit, RiskFactor, Stage, StageDuration, StageId, StageKind,
//! };
//!
//! let stage = Stage {
//!     id: StageId(1),
//!     name: StageKind::Foundation,
//!     duration: StageDuration::new(6.0).unwrap(),
//!     unit: DurationUnit::Weeks,
//!     start_date: "2025-03-01".parse().unwrap(),
//!     risks: [RiskFactor::BadGroundConditions].into_iter().collect(),
//! };
//! assert_eq!(stage.duration_label(), "6 weeks");
//! assert_eq!(stage.end_date().unwrap().to_string(), "2025-04-12");
//! ```

pub mod catalog;
pub mod requests;
pub mod result;
pub mod scenario;
pub mod stage;


pub use catalog::{DurationUnit, RiskFactor, StageKind};
pub use requests::StageUpdate;
pub use result::{Assessment, RiskLevel, StageResult};
pub use scenario::{Scenario, DEFAULT_PROJECT_NAME};
pub use stage::{Stage, StageDraft, StageDuration, StageId};
