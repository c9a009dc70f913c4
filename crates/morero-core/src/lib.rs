//! Core library for the Morero delay-risk estimator.
//!
//! This crate holds the scenario builder, the risk scoring engine, results
//! addresses and the delayed prediction run, together with the display types
//! that render them as markdown.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Reports and operation results
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use morero_core::{models::RiskFactor, scoring, ScenarioBuilder};
//!
//! let mut builder = ScenarioBuilder::sample();
//! let id = builder.stages()[0].id;
//! builder.toggle_risk(id, RiskFactor::RegulatoryApprovals)?;
//! builder.toggle_risk(id, RiskFactor::WeatherRisks)?;
//!
//! let scenario = builder.submit()?;
//! let assessment = scoring::assess(&scenario);
//! assert_eq!(assessment.results[0].risk, 55);
//! assert_eq!(assessment.results[0].notes, "Regulatory approvals, Weather risks");
//! # Ok::<(), morero_core::EstimatorError>(())
//! ```

pub mod address;
pub mod analysis;
pub mod builder;
pub mod display;
pub mod drafts;
pub mod error;
pub mod estimator;
pub mod handlers;
pub mod models;
pub mod params;
pub mod scoring;

// Re-export commonly used types
pub use address::{ResultsAddress, Route, Submission};
pub use analysis::{PendingPrediction, Predictor};
pub use builder::ScenarioBuilder;
pub use display::{
    AssessmentReport, Catalog, CreateResult, DeleteResult, OperationStatus, UpdateResult,
};
pub use error::{EstimatorError, Result};
pub use estimator::{Estimator, EstimatorBuilder};
pub use models::{
    Assessment, DurationUnit, RiskFactor, RiskLevel, Scenario, Stage, StageDraft, StageId,
    StageKind, StageResult, StageUpdate,
};
pub use params::{OpenResults, RenameProject, StageRef, ToggleRisk, UpdateStage};
