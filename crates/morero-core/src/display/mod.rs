//! Display formatting for models, reports and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! wrapper types add context such as "what just changed" or the full results
//! view. Everything is markdown, rendered by the CLI's terminal renderer or
//! returned verbatim from MCP tools.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (StageDraft,    │───▶│ & Reports       │───▶│    Output       │
//! │  Assessment)    │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for domain models
//! - [`report`]: The results view ([`AssessmentReport`])
//! - [`results`]: Operation result types (CreateResult, UpdateResult,
//!   DeleteResult)
//! - [`status`]: Success and notice messages (OperationStatus)
//! - [`catalog`]: The fixed enumerations ([`Catalog`])
//!
//! ## Usage Examples
//!
//! ```rust
//! use morero_core::{
//!     display::{OperationStatus, UpdateResult},
//!     models::{StageDraft, StageId},
//! };
//!
//! let update = UpdateResult::with_changes(
//!     StageDraft::blank(StageId(1)),
//!     vec!["Set duration to 4".to_string()],
//! );
//! assert!(update.to_string().contains("Changes made:"));
//!
//! let notice = OperationStatus::failure("Please enter a project name".to_string());
//! assert_eq!(notice.to_string(), "Error: Please enter a project name\n");
//! ```

pub mod catalog;
pub mod models;
pub mod report;
pub mod results;
pub mod status;

pub use catalog::Catalog;
pub use report::{AssessmentReport, RECOMMENDATIONS};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
