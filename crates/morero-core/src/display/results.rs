//! Result wrapper types for displaying operation outcomes.
//!
//! These wrappers format the outcome of stage edits with a short
//! confirmation line followed by the affected stage.

use std::fmt;

use crate::{address::Submission, models::StageDraft};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use morero_core::{
///     display::CreateResult,
///     models::{StageDraft, StageId},
/// };
///
/// let result = CreateResult::new(StageDraft::blank(StageId(2)));
/// assert!(result.to_string().starts_with("Added stage with ID: 2"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<StageDraft> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added stage with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with the
/// list of changes that were applied.
///
/// # Examples
///
/// ```rust
/// use morero_core::{
///     display::UpdateResult,
///     models::{StageDraft, StageId},
/// };
///
/// let result = UpdateResult::with_changes(
///     StageDraft::blank(StageId(1)),
///     vec!["Set unit to 'weeks'".to_string()],
/// );
/// let output = result.to_string();
/// assert!(output.contains("Changes made:"));
/// assert!(output.contains("- Set unit to 'weeks'"));
/// ```
#[derive(Debug)]
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<StageDraft> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated stage with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
#[derive(Debug)]
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<StageDraft> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resource.name {
            Some(name) => writeln!(f, "Removed stage '{name}' (ID: {})", self.resource.id),
            None => writeln!(f, "Removed stage (ID: {})", self.resource.id),
        }
    }
}

impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Submitted '{}' with {} stage(s)",
            self.scenario.project_name,
            self.scenario.len()
        )?;
        writeln!(f)?;
        writeln!(f, "Results address:")?;
        writeln!(f)?;
        writeln!(f, "```")?;
        writeln!(f, "{}", self.address)?;
        writeln!(f, "```")
    }
}
