//! Navigational addresses between the builder and the results view.
//!
//! A submitted scenario travels inside the results address so results can be
//! reached again by direct link or back-navigation:
//!
//! ```text
//! /results?projectName=<base64url(name)>&stages=<base64url(json stage list)>
//! ```
//!
//! Both values use URL-safe base64 without padding, so the address never
//! needs further escaping. Resolving an address that does not carry a
//! usable stage list yields [`Route::Builder`], a silent redirect.

use std::fmt;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use log::{debug, info};

use crate::{
    builder::ScenarioBuilder,
    error::Result,
    models::{Scenario, Stage, DEFAULT_PROJECT_NAME},
};

/// Path of the scenario builder view.
pub const BUILDER_PATH: &str = "/predictive";

/// Path of the results view.
pub const RESULTS_PATH: &str = "/results";

const PROJECT_NAME_PARAM: &str = "projectName";
const STAGES_PARAM: &str = "stages";

/// Address of the results view for one submitted scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsAddress(String);

impl ResultsAddress {
    /// Encode a scenario into its results address.
    ///
    /// # Errors
    ///
    /// * `EstimatorError::Serialization` - the stage list could not be
    ///   serialized
    pub fn for_scenario(scenario: &Scenario) -> Result<Self> {
        let stages = serde_json::to_vec(&scenario.stages)?;
        Ok(Self(format!(
            "{RESULTS_PATH}?{PROJECT_NAME_PARAM}={}&{STAGES_PARAM}={}",
            URL_SAFE_NO_PAD.encode(scenario.project_name.as_bytes()),
            URL_SAFE_NO_PAD.encode(stages),
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResultsAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated scenario together with the address that reopens its results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub scenario: Scenario,
    pub address: ResultsAddress,
}

impl Submission {
    /// Validate a builder session and encode the snapshot.
    ///
    /// # Errors
    ///
    /// * `EstimatorError::EmptyProjectName` or
    ///   `EstimatorError::IncompleteStage` - the session is not ready
    /// * `EstimatorError::Serialization` - the stage list could not be encoded
    pub fn from_builder(builder: &ScenarioBuilder) -> Result<Self> {
        let scenario = builder.submit()?;
        let address = ResultsAddress::for_scenario(&scenario)?;
        Ok(Self { scenario, address })
    }
}

/// Where an address leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The scenario builder, either requested directly or as a redirect
    Builder,
    /// The results view for a decoded scenario
    Results(Scenario),
}

impl Route {
    /// Resolve an address. Anything that is not a results address with a
    /// decodable, non-empty stage list redirects to the builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use morero_core::address::Route;
    ///
    /// assert_eq!(Route::resolve("/results"), Route::Builder);
    /// assert_eq!(Route::resolve("/results?stages=%%%"), Route::Builder);
    /// assert_eq!(Route::resolve("/predictive"), Route::Builder);
    /// ```
    pub fn resolve(address: &str) -> Self {
        match decode_results(address) {
            Some(scenario) => {
                debug!(
                    "Resolved results address for '{}' with {} stage(s)",
                    scenario.project_name,
                    scenario.stages.len()
                );
                Route::Results(scenario)
            }
            None => {
                info!("Results address carries no usable scenario, redirecting to builder");
                Route::Builder
            }
        }
    }

    /// Path of this route.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Builder => BUILDER_PATH,
            Route::Results(_) => RESULTS_PATH,
        }
    }
}

fn decode_results(address: &str) -> Option<Scenario> {
    let address = address.trim();
    let (path, query) = address.split_once('?').unwrap_or((address, ""));
    if path.trim_end_matches('/') != RESULTS_PATH {
        return None;
    }

    let mut project_name = None;
    let mut stages = None;
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            PROJECT_NAME_PARAM => project_name = Some(value),
            STAGES_PARAM => stages = Some(value),
            _ => {}
        }
    }

    let stages = decode_stages(stages?)?;
    let project_name = project_name
        .and_then(decode_text)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());

    Some(Scenario {
        project_name,
        stages,
    })
}

fn decode_text(value: &str) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
    String::from_utf8(bytes).ok()
}

fn decode_stages(value: &str) -> Option<Vec<Stage>> {
    let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
    let stages: Vec<Stage> = serde_json::from_slice(&bytes).ok()?;
    if stages.is_empty() {
        None
    } else {
        Some(stages)
    }
}
