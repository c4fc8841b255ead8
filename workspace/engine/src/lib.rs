//! Forecast-dashboard engine: pure data transformations behind the UI.
//!
//! Two cooperating pieces: the chart reconciler ([`chart`]) merges the
//! prediction API's sparse series into one date-ordered display sequence,
//! and the sensitivity model ([`simulate`]) perturbs a baseline forecast
//! under user-supplied feature overrides. Both are pure and synchronous;
//! the frontend invokes them from event handlers.

pub mod chart;
pub mod error;
pub mod features;
pub mod scenario;
pub mod simulate;

pub use chart::{DayRole, TimePoint, apply_simulation, apply_uniform_shift, model_accuracy, reconcile};
pub use error::{EngineError, Result};
pub use features::{Direction, FEATURE_TABLE, FeatureDef};
pub use scenario::Scenario;
pub use simulate::{FeatureImpact, SimulationResult, simulate};
