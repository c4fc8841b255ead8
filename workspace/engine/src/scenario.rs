//! Session-local what-if scenarios.
//!
//! A scenario is a named snapshot of a slider state and the simulation it
//! produced. Scenarios live in dashboard memory only; nothing survives a
//! page reload.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::simulate::SimulationResult;

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub id: u32,
    pub name: String,
    /// The full slider state at save time, keyed by feature key.
    pub overrides: HashMap<String, f64>,
    pub result: SimulationResult,
    pub saved_at: NaiveDateTime,
}

impl Scenario {
    pub fn new(
        id: u32,
        overrides: HashMap<String, f64>,
        result: SimulationResult,
        saved_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            name: format!("Scenario {}", id),
            overrides,
            result,
            saved_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features;
    use crate::simulate::simulate;

    #[test]
    fn scenarios_are_numbered_snapshots() {
        let mut values = features::default_values();
        values.insert("WTI".to_string(), 82.0);
        let result = simulate(&values, 452.30).unwrap();

        let saved_at = chrono::NaiveDate::from_ymd_opt(2026, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        let scenario = Scenario::new(3, values.clone(), result.clone(), saved_at);

        assert_eq!(scenario.name, "Scenario 3");
        assert_eq!(scenario.overrides, values);
        assert_eq!(scenario.result, result);
    }
}
