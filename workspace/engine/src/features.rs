//! Canonical market-feature table.
//!
//! This is the single source of truth for the what-if features: the slider
//! UI reads labels, bounds and steps from here, and the sensitivity model
//! reads defaults, sensitivities and correlation signs from the same rows.

use std::collections::HashMap;

/// Sign of a feature's correlation with the forecast price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Positive => 1.0,
            Direction::Negative => -1.0,
        }
    }
}

/// One row of the feature table.
///
/// `sensitivity` is the price change (in $) per unit of feature change,
/// as a non-negative magnitude; `direction` carries the sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureDef {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default_value: f64,
    pub sensitivity: f64,
    pub direction: Direction,
    /// Decimal places used when formatting the value for display.
    pub precision: usize,
}

impl FeatureDef {
    /// Formats a value of this feature for display, e.g. `$75.50`, `4.2%`.
    pub fn format_value(&self, value: f64) -> String {
        match self.unit {
            "$" => format!("${:.*}", self.precision, value),
            "%" => format!("{:.*}%", self.precision, value),
            _ => format!("{:.*}", self.precision, value),
        }
    }
}

/// The fixed feature set, in declaration order. Attribution ties are
/// broken by this order.
pub const FEATURE_TABLE: &[FeatureDef] = &[
    FeatureDef {
        key: "10Y_Yield",
        label: "10-Year Treasury Yield",
        unit: "%",
        min: 3.0,
        max: 6.0,
        step: 0.1,
        default_value: 4.2,
        sensitivity: 6.0,
        direction: Direction::Negative,
        precision: 1,
    },
    FeatureDef {
        key: "USD_Index",
        label: "Dollar Index (DXY)",
        unit: "",
        min: 100.0,
        max: 110.0,
        step: 0.1,
        default_value: 104.2,
        sensitivity: 0.6,
        direction: Direction::Negative,
        precision: 1,
    },
    FeatureDef {
        key: "WTI",
        label: "WTI Crude Oil",
        unit: "$",
        min: 60.0,
        max: 90.0,
        step: 0.5,
        default_value: 75.5,
        sensitivity: 0.8,
        direction: Direction::Positive,
        precision: 2,
    },
    FeatureDef {
        key: "PDSI",
        label: "Drought Index (PDSI)",
        unit: "",
        min: -6.0,
        max: 6.0,
        step: 0.1,
        default_value: -0.8,
        sensitivity: 9.0,
        direction: Direction::Negative,
        precision: 1,
    },
];

/// Looks up a feature definition by key.
pub fn feature(key: &str) -> Option<&'static FeatureDef> {
    FEATURE_TABLE.iter().find(|def| def.key == key)
}

/// The unperturbed slider state: every feature at its default value.
pub fn default_values() -> HashMap<String, f64> {
    FEATURE_TABLE
        .iter()
        .map(|def| (def.key.to_string(), def.default_value))
        .collect()
}

/// Filters a slider state down to the overrides that differ from their
/// defaults. This is the set sent to the remote simulation endpoint.
pub fn changed_overrides(values: &HashMap<String, f64>) -> HashMap<String, f64> {
    values
        .iter()
        .filter(|(key, value)| {
            feature(key).is_some_and(|def| **value != def.default_value)
        })
        .map(|(key, value)| (key.clone(), *value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_keys_are_unique() {
        let mut keys: Vec<_> = FEATURE_TABLE.iter().map(|def| def.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), FEATURE_TABLE.len());
    }

    #[test]
    fn defaults_lie_within_bounds() {
        for def in FEATURE_TABLE {
            assert!(
                def.min <= def.default_value && def.default_value <= def.max,
                "{} default out of bounds",
                def.key
            );
            assert!(def.step > 0.0, "{} step must be positive", def.key);
            assert!(def.sensitivity >= 0.0, "{} sensitivity is a magnitude", def.key);
        }
    }

    #[test]
    fn lookup_finds_known_keys_only() {
        assert!(feature("WTI").is_some());
        assert!(feature("10Y_Yield").is_some());
        assert!(feature("ETHANOL_PROD").is_none());
    }

    #[test]
    fn changed_overrides_drops_defaults_and_unknown_keys() {
        let mut values = default_values();
        values.insert("WTI".to_string(), 82.0);
        values.insert("BALTIC_DRY".to_string(), 1450.0);

        let changed = changed_overrides(&values);
        assert_eq!(changed.len(), 1);
        assert_eq!(changed.get("WTI"), Some(&82.0));
    }

    #[test]
    fn value_formatting_follows_unit() {
        assert_eq!(feature("WTI").unwrap().format_value(75.5), "$75.50");
        assert_eq!(feature("10Y_Yield").unwrap().format_value(4.2), "4.2%");
        assert_eq!(feature("USD_Index").unwrap().format_value(104.27), "104.3");
        assert_eq!(feature("PDSI").unwrap().format_value(-0.8), "-0.8");
    }
}
