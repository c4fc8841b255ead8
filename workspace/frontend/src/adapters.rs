//! View models for the explanation and metric sections, plus the adapters
//! that shape API responses into them. The mock generators in
//! [`crate::mock_data`] produce the same types, so templates never care
//! where a section's data came from.

use common::{ExplanationDto, ImpactNewsDto, Impact, MarketMetricDto};

/// Bar colors cycled through the feature-importance panel.
const FACTOR_COLORS: &[&str] = &[
    "bg-emerald-500",
    "bg-indigo-500",
    "bg-amber-500",
    "bg-rose-500",
    "bg-purple-500",
];

/// One bar of the feature-importance panel.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyFactor {
    pub label: String,
    pub group: String,
    /// Contribution in percent, 0-100.
    pub val: u32,
    pub desc: String,
    pub color: &'static str,
}

/// The reasoning-report section: executive summary plus cited news.
#[derive(Debug, Clone, PartialEq)]
pub struct Reasoning {
    pub summary: String,
    pub impact_news: Vec<ImpactNewsDto>,
    pub llm_model: Option<String>,
}

/// One card of the market-indicator grid.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricView {
    pub icon: &'static str,
    pub label: String,
    pub value: String,
    pub trend: f64,
    pub sub: &'static str,
    pub impact: Impact,
    pub group: &'static str,
}

/// Display metadata for the known metric ids. The API only carries the
/// numeric value and label; icon, unit formatting and grouping are a
/// presentation concern.
struct MetricMeta {
    id: &'static str,
    icon: &'static str,
    sub: &'static str,
    group: &'static str,
    format: fn(f64) -> String,
}

const METRIC_META: &[MetricMeta] = &[
    MetricMeta {
        id: "net_long",
        icon: "fas fa-scale-balanced",
        sub: "Contracts",
        group: "Sentiment",
        format: |v| format!("{:.1}K", v / 1000.0),
    },
    MetricMeta {
        id: "open_interest",
        icon: "fas fa-layer-group",
        sub: "Total Vol",
        group: "Liquidity",
        format: |v| format!("{:.1}M", v / 1_000_000.0),
    },
    MetricMeta {
        id: "wti",
        icon: "fas fa-gas-pump",
        sub: "Energy Cost",
        group: "Macro",
        format: |v| format!("${:.2}", v),
    },
    MetricMeta {
        id: "dxy",
        icon: "fas fa-dollar-sign",
        sub: "DXY",
        group: "Macro",
        format: |v| format!("{:.1}", v),
    },
    MetricMeta {
        id: "ethanol_prod",
        icon: "fas fa-flask",
        sub: "Barrels/Day",
        group: "Demand",
        format: |v| format!("{:.2}M", v),
    },
    MetricMeta {
        id: "baltic_dry",
        icon: "fas fa-anchor",
        sub: "Freight Cost",
        group: "Logistics",
        format: |v| format!("{:.0}", v),
    },
    MetricMeta {
        id: "brazil_rain",
        icon: "fas fa-droplet",
        sub: "Mato Grosso",
        group: "Weather",
        format: |v| format!("{:.1}mm", v),
    },
    MetricMeta {
        id: "crop_condition",
        icon: "fas fa-gauge",
        sub: "Good/Excl.",
        group: "Quality",
        format: |v| format!("{:.0}%", v),
    },
];

/// Shapes explanation top-factors into the importance panel's bars.
/// Returns `None` when the explanation carries no ranking, so the caller
/// can fall back to generated content.
pub fn adapt_key_factors(explanation: &ExplanationDto) -> Option<Vec<KeyFactor>> {
    if explanation.top_factors.is_empty() {
        return None;
    }

    let factors = explanation
        .top_factors
        .iter()
        .take(5)
        .enumerate()
        .map(|(i, factor)| KeyFactor {
            label: factor.name.clone(),
            group: factor.category.clone(),
            val: (factor.ratio * 100.0).round().clamp(0.0, 100.0) as u32,
            desc: format!("Contribution: {:.1}%", factor.ratio * 100.0),
            color: FACTOR_COLORS[i % FACTOR_COLORS.len()],
        })
        .collect();
    Some(factors)
}

/// Shapes an explanation into the reasoning-report section. An empty
/// content body counts as "no explanation".
pub fn adapt_reasoning(explanation: &ExplanationDto) -> Option<Reasoning> {
    if explanation.content.is_empty() {
        return None;
    }
    Some(Reasoning {
        summary: explanation.content.clone(),
        impact_news: explanation.impact_news.clone(),
        llm_model: explanation.llm_model.clone(),
    })
}

/// Shapes a metric row into its card, attaching presentation metadata by
/// metric id. Unknown ids still render with generic chrome.
pub fn adapt_metric(metric: &MarketMetricDto) -> MetricView {
    let meta = METRIC_META.iter().find(|m| m.id == metric.metric_id);
    match meta {
        Some(meta) => MetricView {
            icon: meta.icon,
            label: metric.label.clone(),
            value: (meta.format)(metric.numeric_value),
            trend: metric.trend,
            sub: meta.sub,
            impact: metric.impact,
            group: meta.group,
        },
        None => MetricView {
            icon: "fas fa-chart-line",
            label: metric.label.clone(),
            value: format!("{:.2}", metric.numeric_value),
            trend: metric.trend,
            sub: "",
            impact: metric.impact,
            group: "Other",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::TopFactorDto;

    fn explanation(factors: Vec<TopFactorDto>, content: &str) -> ExplanationDto {
        ExplanationDto {
            content: content.to_string(),
            impact_news: Vec::new(),
            top_factors: factors,
            llm_model: Some("tft-explainer-v2".to_string()),
        }
    }

    #[test]
    fn key_factors_come_from_the_ranking() {
        let dto = explanation(
            vec![
                TopFactorDto {
                    name: "RSI (14) & Momentum".to_string(),
                    category: "Oscillators".to_string(),
                    ratio: 0.85,
                },
                TopFactorDto {
                    name: "WTI Crude Oil".to_string(),
                    category: "Exogenous Vars".to_string(),
                    ratio: 0.45,
                },
            ],
            "summary",
        );

        let factors = adapt_key_factors(&dto).unwrap();
        assert_eq!(factors.len(), 2);
        assert_eq!(factors[0].val, 85);
        assert_eq!(factors[0].group, "Oscillators");
        assert_eq!(factors[1].val, 45);
    }

    #[test]
    fn empty_ranking_yields_none() {
        let dto = explanation(Vec::new(), "summary");
        assert!(adapt_key_factors(&dto).is_none());
    }

    #[test]
    fn reasoning_requires_content() {
        assert!(adapt_reasoning(&explanation(Vec::new(), "")).is_none());
        let reasoning = adapt_reasoning(&explanation(Vec::new(), "markets are up")).unwrap();
        assert_eq!(reasoning.summary, "markets are up");
        assert_eq!(reasoning.llm_model.as_deref(), Some("tft-explainer-v2"));
    }

    #[test]
    fn metric_formatting_follows_metric_id() {
        let metric = MarketMetricDto {
            metric_id: "wti".to_string(),
            label: "WTI Crude Oil".to_string(),
            numeric_value: 75.5,
            trend: 3.2,
            impact: Impact::High,
        };
        let view = adapt_metric(&metric);
        assert_eq!(view.value, "$75.50");
        assert_eq!(view.group, "Macro");

        let metric = MarketMetricDto {
            metric_id: "mystery".to_string(),
            label: "Mystery".to_string(),
            numeric_value: 1.5,
            trend: 0.0,
            impact: Impact::Low,
        };
        assert_eq!(adapt_metric(&metric).group, "Other");
    }
}
