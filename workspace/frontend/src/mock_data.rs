//! Deterministic demo data used whenever the prediction API is
//! unavailable. Everything derived from a date is seeded by that date's
//! string key, so a given day always renders the same demo values: the
//! generator is created by [`SeededRng::from_key`] and passed explicitly,
//! never held in shared state.

use chrono::{Duration, NaiveDate};
use common::dates::to_api_date;
use common::{
    HistoricalPriceDto, Impact, ImpactNewsDto, NewsItemDto, PredictionDto, PredictionsResponse,
    Sentiment,
};

use crate::adapters::{KeyFactor, MetricView, Reasoning};

/// Hashes a date key into a PRNG seed (32-bit string hash, absolute value).
pub fn date_seed(key: &str) -> u32 {
    let mut hash: i32 = 0;
    for byte in key.bytes() {
        hash = hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(byte as i32);
    }
    hash.unsigned_abs()
}

/// Small linear-congruential generator. Reproducible for a given key, good
/// enough for demo content, and deliberately not a statistical RNG.
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn from_key(key: &str) -> Self {
        Self { state: date_seed(key) }
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = ((self.state as u64 * 9301 + 49297) % 233280) as u32;
        self.state as f64 / 233280.0
    }

    /// Next value in `[lo, hi)`.
    pub fn next_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generates a demo prediction window shaped like the live API response:
/// 30 days of observed prices (with retrospective model estimates) behind
/// `today`, today itself, and 60 forecast days with widening confidence
/// bounds. Runs through the same reconciler as live data.
pub fn mock_chart_inputs(today: NaiveDate) -> PredictionsResponse {
    let mut rng = SeededRng::from_key(&to_api_date(today));
    let start = today - Duration::days(30);

    let mut predictions = Vec::new();
    let mut historical_prices = Vec::new();
    let mut price = 450.0;

    for offset in 0..=90i64 {
        let date = start + Duration::days(offset);
        let volatility = if date > today { 8.0 } else { 5.0 };
        price += (rng.next_f64() - 0.48) * volatility;

        if date > today {
            let uncertainty = (offset - 30) as f64 * 0.8 + 5.0;
            predictions.push(PredictionDto {
                target_date: date,
                price_pred: round2(price),
                conf_upper: Some(round2(price + uncertainty)),
                conf_lower: Some(round2(price - uncertainty)),
            });
        } else {
            historical_prices.push(HistoricalPriceDto {
                date,
                actual_price: round2(price),
            });
            // Today's estimate matches the observation; past days get a
            // retrospective estimate a few dollars off so the error-rate
            // track has something to show.
            let estimate = if date == today {
                price
            } else {
                price + (rng.next_f64() - 0.5) * 6.0
            };
            predictions.push(PredictionDto {
                target_date: date,
                price_pred: round2(estimate),
                conf_upper: None,
                conf_lower: None,
            });
        }
    }

    PredictionsResponse {
        predictions,
        historical_prices,
    }
}

/// Demo news feed. Recency labels and dates count back from `today`.
pub fn mock_news(today: NaiveDate) -> Vec<NewsItemDto> {
    let entries: &[(&str, &str, Sentiment, &str)] = &[
        (
            "WSJ",
            "Argentine port strike delays grain shipments",
            Sentiment::Pos,
            "Dock workers at Argentina's main grain terminals walked out, slowing vessel loading and tightening near-term export supply.",
        ),
        (
            "CNBC",
            "China expands corn imports for strategic reserves",
            Sentiment::Pos,
            "Beijing announced a sharp increase in corn purchases for state reserves, lifting global demand expectations.",
        ),
        (
            "FT",
            "Higher ethanol blending mandate under review",
            Sentiment::Pos,
            "The EPA is weighing a higher mandatory ethanol blend rate, which would add to industrial corn demand.",
        ),
        (
            "Reuters",
            "Black Sea grain corridor extension remains uncertain",
            Sentiment::Neg,
            "Talks over extending the export corridor have stalled; an expiry would disrupt global grain flows.",
        ),
        (
            "Bloomberg",
            "Brazil raises corn harvest outlook",
            Sentiment::Pos,
            "Brazil's agriculture ministry lifted its production estimate on favorable weather across the center-west.",
        ),
        (
            "WSJ",
            "Midwest heat warning raises crop stress concerns",
            Sentiment::Neg,
            "A heat dome over the US Midwest threatens pollination-stage corn, putting yield projections at risk.",
        ),
        (
            "CNBC",
            "Ethanol output surge lifts corn demand",
            Sentiment::Pos,
            "Weekly ethanol production hit a seasonal high as energy prices keep biofuel margins attractive.",
        ),
        (
            "Reuters",
            "Russian grain exports expand global supply",
            Sentiment::Neg,
            "Record Russian wheat and corn shipments are adding competitive pressure to export prices.",
        ),
        (
            "FT",
            "India announces corn export restrictions",
            Sentiment::Pos,
            "New Delhi moved to restrict corn exports to stabilize domestic feed prices, trimming world supply.",
        ),
        (
            "Bloomberg",
            "CFTC reviews tighter limits on corn futures speculation",
            Sentiment::Neg,
            "Proposed position limits could reduce speculative liquidity in the corn futures complex.",
        ),
        (
            "WSJ",
            "Chinese corn stockpiles shrink, import needs grow",
            Sentiment::Pos,
            "Falling state inventories point to another season of heavy Chinese buying on the world market.",
        ),
        (
            "CNBC",
            "Biofuel policy shift brightens corn demand outlook",
            Sentiment::Pos,
            "Renewed policy support for biofuels is expected to underpin industrial corn usage into next year.",
        ),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(i, (source, title, sentiment, content))| {
            let days_ago = i as i64;
            let time = if days_ago == 0 {
                "12h ago".to_string()
            } else {
                format!("{}d ago", days_ago)
            };
            NewsItemDto {
                id: format!("n{:03}", i + 1),
                source: source.to_string(),
                title: title.to_string(),
                sentiment: *sentiment,
                time,
                date: today - Duration::days(days_ago),
                content: Some(content.to_string()),
            }
        })
        .collect()
}

/// Demo market-indicator grid (8 cards).
pub fn mock_market_metrics() -> Vec<MetricView> {
    vec![
        MetricView {
            icon: "fas fa-scale-balanced",
            label: "Net Long".to_string(),
            value: "15.4K".to_string(),
            trend: 5.2,
            sub: "Contracts",
            impact: Impact::High,
            group: "Sentiment",
        },
        MetricView {
            icon: "fas fa-layer-group",
            label: "Open Interest".to_string(),
            value: "1.2M".to_string(),
            trend: 1.8,
            sub: "Total Vol",
            impact: Impact::Medium,
            group: "Liquidity",
        },
        MetricView {
            icon: "fas fa-gas-pump",
            label: "WTI Crude Oil".to_string(),
            value: "$75.50".to_string(),
            trend: 3.2,
            sub: "Energy Cost",
            impact: Impact::High,
            group: "Macro",
        },
        MetricView {
            icon: "fas fa-dollar-sign",
            label: "Dollar Index".to_string(),
            value: "104.2".to_string(),
            trend: -0.5,
            sub: "DXY",
            impact: Impact::Medium,
            group: "Macro",
        },
        MetricView {
            icon: "fas fa-flask",
            label: "Ethanol Prod.".to_string(),
            value: "1.05M".to_string(),
            trend: 2.1,
            sub: "Barrels/Day",
            impact: Impact::High,
            group: "Demand",
        },
        MetricView {
            icon: "fas fa-anchor",
            label: "Baltic Dry Index".to_string(),
            value: "1450".to_string(),
            trend: -4.5,
            sub: "Freight Cost",
            impact: Impact::Low,
            group: "Logistics",
        },
        MetricView {
            icon: "fas fa-droplet",
            label: "Brazil Rain".to_string(),
            value: "12.4mm".to_string(),
            trend: -15.4,
            sub: "Mato Grosso",
            impact: Impact::High,
            group: "Weather",
        },
        MetricView {
            icon: "fas fa-gauge",
            label: "Crop Condition".to_string(),
            value: "68%".to_string(),
            trend: -2.0,
            sub: "Good/Excl.",
            impact: Impact::High,
            group: "Quality",
        },
    ]
}

/// Demo feature-importance bars for a date key, sorted by contribution.
pub fn mock_key_factors(date_key: &str) -> Vec<KeyFactor> {
    let mut rng = SeededRng::from_key(date_key);

    let base: &[(&str, &str, &str, [&str; 3])] = &[
        (
            "RSI (14) & Momentum",
            "Oscillators",
            "bg-emerald-500",
            [
                "Overbought territory entry signal",
                "Oversold territory entry signal",
                "Holding in neutral range",
            ],
        ),
        (
            "MA (20, 60)",
            "Moving Averages",
            "bg-indigo-500",
            [
                "Short/mid-term golden cross",
                "Short/mid-term death cross",
                "Awaiting moving-average crossover",
            ],
        ),
        (
            "Open/Close Volatility",
            "Raw Price (HLC)",
            "bg-amber-500",
            [
                "Intraday volatility expanding",
                "Intraday volatility contracting",
                "Volatility within normal range",
            ],
        ),
        (
            "WTI Crude Oil",
            "Exogenous Vars",
            "bg-rose-500",
            [
                "Energy cost pressure rising",
                "Energy cost pressure easing",
                "Energy costs stable",
            ],
        ),
    ];

    let mut factors: Vec<KeyFactor> = base
        .iter()
        .map(|(label, group, color, descriptions)| {
            let val = (30.0 + rng.next_f64() * 60.0).floor() as u32;
            let desc_index = (rng.next_f64() * descriptions.len() as f64).floor() as usize;
            KeyFactor {
                label: label.to_string(),
                group: group.to_string(),
                val,
                desc: descriptions[desc_index.min(descriptions.len() - 1)].to_string(),
                color,
            }
        })
        .collect();

    factors.sort_by(|a, b| b.val.cmp(&a.val));
    factors
}

/// Demo reasoning report for a date key: one of four summaries plus three
/// distinct high-impact news analyses with re-rolled impact scores.
pub fn mock_reasoning(date_key: &str) -> Reasoning {
    let mut rng = SeededRng::from_key(date_key);

    let summaries = [
        "The market shows a golden cross on the moving averages alongside overbought oscillator readings. The TFT model weights the short-term trend factor at 78% and projects continued upside.",
        "Technical indicators are sending mixed signals: moving averages hold an uptrend while oscillators have entered overbought territory. The TFT model weights volatility at 65% and flags a possible short-term correction.",
        "Momentum is firmly positive. Every major technical indicator points higher and the exogenous variables are supportive. The TFT model weights the trend factor at 85% and projects a sustained advance.",
        "Selling pressure is building. The moving averages have rolled over and the oscillators confirm the weakness. The TFT model weights exogenous variables at 70% and sees room for further downside.",
    ];

    let news_templates: &[(&str, &str, &str)] = &[
        (
            "Bloomberg",
            "Surprise Midwest heat warning cuts yield outlook",
            "Supply-shock concern is feeding directly into futures buying.",
        ),
        (
            "CFTC Report",
            "Hedge funds extend net-long corn position for a second week",
            "Institutional money is leaning to the upside, reinforcing the trend.",
        ),
        (
            "Reuters",
            "Fed signals a rate pause; dollar index softens",
            "A weaker dollar restores export competitiveness for US grain.",
        ),
        (
            "WSJ",
            "Deepening Brazil drought clouds corn production",
            "Production risk in a major exporter is amplifying global supply uncertainty.",
        ),
        (
            "CNBC",
            "Ethanol demand surge pressures corn prices higher",
            "Biofuel policy tailwinds are translating into industrial demand growth.",
        ),
    ];

    let summary_index = (rng.next_f64() * summaries.len() as f64).floor() as usize;

    let mut selected: Vec<ImpactNewsDto> = Vec::new();
    let mut used = [false; 5];
    while selected.len() < 3 {
        let index = (rng.next_f64() * news_templates.len() as f64).floor() as usize;
        let index = index.min(news_templates.len() - 1);
        if used[index] {
            continue;
        }
        used[index] = true;
        let (source, title, analysis) = news_templates[index];
        selected.push(ImpactNewsDto {
            source: source.to_string(),
            title: title.to_string(),
            impact: (70.0 + rng.next_f64() * 25.0).floor() as u32,
            analysis: analysis.to_string(),
        });
    }
    selected.sort_by(|a, b| b.impact.cmp(&a.impact));

    Reasoning {
        summary: summaries[summary_index.min(summaries.len() - 1)].to_string(),
        impact_news: selected,
        llm_model: None,
    }
}

/// One historical analog period in the similar-patterns card.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarPattern {
    pub rank: u32,
    pub similarity: f64,
    pub period_start: &'static str,
    pub period_end: &'static str,
    pub price_start: f64,
    pub price_end: f64,
    pub price_change: f64,
    pub outcome_after_60_days: f64,
    pub key_factors: &'static [&'static str],
}

/// Demo analog periods resembling the current 30-day pattern.
pub fn mock_similar_patterns() -> Vec<SimilarPattern> {
    vec![
        SimilarPattern {
            rank: 1,
            similarity: 87.2,
            period_start: "2024-07-01",
            period_end: "2024-07-30",
            price_start: 420.50,
            price_end: 445.20,
            price_change: 5.87,
            outcome_after_60_days: 8.2,
            key_factors: &["Heat warning", "Ethanol demand surge", "Net-long build-up"],
        },
        SimilarPattern {
            rank: 2,
            similarity: 82.5,
            period_start: "2023-03-15",
            period_end: "2023-04-14",
            price_start: 435.80,
            price_end: 452.30,
            price_change: 3.78,
            outcome_after_60_days: 6.5,
            key_factors: &["Rate pause", "Weak dollar", "Deteriorating crop condition"],
        },
        SimilarPattern {
            rank: 3,
            similarity: 78.9,
            period_start: "2022-09-10",
            period_end: "2022-10-10",
            price_start: 410.20,
            price_end: 428.60,
            price_change: 4.49,
            outcome_after_60_days: 5.3,
            key_factors: &["Supply-chain stress", "Export restrictions", "Institutional buying"],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn seed_is_stable_and_key_sensitive() {
        assert_eq!(date_seed("2026-01-15"), date_seed("2026-01-15"));
        assert_ne!(date_seed("2026-01-15"), date_seed("2026-01-16"));
    }

    #[test]
    fn rng_values_stay_in_unit_interval() {
        let mut rng = SeededRng::from_key("2026-01-15");
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn chart_inputs_cover_the_full_window() {
        let today = day(2026, 1, 15);
        let inputs = mock_chart_inputs(today);

        // 30 past days + today observed; every day has a prediction.
        assert_eq!(inputs.historical_prices.len(), 31);
        assert_eq!(inputs.predictions.len(), 91);

        let future: Vec<_> = inputs
            .predictions
            .iter()
            .filter(|p| p.target_date > today)
            .collect();
        assert_eq!(future.len(), 60);
        for p in future {
            let upper = p.conf_upper.unwrap();
            let lower = p.conf_lower.unwrap();
            assert!(lower <= p.price_pred && p.price_pred <= upper);
        }
    }

    #[test]
    fn chart_inputs_are_deterministic_per_day() {
        let today = day(2026, 1, 15);
        assert_eq!(mock_chart_inputs(today), mock_chart_inputs(today));
        assert_ne!(
            mock_chart_inputs(today),
            mock_chart_inputs(day(2026, 1, 16))
        );
    }

    #[test]
    fn todays_mock_estimate_matches_the_observation() {
        let today = day(2026, 1, 15);
        let inputs = mock_chart_inputs(today);
        let observed = inputs
            .historical_prices
            .iter()
            .find(|p| p.date == today)
            .unwrap();
        let predicted = inputs
            .predictions
            .iter()
            .find(|p| p.target_date == today)
            .unwrap();
        assert_eq!(observed.actual_price, predicted.price_pred);
    }

    #[test]
    fn key_factors_are_seeded_and_sorted() {
        let first = mock_key_factors("1/30");
        let second = mock_key_factors("1/30");
        assert_eq!(first, second);

        for factor in &first {
            assert!((30..=90).contains(&factor.val));
        }
        for pair in first.windows(2) {
            assert!(pair[0].val >= pair[1].val);
        }
    }

    #[test]
    fn reasoning_picks_three_distinct_news_sorted_by_impact() {
        let reasoning = mock_reasoning("2/14");
        assert_eq!(reasoning.impact_news.len(), 3);

        let mut titles: Vec<_> = reasoning.impact_news.iter().map(|n| &n.title).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), 3);

        for pair in reasoning.impact_news.windows(2) {
            assert!(pair[0].impact >= pair[1].impact);
        }
        for news in &reasoning.impact_news {
            assert!((70..=95).contains(&news.impact));
        }
        assert_eq!(mock_reasoning("2/14"), reasoning);
    }

    #[test]
    fn news_feed_counts_back_from_today() {
        let today = day(2026, 1, 29);
        let news = mock_news(today);
        assert_eq!(news.len(), 12);
        assert_eq!(news[0].date, today);
        assert_eq!(news[3].date, today - Duration::days(3));
        assert_eq!(news[1].time, "1d ago");
    }
}
