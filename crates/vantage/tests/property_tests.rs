//! Property-based tests for the plan negotiation invariants.
//!
//! These verify that the deterministic layer holds its guarantees for all
//! inputs:
//! 1. **No panics**: classifiers, extraction, and filtering never crash
//! 2. **Determinism**: same input always produces same output
//! 3. **Validation soundness**: surviving plan entries only reference
//!    existing, type-compatible columns
//! 4. **Fallback non-emptiness**: any dataset with at least one column
//!    yields a usable fallback plan

use proptest::prelude::*;

use vantage::analyst::{
    classify_intent, fallback_plan, filter_charts, filter_kpis, needs_clarification,
};
use vantage::llm::extract_json_object;
use vantage::{
    Aggregation, ChartSpec, ChartType, Dataset, DatasetSummary, KpiSpec,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Column names: some that exist in the test dataset, some that don't.
fn column_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Age".to_string()),
        Just("Fare".to_string()),
        Just("Sex".to_string()),
        Just("Cabin".to_string()),
        "[A-Za-z_]{1,12}",
    ]
}

fn chart_type() -> impl Strategy<Value = ChartType> {
    prop_oneof![
        Just(ChartType::Bar),
        Just(ChartType::Line),
        Just(ChartType::Scatter),
        Just(ChartType::Pie),
        Just(ChartType::Histogram),
    ]
}

fn aggregation() -> impl Strategy<Value = Aggregation> {
    prop_oneof![
        Just(Aggregation::Count),
        Just(Aggregation::Sum),
        Just(Aggregation::Mean),
    ]
}

fn chart_spec() -> impl Strategy<Value = ChartSpec> {
    (chart_type(), column_name(), column_name())
        .prop_map(|(t, x, y)| ChartSpec::new(t, x, y))
}

fn kpi_spec() -> impl Strategy<Value = KpiSpec> {
    (column_name(), aggregation()).prop_map(|(col, agg)| KpiSpec::new("kpi", col, agg))
}

/// A dataset with 1-5 columns of random kinds and 1-8 rows.
fn dataset() -> impl Strategy<Value = Dataset> {
    (prop::collection::vec(any::<bool>(), 1..=5), 1usize..=8).prop_map(|(kinds, rows)| {
        let headers: Vec<String> = (0..kinds.len()).map(|i| format!("col_{}", i)).collect();
        let rows: Vec<Vec<String>> = (0..rows)
            .map(|r| {
                kinds
                    .iter()
                    .map(|&numeric| {
                        if numeric {
                            format!("{}", r * 3 + 1)
                        } else {
                            format!("v{}", r % 3)
                        }
                    })
                    .collect()
            })
            .collect();
        Dataset::new(headers, rows)
    })
}

fn titanic_summary() -> DatasetSummary {
    DatasetSummary::compute(&Dataset::new(
        vec!["Age".into(), "Fare".into(), "Sex".into()],
        vec![
            vec!["22".into(), "7.25".into(), "male".into()],
            vec!["38".into(), "71.83".into(), "female".into()],
        ],
    ))
}

// =============================================================================
// Validation Soundness
// =============================================================================

proptest! {
    #[test]
    fn prop_surviving_charts_reference_real_columns(
        charts in prop::collection::vec(chart_spec(), 0..12)
    ) {
        let summary = titanic_summary();
        for chart in filter_charts(charts, &summary) {
            prop_assert!(summary.has_column(&chart.x_axis));
            prop_assert!(summary.has_column(&chart.y_axis));
        }
    }

    #[test]
    fn prop_surviving_kpis_are_type_safe(
        kpis in prop::collection::vec(kpi_spec(), 0..12)
    ) {
        let summary = titanic_summary();
        for kpi in filter_kpis(kpis, &summary) {
            prop_assert!(summary.has_column(&kpi.column));
            if kpi.aggregation != Aggregation::Count {
                prop_assert!(summary.is_numeric(&kpi.column));
            }
        }
    }

    #[test]
    fn prop_filtering_is_deterministic(
        charts in prop::collection::vec(chart_spec(), 0..8)
    ) {
        let summary = titanic_summary();
        let once = filter_charts(charts.clone(), &summary);
        let twice = filter_charts(charts, &summary);
        prop_assert_eq!(once, twice);
    }
}

// =============================================================================
// Fallback Planner
// =============================================================================

proptest! {
    #[test]
    fn prop_fallback_is_nonempty_for_any_columns(ds in dataset()) {
        let summary = DatasetSummary::compute(&ds);
        let plan = fallback_plan(&summary);

        prop_assert!(!plan.is_empty());
        prop_assert_eq!(plan.confidence, 0.0);
    }

    #[test]
    fn prop_fallback_references_only_real_columns(ds in dataset()) {
        let summary = DatasetSummary::compute(&ds);
        let plan = fallback_plan(&summary);

        for chart in &plan.visualizations {
            prop_assert!(summary.has_column(&chart.x_axis));
            prop_assert!(summary.has_column(&chart.y_axis));
        }
        for kpi in &plan.kpis {
            prop_assert!(summary.is_numeric(&kpi.column));
        }
    }
}

// =============================================================================
// Classifier and Extraction Totality
// =============================================================================

proptest! {
    #[test]
    fn prop_classifier_is_total_and_deterministic(message in ".{0,200}") {
        let first = classify_intent(&message);
        let second = classify_intent(&message);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_vagueness_detector_never_panics(message in ".{0,200}") {
        let first = needs_clarification(&message);
        let second = needs_clarification(&message);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_extraction_never_panics(text in ".{0,400}") {
        if let Some(span) = extract_json_object(&text) {
            prop_assert!(span.starts_with('{'), "span must start with an opening brace");
            prop_assert!(span.ends_with('}'), "span must end with a closing brace");
        }
    }

    #[test]
    fn prop_extraction_finds_embedded_objects(
        prefix in "[^{}\"\\\\`]{0,40}",
        suffix in "[^{}\"\\\\`]{0,40}"
    ) {
        let text = format!("{}{{\"a\": 1}}{}", prefix, suffix);
        let span = extract_json_object(&text);
        prop_assert_eq!(span, Some("{\"a\": 1}"));
    }
}
