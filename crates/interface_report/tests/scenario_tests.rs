//! Integration tests for the demo scenario and its rendering

use interface_report::config::{OutputFormat, ReportConfig};
use interface_report::{render, run, DemoScenario, ScenarioOutcome};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_utils::assert_decimal_approx_eq;

fn default_outcome() -> ScenarioOutcome {
    run(&ReportConfig::default()).unwrap()
}

// ============================================================================
// Scenario Tests
// ============================================================================

mod scenario_tests {
    use super::*;

    #[test]
    fn test_stage_sequence() {
        let outcome = default_outcome();

        let titles: Vec<&str> = outcome.stages.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Initial position",
                "After deposits",
                "After withdrawals",
                "After 1 month(s)",
                "After 2 month(s)",
                "After 3 month(s)",
            ]
        );
    }

    #[test]
    fn test_totals_before_simulation() {
        let outcome = default_outcome();
        let totals: Vec<(Decimal, Decimal)> = outcome.stages[..3]
            .iter()
            .map(|s| (s.portfolios[0].total_invested, s.portfolios[1].total_invested))
            .collect();

        assert_eq!(
            totals,
            vec![
                (dec!(16000), dec!(32000)),
                (dec!(17500), dec!(35000)),
                (dec!(16500), dec!(33500)),
            ]
        );
    }

    #[test]
    fn test_first_simulated_month() {
        let outcome = default_outcome();
        let individual = &outcome.stages[3].portfolios[0];

        let balances: Vec<Decimal> = individual.holdings.iter().map(|h| h.balance).collect();
        assert_decimal_approx_eq(balances[0], dec!(6050), dec!(0.000001));
        assert_eq!(balances[1], dec!(3518));
        assert_decimal_approx_eq(balances[2], dec!(7058.33), dec!(0.01));
    }

    #[test]
    fn test_balances_never_negative() {
        let outcome = DemoScenario::new(24, 12).run().unwrap();

        for stage in &outcome.stages {
            for snapshot in &stage.portfolios {
                assert!(snapshot.holdings.iter().all(|h| h.balance >= Decimal::ZERO));
            }
        }
    }

    #[test]
    fn test_projections_cover_both_portfolios() {
        let outcome = default_outcome();

        assert_eq!(outcome.projections.len(), 2);
        assert_eq!(outcome.projections[0].client_name, "João Silva");
        assert_eq!(outcome.projections[1].client_name, "Empresa XYZ");
        for projection in &outcome.projections {
            assert_eq!(projection.months, 12);
            assert_eq!(projection.holdings.len(), 3);
        }
    }

    #[test]
    fn test_zero_horizon_projection_equals_current() {
        let outcome = DemoScenario::new(0, 0).run().unwrap();

        assert_eq!(outcome.stages.len(), 3);
        for projection in &outcome.projections {
            assert_eq!(projection.total_projected, projection.total_current);
        }
    }

    #[test]
    fn test_ineligible_constructions_are_reported() {
        let outcome = default_outcome();

        assert_eq!(
            outcome.rejected,
            vec![
                "Fixed-rate treasury is exclusive to individual clients (owner is corporate)".to_string(),
                "Corporate bond is exclusive to corporate clients (owner is individual)".to_string(),
            ]
        );
    }
}

// ============================================================================
// Rendering Tests
// ============================================================================

mod rendering_tests {
    use super::*;

    #[test]
    fn test_text_report() {
        let text = render(&default_outcome(), OutputFormat::Text).unwrap();

        assert!(text.contains("Portfolio of João Silva (individual):"));
        assert!(text.contains("Total invested: 16000.00"));
        assert!(text.contains("- CorporateBond Empresa ABC: 15000.00"));
        assert!(text.contains("=== Projections for 12 months ==="));
        assert!(text.contains("=== Rejected constructions ==="));
    }

    #[test]
    fn test_json_report() {
        let json = render(&default_outcome(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["stages"][0]["portfolios"][0]["client_name"], "João Silva");
        assert_eq!(value["stages"][0]["portfolios"][1]["client_kind"], "Corporate");
        assert_eq!(value["projections"][0]["holdings"][0]["kind"], "FixedRateTreasury");
        assert_eq!(value["rejected"].as_array().map(|r| r.len()), Some(2));
    }
}
