//! Report DTOs and rendering
//!
//! Snapshots are plain data captured from a [`Portfolio`] at one point of the
//! scenario; rendering never touches the engine.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::Write;

use core_kernel::{round_to_cents as cents, InvestmentId};
use domain_client::ClientKind;
use domain_investment::ProductKind;
use domain_portfolio::{HoldingProjection, Portfolio};

use crate::error::ReportError;
use crate::scenario::ScenarioOutcome;

#[derive(Debug, Clone, Serialize)]
pub struct HoldingLine {
    pub investment_id: InvestmentId,
    pub kind: ProductKind,
    pub name: String,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSnapshot {
    pub client_name: String,
    pub client_kind: ClientKind,
    pub total_invested: Decimal,
    pub holdings: Vec<HoldingLine>,
}

impl PortfolioSnapshot {
    /// Captures balances as they are right now
    pub fn capture(portfolio: &Portfolio) -> Self {
        Self {
            client_name: portfolio.client().name().to_string(),
            client_kind: portfolio.client().kind(),
            total_invested: portfolio.total_invested_value(),
            holdings: portfolio
                .investments()
                .iter()
                .map(|investment| HoldingLine {
                    investment_id: investment.id(),
                    kind: investment.kind(),
                    name: investment.name().to_string(),
                    balance: investment.balance(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectionReport {
    pub client_name: String,
    pub months: u32,
    pub total_current: Decimal,
    pub total_projected: Decimal,
    pub holdings: Vec<HoldingProjection>,
}

impl ProjectionReport {
    pub fn capture(portfolio: &Portfolio, months: u32) -> Self {
        Self {
            client_name: portfolio.client().name().to_string(),
            months,
            total_current: portfolio.total_invested_value(),
            total_projected: portfolio.total_projected_value(months),
            holdings: portfolio.projections(months),
        }
    }
}

/// A titled set of snapshots, one per portfolio
#[derive(Debug, Clone, Serialize)]
pub struct Stage {
    pub title: String,
    pub portfolios: Vec<PortfolioSnapshot>,
}

/// Renders the outcome as a JSON document
pub fn render_json(outcome: &ScenarioOutcome) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

/// Renders the outcome as plain text with two-decimal amounts
pub fn render_text(outcome: &ScenarioOutcome) -> String {
    let mut out = String::new();

    for stage in &outcome.stages {
        let _ = writeln!(out, "=== {} ===", stage.title);
        for snapshot in &stage.portfolios {
            write_snapshot(&mut out, snapshot);
        }
        out.push('\n');
    }

    if let Some(first) = outcome.projections.first() {
        let _ = writeln!(out, "=== Projections for {} months ===", first.months);
    }
    for projection in &outcome.projections {
        write_projection(&mut out, projection);
    }

    if !outcome.rejected.is_empty() {
        let _ = writeln!(out, "\n=== Rejected constructions ===");
        for message in &outcome.rejected {
            let _ = writeln!(out, "- {message}");
        }
    }

    out
}

fn write_snapshot(out: &mut String, snapshot: &PortfolioSnapshot) {
    let _ = writeln!(out, "\nPortfolio of {} ({}):", snapshot.client_name, snapshot.client_kind);
    let _ = writeln!(out, "Total invested: {:.2}", cents(snapshot.total_invested));
    for holding in &snapshot.holdings {
        let _ = writeln!(out, "- {} {}: {:.2}", holding.kind.code(), holding.name, cents(holding.balance));
    }
}

fn write_projection(out: &mut String, projection: &ProjectionReport) {
    let _ = writeln!(out, "\nProjections for {} in {} months:", projection.client_name, projection.months);
    for holding in &projection.holdings {
        let _ = writeln!(
            out,
            "- {} {}: {:.2} (current) -> {:.2} (projected)",
            holding.kind.code(),
            holding.name,
            cents(holding.current_balance),
            cents(holding.projected_balance)
        );
    }
    let _ = writeln!(
        out,
        "Total: {:.2} -> {:.2}",
        cents(projection.total_current),
        cents(projection.total_projected)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_client::Client;
    use domain_investment::Investment;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn portfolio() -> Portfolio {
        let joao = Arc::new(Client::individual("João Silva", "joao@email.com", "123.456.789-09"));
        let mut portfolio = Portfolio::new(joao.clone());
        portfolio
            .add_investment(Investment::stock_position(joao, dec!(3000), "PETR4", "Petrobras PN", dec!(10)))
            .unwrap();
        portfolio
    }

    #[test]
    fn test_snapshot_captures_balances() {
        let snapshot = PortfolioSnapshot::capture(&portfolio());

        assert_eq!(snapshot.client_kind, ClientKind::Individual);
        assert_eq!(snapshot.total_invested, dec!(3000));
        assert_eq!(snapshot.holdings[0].name, "PETR4");
    }

    #[test]
    fn test_text_uses_two_decimals() {
        let outcome = ScenarioOutcome {
            stages: vec![Stage {
                title: "Initial position".to_string(),
                portfolios: vec![PortfolioSnapshot::capture(&portfolio())],
            }],
            projections: vec![ProjectionReport::capture(&portfolio(), 3)],
            rejected: Vec::new(),
        };

        let text = render_text(&outcome);

        assert!(text.contains("=== Initial position ==="));
        assert!(text.contains("- StockPosition PETR4: 3000.00"));
        assert!(text.contains("3000.00 (current) -> 3042.58 (projected)"));
        assert!(!text.contains("Rejected"));
    }
}
