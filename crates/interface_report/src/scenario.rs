//! Demo scenario
//!
//! Two clients, one individual and one corporate, each with three holdings.
//! The run deposits, withdraws, advances a few months, projects ahead and
//! finally tries two constructions the eligibility rules forbid. A snapshot
//! is taken after every phase.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::sync::Arc;

use core_kernel::InvestmentId;
use domain_client::{Client, ClientValidator};
use domain_investment::Investment;
use domain_portfolio::Portfolio;

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::report::{PortfolioSnapshot, ProjectionReport, Stage};

/// Everything the scenario observed, in order
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub stages: Vec<Stage>,
    pub projections: Vec<ProjectionReport>,
    /// Messages of the constructions the engine refused
    pub rejected: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoScenario {
    simulated_months: u32,
    projection_months: u32,
}

impl Default for DemoScenario {
    fn default() -> Self {
        Self::new(3, 12)
    }
}

impl DemoScenario {
    pub fn new(simulated_months: u32, projection_months: u32) -> Self {
        Self { simulated_months, projection_months }
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(config.simulated_months, config.projection_months)
    }

    /// Runs the scenario end to end
    ///
    /// # Errors
    ///
    /// Fails if a demo client does not validate or a demo holding cannot be
    /// opened or added. The two ineligible constructions at the end are
    /// recorded in [`ScenarioOutcome::rejected`] instead.
    pub fn run(&self) -> Result<ScenarioOutcome, ReportError> {
        let joao = Self::client(Client::individual("João Silva", "joao@email.com", "123.456.789-09"))?;
        let empresa = Self::client(Client::corporate("Empresa XYZ", "contato@xyz.com", "12.345.678/0001-95"))?;

        let mut individual = Portfolio::new(joao.clone());
        let treasury = individual.add_investment(Investment::fixed_rate_treasury(
            joao.clone(),
            dec!(5000),
            "Tesouro Prefixado 2029",
            dec!(0.10),
        )?)?;
        let petr4 = individual.add_investment(Investment::stock_position(
            joao.clone(),
            dec!(3000),
            "PETR4",
            "Petrobras PN",
            dec!(10),
        ))?;
        let alfa = individual.add_investment(Investment::investment_fund(
            joao.clone(),
            dec!(8000),
            "Fundo Alfa",
            "00.000.000/0001-00",
            dec!(0.02),
        ))?;

        let mut corporate = Portfolio::new(empresa.clone());
        let bond = corporate.add_investment(Investment::corporate_bond(
            empresa.clone(),
            dec!(15000),
            "Empresa ABC",
            dec!(0.12),
            dec!(0.20),
        )?)?;
        let vale3 = corporate.add_investment(Investment::stock_position(
            empresa.clone(),
            dec!(7000),
            "VALE3",
            "Vale ON",
            dec!(15),
        ))?;
        corporate.add_investment(Investment::investment_fund(
            empresa.clone(),
            dec!(10000),
            "Fundo Beta",
            "11.111.111/0001-11",
            dec!(0.015),
        ))?;

        let mut stages = vec![Self::stage("Initial position", &individual, &corporate)];

        Self::deposit(&mut individual, treasury, dec!(1000))?;
        Self::deposit(&mut individual, petr4, dec!(500))?;
        Self::deposit(&mut corporate, bond, dec!(3000))?;
        stages.push(Self::stage("After deposits", &individual, &corporate));

        Self::withdraw(&mut individual, alfa, dec!(1000))?;
        Self::withdraw(&mut corporate, vale3, dec!(1500))?;
        stages.push(Self::stage("After withdrawals", &individual, &corporate));

        for month in 1..=self.simulated_months {
            individual.advance_all_one_month();
            corporate.advance_all_one_month();
            tracing::debug!(
                month,
                individual_total = %individual.total_invested_value(),
                corporate_total = %corporate.total_invested_value(),
                "Advanced one month"
            );
            stages.push(Self::stage(&format!("After {month} month(s)"), &individual, &corporate));
        }

        let projections = vec![
            ProjectionReport::capture(&individual, self.projection_months),
            ProjectionReport::capture(&corporate, self.projection_months),
        ];

        let mut rejected = Vec::new();
        let attempts = [
            Investment::fixed_rate_treasury(empresa, dec!(5000), "Tesouro Inválido", dec!(0.10)),
            Investment::corporate_bond(joao, dec!(5000), "Empresa Inválida", dec!(0.12), dec!(0.20)),
        ];
        for attempt in attempts {
            match attempt {
                Err(err) => {
                    tracing::info!(error = %err, "Construction rejected as expected");
                    rejected.push(err.to_string());
                }
                Ok(investment) => {
                    tracing::error!(investment = %investment.id(), "Ineligible construction was accepted");
                }
            }
        }

        Ok(ScenarioOutcome { stages, projections, rejected })
    }

    fn client(client: Client) -> Result<Arc<Client>, ReportError> {
        let result = ClientValidator::ensure_valid(&client)?;
        for warning in &result.warnings {
            tracing::warn!(client = %client.name(), %warning, "Client validation warning");
        }
        Ok(Arc::new(client))
    }

    fn deposit(portfolio: &mut Portfolio, id: InvestmentId, amount: Decimal) -> Result<(), ReportError> {
        let applied = portfolio.apply_to(id, amount)?;
        tracing::debug!(investment = %id, %amount, applied, "Deposit");
        Ok(())
    }

    fn withdraw(portfolio: &mut Portfolio, id: InvestmentId, amount: Decimal) -> Result<(), ReportError> {
        let withdrawn = portfolio.withdraw_from(id, amount)?;
        tracing::debug!(investment = %id, %amount, withdrawn, "Withdrawal");
        Ok(())
    }

    fn stage(title: &str, individual: &Portfolio, corporate: &Portfolio) -> Stage {
        tracing::info!(stage = title, "Capturing snapshot");
        Stage {
            title: title.to_string(),
            portfolios: vec![PortfolioSnapshot::capture(individual), PortfolioSnapshot::capture(corporate)],
        }
    }
}
