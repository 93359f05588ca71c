//! Pre-built Test Fixtures
//!
//! Provides the clients and investments of the reference demo portfolio.
//! Document numbers carry valid check digits so the fixtures also pass
//! `ClientValidator`.

use std::sync::Arc;

use domain_client::Client;
use domain_investment::Investment;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for client test data
pub struct ClientFixtures;

impl ClientFixtures {
    /// CPF with valid check digits
    pub const CPF: &'static str = "123.456.789-09";

    /// Second CPF with valid check digits
    pub const OTHER_CPF: &'static str = "529.982.247-25";

    /// CNPJ with valid check digits
    pub const CNPJ: &'static str = "12.345.678/0001-95";

    /// Second CNPJ with valid check digits
    pub const OTHER_CNPJ: &'static str = "11.222.333/0001-81";

    /// Individual client "João Silva"
    pub fn individual() -> Arc<Client> {
        Arc::new(Client::individual("João Silva", "joao@email.com", Self::CPF))
    }

    /// A second individual client, distinct from [`ClientFixtures::individual`]
    pub fn other_individual() -> Arc<Client> {
        Arc::new(Client::individual("Maria Souza", "maria@email.com", Self::OTHER_CPF))
    }

    /// Corporate client "Empresa XYZ"
    pub fn corporate() -> Arc<Client> {
        Arc::new(Client::corporate("Empresa XYZ", "contato@xyz.com", Self::CNPJ))
    }

    /// A second corporate client, distinct from [`ClientFixtures::corporate`]
    pub fn other_corporate() -> Arc<Client> {
        Arc::new(Client::corporate("Comércio ABC", "financeiro@abc.com", Self::OTHER_CNPJ))
    }
}

/// Fixture for investment test data
///
/// Each constructor mirrors one holding of the demo portfolio.
pub struct InvestmentFixtures;

impl InvestmentFixtures {
    /// "Tesouro Prefixado 2029": 5000 at 10% a year
    pub fn treasury(owner: Arc<Client>) -> Investment {
        Investment::fixed_rate_treasury(owner, dec!(5000), "Tesouro Prefixado 2029", dec!(0.10))
            .expect("treasury fixture requires an individual owner")
    }

    /// "PETR4": 3000 with a monthly brokerage fee of 10
    pub fn stock(owner: Arc<Client>) -> Investment {
        Investment::stock_position(owner, dec!(3000), "PETR4", "Petrobras PN", dec!(10))
    }

    /// "Fundo Alfa": 8000 with a 2% annual administration fee
    pub fn fund(owner: Arc<Client>) -> Investment {
        Investment::investment_fund(owner, dec!(8000), "Fundo Alfa", "00.000.000/0001-91", dec!(0.02))
    }

    /// "Empresa ABC" bond: 15000 at 12% a year with 20% tax
    pub fn bond(owner: Arc<Client>) -> Investment {
        Investment::corporate_bond(owner, dec!(15000), "Empresa ABC", dec!(0.12), dec!(0.20))
            .expect("bond fixture requires a corporate owner")
    }

    /// Sum of the individual client's three opening balances
    pub fn individual_opening_total() -> Decimal {
        dec!(16000)
    }
}
