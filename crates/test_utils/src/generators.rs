//! Property-Based Test Generators
//!
//! Provides proptest strategies for amounts, rates, products, and clients,
//! plus `fake`-backed helpers for readable client data.

use std::sync::Arc;

use domain_client::Client;
use domain_investment::{CorporateBond, FixedRateTreasury, InvestmentFund, Product, StockPosition};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::fixtures::ClientFixtures;

/// Strategy for generating opening balances (0.00 to 1,000,000.00)
pub fn balance_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating amounts that may be zero or negative
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (-100_000i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating annual rates (0.0000 to 0.3000)
pub fn annual_rate_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..3000u32).prop_map(|n| Decimal::new(n as i64, 4))
}

/// Strategy for generating tax rates (0.00 to 1.00)
pub fn tax_rate_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..=100u32).prop_map(|n| Decimal::new(n as i64, 2))
}

/// Strategy for generating monthly brokerage fees (0.00 to 50.00)
pub fn monthly_fee_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..5000u32).prop_map(|n| Decimal::new(n as i64, 2))
}

/// Strategy for generating projection horizons (0 to 120 months)
pub fn months_strategy() -> impl Strategy<Value = u32> {
    0u32..=120u32
}

/// Strategy for generating products open to any client
pub fn open_product_strategy() -> impl Strategy<Value = Product> {
    prop_oneof![
        monthly_fee_strategy().prop_map(|fee| StockPosition::new("PETR4", "Petrobras PN", fee).into()),
        annual_rate_strategy()
            .prop_map(|fee| InvestmentFund::new("Fundo Alfa", "00.000.000/0001-91", fee).into()),
    ]
}

/// Strategy for generating any product, restricted ones included
pub fn product_strategy() -> impl Strategy<Value = Product> {
    prop_oneof![
        open_product_strategy(),
        annual_rate_strategy().prop_map(|rate| FixedRateTreasury::new("Tesouro Prefixado", rate).into()),
        (annual_rate_strategy(), tax_rate_strategy())
            .prop_map(|(rate, tax)| CorporateBond::new("Empresa XYZ", rate, tax).into()),
    ]
}

/// Strategy for generating one of the fixture clients
pub fn client_strategy() -> impl Strategy<Value = Arc<Client>> {
    prop_oneof![
        Just(()).prop_map(|_| ClientFixtures::individual()),
        Just(()).prop_map(|_| ClientFixtures::corporate()),
    ]
}

/// A random individual client with a fake name and email
///
/// The CPF is a fixed valid one; only the name and email vary.
pub fn fake_individual() -> Arc<Client> {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    Arc::new(Client::individual(name, email, ClientFixtures::CPF))
}

/// A random corporate client with a fake name and email
pub fn fake_corporate() -> Arc<Client> {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    Arc::new(Client::corporate(name, email, ClientFixtures::CNPJ))
}
