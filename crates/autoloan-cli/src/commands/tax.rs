use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use autoloan_core::tax;
use autoloan_core::types::FuelType;

use crate::commands::schedule::FuelArg;

/// Arguments for the standalone tax calculation
#[derive(Args)]
pub struct TaxArgs {
    /// Engine displacement in cc
    #[arg(long)]
    pub displacement: u32,

    /// Fuel type; gates the environmental charge
    #[arg(long, value_enum, default_value = "gasoline")]
    pub fuel: FuelArg,

    /// Semi-annual environmental improvement charge in KRW
    #[arg(long)]
    pub env_charge: Option<Decimal>,
}

pub fn run_tax(args: TaxArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let annual = tax::annual_auto_tax(args.displacement);
    let monthly = tax::monthly_auto_tax(args.displacement);

    let fuel: FuelType = args.fuel.into();
    let env_semi_annual = args.env_charge.unwrap_or(Decimal::ZERO);
    let env_monthly = if fuel.owes_env_charge() && env_semi_annual > Decimal::ZERO {
        tax::monthly_env_charge(env_semi_annual)
    } else {
        Decimal::ZERO
    };

    Ok(serde_json::json!({
        "displacement_cc": args.displacement,
        "annual_auto_tax": annual.to_string(),
        "monthly_auto_tax": monthly.to_string(),
        "env_charge_semi_annual": env_semi_annual.to_string(),
        "monthly_env_charge": env_monthly.to_string(),
    }))
}
