use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Repayment schedule
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_schedule(input_json: String) -> NapiResult<String> {
    let spec: autoloan_core::amortization::LoanSpec =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = autoloan_core::amortization::compute_schedule(&spec);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Vehicle taxes
// ---------------------------------------------------------------------------

#[napi]
pub fn annual_auto_tax(displacement_cc: u32) -> NapiResult<String> {
    let amount = autoloan_core::tax::annual_auto_tax(displacement_cc);
    Ok(amount.to_string())
}

#[napi]
pub fn monthly_auto_tax(displacement_cc: u32) -> NapiResult<String> {
    let amount = autoloan_core::tax::monthly_auto_tax(displacement_cc);
    Ok(amount.to_string())
}

#[napi]
pub fn monthly_env_charge(semi_annual: String) -> NapiResult<String> {
    let semi_annual: Decimal = semi_annual.parse().map_err(to_napi_error)?;
    let amount = autoloan_core::tax::monthly_env_charge(semi_annual);
    Ok(amount.to_string())
}
