use clap::Args;
use serde_json::Value;
use std::fs;
use std::path::Path;
use uuid::Uuid;

use autoloan_core::manage::{InMemoryLoanStore, LoanManager};

use crate::commands::schedule::{self, ScheduleArgs};

const DEFAULT_STORE: &str = "loans.json";

/// Arguments for saving a loan application
#[derive(Args)]
pub struct SaveArgs {
    #[command(flatten)]
    pub loan: ScheduleArgs,

    /// Existing record id to update instead of creating a new draft
    #[arg(long)]
    pub id: Option<Uuid>,

    /// Record store file
    #[arg(long, default_value = DEFAULT_STORE)]
    pub store: String,
}

/// Arguments for listing saved loan applications
#[derive(Args)]
pub struct ListArgs {
    /// Record store file
    #[arg(long, default_value = DEFAULT_STORE)]
    pub store: String,
}

/// Arguments for showing one saved loan application
#[derive(Args)]
pub struct ShowArgs {
    /// Record id
    #[arg(long)]
    pub id: Uuid,

    /// Record store file
    #[arg(long, default_value = DEFAULT_STORE)]
    pub store: String,
}

/// Arguments for approving a saved loan application
#[derive(Args)]
pub struct ApproveArgs {
    /// Record id
    #[arg(long)]
    pub id: Uuid,

    /// Record store file
    #[arg(long, default_value = DEFAULT_STORE)]
    pub store: String,
}

/// Arguments for deleting a saved loan application
#[derive(Args)]
pub struct DeleteArgs {
    /// Record id
    #[arg(long)]
    pub id: Uuid,

    /// Record store file
    #[arg(long, default_value = DEFAULT_STORE)]
    pub store: String,
}

/// Load the record store, treating a missing file as empty.
fn load_store(path: &str) -> Result<InMemoryLoanStore, Box<dyn std::error::Error>> {
    if !Path::new(path).exists() {
        return Ok(InMemoryLoanStore::new());
    }
    let contents =
        fs::read_to_string(path).map_err(|e| format!("Failed to read '{}': {}", path, e))?;
    Ok(InMemoryLoanStore::from_json(&contents)?)
}

fn persist_store(path: &str, store: &InMemoryLoanStore) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = store.to_json()?;
    fs::write(path, snapshot).map_err(|e| format!("Failed to write '{}': {}", path, e))?;
    Ok(())
}

pub fn run_save(args: SaveArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let spec = schedule::resolve_spec(&args.loan)?;
    let mut manager = LoanManager::with_store(load_store(&args.store)?);

    let record = match args.id {
        Some(id) => manager.update(&id, spec)?,
        None => manager.create(spec),
    };

    persist_store(&args.store, &manager.store)?;
    Ok(serde_json::to_value(record)?)
}

pub fn run_list(args: ListArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let manager = LoanManager::with_store(load_store(&args.store)?);

    // Compact listing rows; `show` has the full record.
    let records: Vec<Value> = manager
        .list()
        .into_iter()
        .map(|record| {
            serde_json::json!({
                "id": record.id,
                "created_at": record.created_at,
                "status": record.status,
                "loan_amount": record.spec.loan_amount.to_string(),
                "annual_rate_pct": record.spec.annual_rate_pct.to_string(),
                "term_months": record.spec.term_months,
            })
        })
        .collect();

    Ok(Value::Array(records))
}

pub fn run_show(args: ShowArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let manager = LoanManager::with_store(load_store(&args.store)?);
    let record = manager.get(&args.id)?;
    Ok(serde_json::to_value(record)?)
}

pub fn run_approve(args: ApproveArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut manager = LoanManager::with_store(load_store(&args.store)?);
    let record = manager.approve(&args.id)?;
    persist_store(&args.store, &manager.store)?;
    Ok(serde_json::to_value(record)?)
}

pub fn run_delete(args: DeleteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut manager = LoanManager::with_store(load_store(&args.store)?);
    let record = manager.delete(&args.id)?;
    persist_store(&args.store, &manager.store)?;
    Ok(serde_json::to_value(record)?)
}
