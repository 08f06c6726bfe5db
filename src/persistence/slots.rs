use super::store::KeyValueStore;
use crate::domain::Task;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Slot holding the whole task collection
pub const TASKS_KEY: &str = "tasks";

/// Slot holding the daily budget
pub const BUDGET_KEY: &str = "dailyBudget";

/// Budget used when none has been chosen yet
pub const DEFAULT_BUDGET: f64 = 8.0;

/// Budgets offered by the selector
pub const BUDGET_OPTIONS: [f64; 2] = [8.0, 16.0];

/// Load a slot, falling back to `default` when it is missing, unreadable or corrupt
pub fn load_slot<T, S>(store: &S, key: &str, default: T) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default,
        Err(e) => {
            tracing::warn!(slot = key, error = %e, "failed to read slot, using default");
            return default;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(slot = key, error = %e, "corrupt slot, using default");
            default
        }
    }
}

/// Serialize `value` and write it to a slot
pub fn save_slot<T, S>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize slot {}", key))?;
    store.set(key, &json)
}

pub fn load_tasks<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Task> {
    load_slot(store, TASKS_KEY, Vec::new())
}

/// Load the budget; a stored value that is negative or not finite counts as corrupt
pub fn load_budget<S: KeyValueStore + ?Sized>(store: &S) -> f64 {
    let budget: f64 = load_slot(store, BUDGET_KEY, DEFAULT_BUDGET);
    if budget.is_finite() && budget >= 0.0 {
        budget
    } else {
        tracing::warn!(budget, "invalid stored budget, using default");
        DEFAULT_BUDGET
    }
}
