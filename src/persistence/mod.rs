pub mod files;
pub mod slots;
pub mod store;

pub use files::{ensure_data_dir, init_local_data_dir};
pub use slots::{load_budget, load_tasks, save_slot, BUDGET_KEY, BUDGET_OPTIONS, TASKS_KEY};
pub use store::{FileStore, KeyValueStore};
