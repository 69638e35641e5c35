pub mod kv;
pub mod plans;
pub mod settings;

pub use kv::KvStore;
pub use plans::{PlanStore, MAX_SAVED_PLANS};
