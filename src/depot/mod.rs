/// Depot fetch domain layer: request model, local naming, verification.
pub mod errors;
pub mod naming;
pub mod request;
pub mod verify;

pub use errors::FetchError;
pub use naming::local_file_name;
pub use request::{FetchRequest, RevisionSpec};
pub use verify::{clear_target, verify_produced};
