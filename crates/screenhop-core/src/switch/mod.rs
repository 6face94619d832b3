pub mod errors;
pub mod handler;
pub mod types;

pub use errors::SwitchError;
pub use handler::run_switch;
pub use types::SwitchOutcome;
