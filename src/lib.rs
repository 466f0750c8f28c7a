//! Flight NLU - CLU result adapter for a flight-booking assistant

pub mod core;
pub mod nlu;
