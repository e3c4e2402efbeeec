pub mod config;
pub mod rules;

pub use config::StressPolicy;
pub use rules::classify;
