pub mod classifier;
pub mod filter;
pub mod intake;
pub mod metrics;
pub mod sla;
pub mod tags;
pub mod workload;
