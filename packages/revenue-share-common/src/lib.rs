pub mod allocation;
pub mod types;

pub use allocation::{compute_payouts, plan_distribution, AllocationError, DistributionPlan, RATE_DIVIDER};
pub use types::{HolderWeight, Payout, TokenInfo};
