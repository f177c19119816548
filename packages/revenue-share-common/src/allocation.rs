use cosmwasm_std::{
    ConversionOverflowError, DivideByZeroError, OverflowError, Uint128, Uint256,
};
use thiserror::Error;

use crate::types::{HolderWeight, Payout};

/// Fixed-point denominator for holder ratios. Matches the 18 fractional digits
/// of the weight token so a ratio can represent a single base unit of weight
/// against totals in the hundreds of millions of whole tokens.
pub const RATE_DIVIDER: Uint256 = Uint256::from_u128(1_000_000_000_000_000_000u128);

#[derive(Error, Debug, PartialEq)]
pub enum AllocationError {
    #[error("total weight of {holders} holders is zero")]
    ZeroTotalWeight { holders: usize },

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("{0}")]
    Conversion(#[from] ConversionOverflowError),
}

/// Payout list for one distribution, computed before any transfer is issued.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionPlan {
    pub total_weight: Uint256,
    pub distributable_amount: Uint128,
    pub payouts: Vec<Payout>,
}

impl DistributionPlan {
    /// Sum of all payouts. Never exceeds `distributable_amount`.
    pub fn distributed(&self) -> Uint128 {
        self.payouts
            .iter()
            .fold(Uint128::zero(), |acc, p| acc + p.amount)
    }

    /// Amount left behind by flooring each payout.
    pub fn dust(&self) -> Uint128 {
        self.distributable_amount - self.distributed()
    }

    /// Payouts that result in an actual transfer.
    pub fn transfers(&self) -> impl Iterator<Item = &Payout> {
        self.payouts.iter().filter(|p| !p.amount.is_zero())
    }
}

/// Sum of all weights, accumulated in 256 bits.
pub fn total_weight(weights: &[HolderWeight]) -> Result<Uint256, AllocationError> {
    weights.iter().try_fold(Uint256::zero(), |acc, w| {
        acc.checked_add(Uint256::from(w.weight))
            .map_err(AllocationError::from)
    })
}

/// `floor(weight * RATE_DIVIDER / total_weight)`. Reported per payout; the
/// payout itself is not derived from this truncated value.
pub fn holder_ratio(weight: Uint128, total_weight: Uint256) -> Result<Uint256, AllocationError> {
    let scaled = Uint256::from(weight).checked_mul(RATE_DIVIDER)?;
    Ok(scaled.checked_div(total_weight)?)
}

/// `floor(floor(weight * distributable_amount * RATE_DIVIDER / total_weight) / RATE_DIVIDER)`,
/// which reduces to `floor(weight * distributable_amount / total_weight)`.
/// The product of two `Uint128` always fits in `Uint256`.
pub fn payout_for(
    weight: Uint128,
    total_weight: Uint256,
    distributable_amount: Uint128,
) -> Result<Uint128, AllocationError> {
    let scaled = Uint256::from(weight).checked_mul(Uint256::from(distributable_amount))?;
    Ok(Uint128::try_from(scaled.checked_div(total_weight)?)?)
}

/// Split `distributable_amount` across `weights` in list order.
///
/// Each payout is floored once against the holder's exact share, so a holder
/// paid from an amount equal to the total weight receives exactly its weight.
/// The remainder of the floors stays undistributed and no holder absorbs it.
///
/// Duplicate holders are paid once per occurrence. An empty list yields no
/// payouts; a non-empty list whose weights sum to zero is an error.
pub fn compute_payouts(
    weights: &[HolderWeight],
    distributable_amount: Uint128,
) -> Result<Vec<Payout>, AllocationError> {
    Ok(plan_distribution(weights, distributable_amount)?.payouts)
}

/// Same as [`compute_payouts`], keeping the totals around for reporting.
pub fn plan_distribution(
    weights: &[HolderWeight],
    distributable_amount: Uint128,
) -> Result<DistributionPlan, AllocationError> {
    let total_weight = total_weight(weights)?;

    if weights.is_empty() {
        return Ok(DistributionPlan {
            total_weight,
            distributable_amount,
            payouts: vec![],
        });
    }
    if total_weight.is_zero() {
        return Err(AllocationError::ZeroTotalWeight {
            holders: weights.len(),
        });
    }

    let payouts = weights
        .iter()
        .map(|w| {
            let ratio = holder_ratio(w.weight, total_weight)?;
            let amount = payout_for(w.weight, total_weight, distributable_amount)?;
            Ok(Payout {
                holder: w.holder.clone(),
                weight: w.weight,
                ratio,
                amount,
            })
        })
        .collect::<Result<Vec<_>, AllocationError>>()?;

    Ok(DistributionPlan {
        total_weight,
        distributable_amount,
        payouts,
    })
}
