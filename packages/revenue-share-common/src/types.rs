use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128, Uint256};

/// A token as referenced in messages. Addresses are unchecked until the
/// receiving contract validates them.
#[cw_serde]
pub enum TokenInfo {
    /// Bank denomination, e.g. "uatom" or "factory/{creator}/{subdenom}".
    Native { denom: String },
    /// CW20 token contract.
    Cw20 { contract_addr: String },
}

/// One holder's weight, as read from the weight source for a single distribution.
#[cw_serde]
pub struct HolderWeight {
    pub holder: Addr,
    pub weight: Uint128,
}

/// Amount assigned to one holder by the allocation engine.
#[cw_serde]
pub struct Payout {
    pub holder: Addr,
    pub weight: Uint128,
    /// Share of the total weight, scaled by `RATE_DIVIDER`.
    pub ratio: Uint256,
    pub amount: Uint128,
}
