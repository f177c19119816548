use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128, Uint256};
use cw20::Cw20ReceiveMsg;
use revenue_share_common::{Payout, TokenInfo};

use crate::token::Token;

#[cw_serde]
pub struct InstantiateMsg {
    /// Token whose balances weight each holder. Fixed for the contract lifetime.
    pub weight_token: TokenInfo,
    /// Initial holder list. Defaults to empty.
    pub holders: Option<Vec<String>>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Replace the entire holder list. Owner only.
    SetHolders { holders: Vec<String> },
    /// Split this contract's whole balance of `token` among the holders. Anyone can call.
    Distribute { token: TokenInfo },
    /// Pull `amount` of `token` from the sender and distribute it. The contract
    /// must hold none of `token` beforehand. CW20 needs a prior allowance;
    /// native tokens are attached as funds.
    DepositAndDistribute { token: TokenInfo, amount: Uint128 },
    /// CW20 `Send` hook. Accepts [`ReceiveMsg`].
    Receive(Cw20ReceiveMsg),
    /// Hand the owner role to another address. Owner only.
    TransferOwnership { new_owner: String },
}

/// Payload of a CW20 `Send` to this contract.
#[cw_serde]
pub enum ReceiveMsg {
    /// Distribute exactly the sent amount. The contract must have held none
    /// of the token before the send.
    DepositAndDistribute {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(Uint256)]
    RateDivider {},
    #[returns(u64)]
    HoldersLength {},
    #[returns(Addr)]
    Holder { index: u64 },
    #[returns(HoldersResponse)]
    Holders {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// What `Distribute` would pay out right now.
    #[returns(DistributionPreview)]
    PreviewDistribution { token: TokenInfo },
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub weight_token: Token,
    pub rate_divider: Uint256,
}

#[cw_serde]
pub struct HoldersResponse {
    pub holders: Vec<Addr>,
}

#[cw_serde]
pub struct DistributionPreview {
    pub token: Token,
    pub distributable_amount: Uint128,
    pub total_weight: Uint256,
    pub payouts: Vec<Payout>,
    pub distributed: Uint128,
    pub dust: Uint128,
}
