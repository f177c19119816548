use cosmwasm_std::{StdError, Uint128};
use revenue_share_common::AllocationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("depositAndDistribute: initial balance of token should be 0 ({token} has {balance})")]
    NonZeroInitialBalance { token: String, balance: Uint128 },

    #[error("deposit amount must be greater than zero")]
    ZeroDeposit,

    #[error("funds other than {denom} were sent")]
    InvalidFunds { denom: String },

    #[error("sent {sent}{denom}, expected {expected}{denom}")]
    FundsMismatch {
        denom: String,
        sent: Uint128,
        expected: Uint128,
    },

    #[error("this message does not accept funds")]
    NonPayable,

    #[error("allocation failed: {0}")]
    Allocation(#[from] AllocationError),
}
