use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    coins, to_json_binary, Addr, Api, BankMsg, CosmosMsg, QuerierWrapper, StdResult, Uint128,
    WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};
use revenue_share_common::{HolderWeight, TokenInfo};

/// A validated token reference. Used both for the weight source and for the
/// tokens being distributed.
#[cw_serde]
pub enum Token {
    Native { denom: String },
    Cw20 { contract_addr: Addr },
}

impl Token {
    pub fn from_info(api: &dyn Api, info: TokenInfo) -> StdResult<Self> {
        match info {
            TokenInfo::Native { denom } => Ok(Token::Native { denom }),
            TokenInfo::Cw20 { contract_addr } => Ok(Token::Cw20 {
                contract_addr: api.addr_validate(&contract_addr)?,
            }),
        }
    }

    /// CW20 `TransferFrom` pulling `amount` from `owner`. Native tokens have
    /// no pull; deposits of those arrive as funds attached to the call.
    pub fn transfer_from_msg(
        &self,
        owner: &Addr,
        recipient: &Addr,
        amount: Uint128,
    ) -> StdResult<Option<CosmosMsg>> {
        match self {
            Token::Native { .. } => Ok(None),
            Token::Cw20 { contract_addr } => Ok(Some(
                WasmMsg::Execute {
                    contract_addr: contract_addr.to_string(),
                    msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                        owner: owner.to_string(),
                        recipient: recipient.to_string(),
                        amount,
                    })?,
                    funds: vec![],
                }
                .into(),
            )),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Native { denom } => write!(f, "{}", denom),
            Token::Cw20 { contract_addr } => write!(f, "{}", contract_addr),
        }
    }
}

/// Anything that can report a balance per account. The weight source is one.
pub trait BalanceSource {
    fn balance_of(&self, querier: &QuerierWrapper, account: &Addr) -> StdResult<Uint128>;
}

/// A token this contract can pay out of its own balance.
pub trait TokenLedger: BalanceSource {
    fn transfer_msg(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg>;
}

impl BalanceSource for Token {
    fn balance_of(&self, querier: &QuerierWrapper, account: &Addr) -> StdResult<Uint128> {
        match self {
            Token::Native { denom } => Ok(querier.query_balance(account, denom)?.amount),
            Token::Cw20 { contract_addr } => {
                let res: BalanceResponse = querier.query_wasm_smart(
                    contract_addr,
                    &Cw20QueryMsg::Balance {
                        address: account.to_string(),
                    },
                )?;
                Ok(res.balance)
            }
        }
    }
}

impl TokenLedger for Token {
    fn transfer_msg(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        let msg: CosmosMsg = match self {
            Token::Native { denom } => BankMsg::Send {
                to_address: recipient.to_string(),
                amount: coins(amount.u128(), denom),
            }
            .into(),
            Token::Cw20 { contract_addr } => WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: recipient.to_string(),
                    amount,
                })?,
                funds: vec![],
            }
            .into(),
        };
        Ok(msg)
    }
}

/// Query the weight of every holder, once each, in registry order.
pub fn weight_snapshot(
    querier: &QuerierWrapper,
    source: &impl BalanceSource,
    holders: &[Addr],
) -> StdResult<Vec<HolderWeight>> {
    holders
        .iter()
        .map(|holder| {
            Ok(HolderWeight {
                holder: holder.clone(),
                weight: source.balance_of(querier, holder)?,
            })
        })
        .collect()
}
