use cosmwasm_std::{to_json_binary, Binary, Deps, Env, StdError, StdResult};
use revenue_share_common::{TokenInfo, RATE_DIVIDER};

use crate::execute::build_plan;
use crate::msg::{ConfigResponse, DistributionPreview, HoldersResponse};
use crate::state::{CONFIG, HOLDERS};
use crate::token::{BalanceSource, Token};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&ConfigResponse {
        owner: config.owner,
        weight_token: config.weight_token,
        rate_divider: RATE_DIVIDER,
    })
}

pub fn query_rate_divider() -> StdResult<Binary> {
    to_json_binary(&RATE_DIVIDER)
}

pub fn query_holders_length(deps: Deps) -> StdResult<Binary> {
    let holders = HOLDERS.load(deps.storage)?;
    to_json_binary(&(holders.len() as u64))
}

pub fn query_holder(deps: Deps, index: u64) -> StdResult<Binary> {
    let holders = HOLDERS.load(deps.storage)?;
    let holder = usize::try_from(index)
        .ok()
        .and_then(|i| holders.get(i))
        .ok_or_else(|| {
            StdError::generic_err(format!(
                "holder index {} out of range ({} holders)",
                index,
                holders.len()
            ))
        })?;
    to_json_binary(holder)
}

pub fn query_holders(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(30).min(100) as usize;
    let start = start_after
        .map(|i| usize::try_from(i).map_or(usize::MAX, |i| i.saturating_add(1)))
        .unwrap_or(0);

    let holders: Vec<_> = HOLDERS
        .load(deps.storage)?
        .into_iter()
        .skip(start)
        .take(limit)
        .collect();

    to_json_binary(&HoldersResponse { holders })
}

/// The plan `Distribute` would execute against the current balance.
pub fn query_preview_distribution(deps: Deps, env: Env, token: TokenInfo) -> StdResult<Binary> {
    let token = Token::from_info(deps.api, token)?;
    let balance = token.balance_of(&deps.querier, &env.contract.address)?;
    let plan = build_plan(deps, balance).map_err(|e| StdError::generic_err(e.to_string()))?;

    to_json_binary(&DistributionPreview {
        token,
        distributable_amount: plan.distributable_amount,
        total_weight: plan.total_weight,
        distributed: plan.distributed(),
        dust: plan.dust(),
        payouts: plan.payouts,
    })
}
