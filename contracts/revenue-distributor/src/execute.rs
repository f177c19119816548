use cosmwasm_std::{
    from_json, Addr, Deps, DepsMut, Env, Event, MessageInfo, Response, StdError, Uint128,
};
use cw20::Cw20ReceiveMsg;
use revenue_share_common::{plan_distribution, DistributionPlan, TokenInfo};

use crate::error::ContractError;
use crate::msg::ReceiveMsg;
use crate::state::{CONFIG, HOLDERS};
use crate::token::{weight_snapshot, BalanceSource, Token, TokenLedger};

/// Replace the holder list. Owner only.
pub fn set_holders(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    holders: Vec<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {
            reason: "only owner can set holders".to_string(),
        });
    }
    nonpayable(&info)?;

    let holders = validate_holders(deps.as_ref(), &holders)?;
    HOLDERS.save(deps.storage, &holders)?;

    Ok(Response::new()
        .add_attribute("action", "set_holders")
        .add_attribute("num_holders", holders.len().to_string())
        .add_event(
            Event::new("revshare_holders_set")
                .add_attribute("num_holders", holders.len().to_string()),
        ))
}

/// Address format is the only check; order and duplicates are kept.
pub fn validate_holders(deps: Deps, holders: &[String]) -> Result<Vec<Addr>, ContractError> {
    holders
        .iter()
        .map(|h| deps.api.addr_validate(h).map_err(ContractError::from))
        .collect()
}

/// Distribute this contract's whole balance of `token`. Anyone can call.
/// Undistributed dust from earlier calls is part of the balance.
pub fn distribute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: TokenInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let token = Token::from_info(deps.api, token)?;

    let balance = token.balance_of(&deps.querier, &env.contract.address)?;
    let plan = build_plan(deps.as_ref(), balance)?;

    payout_response(&token, &plan, Response::new().add_attribute("action", "distribute"))
}

/// Pull exactly `amount` into custody, then distribute it.
///
/// The contract must hold none of `token` before the deposit so the amount
/// distributed is exactly the amount deposited.
pub fn deposit_and_distribute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: TokenInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let token = Token::from_info(deps.api, token)?;

    // Native funds are already credited to the contract when this runs.
    let attached = match &token {
        Token::Native { denom } => attached_amount(&info, denom)?,
        Token::Cw20 { .. } => {
            nonpayable(&info)?;
            Uint128::zero()
        }
    };

    let balance = token.balance_of(&deps.querier, &env.contract.address)?;
    let initial_balance = balance.checked_sub(attached).map_err(StdError::from)?;
    ensure_empty_custody(&token, initial_balance)?;

    if let Token::Native { denom } = &token {
        if attached != amount {
            return Err(ContractError::FundsMismatch {
                denom: denom.clone(),
                sent: attached,
                expected: amount,
            });
        }
    }

    if amount.is_zero() {
        return Err(ContractError::ZeroDeposit);
    }

    let plan = build_plan(deps.as_ref(), amount)?;

    let mut response = Response::new()
        .add_attribute("action", "deposit_and_distribute")
        .add_attribute("depositor", info.sender.to_string());
    if let Some(pull) = token.transfer_from_msg(&info.sender, &env.contract.address, amount)? {
        response = response.add_message(pull);
    }

    payout_response(&token, &plan, response)
}

/// CW20 `Send` hook. The sending contract is the token being deposited.
pub fn receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    wrapper: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let msg: ReceiveMsg = from_json(&wrapper.msg)?;

    match msg {
        ReceiveMsg::DepositAndDistribute {} => {
            let token = Token::Cw20 {
                contract_addr: info.sender.clone(),
            };

            // The token contract credits us before calling the hook.
            let balance = token.balance_of(&deps.querier, &env.contract.address)?;
            let initial_balance = balance.checked_sub(wrapper.amount).map_err(StdError::from)?;
            ensure_empty_custody(&token, initial_balance)?;

            if wrapper.amount.is_zero() {
                return Err(ContractError::ZeroDeposit);
            }

            let plan = build_plan(deps.as_ref(), wrapper.amount)?;
            let response = Response::new()
                .add_attribute("action", "receive_and_distribute")
                .add_attribute("depositor", wrapper.sender);

            payout_response(&token, &plan, response)
        }
    }
}

/// Hand the owner role to `new_owner`. Owner only.
pub fn transfer_ownership(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {
            reason: "only owner can transfer ownership".to_string(),
        });
    }
    nonpayable(&info)?;

    let previous = config.owner;
    config.owner = deps.api.addr_validate(&new_owner)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("new_owner", config.owner.to_string())
        .add_event(
            Event::new("revshare_ownership_transferred")
                .add_attribute("previous_owner", previous.to_string())
                .add_attribute("new_owner", config.owner.to_string()),
        ))
}

/// Read the registry, snapshot weights and compute every payout for
/// `distributable_amount`. Nothing is sent until the whole plan is known.
pub fn build_plan(
    deps: Deps,
    distributable_amount: Uint128,
) -> Result<DistributionPlan, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let holders = HOLDERS.load(deps.storage)?;

    let weights = weight_snapshot(&deps.querier, &config.weight_token, &holders)?;
    Ok(plan_distribution(&weights, distributable_amount)?)
}

/// One transfer per non-zero payout, in registry order.
fn payout_response(
    token: &Token,
    plan: &DistributionPlan,
    mut response: Response,
) -> Result<Response, ContractError> {
    let mut transfers = 0u32;
    for payout in plan.transfers() {
        response = response.add_message(token.transfer_msg(&payout.holder, payout.amount)?);
        transfers += 1;
    }

    let token_str = token.to_string();
    Ok(response
        .add_attribute("token", token_str.clone())
        .add_attribute("distributed", plan.distributed().to_string())
        .add_event(
            Event::new("revshare_distribution")
                .add_attribute("token", token_str)
                .add_attribute("distributable_amount", plan.distributable_amount.to_string())
                .add_attribute("total_weight", plan.total_weight.to_string())
                .add_attribute("distributed", plan.distributed().to_string())
                .add_attribute("dust", plan.dust().to_string())
                .add_attribute("num_holders", plan.payouts.len().to_string())
                .add_attribute("num_transfers", transfers.to_string()),
        ))
}

fn ensure_empty_custody(token: &Token, initial_balance: Uint128) -> Result<(), ContractError> {
    if !initial_balance.is_zero() {
        return Err(ContractError::NonZeroInitialBalance {
            token: token.to_string(),
            balance: initial_balance,
        });
    }
    Ok(())
}

/// Amount of `denom` attached to the call. Any other denom is rejected.
fn attached_amount(info: &MessageInfo, denom: &str) -> Result<Uint128, ContractError> {
    let mut total = Uint128::zero();
    for coin in &info.funds {
        if coin.denom != denom {
            return Err(ContractError::InvalidFunds {
                denom: denom.to_string(),
            });
        }
        total += coin.amount;
    }
    Ok(total)
}

fn nonpayable(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::NonPayable);
    }
    Ok(())
}
