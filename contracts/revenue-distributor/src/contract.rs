use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{Config, CONFIG, HOLDERS};
use crate::token::Token;

const CONTRACT_NAME: &str = "crates.io:revenue-distributor";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        owner: info.sender.clone(),
        weight_token: Token::from_info(deps.api, msg.weight_token)?,
    };
    CONFIG.save(deps.storage, &config)?;

    let holders = execute::validate_holders(deps.as_ref(), &msg.holders.unwrap_or_default())?;
    HOLDERS.save(deps.storage, &holders)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "revenue-distributor")
        .add_attribute("owner", info.sender.to_string())
        .add_attribute("weight_token", config.weight_token.to_string())
        .add_attribute("num_holders", holders.len().to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetHolders { holders } => execute::set_holders(deps, env, info, holders),
        ExecuteMsg::Distribute { token } => execute::distribute(deps, env, info, token),
        ExecuteMsg::DepositAndDistribute { token, amount } => {
            execute::deposit_and_distribute(deps, env, info, token, amount)
        }
        ExecuteMsg::Receive(wrapper) => execute::receive(deps, env, info, wrapper),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute::transfer_ownership(deps, env, info, new_owner)
        }
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::RateDivider {} => query::query_rate_divider(),
        QueryMsg::HoldersLength {} => query::query_holders_length(deps),
        QueryMsg::Holder { index } => query::query_holder(deps, index),
        QueryMsg::Holders { start_after, limit } => query::query_holders(deps, start_after, limit),
        QueryMsg::PreviewDistribution { token } => {
            query::query_preview_distribution(deps, env, token)
        }
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "Cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
