use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

use crate::token::Token;

pub const CONFIG: Item<Config> = Item::new("config");

/// Ordered holder registry. Replaced wholesale by `SetHolders`; payouts follow
/// this order and duplicates are kept as entered.
pub const HOLDERS: Item<Vec<Addr>> = Item::new("holders");

#[cw_serde]
pub struct Config {
    /// Only address allowed to replace the holder list.
    pub owner: Addr,
    /// Token whose balances weight each holder's share.
    pub weight_token: Token,
}
