use crate::core::error::ScanError;
use crate::types::{AccountLayout, AccountRoleMap};

use super::constants::initialize2::{accounts, MAX_ACCOUNT_POSITION};
use super::constants::CLOCK_SYSVAR;

/// Maps `initialize2` account positions onto named pool roles.
///
/// `indexes` is the instruction's index list into `account_keys`.
pub fn resolve_account_roles(
    account_keys: &[String],
    indexes: &[usize],
) -> Result<(AccountRoleMap, AccountLayout), ScanError> {
    if indexes.len() <= MAX_ACCOUNT_POSITION {
        return Err(ScanError::AccountIndexOutOfRange {
            position: MAX_ACCOUNT_POSITION,
            indexes_len: indexes.len(),
            accounts_len: account_keys.len(),
        });
    }

    // Every index must resolve, including slots no role is read from.
    if let Some(position) = indexes
        .iter()
        .position(|index| *index >= account_keys.len())
    {
        return Err(ScanError::AccountIndexOutOfRange {
            position,
            indexes_len: indexes.len(),
            accounts_len: account_keys.len(),
        });
    }

    let at = |position: usize| account_at(account_keys, indexes, position);

    let layout = detect_layout(at(accounts::AUTHORITY)?);
    let (authority, open_orders) = match layout {
        AccountLayout::Standard => (at(accounts::AUTHORITY)?, at(accounts::OPEN_ORDERS)?),
        AccountLayout::ClockShifted => (at(accounts::OPEN_ORDERS)?, at(accounts::LP_MINT)?),
    };

    let roles = AccountRoleMap {
        amm_id: at(accounts::AMM_ID)?,
        lp_mint: at(accounts::LP_MINT)?,
        authority,
        open_orders,
        base_mint: at(accounts::BASE_MINT)?,
        quote_mint: at(accounts::QUOTE_MINT)?,
        base_vault: at(accounts::BASE_VAULT)?,
        quote_vault: at(accounts::QUOTE_VAULT)?,
        target_orders: at(accounts::TARGET_ORDERS)?,
        market_program_id: at(accounts::MARKET_PROGRAM_ID)?,
        market_id: at(accounts::MARKET_ID)?,
        market_base_vault: at(accounts::MARKET_BASE_VAULT)?,
        market_quote_vault: at(accounts::MARKET_QUOTE_VAULT)?,
        market_authority: at(accounts::MARKET_AUTHORITY)?,
    };

    Ok((roles, layout))
}

fn detect_layout(authority_candidate: String) -> AccountLayout {
    if authority_candidate == CLOCK_SYSVAR {
        AccountLayout::ClockShifted
    } else {
        AccountLayout::Standard
    }
}

fn account_at(
    account_keys: &[String],
    indexes: &[usize],
    position: usize,
) -> Result<String, ScanError> {
    indexes
        .get(position)
        .and_then(|index| account_keys.get(*index))
        .cloned()
        .ok_or(ScanError::AccountIndexOutOfRange {
            position,
            indexes_len: indexes.len(),
            accounts_len: account_keys.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("acc{i}")).collect()
    }

    fn identity(count: usize) -> Vec<usize> {
        (0..count).collect()
    }

    #[test]
    fn standard_layout_reads_authority_and_open_orders_in_place() {
        let account_keys = keys(21);
        let (roles, layout) = resolve_account_roles(&account_keys, &identity(21)).unwrap();

        assert_eq!(layout, AccountLayout::Standard);
        assert_eq!(roles.amm_id, "acc4");
        assert_eq!(roles.authority, "acc5");
        assert_eq!(roles.open_orders, "acc6");
        assert_eq!(roles.lp_mint, "acc7");
        assert_eq!(roles.base_mint, "acc8");
        assert_eq!(roles.quote_mint, "acc9");
        assert_eq!(roles.base_vault, "acc10");
        assert_eq!(roles.quote_vault, "acc11");
        assert_eq!(roles.target_orders, "acc13");
        assert_eq!(roles.market_program_id, "acc15");
        assert_eq!(roles.market_id, "acc16");
        assert_eq!(roles.market_base_vault, "acc18");
        assert_eq!(roles.market_quote_vault, "acc19");
        assert_eq!(roles.market_authority, "acc20");
    }

    #[test]
    fn clock_in_authority_slot_shifts_authority_and_open_orders() {
        let mut account_keys = keys(21);
        account_keys[5] = CLOCK_SYSVAR.to_string();
        let (roles, layout) = resolve_account_roles(&account_keys, &identity(21)).unwrap();

        assert_eq!(layout, AccountLayout::ClockShifted);
        assert_eq!(roles.authority, "acc6");
        assert_eq!(roles.open_orders, "acc7");
        assert_eq!(roles.lp_mint, "acc7");
    }

    #[test]
    fn indexes_are_followed_through_the_account_list() {
        let account_keys = keys(30);
        let indexes: Vec<usize> = (0..21).map(|i| 29 - i).collect();
        let (roles, _) = resolve_account_roles(&account_keys, &indexes).unwrap();

        assert_eq!(roles.amm_id, "acc25");
        assert_eq!(roles.market_authority, "acc9");
    }

    #[test]
    fn short_index_list_fails() {
        let account_keys = keys(21);
        let err = resolve_account_roles(&account_keys, &identity(20)).unwrap_err();
        assert!(matches!(
            err,
            ScanError::AccountIndexOutOfRange {
                position: 20,
                indexes_len: 20,
                ..
            }
        ));
    }

    #[test]
    fn index_past_account_list_fails_in_unread_slot() {
        let account_keys = keys(21);
        for position in [12, 14, 17] {
            let mut indexes = identity(21);
            indexes[position] = 999;
            let err = resolve_account_roles(&account_keys, &indexes).unwrap_err();
            match err {
                ScanError::AccountIndexOutOfRange {
                    position: reported,
                    indexes_len,
                    accounts_len,
                } => {
                    assert_eq!(reported, position);
                    assert_eq!((indexes_len, accounts_len), (21, 21));
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn trailing_index_past_account_list_fails() {
        let account_keys = keys(21);
        let mut indexes = identity(21);
        indexes.push(999);
        assert!(matches!(
            resolve_account_roles(&account_keys, &indexes),
            Err(ScanError::AccountIndexOutOfRange {
                position: 21,
                indexes_len: 22,
                ..
            })
        ));
    }

    #[test]
    fn index_past_account_list_fails() {
        let account_keys = keys(21);
        let mut indexes = identity(21);
        indexes[16] = 21;
        let err = resolve_account_roles(&account_keys, &indexes).unwrap_err();
        assert!(matches!(
            err,
            ScanError::AccountIndexOutOfRange {
                position: 16,
                accounts_len: 21,
                ..
            }
        ));
    }
}
