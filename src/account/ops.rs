//! Free functions that mutate a supplied [`Account`].
//!
//! Balance mutations live here rather than as inherent [`Account`] methods so
//! that the data model stays a plain value-holder and every side effect on a
//! balance is auditable in a single file. Callers must make mutability
//! explicit at the call site by passing `&mut Account`.

use rust_decimal::Decimal;

use crate::account::Account;
use crate::account::AccountKind;
use crate::operation::AccountId;

/// Flat fee charged to every checking account by a monthly update.
pub const CHECKING_MONTHLY_FEE: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Interest rate credited to every savings account by a monthly update.
pub const SAVINGS_MONTHLY_INTEREST: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

#[derive(thiserror::Error, Debug)]
pub enum AccountError {
    #[error("amount must be positive, got {amount} for account id={account_id}")]
    InvalidAmount { account_id: AccountId, amount: Decimal },
    #[error("insufficient funds, need {amount} in account id={account_id}")]
    InsufficientFunds { account_id: AccountId, amount: Decimal },
    #[error("transfer target account missing, source account id={account_id}")]
    InvalidTarget { account_id: AccountId },
    #[error("overflow while applying {amount} to account id={account_id}")]
    OperationOverflow { account_id: AccountId, amount: Decimal },
}

/// Adds `amount` to the account's balance.
///
/// # Errors
///
/// Returns an error if:
/// - `amount` is zero or negative ([`AccountError::InvalidAmount`]).
/// - Adding `amount` to the balance overflows ([`AccountError::OperationOverflow`]).
pub fn deposit(account: &mut Account, amount: Decimal) -> Result<(), AccountError> {
    account.balance = checked_add_to_balance(account, amount)?;
    Ok(())
}

/// Subtracts `amount` from the account's balance.
///
/// # Errors
///
/// Returns an error if:
/// - `amount` is zero or negative ([`AccountError::InvalidAmount`]).
/// - The balance is less than `amount` ([`AccountError::InsufficientFunds`]).
/// - Subtracting `amount` from the balance overflows ([`AccountError::OperationOverflow`]).
pub fn withdraw(account: &mut Account, amount: Decimal) -> Result<(), AccountError> {
    account.balance = checked_sub_from_balance(account, amount)?;
    Ok(())
}

/// Moves `amount` from `source` to `target`.
///
/// Both new balances are computed before either account is touched, so a
/// failure on any leg leaves both balances exactly as they were and a success
/// conserves the total across the two accounts.
///
/// # Errors
///
/// Returns an error if:
/// - `target` is absent ([`AccountError::InvalidTarget`]).
/// - `amount` is zero or negative ([`AccountError::InvalidAmount`]).
/// - `source`'s balance is less than `amount` ([`AccountError::InsufficientFunds`]).
/// - Adjusting either balance overflows ([`AccountError::OperationOverflow`]).
pub fn transfer(source: &mut Account, target: Option<&mut Account>, amount: Decimal) -> Result<(), AccountError> {
    let Some(target) = target else {
        return Err(AccountError::InvalidTarget { account_id: source.id });
    };
    let new_source_balance = checked_sub_from_balance(source, amount)?;
    let new_target_balance = checked_add_to_balance(target, amount)?;
    source.balance = new_source_balance;
    target.balance = new_target_balance;
    Ok(())
}

/// Applies the account's own monthly rule to its balance.
///
/// Checking accounts are charged [`CHECKING_MONTHLY_FEE`] with no floor, so
/// the balance may go negative. Savings accounts are credited
/// [`SAVINGS_MONTHLY_INTEREST`]. Always succeeds: a balance already at the
/// numeric limits saturates there instead of overflowing.
pub fn update_monthly(account: &mut Account) {
    match account.kind {
        AccountKind::Checking => account.balance = account.balance.saturating_sub(CHECKING_MONTHLY_FEE),
        AccountKind::Savings => {
            account.balance = account.balance.saturating_mul(Decimal::ONE + SAVINGS_MONTHLY_INTEREST);
        }
    }
}

fn checked_add_to_balance(account: &Account, amount: Decimal) -> Result<Decimal, AccountError> {
    ensure_positive_amount(account, amount)?;
    account
        .balance
        .checked_add(amount)
        .ok_or(AccountError::OperationOverflow {
            account_id: account.id,
            amount,
        })
}

fn checked_sub_from_balance(account: &Account, amount: Decimal) -> Result<Decimal, AccountError> {
    ensure_positive_amount(account, amount)?;
    if account.balance < amount {
        return Err(AccountError::InsufficientFunds {
            account_id: account.id,
            amount,
        });
    }
    account
        .balance
        .checked_sub(amount)
        .ok_or(AccountError::OperationOverflow {
            account_id: account.id,
            amount,
        })
}

fn ensure_positive_amount(account: &Account, amount: Decimal) -> Result<(), AccountError> {
    if amount <= Decimal::ZERO {
        return Err(AccountError::InvalidAmount {
            account_id: account.id,
            amount,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use assert2::let_assert;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::account::AccountKind;
    use crate::operation::ClientId;

    use super::*;

    #[test]
    fn deposit_increases_balance() {
        let mut account = checking_account(1);
        deposit(&mut account, dec("5.50")).unwrap();
        deposit(&mut account, dec("4.50")).unwrap();
        assert_eq!(dec("10.00"), account.balance());
    }

    #[rstest]
    #[case("0")]
    #[case("-3.5")]
    fn deposit_non_positive_amount_errors_and_leaves_balance_unchanged(#[case] amount: &str) {
        let mut account = checking_account(1);
        let res = deposit(&mut account, dec(amount));
        let_assert!(Err(AccountError::InvalidAmount { account_id, amount: err_amount }) = res);
        assert_eq!(AccountId(1), account_id);
        assert_eq!(dec(amount), err_amount);
        assert_eq!(Decimal::ZERO, account.balance());
    }

    #[test]
    fn withdraw_subtracts_exactly() {
        let mut account = checking_account(1);
        deposit(&mut account, dec("10.00")).unwrap();
        withdraw(&mut account, dec("3.25")).unwrap();
        assert_eq!(dec("6.75"), account.balance());
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    fn withdraw_non_positive_amount_errors(#[case] amount: &str) {
        let mut account = checking_account(1);
        deposit(&mut account, dec("10.00")).unwrap();
        let res = withdraw(&mut account, dec(amount));
        let_assert!(Err(AccountError::InvalidAmount { .. }) = res);
        assert_eq!(dec("10.00"), account.balance());
    }

    #[test]
    fn withdraw_more_than_balance_errors_and_leaves_balance_unchanged() {
        let mut account = checking_account(1);
        deposit(&mut account, dec("60.00")).unwrap();
        let res = withdraw(&mut account, dec("1000.0"));
        let_assert!(Err(AccountError::InsufficientFunds { account_id, amount }) = res);
        assert_eq!(AccountId(1), account_id);
        assert_eq!(dec("1000.0"), amount);
        assert_eq!(dec("60.00"), account.balance());
    }

    #[test]
    fn transfer_conserves_the_total_across_both_accounts() {
        let mut source = checking_account(1);
        let mut target = savings_account(2);
        deposit(&mut source, dec("100.0")).unwrap();
        deposit(&mut target, dec("7.0")).unwrap();
        transfer(&mut source, Some(&mut target), dec("40.0")).unwrap();
        assert_eq!(dec("60.0"), source.balance());
        assert_eq!(dec("47.0"), target.balance());
        assert_eq!(dec("107.0"), source.balance() + target.balance());
    }

    #[test]
    fn transfer_with_insufficient_funds_leaves_both_balances_unchanged() {
        let mut source = checking_account(1);
        let mut target = savings_account(2);
        deposit(&mut source, dec("10.0")).unwrap();
        let res = transfer(&mut source, Some(&mut target), dec("40.0"));
        let_assert!(Err(AccountError::InsufficientFunds { .. }) = res);
        assert_eq!(dec("10.0"), source.balance());
        assert_eq!(Decimal::ZERO, target.balance());
    }

    #[test]
    fn transfer_without_target_errors_and_leaves_source_unchanged() {
        let mut source = checking_account(1);
        deposit(&mut source, dec("10.0")).unwrap();
        let res = transfer(&mut source, None, dec("5.0"));
        let_assert!(Err(AccountError::InvalidTarget { account_id }) = res);
        assert_eq!(AccountId(1), account_id);
        assert_eq!(dec("10.0"), source.balance());
    }

    #[test]
    fn update_monthly_charges_checking_fee_with_no_floor() {
        let mut account = checking_account(1);
        deposit(&mut account, dec("5.0")).unwrap();
        update_monthly(&mut account);
        assert_eq!(dec("-15.0"), account.balance());
    }

    #[test]
    fn update_monthly_credits_savings_interest() {
        let mut account = savings_account(2);
        deposit(&mut account, dec("40.0")).unwrap();
        update_monthly(&mut account);
        assert_eq!(dec("40.40"), account.balance());
    }

    #[test]
    fn update_monthly_saturates_a_savings_balance_at_the_numeric_maximum() {
        let mut account = savings_account(2);
        deposit(&mut account, Decimal::MAX).unwrap();
        update_monthly(&mut account);
        assert_eq!(Decimal::MAX, account.balance());
    }

    #[test]
    fn update_monthly_saturates_a_checking_balance_at_the_numeric_minimum() {
        let mut account = checking_account(1);
        account.balance = Decimal::MIN;
        update_monthly(&mut account);
        assert_eq!(Decimal::MIN, account.balance());
    }

    fn checking_account(id: u32) -> Account {
        Account::new(AccountId(id), ClientId("c1".to_owned()), AccountKind::Checking)
    }

    fn savings_account(id: u32) -> Account {
        Account::new(AccountId(id), ClientId("c1".to_owned()), AccountKind::Savings)
    }

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }
}
