//! Existence guard
//!
//! Deleting the files of an account that is still live needs an explicit
//! yes from the operator. Anything but a yes declines.

use crate::domain::ports::{AccountManager, Confirmation};
use crate::domain::value_objects::AccountId;

/// Question asked when the account is still known to the account system
pub fn confirmation_prompt(account: &AccountId) -> String {
    format!(
        "User {} still exists as a user, are you sure you want to delete all of its files?",
        account
    )
}

/// Returns `true` when the cleanup may proceed.
pub fn check_and_confirm(
    account: &AccountId,
    accounts: &dyn AccountManager,
    confirm: &dyn Confirmation,
) -> bool {
    if !accounts.user_exists(account) {
        return true;
    }

    confirm.confirm(&confirmation_prompt(account))
}
