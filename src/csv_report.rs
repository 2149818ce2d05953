use csv::Writer;
use serde::Serialize;
use toybank::account::Account;
use toybank::operation::AccountId;
use toybank::operation::ClientId;

/// Writes the supplied [`Account`]s to stdout as CSV, one row per account, in
/// the iteration order of `accounts`. Balances are rendered to two decimal
/// places, matching the account display convention.
///
/// The caller is expected to pass the accounts in ascending id order to keep
/// the report reproducible across runs (the backing registry is a
/// [`std::collections::HashMap`], so its own iteration order is arbitrary).
pub fn write_to_stdout<'a, I>(accounts: I) -> color_eyre::Result<()>
where
    I: IntoIterator<Item = &'a Account>,
{
    let mut writer = Writer::from_writer(std::io::stdout());
    for account in accounts {
        writer.serialize(AccountReport::from(account))?;
    }
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct AccountReport {
    kind: String,
    id: AccountId,
    client_id: ClientId,
    balance: String,
}

impl From<&Account> for AccountReport {
    fn from(account: &Account) -> Self {
        Self {
            kind: account.kind().to_string(),
            id: account.id(),
            client_id: account.client_id().clone(),
            balance: format!("{:.2}", account.balance()),
        }
    }
}
