//! Root ledger registry.
//!
//! [`Agency`] owns every [`Account`] and [`Client`], assigns account ids and
//! is the sole entry point for ledger operations. All mutations take
//! `&mut self`; callers sharing an [`Agency`] across threads must wrap it in
//! their own lock since no operation is safe against interleaved mutation of
//! the same account.

use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;

use crate::account;
use crate::account::Account;
use crate::account::AccountError;
use crate::account::AccountKind;
use crate::client::Client;
use crate::operation::AccountId;
use crate::operation::ClientId;
use crate::operation::Operation;

#[cfg(test)]
#[path = "tests/agency_tests.rs"]
mod agency_tests;

pub struct Agency {
    accounts: HashMap<AccountId, Account>,
    clients: HashMap<ClientId, Client>,
    next_account_id: u32,
}

impl Agency {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
            clients: HashMap::new(),
            next_account_id: 1,
        }
    }

    /// Registers a new client together with its two accounts: one checking
    /// account, then one savings account, on the next two sequential ids.
    ///
    /// The duplicate check runs before anything is created, so a failed call
    /// leaves the registry untouched and burns no account ids.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `client_id` is already registered ([`AgencyError::DuplicateClient`]).
    pub fn add_client(&mut self, client_id: ClientId, name: String) -> Result<(), AgencyError> {
        if self.clients.contains_key(&client_id) {
            return Err(AgencyError::DuplicateClient { client_id });
        }

        let mut client = Client::new(client_id.clone(), name);
        client.add_account(self.open_account(client_id.clone(), AccountKind::Checking));
        client.add_account(self.open_account(client_id.clone(), AccountKind::Savings));
        self.clients.insert(client_id, client);

        Ok(())
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    pub fn client(&self, client_id: &ClientId) -> Option<&Client> {
        self.clients.get(client_id)
    }

    /// Deposits `amount` into the account registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `id` is not registered ([`AgencyError::AccountNotFound`]).
    /// - The deposit itself fails ([`AccountError`]).
    pub fn deposit(&mut self, id: AccountId, amount: Decimal) -> Result<(), AgencyError> {
        let account = self.account_mut(id)?;
        account::deposit(account, amount)?;
        Ok(())
    }

    /// Withdraws `amount` from the account registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `id` is not registered ([`AgencyError::AccountNotFound`]).
    /// - The withdrawal itself fails ([`AccountError`]).
    pub fn withdraw(&mut self, id: AccountId, amount: Decimal) -> Result<(), AgencyError> {
        let account = self.account_mut(id)?;
        account::withdraw(account, amount)?;
        Ok(())
    }

    /// Moves `amount` from the account under `from` to the account under `to`.
    ///
    /// Either both legs happen or neither does: a failure on any check leaves
    /// both balances untouched. A transfer onto the same account validates the
    /// amount and the funds, then nets out to no balance change.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either id is not registered ([`AgencyError::AccountNotFound`]).
    /// - The transfer itself fails ([`AccountError`]).
    pub fn transfer(&mut self, from: AccountId, to: AccountId, amount: Decimal) -> Result<(), AgencyError> {
        if !self.accounts.contains_key(&to) {
            return Err(AgencyError::AccountNotFound { id: to });
        }

        if from == to {
            let account = self.account_mut(from)?;
            account::withdraw(account, amount)?;
            account::deposit(account, amount)?;
            return Ok(());
        }

        let [source, target] = self.accounts.get_disjoint_mut([&from, &to]);
        let source = source.ok_or(AgencyError::AccountNotFound { id: from })?;
        account::transfer(source, target, amount)?;
        Ok(())
    }

    /// Applies each account's own monthly rule to its balance, exactly once
    /// per registered account. The rules depend only on the account's own
    /// prior balance, so application order is irrelevant.
    pub fn update_monthly(&mut self) {
        for account in self.accounts.values_mut() {
            account::update_monthly(account);
        }
    }

    /// Dispatches a decoded [`Operation`] to the matching ledger operation.
    ///
    /// # Errors
    ///
    /// Propagates the [`AgencyError`] of the dispatched operation.
    pub fn apply(&mut self, op: Operation) -> Result<(), AgencyError> {
        match op {
            Operation::AddClient { client_id, name } => self.add_client(client_id, name),
            Operation::Deposit { account_id, amount } => self.deposit(account_id, amount),
            Operation::Withdraw { account_id, amount } => self.withdraw(account_id, amount),
            Operation::Transfer { from, to, amount } => self.transfer(from, to, amount),
            Operation::UpdateMonthly => {
                self.update_monthly();
                Ok(())
            }
        }
    }

    pub fn accounts(&self) -> &HashMap<AccountId, Account> {
        &self.accounts
    }

    pub fn clients(&self) -> &HashMap<ClientId, Client> {
        &self.clients
    }

    /// Renders a client as `client_id:name [acc acc ...]`, with a `-`
    /// placeholder inside the brackets for a client owning no accounts.
    pub fn render_client(&self, client: &Client) -> String {
        let accounts = client
            .accounts()
            .iter()
            .filter_map(|id| self.accounts.get(id))
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        let accounts = if accounts.is_empty() { "-".to_owned() } else { accounts.join(" ") };
        format!("{}:{} [{}]", client.client_id(), client.name(), accounts)
    }

    fn open_account(&mut self, client_id: ClientId, kind: AccountKind) -> AccountId {
        let id = AccountId(self.next_account_id);
        self.next_account_id += 1;
        self.accounts.insert(id, Account::new(id, client_id, kind));
        id
    }

    fn account_mut(&mut self, id: AccountId) -> Result<&mut Account, AgencyError> {
        self.accounts.get_mut(&id).ok_or(AgencyError::AccountNotFound { id })
    }
}

impl Default for Agency {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Agency {
    /// Renders a client summary line followed by an account summary line,
    /// each falling back to a literal `-` when the collection is empty.
    /// Both appear in creation order: accounts by ascending id, clients by
    /// their first account id (account ids increase monotonically with
    /// registration, so this recovers registration order from a plain
    /// HashMap). The ordering is presentational only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut clients = self.clients.values().collect::<Vec<_>>();
        clients.sort_by_key(|client| client.accounts().first().copied());
        let clients = clients
            .iter()
            .map(|client| self.render_client(client))
            .collect::<Vec<_>>();
        let clients = if clients.is_empty() { "-".to_owned() } else { clients.join(" | ") };

        let mut accounts = self.accounts.values().collect::<Vec<_>>();
        accounts.sort_by_key(|account| account.id());
        let accounts = accounts.iter().map(ToString::to_string).collect::<Vec<_>>();
        let accounts = if accounts.is_empty() { "-".to_owned() } else { accounts.join(" ") };

        write!(f, "clients: {clients}\naccounts: {accounts}")
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AgencyError {
    #[error("account not found id={id}")]
    AccountNotFound { id: AccountId },
    #[error("client already registered client_id={client_id}")]
    DuplicateClient { client_id: ClientId },
    #[error(transparent)]
    Account(#[from] AccountError),
}
