use std::fmt;

use rust_decimal::Decimal;

use crate::operation::AccountId;
use crate::operation::ClientId;

#[derive(Debug, Clone)]
pub struct Account {
    pub(in crate::account) id: AccountId,
    pub(in crate::account) client_id: ClientId,
    pub(in crate::account) kind: AccountKind,
    pub(in crate::account) balance: Decimal,
}

impl Account {
    pub fn new(id: AccountId, client_id: ClientId, kind: AccountKind) -> Self {
        Self {
            id,
            client_id,
            kind,
            balance: Decimal::ZERO,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }
}

impl fmt::Display for Account {
    /// Renders as `kind:id:client_id:balance` with the balance to two decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{:.2}", self.kind, self.id, self.client_id, self.balance)
    }
}

/// The two account variants, each with its own monthly-update rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, parse_display::Display)]
pub enum AccountKind {
    #[display("CC")]
    Checking,
    #[display("PP")]
    Savings,
}
