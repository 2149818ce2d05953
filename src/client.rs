use crate::operation::AccountId;
use crate::operation::ClientId;

/// A registered client: a display name plus the accounts opened on its
/// behalf, in creation order. Pure aggregate with no business logic; accounts
/// are referenced by id and owned by the [`crate::agency::Agency`] registry.
#[derive(Debug, Clone)]
pub struct Client {
    client_id: ClientId,
    name: String,
    accounts: Vec<AccountId>,
}

impl Client {
    pub fn new(client_id: ClientId, name: String) -> Self {
        Self {
            client_id,
            name,
            accounts: Vec::new(),
        }
    }

    pub fn add_account(&mut self, account_id: AccountId) {
        self.accounts.push(account_id);
    }

    /// Read-only view of the owned account ids, in creation order.
    pub fn accounts(&self) -> &[AccountId] {
        &self.accounts
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn add_account_preserves_creation_order() {
        let mut client = Client::new(ClientId("c1".to_owned()), "Ana".to_owned());
        client.add_account(AccountId(1));
        client.add_account(AccountId(2));
        assert_eq!(&[AccountId(1), AccountId(2)], client.accounts());
    }
}
