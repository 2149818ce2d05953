use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

#[derive(Debug, Serialize, Deserialize, Clone, Hash, PartialEq, Eq, Ord, PartialOrd, parse_display::Display)]
pub struct ClientId(pub String);

#[derive(Debug, Serialize, Deserialize, Copy, Clone, Hash, PartialEq, Eq, Ord, PartialOrd, parse_display::Display)]
pub struct AccountId(pub u32);

/// A single ledger command, decodable from a CSV row of the form
/// `op,client,name,account,to,amount`.
#[derive(Debug, Clone, parse_display::Display)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum Operation {
    #[display("op=(add_client client_id={client_id} name={name})")]
    AddClient { client_id: ClientId, name: String },
    #[display("op=(deposit account_id={account_id} amount={amount})")]
    Deposit { account_id: AccountId, amount: Decimal },
    #[display("op=(withdraw account_id={account_id} amount={amount})")]
    Withdraw { account_id: AccountId, amount: Decimal },
    #[display("op=(transfer from={from} to={to} amount={amount})")]
    Transfer {
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    },
    #[display("op=(update_monthly)")]
    UpdateMonthly,
}

impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct CsvRow {
            op: String,
            client: Option<ClientId>,
            name: Option<String>,
            account: Option<AccountId>,
            to: Option<AccountId>,
            amount: Option<Decimal>,
        }

        let row = CsvRow::deserialize(deserializer)?;

        let op = match row.op.as_str() {
            "add_client" => {
                let client_id = row.client.ok_or_else(|| serde::de::Error::missing_field("client"))?;
                let name = row.name.ok_or_else(|| serde::de::Error::missing_field("name"))?;
                Ok(Self::AddClient { client_id, name })
            }
            "deposit" => {
                let account_id = row.account.ok_or_else(|| serde::de::Error::missing_field("account"))?;
                let amount = row.amount.ok_or_else(|| serde::de::Error::missing_field("amount"))?;
                Ok(Self::Deposit { account_id, amount })
            }
            "withdraw" => {
                let account_id = row.account.ok_or_else(|| serde::de::Error::missing_field("account"))?;
                let amount = row.amount.ok_or_else(|| serde::de::Error::missing_field("amount"))?;
                Ok(Self::Withdraw { account_id, amount })
            }
            "transfer" => {
                let from = row.account.ok_or_else(|| serde::de::Error::missing_field("account"))?;
                let to = row.to.ok_or_else(|| serde::de::Error::missing_field("to"))?;
                let amount = row.amount.ok_or_else(|| serde::de::Error::missing_field("amount"))?;
                Ok(Self::Transfer { from, to, amount })
            }
            "update_monthly" => Ok(Self::UpdateMonthly),
            other => Err(serde::de::Error::unknown_variant(
                other,
                &["add_client", "deposit", "withdraw", "transfer", "update_monthly"],
            )),
        }?;

        Ok(op)
    }
}
