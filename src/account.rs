pub mod model;
pub mod ops;

pub use model::Account;
pub use model::AccountKind;
pub use ops::AccountError;
pub use ops::CHECKING_MONTHLY_FEE;
pub use ops::SAVINGS_MONTHLY_INTEREST;
pub use ops::deposit;
pub use ops::transfer;
pub use ops::update_monthly;
pub use ops::withdraw;
