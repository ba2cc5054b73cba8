use rust_decimal::Decimal;
use thiserror::Error;

pub type Requisite = String;

#[derive(Debug, PartialEq, Eq)]
pub enum AccountEventKind {
    Debited,
    Credited,
}

#[derive(Debug)]
pub struct AccountEvent {
    amount: Decimal,
    kind: AccountEventKind,
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Insufficient funds")]
    InsufficientFunds,
    #[error("Balance overflow")]
    BalanceOverflow,
}

#[derive(Debug, Clone)]
pub struct Account {
    requisite: Requisite,
    balance: Decimal,
}

impl Account {
    pub fn new(requisite: impl Into<Requisite>, balance: Decimal) -> Self {
        Self {
            requisite: requisite.into(),
            balance,
        }
    }

    pub fn requisite(&self) -> &str {
        &self.requisite
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn apply(&mut self, event: &AccountEvent) {
        match event.kind {
            AccountEventKind::Debited => {
                self.balance -= event.amount;
            }
            AccountEventKind::Credited => {
                self.balance += event.amount;
            }
        }
    }

    /// Amount sign is not checked, a negative debit is accepted as long
    /// as the balance is not below it and the result still fits.
    pub fn handle_debit(&self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        if self.balance < amount {
            return Err(AccountError::InsufficientFunds);
        }
        if self.balance.checked_sub(amount).is_none() {
            return Err(AccountError::BalanceOverflow);
        }
        Ok(AccountEvent {
            amount,
            kind: AccountEventKind::Debited,
        })
    }

    pub fn handle_credit(&self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        if self.balance.checked_add(amount).is_none() {
            return Err(AccountError::BalanceOverflow);
        }
        Ok(AccountEvent {
            amount,
            kind: AccountEventKind::Credited,
        })
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.requisite == other.requisite
    }
}

impl Eq for Account {}
