use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{Account, AccountError},
    command::{OperationCommandError, RegistryCommand},
    user::User,
};

pub mod in_memory;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("Source account not found")]
    SourceAccountNotFound,
    #[error("Destination account not found")]
    DestinationAccountNotFound,
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    CommandErr(#[from] OperationCommandError),
    #[error(transparent)]
    TransferErr(#[from] TransferError),
}

pub trait BankService {
    /// Registers the user unless one with the same passport already exists.
    fn add_user(&mut self, user: User);

    /// Attaches the account to the user with `passport`. Unknown passport
    /// and an already attached requisite are both ignored.
    fn add_account(&mut self, passport: &str, account: Account);

    fn find_by_passport(&self, passport: &str) -> Option<&User>;

    fn find_by_requisite(&self, passport: &str, requisite: &str) -> Option<&Account>;

    fn try_transfer_money(
        &mut self,
        src_passport: &str,
        src_requisite: &str,
        dest_passport: &str,
        dest_requisite: &str,
        amount: Decimal,
    ) -> Result<(), TransferError>;

    /// Returns `false` without touching any balance when either account is
    /// missing or the source balance is below `amount`.
    fn transfer_money(
        &mut self,
        src_passport: &str,
        src_requisite: &str,
        dest_passport: &str,
        dest_requisite: &str,
        amount: Decimal,
    ) -> bool {
        self.try_transfer_money(
            src_passport,
            src_requisite,
            dest_passport,
            dest_requisite,
            amount,
        )
        .is_ok()
    }

    fn execute(&mut self, command: RegistryCommand) -> Result<(), RegistryError> {
        match command {
            RegistryCommand::AddUser(user) => self.add_user(user),
            RegistryCommand::AddAccount { passport, account } => {
                self.add_account(&passport, account)
            }
            RegistryCommand::Transfer(cmd) => self.try_transfer_money(
                &cmd.src_passport,
                &cmd.src_requisite,
                &cmd.dest_passport,
                &cmd.dest_requisite,
                cmd.amount,
            )?,
        };
        Ok(())
    }
}
