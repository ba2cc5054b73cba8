use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::{account::Account, user::User};

use super::{BankService, TransferError};

#[derive(Debug, Default)]
pub struct InMemoryBankService {
    users: HashMap<User, Vec<Account>>,
}

impl InMemoryBankService {
    /// Accounts of the user in the order they were attached.
    pub fn accounts(&self, passport: &str) -> Option<&[Account]> {
        self.users.get(passport).map(Vec::as_slice)
    }

    pub fn users(&self) -> impl Iterator<Item = (&User, &[Account])> {
        self.users
            .iter()
            .map(|(user, accounts)| (user, accounts.as_slice()))
    }

    /// Finds both transfer accounts in a single pass over the registry.
    /// The source wins when both sides name the same account.
    fn transfer_accounts_mut(
        &mut self,
        src_passport: &str,
        src_requisite: &str,
        dest_passport: &str,
        dest_requisite: &str,
    ) -> (Option<&mut Account>, Option<&mut Account>) {
        let mut src = None;
        let mut dest = None;
        for (user, accounts) in self.users.iter_mut() {
            let is_src = user.passport() == src_passport;
            let is_dest = user.passport() == dest_passport;
            if !is_src && !is_dest {
                continue;
            }
            for acc in accounts.iter_mut() {
                if is_src && acc.requisite() == src_requisite {
                    src = Some(acc);
                } else if is_dest && acc.requisite() == dest_requisite {
                    dest = Some(acc);
                }
            }
        }
        (src, dest)
    }

    fn transfer(
        &mut self,
        src_passport: &str,
        src_requisite: &str,
        dest_passport: &str,
        dest_requisite: &str,
        amount: Decimal,
    ) -> Result<(), TransferError> {
        if src_passport == dest_passport && src_requisite == dest_requisite {
            let acc = self
                .find_by_requisite(src_passport, src_requisite)
                .ok_or(TransferError::SourceAccountNotFound)?;
            // debit and credit of the same account cancel out
            acc.handle_debit(amount)?;
            return Ok(());
        }

        let (src, dest) =
            self.transfer_accounts_mut(src_passport, src_requisite, dest_passport, dest_requisite);
        let src = src.ok_or(TransferError::SourceAccountNotFound)?;
        let dest = dest.ok_or(TransferError::DestinationAccountNotFound)?;
        let debit = src.handle_debit(amount)?;
        let credit = dest.handle_credit(amount)?;
        src.apply(&debit);
        dest.apply(&credit);
        Ok(())
    }
}

impl BankService for InMemoryBankService {
    fn add_user(&mut self, user: User) {
        if self.users.contains_key(user.passport()) {
            debug!(passport = user.passport(), "user already registered");
            return;
        }
        self.users.insert(user, Vec::new());
    }

    fn add_account(&mut self, passport: &str, account: Account) {
        let Some(accounts) = self.users.get_mut(passport) else {
            debug!(passport, "cannot attach account, user not found");
            return;
        };
        if accounts.contains(&account) {
            debug!(
                passport,
                requisite = account.requisite(),
                "account already attached"
            );
            return;
        }
        accounts.push(account);
    }

    fn find_by_passport(&self, passport: &str) -> Option<&User> {
        self.users.get_key_value(passport).map(|(user, _)| user)
    }

    fn find_by_requisite(&self, passport: &str, requisite: &str) -> Option<&Account> {
        self.users
            .get(passport)?
            .iter()
            .find(|acc| acc.requisite() == requisite)
    }

    fn try_transfer_money(
        &mut self,
        src_passport: &str,
        src_requisite: &str,
        dest_passport: &str,
        dest_requisite: &str,
        amount: Decimal,
    ) -> Result<(), TransferError> {
        self.transfer(src_passport, src_requisite, dest_passport, dest_requisite, amount)
            .inspect_err(|err| {
                debug!(
                    src_passport,
                    src_requisite,
                    dest_passport,
                    dest_requisite,
                    %amount,
                    %err,
                    "transfer refused"
                );
            })?;
        trace!(
            src_passport,
            src_requisite,
            dest_passport,
            dest_requisite,
            %amount,
            "transfer applied"
        );
        Ok(())
    }
}
