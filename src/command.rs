use rust_decimal::{Decimal, prelude::Zero};
use serde::Deserialize;
use thiserror::Error;

use crate::{account::Account, user::User};

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    User,
    Account,
    Transfer,
}

/// Raw operation fields, validated by [`RegistryCommand::parse_command`].
#[derive(Debug, Clone, Default)]
pub struct OperationArgs {
    pub passport: Option<String>,
    pub name: Option<String>,
    pub requisite: Option<String>,
    pub amount: Option<Decimal>,
    pub dest_passport: Option<String>,
    pub dest_requisite: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TransferCommand {
    pub src_passport: String,
    pub src_requisite: String,
    pub dest_passport: String,
    pub dest_requisite: String,
    pub amount: Decimal,
}

#[derive(Debug, Error)]
pub enum OperationCommandError {
    #[error("Field `{field}` is required for {kind:?}")]
    FieldRequired {
        kind: OperationKind,
        field: &'static str,
    },
    #[error("Amount must not be negative for {kind:?}")]
    NegativeAmount { kind: OperationKind },
}

#[derive(Debug)]
pub enum RegistryCommand {
    AddUser(User),
    AddAccount { passport: String, account: Account },
    Transfer(TransferCommand),
}

fn required<T>(
    value: Option<T>,
    kind: OperationKind,
    field: &'static str,
) -> Result<T, OperationCommandError> {
    value.ok_or(OperationCommandError::FieldRequired { kind, field })
}

fn non_negative(amount: Decimal, kind: OperationKind) -> Result<Decimal, OperationCommandError> {
    if amount >= Decimal::zero() {
        Ok(amount)
    } else {
        Err(OperationCommandError::NegativeAmount { kind })
    }
}

impl RegistryCommand {
    pub fn parse_command(
        kind: OperationKind,
        args: OperationArgs,
    ) -> Result<Self, OperationCommandError> {
        let passport = required(args.passport, kind, "passport")?;
        match kind {
            OperationKind::User => {
                let name = required(args.name, kind, "name")?;
                Ok(Self::AddUser(User::new(passport, name)))
            }
            OperationKind::Account => {
                let requisite = required(args.requisite, kind, "requisite")?;
                let balance = non_negative(args.amount.unwrap_or_default(), kind)?;
                Ok(Self::AddAccount {
                    passport,
                    account: Account::new(requisite, balance),
                })
            }
            OperationKind::Transfer => Ok(Self::Transfer(TransferCommand {
                src_passport: passport,
                src_requisite: required(args.requisite, kind, "requisite")?,
                dest_passport: required(args.dest_passport, kind, "dest_passport")?,
                dest_requisite: required(args.dest_requisite, kind, "dest_requisite")?,
                amount: non_negative(required(args.amount, kind, "amount")?, kind)?,
            })),
        }
    }
}
