//! This module could be a separate crate on its own, to replay registry operations
//! against [`bank_registry`](crate) from a binary. For simplicity it lives in the library.

use std::io::{Read, Write};

use crate::{
    command::RegistryCommand,
    registry::{BankService, RegistryError, in_memory::InMemoryBankService},
};
use anyhow::Result;
use csv_parser::CsvOperationParser;
use csv_printer::{AccountRow, print_accounts};
use tracing::info;
pub mod csv_parser;
pub mod csv_printer;

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, RegistryError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvOperationParser::new(self.input);

        let mut bank = InMemoryBankService::default();

        let mut processed = 0usize;
        for (line, row) in parser {
            let row = match row {
                Ok(row) => row,
                Err(err) => anyhow::bail!("Malformed operation at line {line}: {err}"),
            };
            let (kind, args) = row.into_parts();
            let result = RegistryCommand::parse_command(kind, args)
                .map_err(RegistryError::from)
                .and_then(|cmd| bank.execute(cmd));
            if let Err(err) = result {
                (self.error_printer)(line, err);
            }
            processed += 1;
        }
        info!(processed, "operations replayed");

        let mut rows: Vec<_> = bank
            .users()
            .flat_map(|(user, accounts)| {
                accounts.iter().map(move |acc| AccountRow {
                    passport: user.passport(),
                    requisite: acc.requisite(),
                    balance: acc.balance(),
                })
            })
            .collect();
        rows.sort_by(|a, b| (a.passport, a.requisite).cmp(&(b.passport, b.requisite)));

        print_accounts(self.output, rows.into_iter())
    }
}
