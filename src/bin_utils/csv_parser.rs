use std::io::Read;

use crate::command::{OperationArgs, OperationKind};
use csv::{DeserializeRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Operation {
    #[serde(rename = "type")]
    pub kind: OperationKind,
    pub passport: Option<String>,
    pub name: Option<String>,
    pub requisite: Option<String>,
    pub amount: Option<Decimal>,
    pub dest_passport: Option<String>,
    pub dest_requisite: Option<String>,
}

impl Operation {
    pub fn into_parts(self) -> (OperationKind, OperationArgs) {
        (
            self.kind,
            OperationArgs {
                passport: self.passport,
                name: self.name,
                requisite: self.requisite,
                amount: self.amount,
                dest_passport: self.dest_passport,
                dest_requisite: self.dest_requisite,
            },
        )
    }
}

/// Parses registry operations in CSV format, yielding each row with the
/// line it started at.
pub struct CsvOperationParser<R> {
    iter: DeserializeRecordsIntoIter<R, Operation>,
}

impl<R> CsvOperationParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvOperationParser<R>
where
    R: Read,
{
    type Item = (u64, csv::Result<Operation>);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row))
    }
}
