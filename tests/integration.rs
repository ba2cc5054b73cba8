use std::{cell::RefCell, rc::Rc, str::from_utf8};

use bank_registry::{bin_utils::Service, registry::RegistryError};

const TEST_FILE: &str = include_str!("operations.csv");

#[test]
fn replay_operations() {
    let mut output = Vec::new();
    let errors = Rc::new(RefCell::new(Vec::new()));
    let collected = Rc::clone(&errors);
    let service = Service {
        input: TEST_FILE.as_bytes(),
        output: &mut output,
        error_printer: Box::new(move |line, err| {
            let kind = match err {
                RegistryError::CommandErr(_) => "command",
                RegistryError::TransferErr(_) => "transfer",
            };
            collected.borrow_mut().push((line, kind, err.to_string()));
        }),
    };
    service.run().unwrap();

    let lines: Vec<&str> = from_utf8(&output).unwrap().lines().collect();
    assert_eq!(
        lines,
        [
            "passport,requisite,balance",
            "1111,113,0",
            "3434,5546,70",
            "3434,7777,85",
            "7070,big1,50000000000000000000000000000",
            "7070,big2,50000000000000000000000000000",
        ]
    );

    let errors = errors.borrow();
    let summary: Vec<_> = errors
        .iter()
        .map(|(_, kind, msg)| (*kind, msg.as_str()))
        .collect();
    assert_eq!(
        summary,
        [
            ("transfer", "Insufficient funds"),
            ("transfer", "Source account not found"),
            ("command", "Amount must not be negative for Transfer"),
            ("command", "Field `amount` is required for Transfer"),
            ("transfer", "Balance overflow"),
            ("command", "Field `name` is required for User"),
        ]
    );
    // errors are reported in input order
    assert!(errors.windows(2).all(|pair| pair[0].0 < pair[1].0));
}

#[test]
fn malformed_row_aborts_replay() {
    let mut output = Vec::new();
    let service = Service {
        input: "type,passport\nrefund,3434\n".as_bytes(),
        output: &mut output,
        error_printer: Box::new(|_, _| {}),
    };
    let err = service.run().unwrap_err();
    assert!(err.to_string().starts_with("Malformed operation at line"));
}
