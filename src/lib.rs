/// Bank client identity.
pub mod user;

/// Account balance management.
/// Balance is modified using events, which are created by handling debit/credit requests
pub mod account;

/// Registry commands parsed from raw operation records, later executed by [`registry`].
pub mod command;

/// Registry interface, plus "in memory" implementation.
/// Owns the user to accounts mapping and performs lookups and transfers.
///
/// NOTE: mutating operations take `&mut self`; sharing a registry between
/// threads requires wrapping the whole thing in a lock.
pub mod registry;

/// Replays CSV operations against a fresh registry and prints resulting accounts.
/// Used by the binary and by integration tests.
pub mod bin_utils;
