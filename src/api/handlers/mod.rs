//! API HTTP handlers.

mod comparison;
mod transactions;

pub use comparison::{compare_transaction, run_benchmark};
pub use transactions::{
    create_transaction, delete_transaction, get_transaction, invalid_endpoint, list_transactions,
    unsupported_method, update_transaction,
};
