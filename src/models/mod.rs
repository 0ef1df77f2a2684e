mod category;
mod kind;
mod transaction;

pub use category::Category;
pub use kind::TxnKind;
pub use transaction::Transaction;
