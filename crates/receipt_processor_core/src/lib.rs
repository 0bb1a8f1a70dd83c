pub mod domain;
pub mod ports;
pub mod scoring;
pub mod service;

pub use domain::{Amount, AmountError, Item, Receipt, ReceiptError, ScoredReceipt};
pub use ports::{IdGenerator, PortError, PortResult, ReceiptStore};
pub use scoring::{breakdown, score, PointsBreakdown};
pub use service::{points_for, submit_receipt, SubmitError};
