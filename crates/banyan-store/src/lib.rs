//! Banyan Store — append-only JSON history logs.

pub mod history;

pub use history::HistoryLog;
