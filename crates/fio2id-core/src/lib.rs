//! Shared types for the fio2id identifier generator.
//!
//! - [`slot`] -- Name slot indices and the unknown marker
//! - [`record`] -- Fixed-width name records flowing through the pipeline
//! - [`character`] -- Identifier character allow-set and sanitising

pub mod character;
pub mod record;
pub mod slot;

pub use record::NameRecord;
pub use slot::{SlotIndex, UNKNOWN_MARKER};
