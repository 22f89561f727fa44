//! Carnet Core Library
//!
//! Address book with duplicate contact detection and merging.
//! Contacts live in a [`ContactStore`]; [`find_duplicates`] flags likely
//! duplicate pairs and [`MergeEngine`] reconciles a pair into one record.

pub mod api;
pub mod contact;
pub mod storage;

pub use api::{
    CallbackHandler, CarnetError, CarnetEvent, CarnetResult, ContactManager, EventDispatcher,
    EventHandler, MergeEngine, MergeOutcome,
};
pub use contact::{
    field_similarity, find_duplicates, is_blank, levenshtein, score, validate_contact,
    ContactId, ContactRecord, DuplicatePair, MergeField, SimilarityBreakdown, ValidationError,
    DUPLICATE_THRESHOLD,
};
pub use storage::{ContactStore, MemoryStore, Storage, StorageError};
