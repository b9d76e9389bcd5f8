//! Event handlers for swap settlement

pub mod composite;
pub mod console;
pub mod journal;

// Re-export for convenience
pub use composite::CompositeEventHandler;
pub use console::ConsoleEventHandler;
pub use journal::ReceiptJournal;
