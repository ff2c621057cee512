pub mod entry;

pub use entry::EntryRecord;
