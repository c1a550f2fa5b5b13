//! Photo catalog value types
//!
//! The catalog itself is assembled by the surrounding layer (scraper, disk
//! scanner); this module only defines the records the selection and rendering
//! pipeline consume. A fresh catalog snapshot is supplied on every pick.

/// Photo descriptor value type
pub mod photo;

pub use photo::PhotoRecord;
