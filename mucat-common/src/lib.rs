//! mucat-common - Shared data shapes for the music catalog
//!
//! Plain records decoded from the catalog API. No I/O lives here.

mod catalog;
mod language;
mod music;

pub use catalog::*;
pub use language::*;
pub use music::*;
