pub mod memory;
pub mod models;
pub mod runtime;

/// Code generated from `schema/cascade.dbg` by the build script.
#[allow(clippy::all, dead_code)]
pub mod db {
    include!(concat!(env!("OUT_DIR"), "/db.rs"));
}

pub mod prelude {
    pub use crate::db::*;
    pub use crate::memory::{MemoryError, MemorySession, Op};
    pub use crate::models::Sex;
    pub use crate::runtime::{Session, Table};
}
