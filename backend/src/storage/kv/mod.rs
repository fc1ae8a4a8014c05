//! Key-value store backends.
//!
//! - **MemoryStore**: in-process map, also models disabled or full storage
//! - **FileStore**: one JSON file per slot in the data directory (native builds)
//! - **BrowserStore**: `window.localStorage` (wasm builds)

pub mod file_store;
pub mod memory;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use file_store::FileStore;
pub use memory::MemoryStore;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;
