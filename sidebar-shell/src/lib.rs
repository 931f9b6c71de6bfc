pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{ClassNames, ElementIds, SidebarConfig, DEFAULT_STORAGE_KEY};
pub use controller::{Bindings, SidebarController, SidebarState};
pub use dom::{ClassList, SidebarElements};
pub use error::ShellError;
pub use storage::{CollapsedState, FlagStore, MemoryStore};

#[cfg(target_arch = "wasm32")]
pub use web::{start, LocalStore, SidebarShell, WebElement};
