pub mod locator;
pub mod locking;
pub mod persist;
pub mod registry;

pub use locator::{find, inventory, list_stage, LocatedCard};
pub use locking::KeyLock;
pub use persist::{backup_path, render, save};
pub use registry::StageRegistry;
