//! Implementor Index
//!
//! Generated documentation fragments map a library identifier to an ordered
//! list of pre-rendered trait-implementation markup. Each fragment is handed
//! to the host's registry the moment it loads, or staged in a pending slot
//! until the host attaches and drains it.

pub mod error;
pub mod hub;
pub mod loader;
pub mod pending;
pub mod registry;
pub mod types;

pub use error::{FragmentError, MAX_FRAGMENT_BYTES};
pub use hub::{Delivery, DeliveryHub, RegisterImplementors};
pub use loader::{default_fragment_dir, load_fragments};
pub use pending::{PendingPolicy, PendingSlot};
pub use registry::ImplementorRegistry;
pub use types::{Fragment, ImplementorMap, FRAGMENT_VERSION};
