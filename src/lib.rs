//! Drag and drop interaction manager for pointer-driven interfaces.
//!
//! The host registers draggable and droppable elements, forwards raw pointer
//! and scroll input, and answers hit-test queries through a [`Surface`].
//! The [`DragDropManager`] reduces that input into drag lifecycle
//! transitions and publishes immutable [`DerivedState`] snapshots to
//! subscribers.
//!
//! ## Modules
//!
//! - `manager` - The interaction manager and its public surface
//! - `input` - Reducers, snapshots, and frame coalescing
//! - `registry` - Draggable/droppable collections and hit-test policy
//! - `bus` / `watch` - Listeners and field-filtered watchers
//! - `surface` / `spatial_index` - Host hit-test boundary and an R-tree backed layout
//! - `binding` / `preview` - Helpers for view code

pub mod binding;
pub mod bus;
pub mod config;
pub mod constants;
pub mod derived;
pub mod error;
pub mod input;
pub mod logging;
pub mod manager;
pub mod perf;
pub mod preview;
pub mod registry;
pub mod spatial_index;
pub mod surface;
pub mod types;
pub mod watch;

pub use binding::{BindingConfig, ItemBinding};
pub use bus::{DragEvent, Listener, SubscriptionId};
pub use config::ManagerConfig;
pub use derived::{DerivedField, DerivedState};
pub use error::{ConfigError, ConfigResult};
pub use input::{InputEvent, InteractionState};
pub use manager::DragDropManager;
pub use preview::PreviewPlacement;
pub use surface::{Anchor, LayoutSurface, Surface};
pub use types::{DragItem, DropItem, ElementId, Item, ItemKey, ItemKind, Point, Rect};
pub use watch::{StateWatcher, WatchReader};
