pub mod dataset;
pub mod model;
pub mod reconcile;
pub mod scroll;
pub mod search;
pub mod viewer;
pub mod window;

pub use dataset::{DatasetError, parse_dataset};
pub use model::{TimelineDataset, TimelineEntry};
pub use reconcile::Reconciler;
pub use scroll::ScrollState;
pub use search::find_nearest;
pub use viewer::{TimelineViewer, ViewerConfig};
pub use window::{SlotPlacement, Window, compute_window};
