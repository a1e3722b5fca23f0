pub mod effects;
pub mod shared_str;
pub mod surface;
pub mod types;

pub use effects::SlotEffect;
pub use shared_str::SharedStr;
pub use surface::{RecordingSurface, SlotSurface};
pub use types::{SlotContent, SlotHandle};
