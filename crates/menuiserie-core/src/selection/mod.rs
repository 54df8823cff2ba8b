//! Selection state: the customer's choices and the session editing them.

mod dimension;
mod patch;
#[allow(clippy::module_inception)]
mod selection;
mod session;

pub use dimension::{
    clamp_dimension, Axis, Dimension, DEFAULT_DIMENSION_CM, MAX_DIMENSION_CM, MIN_DIMENSION_CM,
};
pub use patch::{update_selection, SelectionPatch};
pub use selection::Selection;
pub use session::{ConfiguratorSession, EditingState, WizardStep};
