//! Command implementations for OxiBWT CLI.

pub mod batch;
pub mod forward;
pub mod interactive;
pub mod inverse;
pub mod measure;
pub mod presets;
pub mod size;

pub use batch::cmd_batch;
pub use forward::cmd_forward;
pub use interactive::cmd_interactive;
pub use inverse::cmd_inverse;
pub use measure::cmd_measure;
pub use presets::{cmd_presets, resolve_sequence};
pub use size::cmd_size;
