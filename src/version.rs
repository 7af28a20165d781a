/// Version reported by `promptsynth health`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Binary name
pub const NAME: &str = "promptsynth";
