mod dashboard;
mod profile;
mod preferences;

pub use dashboard::*;
pub use profile::*;
pub use preferences::*;
