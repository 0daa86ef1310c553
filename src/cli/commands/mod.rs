//! CLI command implementations

pub mod completions;
pub mod init;
pub mod stage;
pub mod status;

pub use completions::execute as completions;
pub use init::execute as init;
pub use stage::execute as stage;
pub use status::execute as status;
