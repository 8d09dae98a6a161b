//! Package-manager installers.

mod process;
mod recording;

pub use process::ProcessInstaller;
pub use recording::RecordingInstaller;
