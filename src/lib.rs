pub mod git;
pub mod paths;
pub mod preflight;
pub mod report;
pub mod transplant;

// Re-export commonly used types
pub use preflight::PreflightError;
pub use transplant::{TransplantError, Workspace};
