//! The content request pipeline

pub mod pipeline;

// Re-export the main entry point for convenience
pub use pipeline::process_request;

/// Canonical failure message shown to users when generation fails.
pub const CANONICAL_FAILURE_MESSAGE: &str =
    "Sorry, I couldn't generate the blog at this time. Please try again later.";
