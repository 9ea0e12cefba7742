// Document pipeline: fetch a PDF over HTTP, then extract its text.
// Both stages are transient per-request; nothing is cached or persisted.

pub mod extract;
pub mod fetch;
