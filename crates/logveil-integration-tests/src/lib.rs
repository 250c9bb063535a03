//! End-to-end integration tests for LogVeil
//!
//! These tests wire configuration loading, engine construction, and the
//! tracing writer together to verify the full masking flow.
