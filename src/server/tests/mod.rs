//! Unit tests for the HTTP transport.
