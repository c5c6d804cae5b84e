//! Unit tests for the message module.

mod service_tests;
