//! Guestbook: a minimal message board backend.
//!
//! This crate stores guestbook messages and decides who may write them.
//! Anyone may list and read messages and post a new one; editing an existing
//! message requires the administrative shared secret.
//!
//! # Architecture
//!
//! The guestbook follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store, HTTP)
//!
//! # Modules
//!
//! - [`access`]: Creator and admin standing, and the access policy
//! - [`message`]: Message records, the store port, and the guestbook service
//! - [`server`]: JSON-over-HTTP transport

pub mod access;
pub mod message;
pub mod server;
