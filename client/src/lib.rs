//! Peer probe interface and data model for peer-atlas.
//!
//! This crate defines the addresses peers are known by, the outcomes the
//! probe API can report, and the [`PeerClient`] trait through which the
//! topology tooling talks to a network. The physical transport behind the
//! trait is deliberately not part of this crate.

mod address;
mod client;
mod error;

pub use address::{AddressParseError, PeerAddress};
pub use client::{Liveness, PeerClient, PeerTime};
pub use error::ClientError;
