//! wikictl-api: Shared wire types for the wiki resource endpoint
//!
//! Contains request bodies, response-shape validation, and the public wiki
//! URL helper used across the client, controller core, CLI, and TUI.

pub mod requests;
pub mod responses;
