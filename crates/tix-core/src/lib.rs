//! # tix-core
//!
//! Core types and the normalization pipeline for tix.
//!
//! This crate holds everything that does not talk to the network:
//! - Board-service entities (boards, lists, cards, members, list moves)
//! - Sentinel values substituted for absent fields
//! - The `###`-delimited description parser
//! - Movement reconstruction from a card's list-move activity log
//! - Member and label display resolution
//! - Flattening of one card into one export row per movement
//! - CSV serialization of export rows

pub mod description;
pub mod entities;
pub mod errors;
pub mod export;
pub mod flatten;
pub mod movement;
pub mod resolve;
pub mod sentinel;

pub use description::{Description, parse_description};
pub use entities::{Board, BoardList, Card, ListMove, Member};
pub use errors::CoreError;
pub use flatten::{CardContext, ExportRow, RowDetail, TraversalPolicy, flatten_card};
pub use movement::{Movement, reconstruct};
pub use resolve::{MemberDirectory, format_labels};
