//! Values substituted for data that is absent upstream.
//!
//! Labels and description fields use [`NOT_AVAILABLE`]; member names use
//! [`NO_MEMBERS`]. The two policies differ on purpose and must stay that way:
//! downstream reports distinguish "unlabelled" from "unassigned".

/// A card with no labels, or a description field that was not filled in.
pub const NOT_AVAILABLE: &str = "N/A";

/// A card with no assigned members.
pub const NO_MEMBERS: &str = "";
