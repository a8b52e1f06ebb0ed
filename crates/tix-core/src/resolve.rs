//! Display resolution for member ids and label names.
//!
//! The HTTP lookups live in `tix-board`; this module owns the joining rules
//! so both stay testable without a network.

use std::collections::HashMap;

use crate::entities::Member;
use crate::errors::CoreError;
use crate::sentinel::{NO_MEMBERS, NOT_AVAILABLE};

/// Separator between names in a joined display string.
pub const NAME_SEPARATOR: &str = ", ";

/// Member id → full name for one board, built once per export run.
#[derive(Debug, Clone, Default)]
pub struct MemberDirectory {
    names: HashMap<String, String>,
}

impl MemberDirectory {
    #[must_use]
    pub fn from_members(members: impl IntoIterator<Item = Member>) -> Self {
        let names = members
            .into_iter()
            .map(|member| (member.id, member.full_name))
            .collect();
        Self { names }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Join the names of `ids` in input order.
    ///
    /// An empty id list yields [`NO_MEMBERS`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownMember`] if an id is not on the board.
    pub fn display_names(&self, ids: &[String]) -> Result<String, CoreError> {
        if ids.is_empty() {
            return Ok(NO_MEMBERS.to_string());
        }

        let names = ids
            .iter()
            .map(|id| {
                self.names
                    .get(id)
                    .map(String::as_str)
                    .ok_or_else(|| CoreError::UnknownMember { id: id.clone() })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names.join(NAME_SEPARATOR))
    }
}

/// Join label names in the order the board service returned them.
///
/// No labels yields [`NOT_AVAILABLE`].
#[must_use]
pub fn format_labels<S: AsRef<str>>(names: &[S]) -> String {
    if names.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    names
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(NAME_SEPARATOR)
}
