//! Board-service entities as the pipeline sees them.
//!
//! These are normalized from the wire shapes in `tix-board`. All of them are
//! read-only to tix; the board service owns their lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A board: the scope for lists and members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    pub closed: bool,
}

/// A list (column) on a board. Card order within a list is its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardList {
    pub id: String,
    pub name: String,
    pub closed: bool,
}

/// A card: one tracked work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    /// Free-text description, possibly a `###`-delimited form.
    pub description: String,
    /// Assigned member ids, in the order the board service returns them.
    pub member_ids: Vec<String>,
    pub closed: bool,
}

impl Card {
    /// Creation time encoded in the card id.
    ///
    /// Board-service ids are object ids whose first 8 hex digits are the
    /// creation time in Unix seconds. Returns `None` for ids that do not
    /// follow that layout.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let prefix = self.id.get(..8)?;
        let secs = i64::from_str_radix(prefix, 16).ok()?;
        DateTime::from_timestamp(secs, 0)
    }
}

/// A board member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub full_name: String,
}

/// One raw entry of a card's list-move activity log.
///
/// List names are as displayed on the board, decorations included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMove {
    pub source: String,
    pub destination: String,
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn card(id: &str) -> Card {
        Card {
            id: id.to_string(),
            name: "Weekly OTIF".to_string(),
            description: String::new(),
            member_ids: Vec::new(),
            closed: false,
        }
    }

    #[test]
    fn created_at_decodes_object_id_prefix() {
        // 0x62bab5c0 = 1656403392
        let created = card("62bab5c0a1b2c3d4e5f60718").created_at();
        assert_eq!(
            created,
            Some(Utc.with_ymd_and_hms(2022, 6, 28, 8, 3, 12).unwrap())
        );
    }

    #[test]
    fn created_at_rejects_short_or_non_hex_ids() {
        assert!(card("abc").created_at().is_none());
        assert!(card("zzzzzzzz0000").created_at().is_none());
    }
}
