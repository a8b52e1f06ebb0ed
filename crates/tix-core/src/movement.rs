//! Movement reconstruction from a card's list-move log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::entities::ListMove;

/// Timestamp layout used in export rows (`28/06/2022, 08:03:12`).
pub const MOVEMENT_DATE_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// A card moving from one list to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    /// Source list name, alphabetic characters only.
    pub source: String,
    /// Destination list name, alphabetic characters only.
    pub destination: String,
    pub at: DateTime<Utc>,
}

impl Movement {
    /// The movement time rendered with [`MOVEMENT_DATE_FORMAT`] in UTC.
    #[must_use]
    pub fn formatted_at(&self) -> String {
        self.at.format(MOVEMENT_DATE_FORMAT).to_string()
    }
}

/// Rebuild the chronological movement history of a card.
///
/// `log` is in board-service order, newest first. The returned sequence is
/// oldest first; entries the service returned out of order are put back in
/// time order, ties keeping their reversed log order.
#[must_use]
pub fn reconstruct(log: Vec<ListMove>) -> Vec<Movement> {
    let mut movements: Vec<Movement> = log
        .into_iter()
        .rev()
        .map(|entry| Movement {
            source: alphabetic_only(&entry.source),
            destination: alphabetic_only(&entry.destination),
            at: entry.date,
        })
        .collect();
    movements.sort_by_key(|m| m.at);
    movements
}

/// Strip everything but letters (general category `L*`) from a list name.
///
/// Lists are often decorated (`"🔥 1. In Progress"`); reports key on the bare
/// words (`"InProgress"`). Letter numbers such as `Ⅳ` and combining marks
/// are not letters and go too.
#[must_use]
pub fn alphabetic_only(name: &str) -> String {
    name.chars()
        .filter(|c| c.general_category_group() == GeneralCategoryGroup::Letter)
        .collect()
}
