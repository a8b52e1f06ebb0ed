//! Flattening of one card into export rows.
//!
//! A card contributes one row per movement. Card-level fields repeat on
//! every row; movement fields differ. Cards that never moved contribute no
//! rows at all.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::description::{Description, parse_description};
use crate::entities::{BoardList, Card};
use crate::movement::{Movement, alphabetic_only};
use crate::sentinel::NOT_AVAILABLE;

/// Form field names read from parsed descriptions.
pub mod field {
    pub const REPORTING_TEAM: &str = "Reporting Team";
    pub const REQUESTOR_EMAIL: &str = "Requestor email";
    pub const REPORTING_MANAGER_EMAIL: &str = "Reporting manager email";
    pub const TYPE_OF_REQUIREMENT: &str = "Type of requirement";
}

/// Which lists and cards a board traversal visits.
///
/// Listing open work and exporting history are different queries: the export
/// keeps archived lists and cards so finished tickets still report their
/// movements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalPolicy {
    /// Skip closed lists and closed cards.
    OpenOnly,
    /// Visit everything, archived included.
    All,
}

impl TraversalPolicy {
    #[must_use]
    pub const fn includes_list(self, list: &BoardList) -> bool {
        match self {
            Self::OpenOnly => !list.closed,
            Self::All => true,
        }
    }

    #[must_use]
    pub const fn includes_card(self, card: &Card) -> bool {
        match self {
            Self::OpenOnly => !card.closed,
            Self::All => true,
        }
    }

    /// The board-service `filter` value for listing cards under this policy.
    #[must_use]
    pub const fn card_filter(self) -> &'static str {
        match self {
            Self::OpenOnly => "open",
            Self::All => "all",
        }
    }
}

/// Everything about a card that repeats on each of its rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContext {
    pub created_date: Option<DateTime<Utc>>,
    /// Alphabetic-only name of the list the card was found in.
    pub current_list: String,
    pub card_name: String,
    pub card_label: String,
    pub member_name: String,
    pub description: Description,
    /// The description exactly as written, for rows that could not parse it.
    pub raw_description: String,
}

impl CardContext {
    /// Join a card with its list and resolved display strings.
    #[must_use]
    pub fn new(card: &Card, list: &BoardList, card_label: String, member_name: String) -> Self {
        Self {
            created_date: card.created_at(),
            current_list: alphabetic_only(&list.name),
            card_name: card.name.clone(),
            card_label,
            member_name,
            description: parse_description(&card.description),
            raw_description: card.description.clone(),
        }
    }

    fn detail(&self) -> RowDetail {
        match &self.description {
            Description::Parsed(_) => {
                let value_of = |name: &str| {
                    self.description
                        .field(name)
                        .unwrap_or(NOT_AVAILABLE)
                        .to_string()
                };
                RowDetail::Structured {
                    reporting_team: value_of(field::REPORTING_TEAM),
                    requestor_email: value_of(field::REQUESTOR_EMAIL),
                    reporting_manager_email: value_of(field::REPORTING_MANAGER_EMAIL),
                    type_of_requirement: value_of(field::TYPE_OF_REQUIREMENT),
                }
            }
            Description::Raw(_) => RowDetail::Freeform {
                description_pre_standardise: self.raw_description.clone(),
            },
        }
    }
}

/// The description-dependent part of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RowDetail {
    /// The card followed the intake form.
    Structured {
        reporting_team: String,
        requestor_email: String,
        reporting_manager_email: String,
        type_of_requirement: String,
    },
    /// The card description was free text.
    Freeform { description_pre_standardise: String },
}

/// One (card, movement) export row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub created_date: Option<DateTime<Utc>>,
    pub current_list: String,
    pub card_name: String,
    pub card_label: String,
    pub member_name: String,
    #[serde(flatten)]
    pub detail: RowDetail,
    pub list_from: String,
    pub list_to: String,
    pub transaction_date: String,
}

/// Produce one row per movement of the card.
#[must_use]
pub fn flatten_card(card: &CardContext, movements: &[Movement]) -> Vec<ExportRow> {
    if movements.is_empty() {
        return Vec::new();
    }

    let detail = card.detail();
    movements
        .iter()
        .map(|movement| ExportRow {
            created_date: card.created_date,
            current_list: card.current_list.clone(),
            card_name: card.card_name.clone(),
            card_label: card.card_label.clone(),
            member_name: card.member_name.clone(),
            detail: detail.clone(),
            list_from: movement.source.clone(),
            list_to: movement.destination.clone(),
            transaction_date: movement.formatted_at(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn card(description: &str, closed: bool) -> Card {
        Card {
            id: "62bab5c0a1b2c3d4e5f60718".into(),
            name: "Refresh supplier OTIF".into(),
            description: description.into(),
            member_ids: vec!["m1".into()],
            closed,
        }
    }

    fn list(name: &str, closed: bool) -> BoardList {
        BoardList {
            id: "l1".into(),
            name: name.into(),
            closed,
        }
    }

    fn movement(source: &str, destination: &str, hour: u32) -> Movement {
        Movement {
            source: source.into(),
            destination: destination.into(),
            at: Utc.with_ymd_and_hms(2022, 7, 1, hour, 30, 0).unwrap(),
        }
    }

    fn context(description: &str) -> CardContext {
        CardContext::new(
            &card(description, false),
            &list("✅ Done", false),
            "Urgent".into(),
            "Victor Tan".into(),
        )
    }

    #[test]
    fn parsed_card_with_two_movements_yields_two_rows() {
        let ctx = context("###Reporting Team###Growth###Requestor email###a@b.com");
        let movements = [movement("Backlog", "Doing", 9), movement("Doing", "Done", 17)];
        let rows = flatten_card(&ctx, &movements);

        assert_eq!(rows.len(), 2);
        let expected_detail = RowDetail::Structured {
            reporting_team: "Growth".into(),
            requestor_email: "a@b.com".into(),
            reporting_manager_email: "N/A".into(),
            type_of_requirement: "N/A".into(),
        };
        for row in &rows {
            assert_eq!(row.detail, expected_detail);
            assert_eq!(row.current_list, "Done");
            assert_eq!(row.card_name, "Refresh supplier OTIF");
            assert_eq!(row.card_label, "Urgent");
            assert_eq!(row.member_name, "Victor Tan");
            assert_eq!(row.created_date, ctx.created_date);
        }
        assert_eq!(rows[0].list_from, "Backlog");
        assert_eq!(rows[0].list_to, "Doing");
        assert_eq!(rows[1].list_from, "Doing");
        assert_eq!(rows[1].list_to, "Done");
        assert_eq!(rows[0].transaction_date, "01/07/2022, 09:30:00");
        assert_eq!(rows[1].transaction_date, "01/07/2022, 17:30:00");
    }

    #[test]
    fn raw_description_is_carried_verbatim() {
        let text = "Please rerun the  weekly\nreport";
        let rows = flatten_card(&context(text), &[movement("Backlog", "Done", 10)]);
        assert_eq!(
            rows[0].detail,
            RowDetail::Freeform {
                description_pre_standardise: text.into()
            }
        );
    }

    #[test]
    fn no_movements_means_no_rows() {
        let ctx = context("###Reporting Team###Growth");
        assert!(flatten_card(&ctx, &[]).is_empty());
        assert!(flatten_card(&context("free text"), &[]).is_empty());
    }

    #[test]
    fn empty_form_defaults_every_field() {
        let rows = flatten_card(&context("######"), &[movement("A", "B", 10)]);
        assert_eq!(
            rows[0].detail,
            RowDetail::Structured {
                reporting_team: "N/A".into(),
                requestor_email: "N/A".into(),
                reporting_manager_email: "N/A".into(),
                type_of_requirement: "N/A".into(),
            }
        );
    }

    #[test]
    fn json_rows_flatten_detail_fields() {
        let rows = flatten_card(&context("free text"), &[movement("A", "B", 10)]);
        let value = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(value["description_pre_standardise"], "free text");
        assert!(value.get("detail").is_none());
    }

    #[test]
    fn traversal_policies_differ_on_closed_items() {
        let closed_list = list("Archive", true);
        let closed_card = card("", true);

        assert!(!TraversalPolicy::OpenOnly.includes_list(&closed_list));
        assert!(!TraversalPolicy::OpenOnly.includes_card(&closed_card));
        assert!(TraversalPolicy::All.includes_list(&closed_list));
        assert!(TraversalPolicy::All.includes_card(&closed_card));

        assert!(TraversalPolicy::OpenOnly.includes_list(&list("Doing", false)));
        assert!(TraversalPolicy::OpenOnly.includes_card(&card("", false)));
    }

    #[test]
    fn card_filter_matches_policy() {
        assert_eq!(TraversalPolicy::OpenOnly.card_filter(), "open");
        assert_eq!(TraversalPolicy::All.card_filter(), "all");
    }
}
