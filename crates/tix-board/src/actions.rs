//! A card's list-move activity log.
//!
//! List moves are `updateCard` actions that changed `idList`. The service
//! returns them newest first, at most [`PAGE_LIMIT`] per page; older pages
//! are requested with `before=<oldest action id seen>`.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tix_core::ListMove;

use crate::{BoardClient, error::BoardError};

/// Largest page the actions endpoint serves.
const PAGE_LIMIT: usize = 1000;

const LIST_MOVE_FILTER: &str = "updateCard:idList";

#[derive(Deserialize)]
struct WireAction {
    id: String,
    date: DateTime<Utc>,
    data: WireActionData,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireActionData {
    list_before: Option<WireListRef>,
    list_after: Option<WireListRef>,
}

#[derive(Deserialize)]
struct WireListRef {
    name: String,
}

impl WireAction {
    /// Convert to a [`ListMove`], or `None` when either side of the move is missing.
    fn into_list_move(self) -> Option<ListMove> {
        let WireActionData {
            list_before,
            list_after,
        } = self.data;
        match (list_before, list_after) {
            (Some(before), Some(after)) => Some(ListMove {
                source: before.name,
                destination: after.name,
                date: self.date,
            }),
            _ => {
                tracing::warn!(action_id = %self.id, "list-move action without source or destination list");
                None
            }
        }
    }
}

impl BoardClient {
    pub(crate) async fn fetch_list_moves(&self, card_id: &str) -> Result<Vec<ListMove>, BoardError> {
        let path = format!("/cards/{}/actions", urlencoding::encode(card_id));
        let limit = PAGE_LIMIT.to_string();
        let mut actions: Vec<WireAction> = Vec::new();
        let mut before: Option<String> = None;

        loop {
            let page: Vec<WireAction> = {
                let mut query = vec![("filter", LIST_MOVE_FILTER), ("limit", limit.as_str())];
                if let Some(id) = before.as_deref() {
                    query.push(("before", id));
                }
                self.get_json(&path, &query).await?
            };
            let full_page = page.len() == PAGE_LIMIT;
            before = page.last().map(|action| action.id.clone());
            actions.extend(page);

            if !full_page {
                break;
            }
        }

        tracing::debug!(card_id, count = actions.len(), "fetched list moves");
        Ok(actions
            .into_iter()
            .filter_map(WireAction::into_list_move)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"[
        {
            "id": "a3",
            "type": "updateCard",
            "date": "2022-07-04T10:00:00.000Z",
            "data": {
                "card": {"id": "c1", "name": "Weekly OTIF"},
                "listBefore": {"id": "l2", "name": "⏳ 2. In Progress"},
                "listAfter": {"id": "l4", "name": "🎉 4. Done"}
            }
        },
        {
            "id": "a2",
            "type": "updateCard",
            "date": "2022-07-02T00:00:00.000Z",
            "data": {"card": {"id": "c1"}, "old": {"idList": "l9"}}
        },
        {
            "id": "a1",
            "type": "updateCard",
            "date": "2022-07-01T09:15:00.000Z",
            "data": {
                "listBefore": {"id": "l1", "name": "📥 1. Backlog"},
                "listAfter": {"id": "l2", "name": "⏳ 2. In Progress"}
            }
        }
    ]"#;

    #[test]
    fn parses_list_moves_newest_first() {
        let actions: Vec<WireAction> = serde_json::from_str(FIXTURE).unwrap();
        let moves: Vec<ListMove> = actions
            .into_iter()
            .filter_map(WireAction::into_list_move)
            .collect();

        assert_eq!(
            moves,
            vec![
                ListMove {
                    source: "⏳ 2. In Progress".into(),
                    destination: "🎉 4. Done".into(),
                    date: Utc.with_ymd_and_hms(2022, 7, 4, 10, 0, 0).unwrap(),
                },
                ListMove {
                    source: "📥 1. Backlog".into(),
                    destination: "⏳ 2. In Progress".into(),
                    date: Utc.with_ymd_and_hms(2022, 7, 1, 9, 15, 0).unwrap(),
                },
            ]
        );
    }

    #[test]
    fn missing_date_is_a_parse_error() {
        let json = r#"[{"id": "a1", "data": {}}]"#;
        assert!(serde_json::from_str::<Vec<WireAction>>(json).is_err());
    }
}
