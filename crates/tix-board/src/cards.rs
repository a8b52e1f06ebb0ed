//! Lists on a board and the cards inside them.

use serde::Deserialize;
use tix_core::{BoardList, Card, TraversalPolicy};

use crate::{BoardClient, error::BoardError};

#[derive(Deserialize)]
struct WireList {
    id: String,
    name: String,
    #[serde(default)]
    closed: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCard {
    id: String,
    name: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    id_members: Vec<String>,
    #[serde(default)]
    closed: bool,
}

impl From<WireList> for BoardList {
    fn from(wire: WireList) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            closed: wire.closed,
        }
    }
}

impl From<WireCard> for Card {
    fn from(wire: WireCard) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            description: wire.desc,
            member_ids: wire.id_members,
            closed: wire.closed,
        }
    }
}

impl BoardClient {
    pub(crate) async fn fetch_lists(&self, board_id: &str) -> Result<Vec<BoardList>, BoardError> {
        let path = format!("/boards/{}/lists", urlencoding::encode(board_id));
        let lists: Vec<WireList> = self
            .get_json(&path, &[("filter", "all"), ("fields", "name,closed")])
            .await?;
        Ok(lists.into_iter().map(BoardList::from).collect())
    }

    pub(crate) async fn fetch_cards(
        &self,
        list_id: &str,
        policy: TraversalPolicy,
    ) -> Result<Vec<Card>, BoardError> {
        let path = format!(
            "/lists/{}/cards/{}",
            urlencoding::encode(list_id),
            policy.card_filter()
        );
        let cards: Vec<WireCard> = self
            .get_json(&path, &[("fields", "name,desc,idMembers,closed")])
            .await?;
        Ok(cards.into_iter().map(Card::from).collect())
    }
}
