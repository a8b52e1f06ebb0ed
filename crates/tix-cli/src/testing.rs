//! In-memory board service shared by command and pipeline tests.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{TimeZone, Utc};
use tix_board::{BoardApi, BoardError};
use tix_core::{Board, BoardList, Card, ListMove, Member, TraversalPolicy};

/// In-memory board that records which card filters were requested.
#[derive(Default)]
pub struct MemoryBoard {
    pub lists: Vec<BoardList>,
    pub cards: HashMap<String, Vec<Card>>,
    pub members: Vec<Member>,
    pub moves: HashMap<String, Vec<ListMove>>,
    pub labels: HashMap<String, Vec<String>>,
    pub card_filters: Mutex<Vec<&'static str>>,
}

impl BoardApi for MemoryBoard {
    async fn boards(&self) -> Result<Vec<Board>, BoardError> {
        Ok(vec![board()])
    }

    async fn lists(&self, _: &str) -> Result<Vec<BoardList>, BoardError> {
        Ok(self.lists.clone())
    }

    async fn cards(
        &self,
        list_id: &str,
        policy: TraversalPolicy,
    ) -> Result<Vec<Card>, BoardError> {
        self.card_filters.lock().unwrap().push(policy.card_filter());
        Ok(self.cards.get(list_id).cloned().unwrap_or_default())
    }

    async fn members(&self, _: &str) -> Result<Vec<Member>, BoardError> {
        Ok(self.members.clone())
    }

    async fn list_moves(&self, card_id: &str) -> Result<Vec<ListMove>, BoardError> {
        Ok(self.moves.get(card_id).cloned().unwrap_or_default())
    }

    async fn label_names(&self, card_id: &str) -> Result<Vec<String>, BoardError> {
        self.labels
            .get(card_id)
            .cloned()
            .ok_or_else(|| BoardError::NotFound(format!("/cards/{card_id}")))
    }
}

pub fn board() -> Board {
    Board {
        id: "b1".into(),
        name: "Ad-hoc Requests".into(),
        closed: false,
    }
}

pub fn list(id: &str, name: &str, closed: bool) -> BoardList {
    BoardList {
        id: id.into(),
        name: name.into(),
        closed,
    }
}

pub fn card(id: &str, name: &str, description: &str, members: &[&str], closed: bool) -> Card {
    Card {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        member_ids: members.iter().map(|m| (*m).to_string()).collect(),
        closed,
    }
}

pub fn moved(source: &str, destination: &str, day: u32) -> ListMove {
    ListMove {
        source: source.into(),
        destination: destination.into(),
        date: Utc.with_ymd_and_hms(2022, 7, day, 9, 0, 0).unwrap(),
    }
}

pub fn fixture() -> MemoryBoard {
    let mut api = MemoryBoard {
        lists: vec![
            list("l-todo", "📥 1. Backlog", false),
            list("l-done", "🎉 4. Done", false),
            list("l-old", "🗄 Archive", true),
        ],
        members: vec![
            Member {
                id: "m1".into(),
                full_name: "Victor Tan".into(),
            },
            Member {
                id: "m2".into(),
                full_name: "Yen Wee".into(),
            },
        ],
        ..MemoryBoard::default()
    };

    api.cards.insert(
        "l-todo".into(),
        vec![card("62bab5c0aaaaaaaaaaaaaaaa", "New request", "just a note", &[], false)],
    );
    api.cards.insert(
        "l-done".into(),
        vec![
            card(
                "62bab5c0bbbbbbbbbbbbbbbb",
                "Supplier OTIF",
                "###Reporting Team###Replenishment###Requestor email###ops@example.com",
                &["m1", "m2"],
                false,
            ),
            card("62bab5c0cccccccccccccccc", "Old dashboard", "plain text", &["m2"], true),
        ],
    );
    api.cards.insert(
        "l-old".into(),
        vec![card("62bab5c0dddddddddddddddd", "Retired", "", &[], true)],
    );

    api.moves.insert(
        "62bab5c0bbbbbbbbbbbbbbbb".into(),
        vec![
            moved("⏳ 2. In Progress", "🎉 4. Done", 4),
            moved("📥 1. Backlog", "⏳ 2. In Progress", 1),
        ],
    );
    api.moves.insert(
        "62bab5c0cccccccccccccccc".into(),
        vec![moved("📥 1. Backlog", "🎉 4. Done", 2)],
    );
    api.moves.insert(
        "62bab5c0dddddddddddddddd".into(),
        vec![moved("🎉 4. Done", "🗄 Archive", 3)],
    );

    for id in [
        "62bab5c0aaaaaaaaaaaaaaaa",
        "62bab5c0cccccccccccccccc",
        "62bab5c0dddddddddddddddd",
    ] {
        api.labels.insert(id.into(), Vec::new());
    }
    api.labels.insert(
        "62bab5c0bbbbbbbbbbbbbbbb".into(),
        vec!["Data".into(), "Urgent".into()],
    );
    api
}
