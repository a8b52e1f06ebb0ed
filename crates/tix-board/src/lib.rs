//! # tix-board
//!
//! HTTP client for the board service (Trello-compatible REST API).
//!
//! Everything a ticket export needs from the board:
//! - boards visible to the token, and the one to export
//! - lists on a board and the cards in each list
//! - board members, for member-id → name resolution
//! - each card's list-move activity log
//! - each card's labels, read straight from the card endpoint
//!
//! Calls are made one at a time and are not retried here: a failed lookup
//! fails the export. The [`BoardApi`] trait is the seam the export driver is
//! written against, so it can run against in-memory boards in tests.

mod actions;
mod boards;
mod cards;
mod error;
mod http;
mod labels;
mod members;

pub use error::BoardError;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tix_core::{
    Board, BoardList, Card, ListMove, Member, MemberDirectory, TraversalPolicy, format_labels,
};

use crate::http::check_response;

// ── Trait ──────────────────────────────────────────────────────────

/// Read access to a board service.
#[allow(async_fn_in_trait)]
pub trait BoardApi {
    /// Boards visible to the credentials, in service order.
    async fn boards(&self) -> Result<Vec<Board>, BoardError>;

    /// All lists on a board, closed ones included.
    async fn lists(&self, board_id: &str) -> Result<Vec<BoardList>, BoardError>;

    /// Cards in a list, in position order, filtered by `policy`.
    async fn cards(&self, list_id: &str, policy: TraversalPolicy)
    -> Result<Vec<Card>, BoardError>;

    /// Everyone who is or was a member of the board.
    async fn members(&self, board_id: &str) -> Result<Vec<Member>, BoardError>;

    /// The card's list-move log, newest first.
    async fn list_moves(&self, card_id: &str) -> Result<Vec<ListMove>, BoardError>;

    /// Label names on a card, in service order.
    async fn label_names(&self, card_id: &str) -> Result<Vec<String>, BoardError>;

    /// Labels of a card as one display string (`"N/A"` when unlabelled).
    async fn card_label(&self, card_id: &str) -> Result<String, BoardError> {
        let names = self.label_names(card_id).await?;
        Ok(format_labels(&names))
    }

    /// Member-id → name directory for a board. Build once per run.
    async fn member_directory(&self, board_id: &str) -> Result<MemberDirectory, BoardError> {
        let members = self.members(board_id).await?;
        Ok(MemberDirectory::from_members(members))
    }

    /// The board to work on: the pinned id if given, else the first board.
    async fn resolve_board(&self, pinned: Option<&str>) -> Result<Board, BoardError> {
        let boards = self.boards().await?;
        match pinned {
            Some(id) => boards
                .into_iter()
                .find(|board| board.id == id)
                .ok_or_else(|| BoardError::NotFound(format!("board {id}"))),
            None => boards.into_iter().next().ok_or(BoardError::NoBoards),
        }
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the board-service REST API.
pub struct BoardClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    token: String,
}

impl BoardClient {
    /// Create a client for `base_url` (e.g. `https://api.trello.com/1`).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, BoardError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("tix/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            token: token.into(),
        })
    }

    /// Authenticated GET for `path` (leading slash, already encoded).
    fn get(&self, path: &str) -> RequestBuilder {
        self.http
            .get(format!("{}{path}", self.base_url))
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[("key", self.api_key.as_str()), ("token", self.token.as_str())])
    }

    /// GET `path` with extra query parameters and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, BoardError> {
        tracing::debug!(path, "board service request");
        let resp = check_response(self.get(path).query(query).send().await?).await?;
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl BoardApi for BoardClient {
    async fn boards(&self) -> Result<Vec<Board>, BoardError> {
        self.fetch_boards().await
    }

    async fn lists(&self, board_id: &str) -> Result<Vec<BoardList>, BoardError> {
        self.fetch_lists(board_id).await
    }

    async fn cards(
        &self,
        list_id: &str,
        policy: TraversalPolicy,
    ) -> Result<Vec<Card>, BoardError> {
        self.fetch_cards(list_id, policy).await
    }

    async fn members(&self, board_id: &str) -> Result<Vec<Member>, BoardError> {
        self.fetch_members(board_id).await
    }

    async fn list_moves(&self, card_id: &str) -> Result<Vec<ListMove>, BoardError> {
        self.fetch_list_moves(card_id).await
    }

    async fn label_names(&self, card_id: &str) -> Result<Vec<String>, BoardError> {
        self.fetch_label_names(card_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBoards(Vec<Board>);

    impl BoardApi for FixedBoards {
        async fn boards(&self) -> Result<Vec<Board>, BoardError> {
            Ok(self.0.clone())
        }
        async fn lists(&self, _: &str) -> Result<Vec<BoardList>, BoardError> {
            Ok(Vec::new())
        }
        async fn cards(&self, _: &str, _: TraversalPolicy) -> Result<Vec<Card>, BoardError> {
            Ok(Vec::new())
        }
        async fn members(&self, _: &str) -> Result<Vec<Member>, BoardError> {
            Ok(vec![Member {
                id: "m1".into(),
                full_name: "Victor Tan".into(),
            }])
        }
        async fn list_moves(&self, _: &str) -> Result<Vec<ListMove>, BoardError> {
            Ok(Vec::new())
        }
        async fn label_names(&self, card_id: &str) -> Result<Vec<String>, BoardError> {
            Ok(if card_id == "labelled" {
                vec!["Urgent".into(), "Data".into()]
            } else {
                Vec::new()
            })
        }
    }

    fn board(id: &str) -> Board {
        Board {
            id: id.into(),
            name: format!("Board {id}"),
            closed: false,
        }
    }

    #[test]
    fn client_builds_and_trims_base_url() {
        let client = BoardClient::new("https://api.trello.com/1/", "k", "t").unwrap();
        assert_eq!(client.base_url, "https://api.trello.com/1");
    }

    #[tokio::test]
    async fn resolve_board_defaults_to_first() {
        let api = FixedBoards(vec![board("a"), board("b")]);
        assert_eq!(api.resolve_board(None).await.unwrap().id, "a");
        assert_eq!(api.resolve_board(Some("b")).await.unwrap().id, "b");
    }

    #[tokio::test]
    async fn resolve_board_errors() {
        let empty = FixedBoards(Vec::new());
        assert!(matches!(
            empty.resolve_board(None).await,
            Err(BoardError::NoBoards)
        ));

        let api = FixedBoards(vec![board("a")]);
        assert!(matches!(
            api.resolve_board(Some("zzz")).await,
            Err(BoardError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn card_label_uses_sentinel_when_unlabelled() {
        let api = FixedBoards(Vec::new());
        assert_eq!(api.card_label("plain").await.unwrap(), "N/A");
        assert_eq!(api.card_label("labelled").await.unwrap(), "Urgent, Data");
    }

    #[tokio::test]
    async fn member_directory_is_built_from_members() {
        let api = FixedBoards(Vec::new());
        let directory = api.member_directory("board").await.unwrap();
        assert_eq!(
            directory.display_names(&["m1".to_string()]).unwrap(),
            "Victor Tan"
        );
    }

    #[tokio::test]
    #[ignore] // requires network and TIX_BOARD__API_KEY / TIX_BOARD__TOKEN
    async fn live_list_boards() {
        let key = std::env::var("TIX_BOARD__API_KEY").unwrap();
        let token = std::env::var("TIX_BOARD__TOKEN").unwrap();
        let client = BoardClient::new("https://api.trello.com/1", key, token).unwrap();
        for board in client.boards().await.unwrap() {
            println!("Board Name: {}, Board ID: {}", board.name, board.id);
        }
    }
}
