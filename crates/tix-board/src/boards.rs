//! Boards visible to the token.

use serde::Deserialize;
use tix_core::Board;

use crate::{BoardClient, error::BoardError};

#[derive(Deserialize)]
struct WireBoard {
    id: String,
    name: String,
    #[serde(default)]
    closed: bool,
}

impl From<WireBoard> for Board {
    fn from(wire: WireBoard) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            closed: wire.closed,
        }
    }
}

impl BoardClient {
    pub(crate) async fn fetch_boards(&self) -> Result<Vec<Board>, BoardError> {
        let boards: Vec<WireBoard> = self
            .get_json("/members/me/boards", &[("filter", "all"), ("fields", "name,closed")])
            .await?;
        Ok(boards.into_iter().map(Board::from).collect())
    }
}
