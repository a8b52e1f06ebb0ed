//! Board members.

use serde::Deserialize;
use tix_core::Member;

use crate::{BoardClient, error::BoardError};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMember {
    id: String,
    full_name: String,
}

impl BoardClient {
    pub(crate) async fn fetch_members(&self, board_id: &str) -> Result<Vec<Member>, BoardError> {
        let path = format!("/boards/{}/members", urlencoding::encode(board_id));
        let members: Vec<WireMember> = self
            .get_json(&path, &[("filter", "all"), ("fields", "fullName")])
            .await?;
        tracing::debug!(board_id, count = members.len(), "fetched board members");
        Ok(members
            .into_iter()
            .map(|m| Member {
                id: m.id,
                full_name: m.full_name,
            })
            .collect())
    }
}
