//! Card labels, read from the card endpoint directly.
//!
//! The list-cards endpoint does not reliably carry label names, so each
//! card is fetched on its own. A card payload without a `labels` array is a
//! parse error, not "no labels".

use serde::Deserialize;

use crate::{BoardClient, error::BoardError};

#[derive(Deserialize)]
struct WireCardLabels {
    labels: Vec<WireLabel>,
}

#[derive(Deserialize)]
struct WireLabel {
    #[serde(default)]
    name: String,
}

impl WireCardLabels {
    fn into_names(self) -> Vec<String> {
        self.labels.into_iter().map(|label| label.name).collect()
    }
}

impl BoardClient {
    pub(crate) async fn fetch_label_names(&self, card_id: &str) -> Result<Vec<String>, BoardError> {
        let path = format!("/cards/{}", urlencoding::encode(card_id));
        let card: WireCardLabels = self.get_json(&path, &[("fields", "labels")]).await?;
        Ok(card.into_names())
    }
}
