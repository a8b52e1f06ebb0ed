//! Board traversal: lists → cards → rows.
//!
//! The export walks every list and card, archived included, and turns each
//! card into one row per list movement:
//! 1. Build the member directory once for the board
//! 2. For each list, fetch its cards
//! 3. For each card, fetch labels and the list-move log
//! 4. Resolve member names, parse the description, reconstruct movements
//! 5. Flatten into [`ExportRow`]s
//!
//! Any failed lookup aborts the run; nothing is retried here.

use anyhow::Context;
use serde::Serialize;
use tix_board::BoardApi;
use tix_core::{Board, CardContext, ExportRow, TraversalPolicy, flatten_card, reconstruct};

use crate::progress::Progress;

/// Rows of one board export plus what was visited to produce them.
#[derive(Debug, Default)]
pub struct BoardExport {
    pub rows: Vec<ExportRow>,
    pub lists: usize,
    pub cards: usize,
}

/// One open card, as listed by `tix cards`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenCard {
    pub list: String,
    pub card: String,
}

/// Export every card on `board` under [`TraversalPolicy::All`].
pub async fn export_board<A: BoardApi>(
    api: &A,
    board: &Board,
    progress: &Progress,
) -> anyhow::Result<BoardExport> {
    let policy = TraversalPolicy::All;

    let directory = api
        .member_directory(&board.id)
        .await
        .with_context(|| format!("failed to fetch members of board '{}'", board.name))?;
    tracing::debug!(board = %board.name, members = directory.len(), "member directory built");

    let lists = api
        .lists(&board.id)
        .await
        .with_context(|| format!("failed to fetch lists of board '{}'", board.name))?;
    progress.set_length(lists.len() as u64);

    let mut export = BoardExport::default();

    for list in lists.iter().filter(|list| policy.includes_list(list)) {
        progress.set_message(&list.name);
        export.lists += 1;

        let cards = api
            .cards(&list.id, policy)
            .await
            .with_context(|| format!("failed to fetch cards of list '{}'", list.name))?;

        for card in cards.iter().filter(|card| policy.includes_card(card)) {
            let card_label = api
                .card_label(&card.id)
                .await
                .with_context(|| format!("failed to fetch labels of card '{}'", card.name))?;
            let member_name = directory
                .display_names(&card.member_ids)
                .with_context(|| format!("failed to resolve members of card '{}'", card.name))?;
            let log = api
                .list_moves(&card.id)
                .await
                .with_context(|| format!("failed to fetch movements of card '{}'", card.name))?;

            let movements = reconstruct(log);
            let context = CardContext::new(card, list, card_label, member_name);
            let rows = flatten_card(&context, &movements);

            tracing::debug!(card_id = %card.id, movements = movements.len(), rows = rows.len(), "card flattened");
            export.rows.extend(rows);
            export.cards += 1;
        }

        progress.inc(1);
    }

    tracing::info!(
        board = %board.name,
        lists = export.lists,
        cards = export.cards,
        rows = export.rows.len(),
        "board exported"
    );
    Ok(export)
}

/// Open cards on `board` under [`TraversalPolicy::OpenOnly`], in board order.
pub async fn list_open_cards<A: BoardApi>(api: &A, board: &Board) -> anyhow::Result<Vec<OpenCard>> {
    let policy = TraversalPolicy::OpenOnly;
    let lists = api
        .lists(&board.id)
        .await
        .with_context(|| format!("failed to fetch lists of board '{}'", board.name))?;

    let mut open = Vec::new();
    for list in lists.iter().filter(|list| policy.includes_list(list)) {
        let cards = api
            .cards(&list.id, policy)
            .await
            .with_context(|| format!("failed to fetch cards of list '{}'", list.name))?;

        open.extend(
            cards
                .into_iter()
                .filter(|card| policy.includes_card(card))
                .map(|card| OpenCard {
                    list: list.name.clone(),
                    card: card.name,
                }),
        );
    }
    Ok(open)
}
