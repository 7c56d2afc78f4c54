//! Command execution against a wired deck.

use std::io::Write;

use cc_app::LazyFlipCard;
use cc_core::{CardState, Face};
use tracing::{debug, info_span, Instrument};

use crate::bootstrap::Deck;
use crate::shell::cli::Command;
use crate::shell::console::ConsoleRenderer;

/// Run one CLI command, writing rendered faces to `out`.
pub async fn run_command<W: Write>(deck: &Deck, command: &Command, out: &mut W) -> anyhow::Result<()> {
    let renderer = ConsoleRenderer::new(deck.labels.clone());

    match command {
        Command::List => list(deck, &renderer, out),
        Command::Reveal { indices } => {
            reveal(deck, &renderer, indices, out)
                .instrument(info_span!("shell.reveal", count = indices.len()))
                .await
        }
        Command::Cycle { index, times } => {
            cycle(deck, &renderer, *index, *times, out)
                .instrument(info_span!("shell.cycle", index = *index, times = *times))
                .await
        }
    }
}

fn list<W: Write>(deck: &Deck, renderer: &ConsoleRenderer, out: &mut W) -> anyhow::Result<()> {
    for (i, card) in deck.cards.iter().enumerate() {
        writeln!(out, "{}", renderer.render_front(i + 1, card.profile()))?;
    }
    Ok(())
}

async fn reveal<W: Write>(
    deck: &Deck,
    renderer: &ConsoleRenderer,
    indices: &[usize],
    out: &mut W,
) -> anyhow::Result<()> {
    let cards = indices
        .iter()
        .map(|&index| deck.card(index))
        .collect::<anyhow::Result<Vec<_>>>()?;

    // Flip everything first so the loads overlap.
    for card in &cards {
        show_back(card);
    }

    for card in cards {
        settled(card).await;
        writeln!(out, "{}", card.render_back(renderer))?;
    }
    Ok(())
}

async fn cycle<W: Write>(
    deck: &Deck,
    renderer: &ConsoleRenderer,
    index: usize,
    times: usize,
    out: &mut W,
) -> anyhow::Result<()> {
    let card = deck.card(index)?;

    for round in 1..=times {
        show_back(card);
        let state = settled(card).await;
        debug!(round, back_load = ?state.back_load, "back face settled");
        writeln!(out, "[{round}/{times}] {}", card.render_back(renderer))?;
        card.flip();
    }
    Ok(())
}

fn show_back(card: &LazyFlipCard) {
    if card.face() == Face::Front {
        card.flip();
    }
}

/// Wait until the card is no longer loading.
async fn settled(card: &LazyFlipCard) -> CardState {
    let mut rx = card.subscribe();
    loop {
        let state = rx.borrow_and_update().clone();
        if !state.back_load.is_loading() {
            return state;
        }
        if rx.changed().await.is_err() {
            return card.state();
        }
    }
}
