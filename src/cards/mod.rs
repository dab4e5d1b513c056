use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::{Card, CardControls, CardStatus, CardTransaction};

pub(crate) struct CardDeck {
    cards: Vec<Card>,
    transactions: HashMap<String, Vec<CardTransaction>>,
}

impl CardDeck {
    pub(crate) fn new(cards: Vec<Card>, transactions: HashMap<String, Vec<CardTransaction>>) -> Self {
        Self {
            cards,
            transactions,
        }
    }

    pub(crate) fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn card_mut(&mut self, id: &str) -> Result<&mut Card> {
        self.cards
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::not_found("Card", id))
    }

    /// Recent activity for a card, newest first as stored. Unknown ids have none.
    pub(crate) fn transactions(&self, id: &str) -> &[CardTransaction] {
        self.transactions.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Flip an active card to locked or a locked card back to active.
    pub(crate) fn toggle_lock(&mut self, id: &str) -> Result<CardStatus> {
        let card = self.card_mut(id)?;
        card.status = match card.status {
            CardStatus::Active => CardStatus::Locked,
            CardStatus::Locked => CardStatus::Active,
            CardStatus::Expired | CardStatus::LostStolen => {
                return Err(Error::invalid(
                    "status",
                    format!("{} card cannot be locked or unlocked", card.status),
                ));
            }
        };
        info!(card = id, status = card.status.as_str(), "card lock toggled");
        Ok(card.status)
    }

    /// Block a card as lost or stolen once `confirm` approves. Terminal.
    /// Returns `Ok(false)` when the confirmation is declined.
    pub(crate) fn report_lost<F>(&mut self, id: &str, confirm: F) -> Result<bool>
    where
        F: FnOnce(&Card) -> bool,
    {
        let card = self.card_mut(id)?;
        if card.status == CardStatus::LostStolen {
            return Err(Error::invalid("status", "card is already reported"));
        }
        if !confirm(card) {
            return Ok(false);
        }
        card.status = CardStatus::LostStolen;
        info!(card = id, "card reported lost/stolen");
        Ok(true)
    }

    pub(crate) fn update_controls(&mut self, id: &str, controls: CardControls) -> Result<()> {
        if controls.daily_limit <= Decimal::ZERO {
            return Err(Error::invalid("daily limit", "must be greater than zero"));
        }
        let card = self.card_mut(id)?;
        card.controls = controls;
        info!(card = id, "card controls updated");
        Ok(())
    }
}

/// `**** 1234` when masked, the full number in groups of four when revealed.
pub(crate) fn display_number(card: &Card, reveal: bool) -> String {
    if !reveal || card.full_number.is_empty() {
        return format!("**** **** **** {}", card.last4);
    }
    card.full_number
        .as_bytes()
        .chunks(4)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
}
