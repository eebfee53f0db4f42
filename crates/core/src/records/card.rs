use serde::Serialize;

/// Presentation-neutral projection of a record, one per rendered card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    /// Free-form footer line (date, size, link). Empty when there is nothing to show.
    pub footer: String,
}

pub trait ToCard {
    fn to_card(&self) -> Card;
}
