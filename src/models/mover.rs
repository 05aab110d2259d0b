use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use strum_macros::{Display, EnumIter};

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
pub enum MoverKind {
    #[strum(to_string = "Top Gainers")]
    Gainer,
    #[strum(to_string = "Top Losers")]
    Loser,
}

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct MoverEntry {
    symbol: String,
    close: Decimal,
    percent: Decimal,
}

#[derive(Clone, Debug, Default, Eq, Getters, PartialEq, new)]
pub struct Movers {
    gainers: Vec<MoverEntry>,
    losers: Vec<MoverEntry>,
}

impl Movers {
    pub fn entries(&self, kind: MoverKind) -> &[MoverEntry] {
        match kind {
            MoverKind::Gainer => &self.gainers,
            MoverKind::Loser => &self.losers,
        }
    }

    /// Bounded prefix of one side. Shorter lists are returned whole.
    pub fn top(&self, kind: MoverKind, count: usize) -> &[MoverEntry] {
        let entries = self.entries(kind);
        &entries[..entries.len().min(count)]
    }
}
