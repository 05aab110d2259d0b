use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{MoverEntry, MoverKind};

pub const CURRENCY: &str = "₹";

/// Two decimal places, halves rounded away from zero.
pub fn fixed2(value: &Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

pub fn format_price(price: &Decimal) -> String {
    format!("{}{}", CURRENCY, fixed2(price))
}

/// Groups digits in threes, e.g. `1234567` -> `1,234,567`.
pub fn format_volume(volume: i64) -> String {
    let digits = volume.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if volume < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn format_mover_percent(kind: MoverKind, percent: &Decimal) -> String {
    match kind {
        MoverKind::Gainer => format!("+{}%", fixed2(percent)),
        MoverKind::Loser => format!("{}%", fixed2(percent)),
    }
}

pub fn format_mover(kind: MoverKind, entry: &MoverEntry) -> (String, String) {
    (
        format!("{} - {}{}", entry.symbol(), CURRENCY, entry.close()),
        format_mover_percent(kind, entry.percent()),
    )
}
