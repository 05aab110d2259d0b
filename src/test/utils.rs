#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{
        app::utils::{format_mover_percent, format_price, format_volume},
        models::MoverKind,
    };

    #[test]
    fn volume_is_grouped_in_thousands() {
        assert_eq!(format_volume(0), "0");
        assert_eq!(format_volume(999), "999");
        assert_eq!(format_volume(1_000), "1,000");
        assert_eq!(format_volume(48_210), "48,210");
        assert_eq!(format_volume(1_234_567), "1,234,567");
        assert_eq!(format_volume(-12_345), "-12,345");
    }

    #[test]
    fn prices_have_two_decimals() {
        assert_eq!(format_price(&dec!(2923.456)), "₹2923.46");
        assert_eq!(format_price(&dec!(100)), "₹100.00");
    }

    #[test]
    fn gainers_carry_an_explicit_plus_sign() {
        assert_eq!(format_mover_percent(MoverKind::Gainer, &dec!(4.2134)), "+4.21%");
        assert_eq!(format_mover_percent(MoverKind::Loser, &dec!(-2.5)), "-2.50%");
    }
}
