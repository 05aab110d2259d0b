#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{
        commands,
        models::{Movers, PricePoint, SearchResult},
        test::fake::{FakeQuoteService, mover, price_point},
    };

    fn into_text(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn search_prints_each_match() {
        let service = FakeQuoteService {
            search: Some(vec![
                SearchResult::new("TCS".to_string(), "Tata Consultancy Services Ltd.".to_string()),
                SearchResult::new("TATAPOWER".to_string(), "Tata Power Co. Ltd.".to_string()),
            ]),
            ..Default::default()
        };

        let mut out = Vec::new();
        commands::search(&service, "tata", &mut out).await.unwrap();
        let text = into_text(out);

        assert_eq!(
            text,
            "Search Results:\nTCS - Tata Consultancy Services Ltd.\nTATAPOWER - Tata Power Co. Ltd.\n"
        );
    }

    #[tokio::test]
    async fn search_without_matches_says_so() {
        let service = FakeQuoteService {
            search: Some(Vec::new()),
            ..Default::default()
        };

        let mut out = Vec::new();
        commands::search(&service, "zzzz", &mut out).await.unwrap();
        let text = into_text(out);

        assert_eq!(text, "No results for 'zzzz'\n");
    }

    #[tokio::test]
    async fn movers_prints_bounded_prefixes() {
        let service = FakeQuoteService {
            movers: Some(Movers::new(
                vec![mover("ADANIENT", dec!(2890.10), dec!(4.2134))],
                vec![
                    mover("INFY", dec!(1420.35), dec!(-2.5)),
                    mover("WIPRO", dec!(452), dec!(-1.9)),
                ],
            )),
            ..Default::default()
        };

        let mut out = Vec::new();
        commands::movers(&service, 1, &mut out).await.unwrap();
        let text = into_text(out);

        assert_eq!(
            text,
            "NIFTY Market Movers\nTop Gainers\n  ADANIENT - ₹2890.10  +4.21%\nTop Losers\n  INFY - ₹1420.35  -2.50%\n"
        );
    }

    #[tokio::test]
    async fn prices_prints_latest_point_and_range() {
        let latest = PricePoint::new(
            "2024-06-14 15:29:00".to_string(),
            dec!(2921),
            dec!(2925.5),
            dec!(2918.1),
            dec!(2923.45),
            1_234_567,
            dec!(2.45),
            dec!(0.08),
        );
        let service = FakeQuoteService {
            prices: Some(vec![latest, price_point("2024-06-14 15:28:00", dec!(2910))]),
            ..Default::default()
        };

        let mut out = Vec::new();
        commands::prices(&service, "RELIANCE", &mut out).await.unwrap();
        let text = into_text(out);

        assert!(text.starts_with("RELIANCE\nDate: 2024-06-14 15:29:00\n"));
        assert!(text.contains("Open: ₹2921.00\n"));
        assert!(text.contains("Volume: 1,234,567\n"));
        assert!(text.contains("Change: ₹2.45 (0.08%)\n"));
        assert!(text.contains("Last 2 Data Points | High: ₹2923.45 | Low: ₹2910.00\n"));
    }

    #[tokio::test]
    async fn prices_for_unknown_symbol_is_not_found() {
        let service = FakeQuoteService {
            prices: Some(Vec::<PricePoint>::new()),
            ..Default::default()
        };

        let mut out = Vec::new();
        commands::prices(&service, "NOPE", &mut out).await.unwrap();
        let text = into_text(out);

        assert_eq!(text, "Stock data not found\n");
    }
}
