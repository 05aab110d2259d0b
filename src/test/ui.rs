#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};
    use rust_decimal_macros::dec;

    use crate::{
        app::{
            state::{AppState, FetchOutcome, FetchPayload},
            ui,
        },
        models::{Movers, PricePoint},
        test::fake::{mover, price_point},
    };

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| ui::render(frame, state)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn with_movers(state: &mut AppState, movers: Movers) {
        let request = state.load_movers();
        assert!(state.apply(FetchOutcome {
            ticket: request.ticket,
            payload: FetchPayload::Movers(Ok(movers)),
        }));
    }

    fn with_prices(state: &mut AppState, symbol: &str, points: Vec<PricePoint>) {
        let request = state.open_detail(symbol);
        assert!(state.apply(FetchOutcome {
            ticket: request.ticket,
            payload: FetchPayload::Prices(Ok(points)),
        }));
    }

    #[test]
    fn zero_result_search_hides_the_results_list() {
        let mut state = AppState::new(3);
        state.set_keyword("zzzz");
        let request = state.submit_search().unwrap();

        let screen = draw(&state);
        assert!(screen.contains("Searching..."));

        assert!(state.apply(FetchOutcome {
            ticket: request.ticket,
            payload: FetchPayload::Search(Ok(Vec::new())),
        }));

        let screen = draw(&state);
        assert!(screen.contains("zzzz"));
        assert!(!screen.contains("Searching..."));
        assert!(!screen.contains("Search Results:"));
    }

    #[test]
    fn movers_columns_show_at_most_the_configured_count() {
        let mut state = AppState::new(3);
        with_movers(
            &mut state,
            Movers::new(
                vec![
                    mover("ADANIENT", dec!(2890.10), dec!(4.21)),
                    mover("TATASTEEL", dec!(151.2), dec!(3.05)),
                ],
                vec![
                    mover("INFY", dec!(1420.35), dec!(-2.5)),
                    mover("WIPRO", dec!(452.0), dec!(-1.9)),
                    mover("TCS", dec!(3810.0), dec!(-1.2)),
                    mover("HCLTECH", dec!(1301.0), dec!(-0.7)),
                ],
            ),
        );

        let screen = draw(&state);
        assert!(screen.contains("NIFTY Market Movers"));
        assert!(screen.contains("Top Gainers"));
        assert!(screen.contains("Top Losers"));
        assert!(screen.contains("ADANIENT - ₹2890.10"));
        assert!(screen.contains("+4.21%"));
        assert!(screen.contains("TATASTEEL"));
        assert!(screen.contains("-1.20%"));
        assert!(!screen.contains("HCLTECH"));
        assert_eq!(screen.matches('%').count(), 5);
    }

    #[test]
    fn missing_movers_hide_the_section() {
        let state = AppState::new(3);
        let screen = draw(&state);
        assert!(screen.contains("Stock Search"));
        assert!(!screen.contains("Market Movers"));
    }

    #[test]
    fn empty_price_history_shows_not_found_without_a_chart() {
        let mut state = AppState::new(3);
        with_prices(&mut state, "UNKNOWN", Vec::new());

        let screen = draw(&state);
        assert!(screen.contains("Stock data not found"));
        assert!(!screen.contains("Price Chart"));
        assert!(!screen.contains("Latest Price Information"));
    }

    #[test]
    fn pending_price_history_shows_loading() {
        let mut state = AppState::new(3);
        state.open_detail("RELIANCE");
        assert!(draw(&state).contains("Loading..."));
    }

    #[test]
    fn loaded_price_history_shows_chart_and_range() {
        let mut state = AppState::new(3);
        with_prices(
            &mut state,
            "RELIANCE",
            vec![
                price_point("2024-06-14 15:29:00", dec!(100)),
                price_point("2024-06-14 15:28:00", dec!(105)),
                price_point("2024-06-14 15:27:00", dec!(95)),
            ],
        );

        let screen = draw(&state);
        assert!(screen.contains("RELIANCE"));
        assert!(screen.contains("Latest Price Information"));
        assert!(screen.contains("Date: 2024-06-14 15:29:00"));
        assert!(screen.contains("Close: ₹100.00"));
        assert!(screen.contains("Price Chart (Last 3 Data Points)"));
        assert!(screen.contains("High: ₹105.00 | Low: ₹95.00"));
    }
}
