use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph,
        canvas::{Canvas, Line as CanvasLine, Points},
    },
};
use strum::IntoEnumIterator;

use crate::{
    app::{
        chart::{CANVAS_HEIGHT, CANVAS_WIDTH, ChartGeometry, PlotPoint},
        state::{AppState, DetailStatus, DetailView, EntrySource},
        utils::{CURRENCY, format_mover, format_price, format_volume},
    },
    config::MOVERS_INDEX,
    models::MoverKind,
};

const CHART_COLOR: Color = Color::Rgb(0, 124, 186);
const SEARCH_PLACEHOLDER: &str = "Enter stock name (e.g., RELIANCE, TCS)";

pub fn render(frame: &mut Frame, state: &AppState) {
    match state.detail() {
        Some(detail) => render_detail(frame, detail),
        None => render_search(frame, state),
    }
}

fn render_search(frame: &mut Frame, state: &AppState) {
    // Rows per column plus the column and section borders.
    let movers_height = (*state.movers_shown()).clamp(1, 20) as u16 + 4;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(movers_height),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new("Stock Search")
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let search = state.search();
    let input_title = if search.is_searching() {
        "Searching..."
    } else {
        "Search"
    };
    let input = if search.keyword().is_empty() {
        Paragraph::new(SEARCH_PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(search.keyword().as_str())
    };
    frame.render_widget(
        input.block(Block::default().title(input_title).borders(Borders::ALL)),
        chunks[1],
    );

    let selected = state.selected_entry();

    if !search.results().is_empty() {
        let items: Vec<ListItem> = search
            .results()
            .iter()
            .map(|r| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        r.symbol().clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(" - {}", r.company())),
                ]))
            })
            .collect();

        let mut list_state = ListState::default();
        list_state.select(
            selected
                .as_ref()
                .filter(|e| e.source == EntrySource::SearchResult)
                .map(|e| e.position),
        );

        let list = List::new(items)
            .block(
                Block::default()
                    .title("Search Results:")
                    .borders(Borders::ALL),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(list, chunks[2], &mut list_state);
    }

    if let Some(movers) = state.movers() {
        let section = Block::default()
            .title(format!("{} Market Movers", MOVERS_INDEX))
            .borders(Borders::ALL);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(section.inner(chunks[3]));
        frame.render_widget(section, chunks[3]);

        for (kind, area) in MoverKind::iter().zip(columns.iter()) {
            let color = match kind {
                MoverKind::Gainer => Color::Green,
                MoverKind::Loser => Color::Red,
            };

            let items: Vec<ListItem> = movers
                .top(kind, *state.movers_shown())
                .iter()
                .map(|entry| {
                    let (label, percent) = format_mover(kind, entry);
                    ListItem::new(Line::from(vec![
                        Span::raw(format!("{}  ", label)),
                        Span::styled(percent, Style::default().fg(color)),
                    ]))
                })
                .collect();

            let mut list_state = ListState::default();
            list_state.select(
                selected
                    .as_ref()
                    .filter(|e| e.source == EntrySource::Mover(kind))
                    .map(|e| e.position),
            );

            let list = List::new(items)
                .block(
                    Block::default()
                        .title(Span::styled(kind.to_string(), Style::default().fg(color)))
                        .borders(Borders::ALL),
                )
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
            frame.render_stateful_widget(list, *area, &mut list_state);
        }
    }

    let help = Paragraph::new("Enter: search/open  Up/Down: select  Esc: clear/quit  Ctrl+C: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[4]);
}

fn render_detail(frame: &mut Frame, detail: &DetailView) {
    let area = frame.area();

    let (points, chart) = match detail.status() {
        DetailStatus::Loading => {
            frame.render_widget(message("Loading..."), area);
            return;
        }
        DetailStatus::NotFound => {
            frame.render_widget(message("Stock data not found"), area);
            return;
        }
        DetailStatus::Loaded { points, chart } => (points, chart),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(9),
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new(detail.symbol().as_str())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    if let Some(latest) = detail.latest() {
        let field = |name: &str, value: String| {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(value),
            ])
        };

        let info = Paragraph::new(vec![
            field("Date", latest.date().clone()),
            field("Open", format_price(latest.open())),
            field("High", format_price(latest.high())),
            field("Low", format_price(latest.low())),
            field("Close", format_price(latest.close())),
            field("Volume", format_volume(*latest.volume())),
            field(
                "Change",
                format!("{}{} ({}%)", CURRENCY, latest.change(), latest.percent()),
            ),
        ])
        .block(
            Block::default()
                .title("Latest Price Information")
                .borders(Borders::ALL),
        );
        frame.render_widget(info, chunks[1]);
    }

    if let Some(chart) = chart {
        render_chart(frame, chunks[2], chart, points.len());

        let labels = Paragraph::new(format!(
            "High: {}{} | Low: {}{}",
            CURRENCY,
            chart.high_label(),
            CURRENCY,
            chart.low_label()
        ));
        frame.render_widget(labels, chunks[3]);
    }

    let help = Paragraph::new("Esc/Backspace/Left: back  q: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[4]);
}

/// Chart coordinates have y growing downward; the canvas grows upward.
fn to_canvas(point: &PlotPoint) -> (f64, f64) {
    (point.x, CANVAS_HEIGHT - point.y)
}

fn render_chart(frame: &mut Frame, area: Rect, chart: &ChartGeometry, count: usize) {
    let coords: Vec<(f64, f64)> = chart.points().iter().map(to_canvas).collect();

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(format!("Price Chart (Last {} Data Points)", count))
                .borders(Borders::ALL),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, CANVAS_WIDTH])
        .y_bounds([0.0, CANVAS_HEIGHT])
        .paint(|ctx| {
            for segment in chart.segments() {
                let (x1, y1) = to_canvas(&segment.from);
                let (x2, y2) = to_canvas(&segment.to);
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: CHART_COLOR,
                });
            }
            ctx.draw(&Points {
                coords: &coords,
                color: CHART_COLOR,
            });
        });

    frame.render_widget(canvas, area);
}

fn message(text: &str) -> Paragraph<'_> {
    Paragraph::new(text).block(Block::default().borders(Borders::ALL))
}
