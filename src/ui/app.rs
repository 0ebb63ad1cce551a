use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Flex, Layout, Margin, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Text},
    widgets::{
        Block, BorderType, Cell, Clear, HighlightSpacing, Paragraph, Row, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Table, TableState, Wrap,
    },
};
use std::time::Duration;

use crate::chat::ChatBot;
use crate::config::{
    BOT_MARKER, BOT_NAME, INFO_TEXT, ITEM_HEIGHT, PALETTES, POLL_DURATION_MS,
    SUSTAINABILITY_THRESHOLD, USER_PROMPT,
};
use crate::data::Asset;
use crate::engine::balanced_score;
use crate::ui::TableColors;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ViewFilter {
    All,
    Rising,
    Sustainable,
    Profitable,
}

impl ViewFilter {
    fn label(&self) -> &'static str {
        match self {
            ViewFilter::All => "All",
            ViewFilter::Rising => "Rising",
            ViewFilter::Sustainable => "Sustainable",
            ViewFilter::Profitable => "Profitable",
        }
    }
}

#[derive(Debug, PartialEq)]
enum Popup {
    Closed,
    Chat { input: String, reply: Option<String> },
    Analysis(String),
}

struct AssetRow {
    asset: Asset,
    balanced: f64,
}

pub struct TuiApp {
    bot: ChatBot,
    state: TableState,
    items: Vec<AssetRow>,
    scroll_state: ScrollbarState,
    colors: TableColors,
    filter: ViewFilter,
    color_index: usize,
    popup: Popup,
}

impl TuiApp {
    pub fn new(bot: ChatBot) -> Self {
        let items = bot
            .engine()
            .table()
            .iter()
            .map(|asset| AssetRow {
                asset: asset.clone(),
                balanced: balanced_score(asset),
            })
            .collect::<Vec<_>>();

        Self {
            state: TableState::default().with_selected(0),
            scroll_state: ScrollbarState::new((items.len().saturating_sub(1)) * ITEM_HEIGHT),
            colors: TableColors::new(&PALETTES[0]),
            filter: ViewFilter::All,
            color_index: 0,
            items,
            popup: Popup::Closed,
            bot,
        }
    }

    fn visible_rows(&self) -> Vec<&AssetRow> {
        let engine = self.bot.engine();
        let allowed: Option<Vec<&str>> = match self.filter {
            ViewFilter::All => None,
            ViewFilter::Rising => Some(engine.rising()),
            ViewFilter::Sustainable => Some(
                engine
                    .sustainable(SUSTAINABILITY_THRESHOLD)
                    .into_iter()
                    .map(|(name, _)| name)
                    .collect(),
            ),
            ViewFilter::Profitable => Some(engine.profitable()),
        };
        self.items
            .iter()
            .filter(|row| {
                allowed
                    .as_ref()
                    .is_none_or(|names| names.contains(&row.asset.name.as_str()))
            })
            .collect()
    }

    fn selected_asset(&self) -> Option<String> {
        let visible = self.visible_rows();
        self.state
            .selected()
            .and_then(|i| visible.get(i))
            .map(|row| row.asset.name.clone())
    }

    fn next_row(&mut self) {
        let len = self.visible_rows().len();
        let i = match self.state.selected() {
            Some(i) if i + 1 >= len => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.select(i);
    }

    fn previous_row(&mut self) {
        let i = match self.state.selected() {
            Some(0) | None => 0,
            Some(i) => i - 1,
        };
        self.select(i);
    }

    fn select(&mut self, i: usize) {
        self.state.select(Some(i));
        self.scroll_state = self.scroll_state.position(i * ITEM_HEIGHT);
    }

    fn next_column(&mut self) {
        self.state.select_next_column();
    }

    fn previous_column(&mut self) {
        self.state.select_previous_column();
    }

    fn next_color(&mut self) {
        self.color_index = (self.color_index + 1) % PALETTES.len();
    }

    fn previous_color(&mut self) {
        let count = PALETTES.len();
        self.color_index = (self.color_index + count - 1) % count;
    }

    fn set_colors(&mut self) {
        self.colors = TableColors::new(&PALETTES[self.color_index]);
    }

    fn sort_column(&mut self) {
        let Some(selected_col) = self.state.selected_column() else {
            return;
        };
        match selected_col {
            0 => self.items.sort_by(|a, b| a.asset.name.cmp(&b.asset.name)),
            1 => self
                .items
                .sort_by_key(|r| std::cmp::Reverse(r.asset.price_trend.rank())),
            2 => self
                .items
                .sort_by_key(|r| std::cmp::Reverse(r.asset.market_cap.rank())),
            3 => self
                .items
                .sort_by_key(|r| std::cmp::Reverse(r.asset.energy_use.rank())),
            4 => self.items.sort_by(|a, b| {
                b.asset
                    .sustainability_score
                    .partial_cmp(&a.asset.sustainability_score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            5 => self.items.sort_by(|a, b| {
                b.balanced
                    .partial_cmp(&a.balanced)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            _ => {}
        }
        log::debug!("Sorted by column {}", selected_col);
    }

    fn next_filter(&mut self) {
        self.filter = match self.filter {
            ViewFilter::All => ViewFilter::Rising,
            ViewFilter::Rising => ViewFilter::Sustainable,
            ViewFilter::Sustainable => ViewFilter::Profitable,
            ViewFilter::Profitable => ViewFilter::All,
        };
        let len = self.visible_rows().len();
        self.scroll_state = self
            .scroll_state
            .content_length(len.saturating_sub(1) * ITEM_HEIGHT);
        self.select(0);
    }

    fn analyze_selected(&mut self) {
        if let Some(name) = self.selected_asset() {
            let analysis = self
                .bot
                .engine()
                .analyze(&name)
                .unwrap_or_else(|e| e.to_string());
            self.popup = Popup::Analysis(analysis.trim().to_string());
        }
    }

    /// Returns `true` when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match &mut self.popup {
            Popup::Closed => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return true,
                KeyCode::Char('j') | KeyCode::Down => self.next_row(),
                KeyCode::Char('k') | KeyCode::Up => self.previous_row(),
                KeyCode::Char('l') | KeyCode::Right if shift => self.next_color(),
                KeyCode::Char('h') | KeyCode::Left if shift => self.previous_color(),
                KeyCode::Char('l') | KeyCode::Right => self.next_column(),
                KeyCode::Char('h') | KeyCode::Left => self.previous_column(),
                KeyCode::Char('f') => self.next_filter(),
                KeyCode::Char('a') => self.analyze_selected(),
                KeyCode::Enter => self.sort_column(),
                KeyCode::Char('/') => {
                    self.popup = Popup::Chat {
                        input: String::new(),
                        reply: None,
                    }
                }
                _ => {}
            },
            Popup::Chat { input, reply } => match key.code {
                KeyCode::Esc => self.popup = Popup::Closed,
                KeyCode::Backspace => {
                    let _ = input.pop();
                }
                KeyCode::Char(c) => input.push(c),
                KeyCode::Enter if !input.trim().is_empty() => {
                    *reply = Some(self.bot.respond(input.trim()));
                    input.clear();
                }
                _ => {}
            },
            Popup::Analysis(_) => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('a') | KeyCode::Char('q') => {
                    self.popup = Popup::Closed
                }
                _ => {}
            },
        }
        false
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(POLL_DURATION_MS))? {
                // Drain ALL events, not just one
                while event::poll(Duration::from_millis(0))? {
                    match event::read()? {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if self.handle_key(key) {
                                return Ok(());
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let vertical = &Layout::vertical([Constraint::Min(5), Constraint::Length(4)]);
        let rects = vertical.split(frame.area());
        self.set_colors();
        self.render_table(frame, rects[0]);
        self.render_scrollbar(frame, rects[0]);
        self.render_footer(frame, rects[1]);
        self.render_popup(frame);
    }

    fn render_popup(&self, frame: &mut Frame) {
        let (title, text) = match &self.popup {
            Popup::Closed => return,
            Popup::Chat { input, reply } => {
                let mut text = Text::default();
                if let Some(reply) = reply {
                    for line in format!("{}: {}", BOT_MARKER, reply).lines() {
                        text.push_line(Line::from(line.to_string()));
                    }
                    text.push_line(Line::default());
                }
                text.push_line(Line::from(format!("{}{}_", USER_PROMPT, input)));
                (format!("Chat with {}", BOT_NAME), text)
            }
            Popup::Analysis(analysis) => ("Analysis".to_string(), Text::from(analysis.clone())),
        };

        let area = self.popup_area(frame.area(), 70, 70);
        frame.render_widget(Clear, area);
        let paragraph = Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .style(Style::new().fg(self.colors.row_fg).bg(self.colors.buffer_bg))
            .block(
                Block::bordered()
                    .title(title)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::new().fg(self.colors.popup_border_color)),
            );
        frame.render_widget(paragraph, area);
    }

    fn popup_area(&self, area: Rect, percent_x: u16, percent_y: u16) -> Rect {
        let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
        let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
        let [area] = vertical.areas(area);
        let [area] = horizontal.areas(area);
        area
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect) {
        let header_style = Style::default()
            .fg(self.colors.header_fg)
            .bg(self.colors.header_bg);
        let selected_row_style = Style::default()
            .add_modifier(Modifier::REVERSED)
            .fg(self.colors.selected_row_style_fg);
        let selected_col_style = Style::default().fg(self.colors.selected_column_style_fg);
        let selected_cell_style = Style::default()
            .add_modifier(Modifier::REVERSED)
            .fg(self.colors.selected_cell_style_fg);

        let header: Row<'_> = [
            "Coin",
            "Trend",
            "Market Cap",
            "Energy Use",
            "Sustainability",
            "Balanced Score",
        ]
        .into_iter()
        .map(Cell::from)
        .collect::<Row>()
        .style(header_style);

        let rows: Vec<Row> = self
            .visible_rows()
            .into_iter()
            .enumerate()
            .map(|(i, r)| {
                let bg = if i % 2 == 0 {
                    self.colors.normal_row_color
                } else {
                    self.colors.alt_row_color
                };
                let a = &r.asset;

                Row::new(vec![
                    Cell::from(a.name.clone()),
                    Cell::from(a.price_trend.as_str().to_uppercase())
                        .style(Style::new().fg(self.colors.trend_color(a.is_rising()))),
                    Cell::from(a.market_cap.as_str().to_uppercase()),
                    Cell::from(a.energy_use.as_str().to_uppercase()),
                    Cell::from(a.score_out_of_ten()).style(
                        Style::new().fg(self.colors.sustainability_color(a.sustainability_score)),
                    ),
                    Cell::from(format!("{:.2}", r.balanced)),
                ])
                .style(Style::new().fg(self.colors.row_fg).bg(bg))
                .height(ITEM_HEIGHT as u16)
            })
            .collect();

        let table = Table::new(rows, [Constraint::Fill(1); 6])
            .header(header)
            .row_highlight_style(selected_row_style)
            .column_highlight_style(selected_col_style)
            .cell_highlight_style(selected_cell_style)
            .highlight_spacing(HighlightSpacing::Always)
            .bg(self.colors.buffer_bg);

        frame.render_stateful_widget(table, area, &mut self.state);
    }

    fn render_scrollbar(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_stateful_widget(
            Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            area.inner(Margin {
                vertical: 1,
                horizontal: 1,
            }),
            &mut self.scroll_state,
        );
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = Text::from(vec![
            Line::from(format!("{} | view: {}", INFO_TEXT[0], self.filter.label())),
            Line::from(INFO_TEXT[1]),
        ]);
        let info_footer = Paragraph::new(footer)
            .style(
                Style::new()
                    .fg(self.colors.row_fg)
                    .bg(self.colors.buffer_bg),
            )
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .border_style(Style::new().fg(self.colors.footer_border_color)),
            );
        frame.render_widget(info_footer, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut TuiApp, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn names(app: &TuiApp) -> Vec<String> {
        app.visible_rows()
            .iter()
            .map(|r| r.asset.name.clone())
            .collect()
    }

    #[test]
    fn filters_cycle_through_engine_queries() {
        let mut app = TuiApp::new(ChatBot::default());
        assert_eq!(names(&app).len(), 5);

        press(&mut app, KeyCode::Char('f'));
        assert_eq!(names(&app), vec!["Bitcoin", "Cardano", "Solana"]);

        press(&mut app, KeyCode::Char('f'));
        assert_eq!(names(&app), vec!["Cardano", "Solana", "Polkadot"]);

        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.filter, ViewFilter::Profitable);

        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.filter, ViewFilter::All);
    }

    #[test]
    fn row_navigation_wraps() {
        let mut app = TuiApp::new(ChatBot::default());
        press(&mut app, KeyCode::Up);
        assert_eq!(app.state.selected(), Some(0));
        for _ in 0..5 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn sorting_by_balanced_score() {
        let mut app = TuiApp::new(ChatBot::default());
        app.state.select_column(Some(5));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            names(&app),
            vec!["Cardano", "Solana", "Bitcoin", "Ethereum", "Polkadot"]
        );

        app.state.select_column(Some(0));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            names(&app),
            vec!["Bitcoin", "Cardano", "Ethereum", "Polkadot", "Solana"]
        );
    }

    #[test]
    fn sorting_by_category_rank() {
        let mut app = TuiApp::new(ChatBot::default());

        app.state.select_column(Some(1));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            names(&app),
            vec!["Bitcoin", "Cardano", "Solana", "Ethereum", "Polkadot"]
        );

        app.state.select_column(Some(2));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            names(&app),
            vec!["Bitcoin", "Ethereum", "Cardano", "Solana", "Polkadot"]
        );

        // low energy first
        app.state.select_column(Some(3));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            names(&app),
            vec!["Cardano", "Solana", "Polkadot", "Ethereum", "Bitcoin"]
        );
    }

    #[test]
    fn shift_arrows_cycle_palette() {
        let mut app = TuiApp::new(ChatBot::default());
        let shift = |code| KeyEvent::new(code, KeyModifiers::SHIFT);

        app.handle_key(shift(KeyCode::Left));
        assert_eq!(app.color_index, PALETTES.len() - 1);

        app.handle_key(shift(KeyCode::Right));
        app.handle_key(shift(KeyCode::Right));
        assert_eq!(app.color_index, 1);

        // plain arrows move the column instead
        press(&mut app, KeyCode::Right);
        assert_eq!(app.color_index, 1);
        assert_eq!(app.state.selected_column(), Some(0));
    }

    #[test]
    fn analysis_popup_for_selected_row() {
        let mut app = TuiApp::new(ChatBot::default());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('a'));
        match &app.popup {
            Popup::Analysis(text) => assert!(text.starts_with("Analysis for Ethereum:")),
            other => panic!("unexpected popup {:?}", other),
        }
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.popup, Popup::Closed);
    }

    #[test]
    fn chat_popup_routes_through_bot() {
        let mut app = TuiApp::new(ChatBot::default());
        press(&mut app, KeyCode::Char('/'));
        for c in "list".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        // 'q' is text while chatting
        assert!(!press(&mut app, KeyCode::Char('q')));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        match &app.popup {
            Popup::Chat { input, reply } => {
                assert!(input.is_empty());
                assert!(reply.as_deref().unwrap().contains("Available cryptocurrencies"));
            }
            other => panic!("unexpected popup {:?}", other),
        }
        press(&mut app, KeyCode::Esc);
        assert!(press(&mut app, KeyCode::Char('q')));
    }
}
