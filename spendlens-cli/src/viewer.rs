//! Interactive upload-and-view interface.
//!
//! A path input box plays the role of the upload control: Enter runs the
//! whole extract→clean→categorize pipeline synchronously and replaces the
//! cached result, which stays until the next load supersedes it. Tab
//! switches between the transaction table and the spending summary.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Cell, Paragraph, Row, Table, TableState, Tabs},
};
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};

use spendlens_core::Transaction;
use spendlens_ingest::load_statement;
use spendlens_report::{SpendingSummary, spending_pie, to_transactions};

use crate::config::Config;

const TABS: [&str; 2] = ["Transactions", "Summary"];

/// Result of the last pipeline run, cached until superseded.
struct Loaded {
    source: PathBuf,
    transactions: Vec<Transaction>,
    summary: SpendingSummary,
}

struct App {
    cfg: Config,
    input: String,
    loaded: Option<Loaded>,
    tab: usize,
    table_state: TableState,
    status: String,
}

impl App {
    fn new(cfg: Config) -> Self {
        Self {
            cfg,
            input: String::new(),
            loaded: None,
            tab: 0,
            table_state: TableState::default(),
            status: "Type a .csv/.pdf path and press Enter".to_string(),
        }
    }

    /// Run the pipeline for the given path, superseding the cached result.
    fn load(&mut self, path: &Path) {
        match load_statement(path) {
            Ok(rows) => {
                let transactions = to_transactions(&rows);
                let summary = SpendingSummary::from_transactions(&transactions);
                self.status = format!(
                    "Parsed {} transactions from {}",
                    transactions.len(),
                    path.display()
                );
                self.loaded = Some(Loaded {
                    source: path.to_path_buf(),
                    transactions,
                    summary,
                });
                self.table_state = TableState::default();
            }
            Err(err) => self.status = format!("{err:#}"),
        }
    }

    fn export_chart(&mut self) {
        let Some(loaded) = &self.loaded else {
            self.status = "Nothing loaded yet".to_string();
            return;
        };
        let out = PathBuf::from(&self.cfg.chart.output);
        match spending_pie(&loaded.summary, &self.cfg.chart_options()) {
            Some(doc) => match std::fs::write(&out, doc.to_string()) {
                Ok(()) => self.status = format!("Wrote {}", out.display()),
                Err(err) => self.status = format!("writing {}: {err}", out.display()),
            },
            None => self.status = "No expense records; no chart produced".to_string(),
        }
    }

    fn scroll(&mut self, delta: i64) {
        if self.tab != 0 {
            return;
        }
        let Some(loaded) = &self.loaded else { return };
        let len = loaded.transactions.len();
        if len == 0 {
            return;
        }
        let cur = self.table_state.selected().unwrap_or(0) as i64;
        let next = (cur + delta).clamp(0, len as i64 - 1);
        self.table_state.select(Some(next as usize));
    }
}

pub fn run_viewer(cfg: &Config, file: Option<PathBuf>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(cfg.clone());
    if let Some(path) = file {
        app.input = path.display().to_string();
        app.load(&path);
    }

    let res = view_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn view_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.export_chart();
                    }
                    KeyCode::Tab => app.tab = (app.tab + 1) % TABS.len(),
                    KeyCode::Up => app.scroll(-1),
                    KeyCode::Down => app.scroll(1),
                    KeyCode::Enter => {
                        let trimmed = app.input.trim().to_string();
                        if !trimmed.is_empty() {
                            app.load(Path::new(&trimmed));
                        }
                    }
                    KeyCode::Backspace => {
                        app.input.pop();
                    }
                    KeyCode::Char(c) => app.input.push(c),
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(f.area());

    let input = Paragraph::new(app.input.as_str())
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title("statement"));
    f.render_widget(input, chunks[0]);

    let tabs = Tabs::new(TABS)
        .select(app.tab)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[1]);

    let App {
        loaded,
        table_state,
        ..
    } = app;
    match app.tab {
        0 => draw_transactions(f, chunks[2], loaded.as_ref(), table_state),
        _ => draw_summary(f, chunks[2], loaded.as_ref()),
    }

    let hints = Line::from(vec![
        Span::styled(
            "Enter",
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("=load  "),
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw("=view  "),
        Span::styled("↑/↓", Style::default().fg(Color::Cyan)),
        Span::raw("=scroll  "),
        Span::styled("Ctrl-E", Style::default().fg(Color::Cyan)),
        Span::raw("=export chart  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(format!("=quit   {}", app.status)),
    ]);
    f.render_widget(Paragraph::new(hints), chunks[3]);
}

fn draw_transactions(
    f: &mut Frame,
    area: Rect,
    loaded: Option<&Loaded>,
    table_state: &mut TableState,
) {
    let block = Block::default().borders(Borders::ALL);

    // Single-column placeholder until something useful is loaded.
    let placeholder = |text: String| {
        Table::new(Vec::<Row>::new(), [Constraint::Percentage(100)])
            .header(Row::new(vec![text]).style(Style::default().fg(Color::Gray)))
    };

    let Some(loaded) = loaded else {
        f.render_widget(
            placeholder("Upload a statement to see results".to_string())
                .block(block.title("transactions")),
            area,
        );
        return;
    };
    if loaded.transactions.is_empty() {
        f.render_widget(
            placeholder(format!("No transactions parsed from {}", loaded.source.display()))
                .block(block.title("transactions")),
            area,
        );
        return;
    }

    let header = Row::new(vec!["Date", "Description", "Amount", "Category"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = loaded
        .transactions
        .iter()
        .map(|t| {
            let amount_style = if t.is_expense() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            Row::new(vec![
                Cell::from(t.date.to_string()),
                Cell::from(t.description.clone()),
                Cell::from(Span::styled(format!("{:.2}", t.amount), amount_style)),
                Cell::from(t.category.label()),
            ])
        })
        .collect();
    let widths = [
        Constraint::Length(12),
        Constraint::Min(24),
        Constraint::Length(12),
        Constraint::Length(16),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .block(block.title(format!("transactions — {}", loaded.source.display())));
    f.render_stateful_widget(table, area, table_state);
}

fn draw_summary(f: &mut Frame, area: Rect, loaded: Option<&Loaded>) {
    let block = Block::default().borders(Borders::ALL).title("summary");

    let Some(loaded) = loaded else {
        f.render_widget(
            Paragraph::new("Upload a statement to see results")
                .style(Style::default().fg(Color::Gray))
                .block(block),
            area,
        );
        return;
    };
    if loaded.summary.is_empty() {
        f.render_widget(
            Paragraph::new("No expense records; nothing to summarize")
                .style(Style::default().fg(Color::Gray))
                .block(block),
            area,
        );
        return;
    }

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let rows: Vec<Row> = loaded
        .summary
        .slices
        .iter()
        .map(|s| {
            Row::new(vec![
                Cell::from(s.category.label()),
                Cell::from(format!("${:.2}", s.total)),
                Cell::from(format!("{:.1}%", s.share_pct)),
            ])
        })
        .collect();
    let totals = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(12),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec!["Category", "Total", "Share"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(block.title(format!("summary — total ${:.2}", loaded.summary.total)));
    f.render_widget(totals, halves[0]);

    let data: Vec<(&str, u64)> = loaded
        .summary
        .slices
        .iter()
        .map(|s| (s.category.label(), s.total.round() as u64))
        .collect();
    let chart = BarChart::default()
        .data(data.as_slice())
        .bar_width(9)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title("expenses ($)"));
    f.render_widget(chart, halves[1]);
}
