//! Interactive allocation view.

use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Tabs},
};

use crate::advisor::Suggestion;
use crate::allocation::AllocationReport;
use crate::config::DisplayConfig;

use super::chart;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tab {
    Chart,
    Breakdown,
}

pub struct App<'a> {
    report: &'a AllocationReport,
    suggestion: &'a Suggestion,
    as_of: Option<DateTime<Utc>>,
    palette: Vec<Color>,
    decimals: usize,
    tab: Tab,
    selected: usize,
    should_quit: bool,
}

/// Run the interactive view until the user quits.
pub fn run(
    report: &AllocationReport,
    suggestion: &Suggestion,
    as_of: Option<DateTime<Utc>>,
    display: &DisplayConfig,
) -> Result<()> {
    let mut app = App::new(report, suggestion, as_of, display);
    let tick = Duration::from_millis(display.tick_rate_ms);

    let mut terminal = ratatui::init();
    let res = app.run_loop(&mut terminal, tick);
    ratatui::restore();
    res
}

impl<'a> App<'a> {
    fn new(
        report: &'a AllocationReport,
        suggestion: &'a Suggestion,
        as_of: Option<DateTime<Utc>>,
        display: &DisplayConfig,
    ) -> Self {
        let palette = display
            .palette_rgb()
            .into_iter()
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .collect();
        Self {
            report,
            suggestion,
            as_of,
            palette,
            decimals: display.decimals,
            tab: Tab::Chart,
            selected: 0,
            should_quit: false,
        }
    }

    fn run_loop(&mut self, terminal: &mut DefaultTerminal, tick: Duration) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Right | KeyCode::Left | KeyCode::BackTab => {
                self.tab = match self.tab {
                    Tab::Chart => Tab::Breakdown,
                    Tab::Breakdown => Tab::Chart,
                };
            }
            KeyCode::Char('1') => self.tab = Tab::Chart,
            KeyCode::Char('2') => self.tab = Tab::Breakdown,
            KeyCode::Up => {
                let len = self.report.entries.len();
                self.selected = (self.selected + len - 1) % len;
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1) % self.report.entries.len();
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame) {
        let [header_area, main_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(4),
        ])
        .areas(frame.area());

        self.render_tabs(frame, header_area);
        match self.tab {
            Tab::Chart => self.render_chart(frame, main_area),
            Tab::Breakdown => self.render_breakdown(frame, main_area),
        }
        self.render_footer(frame, footer_area);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let mut title = format!("Investment Allocation | total {:.2}", self.report.total_value);
        if let Some(as_of) = self.as_of {
            title.push_str(&format!(" | as of {}", as_of.format("%Y-%m-%d")));
        }

        let tabs = Tabs::new(vec!["Chart", "Breakdown"])
            .block(Block::default().title(title).borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .select(match self.tab {
                Tab::Chart => 0,
                Tab::Breakdown => 1,
            });

        frame.render_widget(tabs, area);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect) {
        let [chart_area, legend_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Max(38)]).areas(area);

        chart::render(frame, chart_area, &self.report.entries, &self.palette);
        self.render_legend(frame, legend_area);
    }

    fn render_legend(&self, frame: &mut Frame, area: Rect) {
        let prec = self.decimals;
        let items: Vec<ListItem> = self
            .report
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let mut style = Style::default();
                if i == self.selected {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                let line = Line::from(vec![
                    Span::styled("■ ", Style::default().fg(chart::sector_color(i, &self.palette))),
                    Span::styled(format!("{:<8}", e.asset), style),
                    Span::styled(
                        format!(" {:>6.prec$}%", e.current_pct),
                        style.fg(Color::Cyan),
                    ),
                    Span::styled(
                        format!(" (goal {:>6.prec$}%)", e.goal_pct),
                        style.fg(Color::DarkGray),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title("Assets (inner: current, outer: goal)")
                .borders(Borders::ALL),
        );
        frame.render_widget(list, area);
    }

    fn render_breakdown(&self, frame: &mut Frame, area: Rect) {
        let prec = self.decimals;
        let header = Row::new(
            ["Asset", "Value", "Current %", "Goal %", "Diff %", "Goal Value"]
                .iter()
                .map(|h| {
                    Cell::from(*h).style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                }),
        )
        .height(1)
        .bottom_margin(1);

        let rows = self.report.entries.iter().enumerate().map(|(i, e)| {
            let diff_color = if e.diff_pct > 0.0 {
                Color::Green
            } else if e.diff_pct < 0.0 {
                Color::Red
            } else {
                Color::DarkGray
            };

            let mut row = Row::new(vec![
                Cell::from(e.asset.clone()),
                Cell::from(format!("{:.prec$}", e.value)),
                Cell::from(format!("{:.prec$}%", e.current_pct)),
                Cell::from(format!("{:.prec$}%", e.goal_pct)),
                Cell::from(format!("{:+.prec$}%", e.diff_pct))
                    .style(Style::default().fg(diff_color)),
                Cell::from(format!("{:.prec$}", e.goal_value)),
            ])
            .height(1);

            if i == self.selected {
                row = row.style(Style::default().add_modifier(Modifier::REVERSED));
            }
            row
        });

        let total_row = Row::new(vec![
            Cell::from("TOTAL").style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::from(format!("{:.prec$}", self.report.total_value)).style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::from("100%"),
            Cell::from(format!("{:.prec$}%", self.report.goal_sum())),
            Cell::from(format!("drift {:.prec$}%", self.report.drift_pct)),
            Cell::from(""),
        ])
        .height(1);

        let table = Table::new(
            rows.chain(std::iter::once(total_row)),
            [
                Constraint::Percentage(20),
                Constraint::Percentage(16),
                Constraint::Percentage(16),
                Constraint::Percentage(16),
                Constraint::Percentage(16),
                Constraint::Percentage(16),
            ],
        )
        .header(header)
        .block(Block::default().title("Breakdown").borders(Borders::ALL));

        frame.render_widget(table, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                format!("Suggestion: {}", self.suggestion),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Tab/1/2 switch view | Up/Down select | q quit",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let footer = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, area);
    }
}
