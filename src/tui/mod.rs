//! Ratatui-based terminal UI.
//!
//! Five tabs mirror the pages of the comparison app: a dashboard with the π
//! digits ticker, the algorithm catalog, the sortable/filterable benchmark
//! comparison with a chart, the formula reference, and a users panel backed
//! by the REST API.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap},
    Terminal,
};

use crate::app::pipeline::BenchOutput;
use crate::cli::TuiArgs;
use crate::data::ApiClient;
use crate::domain::{
    AlgorithmKind, ClassFilter, Estimation, FormulaInfo, MAX_PRECISION_DIGITS, PI_DIGITS,
    SortKey, User,
};
use crate::error::AppError;

mod chart;

use chart::BenchScatterChart;

/// How often the dashboard π ticker advances.
const TICKER_INTERVAL: Duration = Duration::from_secs(2);
const TICKER_MIN_LEN: usize = 12;

/// Start the TUI.
pub fn run(args: TuiArgs) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(args);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Dashboard,
    Algorithms,
    Comparison,
    Formulas,
    Users,
}

impl Tab {
    const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Algorithms,
        Tab::Comparison,
        Tab::Formulas,
        Tab::Users,
    ];

    fn title(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Algorithms => "Algorithms",
            Tab::Comparison => "Comparison",
            Tab::Formulas => "Formulas",
            Tab::Users => "Users",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// In-progress user form: creates a user, or updates one when `target` is set.
struct UserForm {
    target: Option<u64>,
    name: String,
    email: String,
    editing_email: bool,
}

struct App {
    tab: Tab,
    time_limit: f64,
    seed: u64,

    bench: Option<BenchOutput>,
    sort: SortKey,
    filter: ClassFilter,

    formulas: Vec<FormulaInfo>,
    selected_algorithm: usize,
    selected_formula: usize,

    client: ApiClient,
    users: Vec<User>,
    selected_user: usize,
    form: Option<UserForm>,

    ticker_len: usize,
    last_tick: Instant,
    status: String,
}

impl App {
    fn new(args: TuiArgs) -> Self {
        Self {
            tab: Tab::Dashboard,
            time_limit: args.time_limit,
            seed: args.seed,
            bench: None,
            sort: SortKey::Id,
            filter: ClassFilter::All,
            formulas: crate::catalog::all_formulas(),
            selected_algorithm: 0,
            selected_formula: 0,
            client: ApiClient::from_env(),
            users: Vec::new(),
            selected_user: 0,
            form: None,
            ticker_len: TICKER_MIN_LEN,
            last_tick: Instant::now(),
            status: "Press b to run the benchmark.".to_string(),
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))?
            {
                if self.last_tick.elapsed() >= TICKER_INTERVAL {
                    self.advance_ticker();
                    needs_redraw = true;
                }
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Cycle the displayed digit count, like the dashboard ticker of the
    /// original comparison app.
    fn advance_ticker(&mut self) {
        self.last_tick = Instant::now();
        self.ticker_len += 1;
        if self.ticker_len > PI_DIGITS.len() {
            self.ticker_len = TICKER_MIN_LEN;
        }
    }

    /// Returns true when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.form.is_some() {
            self.handle_form_key(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::Char('1') => self.tab = Tab::Dashboard,
            KeyCode::Char('2') => self.tab = Tab::Algorithms,
            KeyCode::Char('3') => self.tab = Tab::Comparison,
            KeyCode::Char('4') => self.tab = Tab::Formulas,
            KeyCode::Char('5') => self.tab = Tab::Users,
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Char('b') if matches!(self.tab, Tab::Dashboard | Tab::Comparison) => {
                self.run_benchmark();
            }
            KeyCode::Char('s') if self.tab == Tab::Comparison => {
                self.sort = self.sort.next();
                self.status = format!("sort: {}", self.sort.display_name());
            }
            KeyCode::Char('f') if self.tab == Tab::Comparison => {
                self.filter = self.filter.next();
                self.status = format!("filter: {}", self.filter.display_name());
            }
            KeyCode::Char('u') if self.tab == Tab::Comparison => self.fetch_remote_estimations(),
            KeyCode::Char('u') if self.tab == Tab::Formulas => self.fetch_remote_formulas(),
            KeyCode::Char('r') if self.tab == Tab::Users => self.refresh_users(),
            KeyCode::Char('n') if self.tab == Tab::Users => {
                self.form = Some(UserForm {
                    target: None,
                    name: String::new(),
                    email: String::new(),
                    editing_email: false,
                });
                self.status = "New user: type the name, Enter to continue, Esc to cancel.".to_string();
            }
            KeyCode::Char('e') if self.tab == Tab::Users => {
                if let Some(user) = self.users.get(self.selected_user) {
                    self.form = Some(UserForm {
                        target: Some(user.id),
                        name: user.name.clone(),
                        email: user.email.clone(),
                        editing_email: false,
                    });
                    self.status = format!("Editing user #{}: Enter to advance, Esc to cancel.", user.id);
                } else {
                    self.status = "No user selected (press r to refresh).".to_string();
                }
            }
            KeyCode::Char('d') if self.tab == Tab::Users => self.delete_selected_user(),
            _ => {}
        }

        false
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        let Some(form) = self.form.as_mut() else {
            return;
        };

        match code {
            KeyCode::Esc => {
                self.form = None;
                self.status = "Canceled.".to_string();
            }
            KeyCode::Enter => {
                if !form.editing_email {
                    form.editing_email = true;
                    self.status = "Type the email, Enter to submit.".to_string();
                } else {
                    let target = form.target;
                    let name = form.name.clone();
                    let email = form.email.clone();
                    self.form = None;
                    match target {
                        Some(id) => self.update_user(id, &name, &email),
                        None => self.create_user(&name, &email),
                    }
                }
            }
            KeyCode::Backspace => {
                let field = if form.editing_email { &mut form.email } else { &mut form.name };
                field.pop();
            }
            KeyCode::Char(c) => {
                let field = if form.editing_email { &mut form.email } else { &mut form.name };
                field.push(c);
            }
            _ => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let (selected, len) = match self.tab {
            Tab::Algorithms => (&mut self.selected_algorithm, AlgorithmKind::ALL.len()),
            Tab::Formulas => (&mut self.selected_formula, self.formulas.len()),
            Tab::Users => (&mut self.selected_user, self.users.len()),
            _ => return,
        };
        if len == 0 {
            return;
        }
        let next = selected.saturating_add_signed(delta);
        *selected = next.min(len - 1);
    }

    fn run_benchmark(&mut self) {
        self.status = "Benchmarking...".to_string();
        match crate::app::pipeline::run_bench(self.time_limit, self.seed) {
            Ok(run) => {
                self.status = format!(
                    "Benchmarked {} algorithms ({:.2}s budget each).",
                    run.estimations.len(),
                    run.time_limit
                );
                self.bench = Some(run);
            }
            Err(err) => {
                self.status = format!("Benchmark failed: {err}");
            }
        }
    }

    /// Load benchmark records from the REST API instead of computing locally.
    fn fetch_remote_estimations(&mut self) {
        match self.client.fetch_estimations() {
            Ok(estimations) => {
                self.status = format!(
                    "Loaded {} estimations from {}.",
                    estimations.len(),
                    self.client.base_url()
                );
                self.bench = Some(BenchOutput {
                    estimations,
                    time_limit: self.time_limit,
                    seed: self.seed,
                });
            }
            Err(err) => {
                self.status = format!("Server fetch failed: {err}");
            }
        }
    }

    fn fetch_remote_formulas(&mut self) {
        match self.client.fetch_formulas() {
            Ok(mut formulas) => {
                formulas.sort_by_key(|f| {
                    AlgorithmKind::from_wire_name(&f.id).map(|k| k.ordinal()).unwrap_or(u32::MAX)
                });
                self.status = format!("Loaded {} formulas from the server.", formulas.len());
                self.formulas = formulas;
                self.selected_formula = 0;
            }
            Err(err) => {
                self.status = format!("Server fetch failed: {err}");
            }
        }
    }

    /// Fetch users; on failure the list empties and the error lands in the
    /// status line.
    fn refresh_users(&mut self) {
        match self.client.list_users() {
            Ok(users) => {
                self.status = format!("{} users loaded from {}.", users.len(), self.client.base_url());
                self.users = users;
                self.selected_user = self.selected_user.min(self.users.len().saturating_sub(1));
            }
            Err(err) => {
                self.users = Vec::new();
                self.selected_user = 0;
                self.status = format!("User fetch failed: {err}");
            }
        }
    }

    fn create_user(&mut self, name: &str, email: &str) {
        match self.client.create_user(name, email) {
            Ok(user) => {
                self.status = format!("Created user #{} ({}).", user.id, user.name);
                self.refresh_users();
            }
            Err(err) => {
                self.status = format!("Create failed: {err}");
            }
        }
    }

    fn update_user(&mut self, id: u64, name: &str, email: &str) {
        match self.client.update_user(id, Some(name), Some(email)) {
            Ok(user) => {
                self.status = format!("Updated user #{} ({}).", user.id, user.name);
                self.refresh_users();
            }
            Err(err) => {
                self.status = format!("Update failed: {err}");
            }
        }
    }

    fn delete_selected_user(&mut self) {
        let Some(user) = self.users.get(self.selected_user) else {
            self.status = "No user selected (press r to refresh).".to_string();
            return;
        };
        match self.client.delete_user(user.id) {
            Ok(removed) => {
                self.status = format!("Deleted user #{} ({}).", removed.id, removed.name);
                self.refresh_users();
            }
            Err(err) => {
                self.status = format!("Delete failed: {err}");
            }
        }
    }

    /// Rows as the comparison tab currently shows them.
    fn visible_rows(&self) -> Vec<Estimation> {
        self.bench
            .as_ref()
            .map(|run| crate::report::present(&run.estimations, self.filter, self.sort))
            .unwrap_or_default()
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        match self.tab {
            Tab::Dashboard => self.draw_dashboard(frame, chunks[1]),
            Tab::Algorithms => self.draw_algorithms(frame, chunks[1]),
            Tab::Comparison => self.draw_comparison(frame, chunks[1]),
            Tab::Formulas => self.draw_formulas(frame, chunks[1]),
            Tab::Users => self.draw_users(frame, chunks[1]),
        }
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(2)])
            .split(area);

        let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.title())).collect();
        let tabs = Tabs::new(titles)
            .select(self.tab.index())
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::TOP | Borders::LEFT | Borders::RIGHT));
        frame.render_widget(tabs, chunks[0]);

        let ticker = &PI_DIGITS[..self.ticker_len.min(PI_DIGITS.len())];
        let line = Line::from(vec![
            Span::styled("pilab", Style::default().fg(Color::Cyan)),
            Span::raw(" — pi estimation lab | "),
            Span::styled(ticker.to_string(), Style::default().fg(Color::Green)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::LEFT | Borders::RIGHT));
        frame.render_widget(p, chunks[1]);
    }

    fn draw_dashboard(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Dashboard").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(format!(
            "pi to {} digits: {}",
            self.ticker_len.saturating_sub(2),
            &PI_DIGITS[..self.ticker_len.min(PI_DIGITS.len())]
        )));
        lines.push(Line::from(""));

        match &self.bench {
            Some(run) => {
                let rows = &run.estimations;
                if let Some(fastest) = rows.iter().min_by(|a, b| {
                    a.time_seconds.partial_cmp(&b.time_seconds).unwrap_or(std::cmp::Ordering::Equal)
                }) {
                    lines.push(stat_line("Fastest", fastest.algorithm.display_name(), format!(
                        "{:.6}s for {} digits",
                        fastest.time_seconds, fastest.correct_digits
                    )));
                }
                if let Some(precise) = rows.iter().max_by_key(|e| e.correct_digits) {
                    lines.push(stat_line("Most precise", precise.algorithm.display_name(), format!(
                        "{}/{} digits in {} iterations",
                        precise.correct_digits, MAX_PRECISION_DIGITS, precise.iterations
                    )));
                }
                if let Some(efficient) = rows.iter().max_by(|a, b| {
                    a.iterations_per_second
                        .partial_cmp(&b.iterations_per_second)
                        .unwrap_or(std::cmp::Ordering::Equal)
                }) {
                    lines.push(stat_line(
                        "Most efficient",
                        efficient.algorithm.display_name(),
                        format!("{:.0} iterations/s", efficient.iterations_per_second),
                    ));
                }
                lines.push(Line::from(""));
                lines.push(Line::from(format!(
                    "{} algorithms benchmarked with a {:.2}s budget each (seed {}).",
                    rows.len(),
                    run.time_limit,
                    run.seed
                )));
            }
            None => {
                lines.push(Line::from(Span::styled(
                    "No benchmark yet. Press b to run all twelve algorithms.",
                    Style::default().fg(Color::Yellow),
                )));
            }
        }

        frame.render_widget(Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }), inner);
    }

    fn draw_algorithms(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(0)])
            .split(area);

        let items: Vec<ListItem> = AlgorithmKind::ALL
            .iter()
            .map(|k| ListItem::new(format!("{:>2} {}", k.ordinal(), k.display_name())))
            .collect();
        let list = List::new(items)
            .block(Block::default().title("Algorithms").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");
        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_algorithm));
        frame.render_stateful_widget(list, chunks[0], &mut state);

        let kind = AlgorithmKind::ALL[self.selected_algorithm.min(AlgorithmKind::ALL.len() - 1)];
        let info = crate::catalog::formula(kind);
        let mut lines = vec![
            Line::from(Span::styled(
                info.name.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("{} | {}", kind.class().display_name(), info.year)),
            Line::from(""),
            Line::from(info.description.clone()),
            Line::from(""),
            Line::from(Span::styled("Formula", Style::default().fg(Color::Gray))),
            Line::from(info.formula.clone()),
            Line::from(""),
            Line::from(Span::styled("Convergence", Style::default().fg(Color::Gray))),
            Line::from(info.convergence.clone()),
            Line::from(""),
            Line::from(Span::styled("Complexity", Style::default().fg(Color::Gray))),
            Line::from(info.complexity.clone()),
        ];
        if let Some(run) = &self.bench {
            if let Some(row) = run.estimations.iter().find(|e| e.algorithm == kind) {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled("Last benchmark", Style::default().fg(Color::Gray))));
                lines.push(Line::from(format!(
                    "{:.15} ({} digits, {} iterations, {:.6}s)",
                    row.pi_estimate, row.correct_digits, row.iterations, row.time_seconds
                )));
            }
        }

        let detail = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Detail").borders(Borders::ALL));
        frame.render_widget(detail, chunks[1]);
    }

    fn draw_comparison(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(14)])
            .split(area);

        let rows = self.visible_rows();
        let title = format!(
            "Comparison (sort: {} | filter: {})",
            self.sort.display_name(),
            self.filter.display_name()
        );
        let table_text = if rows.is_empty() {
            "No data. Press b to benchmark locally or u to fetch from the server.".to_string()
        } else {
            crate::report::format_comparison_table(&rows)
        };
        let table = Paragraph::new(table_text)
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(table, chunks[0]);

        self.draw_chart(frame, chunks[1], &rows);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect, rows: &[Estimation]) {
        let block = Block::default()
            .title("digits vs time (P=magenta S=cyan N=green)")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        if rows.is_empty() {
            let msg = Paragraph::new("Waiting for data...")
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(msg, inner);
            return;
        }

        let (probability, series, numerical, x_bounds, y_bounds) = chart_series(rows);
        let widget = BenchScatterChart {
            probability: &probability,
            series: &series,
            numerical: &numerical,
            x_bounds,
            y_bounds,
        };
        frame.render_widget(widget, inner);
    }

    fn draw_formulas(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(0)])
            .split(area);

        let items: Vec<ListItem> = self
            .formulas
            .iter()
            .map(|f| ListItem::new(f.name.clone()))
            .collect();
        let list = List::new(items)
            .block(Block::default().title("Formulas").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");
        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_formula.min(self.formulas.len().saturating_sub(1))));
        frame.render_stateful_widget(list, chunks[0], &mut state);

        let detail: Text = match self.formulas.get(self.selected_formula) {
            Some(info) => Text::from(vec![
                Line::from(Span::styled(
                    info.name.clone(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("Year: {}", info.year)),
                Line::from(""),
                Line::from(info.formula.clone()),
                Line::from(""),
                Line::from(info.deep_explanation.clone()),
                Line::from(""),
                Line::from(format!("Convergence: {}", info.convergence)),
                Line::from(format!("Applications: {}", info.applications)),
                Line::from(format!("Complexity: {}", info.complexity)),
            ]),
            None => Text::from("No formulas loaded."),
        };

        let p = Paragraph::new(detail)
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Detail (u = reload from server)").borders(Borders::ALL));
        frame.render_widget(p, chunks[1]);
    }

    fn draw_users(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default()
            .title(format!("Users @ {}", self.client.base_url()))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if let Some(form) = &self.form {
            let cursor = |active: bool| if active { "_" } else { "" };
            let heading = match form.target {
                Some(id) => format!("Editing user #{id} (Enter to advance, Esc to cancel):"),
                None => "Creating a new user (Enter to advance, Esc to cancel):".to_string(),
            };
            let lines = vec![
                Line::from(heading),
                Line::from(""),
                Line::from(format!("Name : {}{}", form.name, cursor(!form.editing_email))),
                Line::from(format!("Email: {}{}", form.email, cursor(form.editing_email))),
            ];
            frame.render_widget(Paragraph::new(Text::from(lines)), inner);
            return;
        }

        if self.users.is_empty() {
            let msg = Paragraph::new("No users loaded. Press r to fetch from the server (requires `pilab serve`).")
                .style(Style::default().fg(Color::Yellow))
                .wrap(Wrap { trim: true });
            frame.render_widget(msg, inner);
            return;
        }

        let items: Vec<ListItem> = self
            .users
            .iter()
            .map(|u| {
                let stamp = u
                    .created_at
                    .map(|t| t.format(" (created %Y-%m-%d)").to_string())
                    .unwrap_or_default();
                ListItem::new(format!("#{:<3} {:<24} {}{}", u.id, u.name, u.email, stamp))
            })
            .collect();
        let list = List::new(items)
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");
        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_user));
        frame.render_stateful_widget(list, inner, &mut state);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = match self.tab {
            Tab::Dashboard => "1-5/Tab tabs  b benchmark  q quit",
            Tab::Algorithms => "1-5/Tab tabs  ↑/↓ select  q quit",
            Tab::Comparison => "1-5/Tab tabs  b benchmark  s sort  f filter  u server data  q quit",
            Tab::Formulas => "1-5/Tab tabs  ↑/↓ select  u server data  q quit",
            Tab::Users => "1-5/Tab tabs  ↑/↓ select  r refresh  n new  e edit  d delete  q quit",
        };
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn stat_line(label: &str, name: &str, detail: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<15}"), Style::default().fg(Color::Gray)),
        Span::styled(name.to_string(), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(format!("  {detail}")),
    ])
}

/// Build chart series (log10 time, digits) per class, plus bounds.
fn chart_series(
    rows: &[Estimation],
) -> (
    Vec<(f64, f64)>,
    Vec<(f64, f64)>,
    Vec<(f64, f64)>,
    [f64; 2],
    [f64; 2],
) {
    use crate::domain::AlgorithmClass;

    let mut probability = Vec::new();
    let mut series = Vec::new();
    let mut numerical = Vec::new();

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;

    for e in rows {
        let x = if e.time_seconds > 0.0 {
            e.time_seconds.log10().max(-7.0)
        } else {
            -7.0
        };
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        let point = (x, e.correct_digits as f64);
        match e.class {
            AlgorithmClass::Probability => probability.push(point),
            AlgorithmClass::InfiniteSeries => series.push(point),
            AlgorithmClass::Numerical => numerical.push(point),
        }
    }

    if !x_min.is_finite() || !x_max.is_finite() || x_max <= x_min {
        x_min = -7.0;
        x_max = 1.0;
    }

    let pad = ((x_max - x_min).abs() * 0.05).max(0.1);
    let x_bounds = [x_min - pad, x_max + pad];
    let y_bounds = [-0.5, MAX_PRECISION_DIGITS as f64 + 0.5];

    (probability, series, numerical, x_bounds, y_bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AlgorithmClass;

    fn estimation(kind: AlgorithmKind, digits: u32, time: f64) -> Estimation {
        Estimation {
            id: kind.ordinal(),
            algorithm: kind,
            class: kind.class(),
            pi_estimate: 3.14,
            correct_digits: digits,
            iterations: 10,
            time_seconds: time,
            iterations_per_second: 10.0,
            absolute_error: 0.01,
        }
    }

    #[test]
    fn tabs_cycle_in_order() {
        let mut tab = Tab::Dashboard;
        for _ in 0..Tab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Dashboard);
    }

    #[test]
    fn chart_series_splits_by_class_and_pads_bounds() {
        let rows = vec![
            estimation(AlgorithmKind::MonteCarlo, 3, 0.5),
            estimation(AlgorithmKind::Leibniz, 6, 0.01),
            estimation(AlgorithmKind::Bbp, 15, 1e-5),
        ];
        let (probability, series, numerical, x_bounds, y_bounds) = chart_series(&rows);
        assert_eq!(probability.len(), 1);
        assert_eq!(series.len(), 1);
        assert_eq!(numerical.len(), 1);
        assert!(x_bounds[0] < -5.0 && x_bounds[1] > -0.31);
        assert_eq!(y_bounds[1], MAX_PRECISION_DIGITS as f64 + 0.5);
        assert_eq!(rows[0].class, AlgorithmClass::Probability);
    }

    #[test]
    fn chart_series_handles_zero_and_equal_times() {
        let rows = vec![estimation(AlgorithmKind::MonteCarlo, 3, 0.0)];
        let (_, _, _, x_bounds, _) = chart_series(&rows);
        assert!(x_bounds[0] < x_bounds[1]);
    }
}
