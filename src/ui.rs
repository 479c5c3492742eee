use crate::catalog::NavigationEntry;
use crate::model::{BusinessType, Destination, Role};
use crate::resolver::{NavigationResolver, ResolvedNavigation};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;

pub struct App {
    resolver: NavigationResolver,
    pub business: BusinessType,
    pub role: Role,
    pub resolved: ResolvedNavigation,
    pub state: TableState,
    /// Last destination "activated" by Enter - the signal the host
    /// application would receive from a click.
    pub last_activated: Option<Destination>,
}

impl App {
    pub fn new(resolver: NavigationResolver) -> Self {
        let business = BusinessType::General;
        let role = Role::Proprietor;
        let resolved = resolver.resolve(business, role);

        let mut state = TableState::default();
        state.select(Some(0));

        Self {
            resolver,
            business,
            role,
            resolved,
            state,
            last_activated: None,
        }
    }

    /// Flattened selectable entries: Home, then each section's entries in
    /// display order, then the trailing block.
    pub fn entries(&self) -> Vec<NavigationEntry> {
        let mut items = vec![self.resolved.home];
        for section in &self.resolved.sections {
            items.extend(section.entries.iter().copied());
        }
        items.extend(self.resolved.trailing.iter().copied());
        items
    }

    pub fn selected_entry(&self) -> Option<NavigationEntry> {
        self.state
            .selected()
            .and_then(|i| self.entries().get(i).copied())
    }

    fn refresh(&mut self) {
        self.resolved = self.resolver.resolve(self.business, self.role);
        self.state.select(Some(0));
    }

    pub fn next_business(&mut self) {
        self.business = self.business.next();
        self.refresh();
    }

    pub fn next_role(&mut self) {
        self.role = self.role.next();
        self.refresh();
    }

    pub fn activate_selected(&mut self) {
        if let Some(entry) = self.selected_entry() {
            self.last_activated = Some(entry.destination);
        }
    }

    pub fn next(&mut self) {
        let len = self.entries().len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.entries().len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Enter => app.activate_selected(),
                KeyCode::Tab => app.next_business(),
                KeyCode::Char('r') => app.next_role(),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(())
                }
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Home => app.state.select(Some(0)),
                KeyCode::End => {
                    let len = app.entries().len();
                    if len > 0 {
                        app.state.select(Some(len - 1));
                    }
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with business/role selectors
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Grouped shell preview
            Constraint::Percentage(55), // Flattened entry table
        ])
        .split(chunks[1]);

    render_shell_preview(f, content_chunks[0], app);
    render_entry_table(f, content_chunks[1], app);

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let visible: usize = 1
        + app
            .resolved
            .sections
            .iter()
            .map(|s| s.entries.len())
            .sum::<usize>()
        + app.resolved.trailing.len();

    let spans = vec![
        Span::styled("Business: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.business.as_str(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  "),
        Span::styled("Role: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.role.as_str(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Visible screens: {}", visible),
            Style::default().fg(Color::White),
        ),
    ];

    let header = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Navigation Shell Preview "),
    );

    f.render_widget(header, area);
}

/// The shell as the rendering layer would draw it: Home first, labeled
/// sections in group order, trailing block last.
fn render_shell_preview(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.selected_entry();
    let mut lines: Vec<Line> = Vec::new();

    let entry_line = |entry: NavigationEntry, indented: bool| -> Line<'static> {
        let marker = if selected.map(|s| s.destination) == Some(entry.destination) {
            "▸ "
        } else {
            "  "
        };
        let style = if selected.map(|s| s.destination) == Some(entry.destination) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let indent = if indented { "  " } else { "" };
        Line::from(Span::styled(
            format!("{}{}{}", indent, marker, entry.label),
            style,
        ))
    };

    lines.push(entry_line(app.resolved.home, false));

    for section in &app.resolved.sections {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            section.group,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for entry in &section.entries {
            lines.push(entry_line(*entry, true));
        }
    }

    if !app.resolved.trailing.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "─────────────",
            Style::default().fg(Color::DarkGray),
        )));
        for entry in &app.resolved.trailing {
            lines.push(entry_line(*entry, false));
        }
    }

    let preview = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Rendered Shell "),
    );

    f.render_widget(preview, area);
}

fn render_entry_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["Label", "Group", "Screen", "Icon"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    });
    let header = Row::new(header_cells).height(1);

    let entries = app.entries();
    let rows = entries.iter().map(|entry| {
        let group = if entry.group.is_empty() {
            "(fixed)"
        } else {
            entry.group
        };
        Row::new(vec![
            Cell::from(entry.label),
            Cell::from(group),
            Cell::from(entry.destination.as_str()),
            Cell::from(entry.icon),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(15),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Permitted Destinations "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("▸ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let activated = match app.last_activated {
        Some(destination) => format!("activate → {}", destination.as_str()),
        None => "nothing activated yet".to_string(),
    };

    let spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" business  "),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(" role  "),
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" move  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" activate  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" quit  |  "),
        Span::styled(activated, Style::default().fg(Color::Green)),
    ];

    let status = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(status, area);
}
