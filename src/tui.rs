use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{BarChart, Block, Borders, List, ListItem, ListState, Paragraph, Sparkline, Wrap},
};
use std::io::stdout;

use crate::analytics;
use crate::bookmarks::BookmarkStore;
use crate::mockgen;
use crate::models::{Department, Employee, EmployeeDetails};
use crate::search::{self, FilterState};

#[derive(Clone, Copy, PartialEq)]
enum Screen {
    Dashboard,
    Analytics,
}

#[derive(Clone, Copy, PartialEq)]
enum DetailTab {
    Overview,
    Projects,
    Feedback,
}

impl DetailTab {
    fn next(self) -> Self {
        match self {
            DetailTab::Overview => DetailTab::Projects,
            DetailTab::Projects => DetailTab::Feedback,
            DetailTab::Feedback => DetailTab::Overview,
        }
    }
}

struct AppState {
    employees: Vec<Employee>,
    visible: Vec<Employee>,
    error: Option<String>,
    filters: FilterState,
    bookmarks_only: bool,
    store: BookmarkStore,
    selected: usize,
    details: Option<EmployeeDetails>,
    tab: DetailTab,
    screen: Screen,
    editing_search: bool,
    scroll_offset: u16,
    status: Option<String>,
}

impl AppState {
    fn new(store: BookmarkStore) -> Self {
        Self {
            employees: Vec::new(),
            visible: Vec::new(),
            error: None,
            filters: FilterState::default(),
            bookmarks_only: false,
            store,
            selected: 0,
            details: None,
            tab: DetailTab::Overview,
            screen: Screen::Dashboard,
            editing_search: false,
            scroll_offset: 0,
            status: None,
        }
    }

    fn fetch(&mut self) {
        let mut rng = rand::thread_rng();
        match crate::api::fetch_employees(&mut rng) {
            Ok(employees) => {
                self.employees = employees;
                self.error = None;
            }
            Err(e) => {
                self.employees.clear();
                self.error = Some(e.to_string());
            }
        }
        self.refresh();
    }

    /// Re-derives the visible list and regenerates the detail bundle
    /// for the current selection. Details are fresh on every visit.
    fn refresh(&mut self) {
        self.visible = search::select_visible(&self.employees, &self.filters);
        if self.bookmarks_only {
            let store = &self.store;
            self.visible.retain(|e| store.is_bookmarked(e.id));
        }
        if self.selected >= self.visible.len() {
            self.selected = self.visible.len().saturating_sub(1);
        }
        self.scroll_offset = 0;
        self.details = self.current_employee().map(|e| {
            let mut rng = rand::thread_rng();
            mockgen::generate_details(e, &mut rng)
        });
    }

    fn current_employee(&self) -> Option<&Employee> {
        self.visible.get(self.selected)
    }

    fn next(&mut self) {
        if !self.visible.is_empty() && self.selected < self.visible.len() - 1 {
            self.selected += 1;
            self.on_selection_change();
        }
    }

    fn prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.on_selection_change();
        }
    }

    fn on_selection_change(&mut self) {
        self.scroll_offset = 0;
        self.details = self.current_employee().map(|e| {
            let mut rng = rand::thread_rng();
            mockgen::generate_details(e, &mut rng)
        });
    }

    fn cycle_department_filter(&mut self) {
        self.filters.departments = match self.filters.departments.as_deref() {
            None => Some(vec![Department::Hr]),
            Some([Department::Hr]) => Some(vec![Department::Tech]),
            Some([Department::Tech]) => Some(vec![Department::Finance]),
            _ => None,
        };
        self.refresh();
    }

    fn toggle_rating_filter(&mut self, rating: u8) {
        let mut ratings = self.filters.ratings.take().unwrap_or_default();
        if let Some(pos) = ratings.iter().position(|r| *r == rating) {
            ratings.remove(pos);
        } else {
            ratings.push(rating);
        }
        self.filters.ratings = if ratings.is_empty() {
            None
        } else {
            Some(ratings)
        };
        self.refresh();
    }

    /// Toggles the current selection's bookmark. The store writes
    /// through to disk before returning; a failed write is reported on
    /// the status line instead of being shown as a successful toggle.
    fn toggle_bookmark(&mut self) {
        if let Some(id) = self.current_employee().map(|e| e.id) {
            match self.store.toggle(id) {
                Ok(_) => self.status = None,
                Err(e) => self.status = Some(format!("Bookmark for #{} not saved: {}", id, e)),
            }
            if self.bookmarks_only {
                self.refresh();
            }
        }
    }
}

pub fn run_dashboard(store: BookmarkStore) -> Result<()> {
    let mut state = AppState::new(store);
    state.fetch();

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_loop(&mut terminal, &mut state);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    state: &mut AppState,
) -> Result<()> {
    let mut list_state = ListState::default();
    list_state.select(Some(0));

    loop {
        terminal.draw(|frame| draw(frame, state, &mut list_state))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if state.editing_search {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter => state.editing_search = false,
                    KeyCode::Backspace => {
                        state.filters.search_term.pop();
                        state.refresh();
                    }
                    KeyCode::Char(c) => {
                        state.filters.search_term.push(c);
                        state.refresh();
                    }
                    _ => {}
                }
                list_state.select(Some(state.selected));
                continue;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    if state.screen == Screen::Analytics {
                        state.screen = Screen::Dashboard;
                    } else {
                        break;
                    }
                }
                KeyCode::Char('a') => {
                    state.screen = if state.screen == Screen::Analytics {
                        Screen::Dashboard
                    } else {
                        Screen::Analytics
                    };
                }
                KeyCode::Char('/') => state.editing_search = true,
                KeyCode::Char('d') => state.cycle_department_filter(),
                KeyCode::Char(c @ '1'..='5') => {
                    state.toggle_rating_filter(c as u8 - b'0');
                }
                KeyCode::Char('c') => {
                    state.filters.reset();
                    state.refresh();
                }
                KeyCode::Char('b') => state.toggle_bookmark(),
                KeyCode::Char('B') => {
                    state.bookmarks_only = !state.bookmarks_only;
                    state.refresh();
                }
                KeyCode::Char('r') => state.fetch(),
                KeyCode::Down | KeyCode::Char('j') => state.next(),
                KeyCode::Up | KeyCode::Char('k') => state.prev(),
                KeyCode::Char('J') | KeyCode::PageDown => {
                    state.scroll_offset = state.scroll_offset.saturating_add(3);
                }
                KeyCode::Char('K') | KeyCode::PageUp => {
                    state.scroll_offset = state.scroll_offset.saturating_sub(3);
                }
                KeyCode::Tab => state.tab = state.tab.next(),
                KeyCode::Char('o') => state.tab = DetailTab::Overview,
                KeyCode::Char('p') => state.tab = DetailTab::Projects,
                KeyCode::Char('f') => state.tab = DetailTab::Feedback,
                _ => {}
            }
            list_state.select(Some(state.selected));
        }
    }
    Ok(())
}

fn draw(frame: &mut Frame, state: &AppState, list_state: &mut ListState) {
    match state.screen {
        Screen::Dashboard => draw_dashboard(frame, state, list_state),
        Screen::Analytics => draw_analytics(frame, state),
    }
}

fn draw_dashboard(frame: &mut Frame, state: &AppState, list_state: &mut ListState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    // Search and filter bar
    let filter_label = match state.filters.departments.as_deref() {
        None => "all".to_string(),
        Some(departments) => departments
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(","),
    };
    let ratings_label = match &state.filters.ratings {
        None => "all".to_string(),
        Some(ratings) => ratings
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(","),
    };
    let cursor = if state.editing_search { "_" } else { "" };
    let bar = Paragraph::new(format!(
        " search: {}{}   dept: {}   rating: {}   {}",
        state.filters.search_term,
        cursor,
        filter_label,
        ratings_label,
        if state.bookmarks_only {
            "[bookmarks only]"
        } else {
            ""
        }
    ))
    .block(Block::default().borders(Borders::ALL).title(" Filters "));
    frame.render_widget(bar, rows[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[1]);

    // Left pane: employee list
    let items: Vec<ListItem> = state
        .visible
        .iter()
        .map(|e| {
            let mark = if state.store.is_bookmarked(e.id) {
                "*"
            } else {
                " "
            };
            ListItem::new(format!(
                "{} #{:<4} {} | {} {}/5",
                mark,
                e.id,
                crate::truncate(&e.full_name(), 20),
                e.department,
                e.rating
            ))
        })
        .collect();

    let list_title = if state.filters.is_active() || state.bookmarks_only {
        format!(" Employees ({}/{}) ", state.visible.len(), state.employees.len())
    } else {
        format!(" Employees ({}) ", state.visible.len())
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(list_title))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, panes[0], list_state);

    // Right pane: detail tabs
    let tab_title = match state.tab {
        DetailTab::Overview => " Overview | projects | feedback ",
        DetailTab::Projects => " overview | Projects | feedback ",
        DetailTab::Feedback => " overview | projects | Feedback ",
    };
    let detail = build_detail(state);
    let detail_widget = Paragraph::new(detail)
        .block(Block::default().borders(Borders::ALL).title(tab_title))
        .wrap(Wrap { trim: false })
        .scroll((state.scroll_offset, 0));
    frame.render_widget(detail_widget, panes[1]);

    let footer = match &state.status {
        Some(status) => {
            Paragraph::new(format!(" {}", status)).style(Style::default().fg(Color::Red))
        }
        None => Paragraph::new(
            " j/k:select  /:search  d:dept  1-5:rating  c:clear  b:bookmark  B:bookmarked  Tab:tabs  a:analytics  r:reload  q:quit",
        )
        .style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(footer, rows[2]);
}

fn build_detail<'a>(state: &'a AppState) -> Text<'a> {
    if let Some(error) = &state.error {
        return Text::from(vec![
            Line::from(Span::styled(
                "Failed to load employees",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(error.as_str()),
            Line::from(""),
            Line::from(Span::styled(
                "Press r to try again",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
    }

    let Some(employee) = state.current_employee() else {
        return Text::raw("No employee selected");
    };
    let Some(details) = &state.details else {
        return Text::raw("No employee selected");
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!("{} (#{})", employee.full_name(), employee.id),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(format!(
        "{} | rating {}/5 | age {}",
        employee.department, employee.rating, employee.age
    )));
    lines.push(Line::from(""));

    match state.tab {
        DetailTab::Overview => {
            lines.push(Line::from(format!("Email:   {}", employee.email)));
            lines.push(Line::from(format!("Phone:   {}", details.phone)));
            lines.push(Line::from(format!("Address: {}", details.address)));
            lines.push(Line::from(""));

            for paragraph in details.bio.split("\n\n") {
                for line in textwrap::fill(paragraph, 70).lines() {
                    lines.push(Line::from(line.to_string()));
                }
                lines.push(Line::from(""));
            }

            lines.push(Line::from(Span::styled(
                "Performance History",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for review in &details.performance_history {
                lines.push(Line::from(format!(
                    "  {:<16} {}/5",
                    review.month, review.rating
                )));
                for line in textwrap::fill(&review.comment, 66).lines() {
                    lines.push(Line::from(format!("    {}", line)));
                }
            }
        }

        DetailTab::Projects => {
            for project in &details.projects {
                lines.push(Line::from(Span::styled(
                    project.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                let status_style = match project.status {
                    crate::models::ProjectStatus::InProgress => {
                        Style::default().fg(Color::Yellow)
                    }
                    crate::models::ProjectStatus::Completed => Style::default().fg(Color::Green),
                    crate::models::ProjectStatus::OnHold => Style::default().fg(Color::DarkGray),
                };
                lines.push(Line::from(vec![
                    Span::raw(format!("  {} | ", project.role)),
                    Span::styled(project.status.to_string(), status_style),
                    Span::raw(format!(" | {}% complete", project.completion)),
                ]));
                match &project.end_date {
                    Some(end) => lines.push(Line::from(format!(
                        "  {} to {}",
                        project.start_date, end
                    ))),
                    None => lines.push(Line::from(format!("  Started {}", project.start_date))),
                }
                for line in textwrap::fill(&project.description, 66).lines() {
                    lines.push(Line::from(format!("  {}", line)));
                }
                lines.push(Line::from(""));
            }
        }

        DetailTab::Feedback => {
            if details.feedback.is_empty() {
                lines.push(Line::from(Span::styled(
                    "(no feedback this period)",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            for entry in &details.feedback {
                lines.push(Line::from(Span::styled(
                    format!("{} ({}) - {}/5", entry.from, entry.kind, entry.rating),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    format!("  {}", entry.date),
                    Style::default().fg(Color::DarkGray),
                )));
                for line in textwrap::fill(&entry.message, 66).lines() {
                    lines.push(Line::from(format!("  {}", line)));
                }
                lines.push(Line::from(""));
            }
        }
    }

    Text::from(lines)
}

fn draw_analytics(frame: &mut Frame, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(6),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let stats = analytics::department_averages(&state.employees);

    // Ratings scaled x10 so tenths survive the integer bar heights.
    let bars: Vec<(&str, u64)> = stats
        .iter()
        .map(|s| (s.department.as_str(), (s.average_rating * 10.0) as u64))
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Average rating by department (x10) "),
        )
        .data(&bars)
        .bar_width(9)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(chart, rows[0]);

    let trend = analytics::bookmark_trend(state.store.len());
    let trend_data: Vec<u64> = trend.iter().map(|v| *v as u64).collect();
    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Bookmark trend (last 6 months) "),
        )
        .data(&trend_data)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(sparkline, rows[1]);

    let mut summary: Vec<Line> = Vec::new();
    if let Some(top) = analytics::top_department(&stats) {
        summary.push(Line::from(format!(
            "Top department: {} ({:.1}/5)   Employees: {}   Bookmarks: {}",
            top.department,
            top.average_rating,
            state.employees.len(),
            state.store.len()
        )));
    } else {
        summary.push(Line::from("No employee data loaded."));
    }
    summary.push(Line::from(if analytics::trend_is_increasing(&trend) {
        "Bookmarks: increasing trend"
    } else {
        "Bookmarks: decreasing trend"
    }));
    frame.render_widget(
        Paragraph::new(summary).block(Block::default().borders(Borders::ALL).title(" Insights ")),
        rows[2],
    );

    let help = Paragraph::new(" a/q:back to dashboard")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, rows[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Department;

    fn employee(id: u64) -> Employee {
        Employee {
            id,
            first_name: "Ann".to_string(),
            last_name: "Rao".to_string(),
            email: "ann.rao@example.com".to_string(),
            age: 31,
            image: None,
            department: Department::Tech,
            rating: 4,
        }
    }

    #[test]
    fn test_toggle_bookmark_write_failure_sets_status() {
        // A regular file as the parent directory makes every store
        // write fail.
        let blocker = std::env::temp_dir().join(format!(
            "roster-tui-test-blocker-{}",
            std::process::id()
        ));
        std::fs::write(&blocker, "").unwrap();
        let store = BookmarkStore::open_at(blocker.join("bookmarks.json")).unwrap();

        let mut state = AppState::new(store);
        state.employees = vec![employee(7)];
        state.visible = state.employees.clone();

        state.toggle_bookmark();
        assert!(state.status.is_some());
        assert!(!state.store.is_bookmarked(7));
        let _ = std::fs::remove_file(&blocker);
    }

    #[test]
    fn test_toggle_bookmark_success_clears_status() {
        let path = std::env::temp_dir().join(format!(
            "roster-tui-test-toggle-{}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        let store = BookmarkStore::open_at(&path).unwrap();

        let mut state = AppState::new(store);
        state.employees = vec![employee(7)];
        state.visible = state.employees.clone();
        state.status = Some("stale".to_string());

        state.toggle_bookmark();
        assert!(state.status.is_none());
        assert!(state.store.is_bookmarked(7));
        let _ = std::fs::remove_file(&path);
    }
}
