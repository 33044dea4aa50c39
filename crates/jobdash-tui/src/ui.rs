use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use jobdash_domain::Post;

use crate::app::{App, AppMode};

pub fn render(app: &App, frame: &mut Frame) {
    let mut constraints = vec![
        Constraint::Length(3), // clock
        Constraint::Length(3), // search bar
        Constraint::Min(0),    // results
    ];
    if app.combined.is_some() {
        constraints.push(Constraint::Length(10));
    }
    constraints.push(Constraint::Length(3)); // footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    render_clock(app, frame, chunks[0]);
    render_search_bar(app, frame, chunks[1]);
    render_posts(app, frame, chunks[2]);
    if app.combined.is_some() {
        render_combined(app, frame, chunks[3]);
    }
    render_footer(app, frame, *chunks.last().expect("footer chunk"));
}

fn render_clock(app: &App, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            app.clock.time_line(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.clock.date_line(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let clock = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(clock, area);
}

fn render_search_bar(app: &App, frame: &mut Frame, area: Rect) {
    let is_active = app.mode == AppMode::Search;
    let border_style = if is_active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let mut spans = Vec::new();
    if app.search.input.is_empty() && !is_active {
        spans.push(Span::styled(
            "Search job posts by title...",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::raw(app.search.input.as_str().to_string()));
        if is_active {
            spans.push(Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)));
        }
    }

    let title = if is_active {
        "Search (Enter: apply, Esc: back)"
    } else {
        "Search (/ to focus)"
    };
    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );
    frame.render_widget(bar, area);
}

fn render_posts(app: &App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .state
        .posts
        .iter()
        .map(|post| post_row(app, post))
        .collect();

    let title = format!(
        "Posts ({}){}",
        app.state.posts.len(),
        if app.state.selected.is_empty() {
            String::new()
        } else {
            format!(" \u{2014} {} selected", app.state.selected.len())
        }
    );

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut list_state = ListState::default().with_selected(app.state.cursor.get());
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn post_row<'a>(app: &App, post: &'a Post) -> ListItem<'a> {
    let marker = if app.state.is_post_selected(post.id) {
        Span::styled("\u{25cf} ", Style::default().fg(Color::Green))
    } else {
        Span::raw("\u{25cb} ")
    };
    let thumb = if post.has_thumbnail() {
        Span::styled("\u{25a3} ", Style::default().fg(Color::Blue))
    } else {
        Span::raw("  ")
    };

    ListItem::new(Line::from(vec![
        marker,
        thumb,
        Span::raw(post.title.as_str()),
        Span::styled(
            format!("  {}", post.published_label()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("  {}", post.kind.label()),
            Style::default().fg(Color::Cyan),
        ),
    ]))
}

fn render_combined(app: &App, frame: &mut Frame, area: Rect) {
    let text = app.combined.as_deref().unwrap_or_default();
    let panel = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Combined Selected (y: copy, Esc: close)"),
    );
    frame.render_widget(panel, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let line = if let Some(status) = &app.status {
        Line::from(Span::styled(
            status.as_str(),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        let mut spans = Vec::new();
        if app.state.loading {
            spans.push(Span::styled(
                "Loading... ",
                Style::default().fg(Color::Yellow),
            ));
        } else if app.state.exhausted {
            spans.push(Span::styled(
                "End of results ",
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.push(Span::raw(
            "/ search | j/k move | space select | m load more | c combine | y copy | r refresh | q quit",
        ));
        Line::from(spans)
    };

    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
