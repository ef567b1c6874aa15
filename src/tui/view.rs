//! Per-screen rendering.
//!
//! [`view`] maps the app state to a [`View`] without side effects, so the same
//! state always renders the same text. [`draw`] lays a view out on a frame.

use crate::domain::{ELLIPSIS, Note};
use crate::store::NoteRepository;
use crate::tui::{App, Editor, Screen, Viewport};
use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// Longest content preview shown in the list, in characters.
pub const PREVIEW_CHARS: usize = 60;

const BRAND: Color = Color::Rgb(0x7D, 0x56, 0xF4);
const SELECTED: Color = Color::Rgb(0xFF, 0x6B, 0x6B);
const SEARCH: Color = Color::Rgb(0xFF, 0xD7, 0x00);
const EDITOR: Color = Color::Rgb(0x32, 0xCD, 0x32);

const CARET: &str = "█";

// Rows taken by the header, the body block's borders and the footer.
const CHROME_ROWS: u16 = 4;
// Columns taken by the body block's borders.
const CHROME_COLS: u16 = 2;
const ROWS_PER_NOTE: u16 = 4;

/// Everything needed to draw one screen.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub header: String,
    pub body: Text<'static>,
    pub footer: &'static str,
    pub accent: Color,
}

/// Renders the current screen.
pub fn view<R: NoteRepository>(app: &App<R>) -> View {
    match app.screen() {
        Screen::MainMenu => main_menu(),
        Screen::NoteList => note_list(app.filtered(), app.cursor(), app.viewport()),
        Screen::Search => search(app.query(), app.filtered().len()),
        Screen::NoteEdit(editor) => note_edit(editor, app.viewport()),
    }
}

/// Draws the current screen onto `frame`.
pub fn draw<R: NoteRepository>(frame: &mut Frame<'_>, app: &App<R>) {
    let view = view(app);
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let header_style = Style::default()
        .fg(Color::Rgb(0xFA, 0xFA, 0xFA))
        .bg(BRAND)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("  {}  ", view.header),
            header_style,
        ))),
        header,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(view.accent));
    frame.render_widget(
        Paragraph::new(view.body)
            .block(block)
            .wrap(Wrap { trim: false }),
        body,
    );

    frame.render_widget(
        Paragraph::new(view.footer).style(Style::default().fg(Color::DarkGray)),
        footer,
    );
}

// ===========================================
// Screens
// ===========================================

fn main_menu() -> View {
    let body = Text::from(vec![
        Line::from("Welcome to your digital notebook!"),
        Line::default(),
        Line::from("1. New Note (n)     - Create a new note"),
        Line::from("2. List Notes (l)   - Browse existing notes"),
        Line::from("3. Search (s)       - Find notes by title, content or tags"),
        Line::default(),
        Line::from("Press the number or letter key to navigate."),
        Line::from("Press 'q' to quit."),
    ]);

    View {
        header: "📝 Zettl Notebook".to_string(),
        body,
        footer: "n: New • l: List • s: Search • q: Quit",
        accent: BRAND,
    }
}

fn note_list(notes: &[Note], cursor: usize, viewport: Viewport) -> View {
    let header = format!("📚 Notes ({})", notes.len());
    let footer = "↑/↓ Navigate • Enter: Open • /: Search • d: Delete • Esc: Back";

    if notes.is_empty() {
        return View {
            header,
            body: Text::from("No notes found. Press 'Esc' to go back or '/' to search."),
            footer,
            accent: BRAND,
        };
    }

    let capacity = usize::from((viewport.height.saturating_sub(CHROME_ROWS) / ROWS_PER_NOTE).max(1));
    let start = (cursor + 1).saturating_sub(capacity);

    let mut lines = Vec::new();
    for (idx, note) in notes.iter().enumerate().skip(start).take(capacity) {
        let (marker, style) = if idx == cursor {
            (
                "▌ ",
                Style::default().fg(SELECTED).add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default())
        };
        let created = note.created_at().with_timezone(&Local);

        lines.push(Line::styled(format!("{marker}📄 {}", note.title()), style));
        lines.push(Line::styled(
            format!("{marker}🕒 {}", created.format("%b %-d, %Y %H:%M")),
            style,
        ));
        lines.push(Line::styled(
            format!("{marker}💭 {}", preview(note.content())),
            style,
        ));
        lines.push(Line::default());
    }

    View {
        header,
        body: Text::from(lines),
        footer,
        accent: BRAND,
    }
}

fn search(query: &str, matches: usize) -> View {
    let found = match matches {
        1 => "Found 1 note".to_string(),
        n => format!("Found {n} notes"),
    };

    View {
        header: "🔍 Search Notes".to_string(),
        body: Text::from(vec![
            Line::from(format!("Search: {query}|")),
            Line::default(),
            Line::from(found),
        ]),
        footer: "Type to search • Enter: View results • Esc: Back",
        accent: SEARCH,
    }
}

fn note_edit(editor: &Editor, viewport: Viewport) -> View {
    let header = match editor.target() {
        Some(note) => format!("✏️  Editing: {}", note.title()),
        None => "✏️  New Note".to_string(),
    };

    let body = if editor.content().is_empty() {
        format!("Start typing your note...\n\n{CARET}")
    } else {
        format!("{}{CARET}", editor.content())
    };

    // Keep the caret on screen: wrap to the body width and show the last rows.
    let width = usize::from(viewport.width.saturating_sub(CHROME_COLS).max(1));
    let rows = usize::from(viewport.height.saturating_sub(CHROME_ROWS).max(1));
    let wrapped: Vec<String> = body
        .split('\n')
        .flat_map(|line| hard_wrap(line, width))
        .collect();
    let start = wrapped.len().saturating_sub(rows);

    View {
        header,
        body: Text::from(
            wrapped
                .into_iter()
                .skip(start)
                .map(Line::from)
                .collect::<Vec<_>>(),
        ),
        footer: "Ctrl+S: Save • Esc: Back • Enter: New line • Tab: Indent • Ctrl+C: Quit",
        accent: EDITOR,
    }
}

/// Splits one line into rows of at most `width` characters.
fn hard_wrap(line: &str, width: usize) -> Vec<String> {
    if line.is_empty() {
        return vec![String::new()];
    }
    let chars: Vec<char> = line.chars().collect();
    chars.chunks(width).map(|row| row.iter().collect()).collect()
}

/// Flattens content to one line and shortens it to [`PREVIEW_CHARS`].
fn preview(content: &str) -> String {
    let flat = content.replace('\n', " ");
    match flat.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &flat[..cut]),
        None => flat,
    }
}
