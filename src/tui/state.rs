//! The interaction state machine.

use crate::domain::{NewNote, Note, NoteId, derive_title};
use crate::store::NoteRepository;
use crate::tui::Input;
use log::{debug, error, info};

/// Tag given to notes created from the editor unless configured otherwise.
pub const DEFAULT_TAG: &str = "notebook";

/// Inserted by the Tab key in the editor.
pub const INDENT: &str = "    ";

/// Whether the event loop should keep running after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The screen currently shown.
///
/// Edit buffers only exist while editing, so they live inside `NoteEdit`.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    MainMenu,
    NoteList,
    Search,
    NoteEdit(Editor),
}

/// In-progress edit of a new or existing note.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Editor {
    title: String,
    content: String,
    target: Option<Note>,
}

impl Editor {
    /// An empty editor for a new note.
    pub fn blank() -> Self {
        Self::default()
    }

    /// An editor preloaded with an existing note; saving overwrites it.
    pub fn existing(note: Note) -> Self {
        Self {
            title: note.title().to_string(),
            content: note.content().to_string(),
            target: Some(note),
        }
    }

    /// Returns the title buffer. Empty means the title is derived on save.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the content buffer.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the note being edited, or `None` for a new note.
    pub fn target(&self) -> Option<&Note> {
        self.target.as_ref()
    }

    /// Returns the title to store: the explicit title, or one derived from content.
    pub fn resolved_title(&self) -> String {
        if self.title.is_empty() {
            derive_title(&self.content)
        } else {
            self.title.clone()
        }
    }
}

/// Terminal dimensions, used only when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

/// The application state.
///
/// `App` owns the repository and every in-memory copy of notes. The snapshot
/// is only refreshed by an explicit reload after a write; the filtered list is
/// recomputed whenever the search query changes.
///
/// # Examples
///
/// ```
/// use zettl::store::SqliteStore;
/// use zettl::tui::{App, Flow, Input, Screen};
///
/// let store = SqliteStore::open_in_memory().unwrap();
/// let mut app = App::new(store);
///
/// app.handle(Input::Char('n'));
/// for c in "Buy milk".chars() {
///     app.handle(Input::Char(c));
/// }
/// app.handle(Input::Save);
///
/// assert_eq!(app.screen(), &Screen::NoteList);
/// assert_eq!(app.filtered()[0].title(), "Buy milk");
/// assert_eq!(app.handle(Input::Esc), Flow::Continue);
/// assert_eq!(app.handle(Input::Char('q')), Flow::Quit);
/// ```
pub struct App<R> {
    repo: R,
    screen: Screen,
    notes: Vec<Note>,
    filtered: Vec<Note>,
    query: String,
    cursor: usize,
    viewport: Viewport,
    default_tag: String,
}

impl<R: NoteRepository> App<R> {
    /// Creates the app in the main menu and loads the initial snapshot.
    ///
    /// A failed load is logged and the app starts with no notes.
    pub fn new(repo: R) -> Self {
        let mut app = Self {
            repo,
            screen: Screen::MainMenu,
            notes: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            cursor: 0,
            viewport: Viewport::default(),
            default_tag: DEFAULT_TAG.to_string(),
        };
        app.reload();
        app
    }

    /// Sets the tag given to newly created notes.
    pub fn with_default_tag(mut self, tag: impl Into<String>) -> Self {
        self.default_tag = tag.into();
        self
    }

    // ===========================================
    // Accessors
    // ===========================================

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Returns the last snapshot loaded from the repository.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the notes matching the current query.
    pub fn filtered(&self) -> &[Note] {
        &self.filtered
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the note under the cursor, if the filtered list is not empty.
    pub fn selected(&self) -> Option<&Note> {
        self.filtered.get(self.cursor)
    }

    /// Returns the editor while on the edit screen.
    pub fn editor(&self) -> Option<&Editor> {
        match &self.screen {
            Screen::NoteEdit(editor) => Some(editor),
            _ => None,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn default_tag(&self) -> &str {
        &self.default_tag
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Consumes the app and hands back the repository, e.g. to shut it down.
    pub fn into_repo(self) -> R {
        self.repo
    }

    // ===========================================
    // Transitions
    // ===========================================

    /// Applies one input and reports whether to keep running.
    pub fn handle(&mut self, input: Input) -> Flow {
        if let Input::Resize { width, height } = input {
            self.viewport = Viewport { width, height };
            return Flow::Continue;
        }

        match self.screen {
            Screen::MainMenu => self.on_main_menu(input),
            Screen::NoteList => self.on_note_list(input),
            Screen::Search => self.on_search(input),
            Screen::NoteEdit(_) => self.on_note_edit(input),
        }
    }

    fn on_main_menu(&mut self, input: Input) -> Flow {
        match input {
            Input::Char('n' | '1') => {
                self.screen = Screen::NoteEdit(Editor::blank());
            }
            Input::Char('l' | '2') => {
                self.cursor = 0;
                self.screen = Screen::NoteList;
            }
            Input::Char('s' | '3') => {
                self.set_query(String::new());
                self.cursor = 0;
                self.screen = Screen::Search;
            }
            Input::Char('q') | Input::Interrupt => return Flow::Quit,
            _ => {}
        }
        Flow::Continue
    }

    fn on_note_list(&mut self, input: Input) -> Flow {
        match input {
            Input::Up | Input::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            Input::Down | Input::Char('j') => {
                if self.cursor + 1 < self.filtered.len() {
                    self.cursor += 1;
                }
            }
            Input::Enter => {
                if let Some(note) = self.selected().cloned() {
                    debug!("opening note {}", note.id());
                    self.screen = Screen::NoteEdit(Editor::existing(note));
                }
            }
            Input::Char('/') => {
                self.set_query(String::new());
                self.screen = Screen::Search;
            }
            Input::Char('d') => {
                if let Some(id) = self.selected().map(Note::id) {
                    self.delete(id);
                }
            }
            Input::Char('q') | Input::Esc | Input::Interrupt => {
                self.screen = Screen::MainMenu;
            }
            _ => {}
        }
        Flow::Continue
    }

    fn on_search(&mut self, input: Input) -> Flow {
        match input {
            Input::Char(c) => {
                let mut query = std::mem::take(&mut self.query);
                query.push(c);
                self.set_query(query);
            }
            Input::Backspace => {
                let mut query = std::mem::take(&mut self.query);
                query.pop();
                self.set_query(query);
            }
            Input::Enter => {
                self.cursor = 0;
                self.screen = Screen::NoteList;
            }
            Input::Esc | Input::Interrupt => {
                self.set_query(String::new());
                self.screen = Screen::NoteList;
            }
            _ => {}
        }
        Flow::Continue
    }

    fn on_note_edit(&mut self, input: Input) -> Flow {
        let Screen::NoteEdit(editor) = &mut self.screen else {
            return Flow::Continue;
        };

        match input {
            Input::Char(c) => editor.content.push(c),
            Input::Enter => editor.content.push('\n'),
            Input::Tab => editor.content.push_str(INDENT),
            Input::Backspace => {
                editor.content.pop();
            }
            Input::Save => self.save(),
            Input::Esc => self.screen = Screen::NoteList,
            Input::Interrupt => {
                info!("edit aborted without saving");
                return Flow::Quit;
            }
            _ => {}
        }
        Flow::Continue
    }

    // ===========================================
    // Persistence
    // ===========================================

    /// Writes the editor contents and returns to the list.
    ///
    /// An empty buffer is a no-op that stays in the editor. Failures are
    /// logged and the flow continues to the list regardless.
    fn save(&mut self) {
        let Screen::NoteEdit(editor) = &self.screen else {
            return;
        };
        if editor.content.is_empty() {
            return;
        }

        let title = editor.resolved_title();
        let outcome = match &editor.target {
            Some(note) => self
                .repo
                .update(&note.revised(title, editor.content.as_str()))
                .map(|saved| info!("updated note {}", saved.id())),
            None => self
                .repo
                .create(
                    &NewNote::new(title, editor.content.as_str())
                        .with_tags(self.default_tag.as_str()),
                )
                .map(|saved| info!("created note {}", saved.id())),
        };
        if let Err(err) = outcome {
            error!("failed to save note: {err}");
        }

        self.query.clear();
        self.reload();
        self.cursor = 0;
        self.screen = Screen::NoteList;
    }

    fn delete(&mut self, id: NoteId) {
        match self.repo.delete(id) {
            Ok(()) => info!("deleted note {id}"),
            Err(err) => error!("failed to delete note {id}: {err}"),
        }
        self.reload();
    }

    /// Replaces the snapshot from the repository and reapplies the filter.
    ///
    /// On failure the previous snapshot is kept.
    fn reload(&mut self) {
        match self.repo.get_all() {
            Ok(notes) => self.notes = notes,
            Err(err) => error!("failed to load notes: {err}"),
        }
        self.apply_filter();
    }

    fn set_query(&mut self, query: String) {
        self.query = query;
        self.apply_filter();
    }

    /// Recomputes the filtered list and keeps the cursor inside it.
    fn apply_filter(&mut self) {
        self.filtered = if self.query.is_empty() {
            self.notes.clone()
        } else {
            self.notes
                .iter()
                .filter(|note| note.matches_ignore_case(&self.query))
                .cloned()
                .collect()
        };

        if self.cursor >= self.filtered.len() {
            self.cursor = self.filtered.len().saturating_sub(1);
        }
    }
}
