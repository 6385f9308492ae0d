//! Modal prompt dialog
//!
//! A [`PromptDialog`] presents either a free-text field or a single-selection
//! list and resolves to exactly one string, or to nothing when the user
//! cancels or closes it.
//!
//! The module is structured in layers:
//! - `layout`: mode selection and widget assembly, independent of any UI library
//! - `surface`: abstract presentation interface the modal loop runs on
//! - `terminal`: concrete surface using the dialoguer library
//! - `automatic`: non-interactive surface that accepts what is pre-filled
//! - `scripted`: surface replaying queued interactions

use crate::{constants::DEFAULT_TITLE, error::Result};

pub mod automatic;
pub mod layout;
pub mod scripted;
pub mod surface;
pub mod terminal;

pub use automatic::AutomaticSurface;
pub use layout::{classify_mode, Button, Control, DialogLayout, DialogMode};
pub use scripted::{ScriptedAction, ScriptedSurface};
pub use surface::{DialogSurface, Selection};
pub use terminal::TerminalSurface;

/// Lifecycle of a dialog. Every state but `Open` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Open,
    /// OK was pressed; the draft became the result.
    Confirmed,
    /// Cancel was pressed.
    Cancelled,
    /// The window was closed without pressing a button.
    Dismissed,
}

/// A user interaction with an open dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    /// The text field now holds this text.
    Edit(String),
    /// The item at this index was selected.
    Select(usize),
    Press(Button),
    Close,
}

/// A modal dialog collecting one string from the user.
#[derive(Debug, Clone)]
pub struct PromptDialog {
    title: String,
    mode: DialogMode,
    layout: DialogLayout,
    draft: String,
    result: Option<String>,
    state: DialogState,
}

impl PromptDialog {
    /// Builds a dialog without presenting it.
    pub fn new(label: &str, default_value: &str, choices: Option<&[String]>) -> Self {
        let mode = classify_mode(label, choices);
        let layout = DialogLayout::assemble(mode, label, default_value, choices);
        log::debug!("Assembled {mode:?} dialog for '{}'", layout.label);

        Self {
            title: DEFAULT_TITLE.to_string(),
            mode,
            layout,
            draft: default_value.to_string(),
            result: None,
            state: DialogState::Open,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds a dialog and runs it on `surface` until the user is done with it.
    pub fn show<S: DialogSurface>(
        label: &str,
        default_value: &str,
        choices: Option<&[String]>,
        surface: &S,
    ) -> Result<Self> {
        let mut dialog = Self::new(label, default_value, choices);
        dialog.run(surface)?;
        Ok(dialog)
    }

    /// Presents the dialog and blocks until it reaches a terminal state.
    ///
    /// The surface is closed again whether or not the interaction succeeded.
    pub fn run<S: DialogSurface>(&mut self, surface: &S) -> Result<()> {
        surface.open(&self.title, &self.layout)?;
        let outcome = self.interact(surface);
        surface.close();
        outcome
    }

    fn interact<S: DialogSurface>(&mut self, surface: &S) -> Result<()> {
        let mut awaiting_control = self.layout.control != Control::None;

        while self.is_open() {
            let event = if awaiting_control {
                awaiting_control = false;
                match self.control_event(surface)? {
                    Some(event) => event,
                    None => continue,
                }
            } else {
                self.button_event(surface)?
            };
            self.handle(event);
        }

        Ok(())
    }

    /// Asks the surface for the control's interaction. `None` if nothing changed.
    fn control_event<S: DialogSurface>(&self, surface: &S) -> Result<Option<DialogEvent>> {
        let event = match &self.layout.control {
            Control::TextField { .. } => Some(
                surface
                    .edit_text(&self.layout.label, &self.draft)?
                    .map_or(DialogEvent::Close, DialogEvent::Edit),
            ),
            Control::ChoiceList { choices, selected } => {
                match surface.pick_choice(&self.layout.label, choices, *selected)? {
                    Selection::Picked(index) => Some(DialogEvent::Select(index)),
                    Selection::Kept => None,
                    Selection::Closed => Some(DialogEvent::Close),
                }
            }
            Control::None => None,
        };
        Ok(event)
    }

    fn button_event<S: DialogSurface>(&self, surface: &S) -> Result<DialogEvent> {
        Ok(surface
            .press_button(&self.layout.buttons, self.layout.default_button)?
            .map_or(DialogEvent::Close, DialogEvent::Press))
    }

    /// Applies one interaction. Returns `false` if the event was ignored.
    pub fn handle(&mut self, event: DialogEvent) -> bool {
        if !self.is_open() {
            log::debug!("Ignoring {event:?}: dialog is already {:?}", self.state);
            return false;
        }

        match event {
            DialogEvent::Edit(text) => self.edit_text(text),
            DialogEvent::Select(index) => self.select(index),
            DialogEvent::Press(Button::Ok) => self.confirm(),
            DialogEvent::Press(Button::Cancel) => self.cancel(),
            DialogEvent::Close => self.dismiss(),
        }
    }

    /// Replaces the draft. Only the text field accepts typing.
    pub fn edit_text(&mut self, text: String) -> bool {
        if !self.is_open() || self.mode != DialogMode::Text {
            log::warn!("Ignoring text edit in {:?} mode", self.mode);
            return false;
        }
        self.draft = text;
        true
    }

    /// Selects a choice and copies it into the draft.
    pub fn select(&mut self, index: usize) -> bool {
        let choice = match &mut self.layout.control {
            Control::ChoiceList { choices, selected } if self.state == DialogState::Open => {
                match choices.get(index) {
                    Some(choice) => {
                        *selected = Some(index);
                        choice.clone()
                    }
                    None => {
                        log::warn!("Ignoring selection of missing choice #{index}");
                        return false;
                    }
                }
            }
            _ => {
                log::warn!("Ignoring selection in {:?} mode", self.mode);
                return false;
            }
        };
        self.draft = choice;
        true
    }

    /// Presses OK: the draft becomes the result.
    pub fn confirm(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.result = Some(self.draft.clone());
        self.finish(DialogState::Confirmed)
    }

    /// Presses Cancel, if the dialog shows it.
    pub fn cancel(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        if !self.layout.has_button(Button::Cancel) {
            log::warn!("Ignoring Cancel: not available in {:?} mode", self.mode);
            return false;
        }
        self.finish(DialogState::Cancelled)
    }

    /// Closes the window without a result.
    pub fn dismiss(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.finish(DialogState::Dismissed)
    }

    fn finish(&mut self, state: DialogState) -> bool {
        log::debug!("Dialog '{}' is now {state:?}", self.layout.label);
        self.state = state;
        true
    }

    pub fn mode(&self) -> DialogMode {
        self.mode
    }

    pub fn layout(&self) -> &DialogLayout {
        &self.layout
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    /// The confirmed value; `None` while open or after cancel/dismiss.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn into_result(self) -> Option<String> {
        self.result
    }
}
