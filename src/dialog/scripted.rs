//! Scripted dialog surface.
//!
//! Pre-loaded with a queue of interactions. Each time the dialog asks for
//! input the next interaction is popped from the front. Errors if the queue
//! is exhausted, if the interaction does not fit the control being asked for,
//! or if a picked index is out of range.

use super::{
    layout::{Button, DialogLayout},
    surface::{DialogSurface, Selection},
};
use crate::error::{Error, Result};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// One queued user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAction {
    /// Leave this text in the text field.
    Text(String),
    /// Pick the item at this index.
    Pick(usize),
    /// Leave the text field or choice list as it is.
    Keep,
    Press(Button),
    /// Close the window.
    Close,
}

/// Surface that replays pre-configured interactions in order.
pub struct ScriptedSurface {
    actions: RefCell<VecDeque<ScriptedAction>>,
    available: bool,
    opened: Cell<usize>,
    closed: Cell<usize>,
}

impl ScriptedSurface {
    /// Create a surface that will replay the given interactions in order.
    pub fn new(actions: Vec<ScriptedAction>) -> Self {
        Self {
            actions: RefCell::new(actions.into()),
            available: true,
            opened: Cell::new(0),
            closed: Cell::new(0),
        }
    }

    /// A surface that cannot present anything, like a headless machine.
    pub fn headless() -> Self {
        Self { available: false, ..Self::new(Vec::new()) }
    }

    /// How many unconsumed interactions remain.
    pub fn remaining(&self) -> usize {
        self.actions.borrow().len()
    }

    pub fn opened(&self) -> usize {
        self.opened.get()
    }

    pub fn closed(&self) -> usize {
        self.closed.get()
    }

    fn next_action(&self, asking_for: &str) -> Result<ScriptedAction> {
        self.actions.borrow_mut().pop_front().ok_or_else(|| {
            Error::ScriptError(format!("no more interactions queued (asked for {asking_for})"))
        })
    }
}

fn mismatch(action: &ScriptedAction, asking_for: &str) -> Error {
    Error::ScriptError(format!("queued {action:?} does not fit {asking_for}"))
}

impl DialogSurface for ScriptedSurface {
    fn open(&self, _title: &str, _layout: &DialogLayout) -> Result<()> {
        if !self.available {
            return Err(Error::PresentationUnavailable {
                reason: "scripted surface is headless".to_string(),
            });
        }
        self.opened.set(self.opened.get() + 1);
        Ok(())
    }

    fn edit_text(&self, label: &str, draft: &str) -> Result<Option<String>> {
        let asking_for = format!("text for '{label}'");
        match self.next_action(&asking_for)? {
            ScriptedAction::Text(text) => Ok(Some(text)),
            ScriptedAction::Keep => Ok(Some(draft.to_string())),
            ScriptedAction::Close => Ok(None),
            other => Err(mismatch(&other, &asking_for)),
        }
    }

    fn pick_choice(
        &self,
        label: &str,
        choices: &[String],
        _selected: Option<usize>,
    ) -> Result<Selection> {
        let asking_for = format!("a choice for '{label}'");
        match self.next_action(&asking_for)? {
            ScriptedAction::Pick(index) if index < choices.len() => Ok(Selection::Picked(index)),
            ScriptedAction::Pick(index) => Err(Error::ScriptError(format!(
                "choice index {index} out of range for {} items",
                choices.len()
            ))),
            ScriptedAction::Keep => Ok(Selection::Kept),
            ScriptedAction::Close => Ok(Selection::Closed),
            other => Err(mismatch(&other, &asking_for)),
        }
    }

    fn press_button(&self, _buttons: &[Button], _default: Button) -> Result<Option<Button>> {
        let asking_for = "a button";
        match self.next_action(asking_for)? {
            ScriptedAction::Press(button) => Ok(Some(button)),
            ScriptedAction::Close => Ok(None),
            other => Err(mismatch(&other, asking_for)),
        }
    }

    fn close(&self) {
        self.closed.set(self.closed.get() + 1);
    }
}
