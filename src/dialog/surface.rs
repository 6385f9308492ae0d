//! Presentation backends for prompt dialogs
//!
//! A surface renders a dialog and reports what the user did with it. The
//! dialog's modal loop owns the state machine; surfaces only present widgets
//! and block until the user interacts with them. Every interaction may end
//! with the window being closed, reported as `None` or [`Selection::Closed`].

use super::layout::{Button, DialogLayout};
use crate::error::Result;

/// What the user did with a choice list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The item at this index was picked.
    Picked(usize),
    /// The list was left as it was; the draft keeps its value.
    Kept,
    /// The window was closed.
    Closed,
}

/// Abstract interface for dialog presentation
pub trait DialogSurface {
    /// Puts the dialog on screen.
    ///
    /// Fails with [`crate::error::Error::PresentationUnavailable`] when there
    /// is nothing to present on.
    fn open(&self, title: &str, layout: &DialogLayout) -> Result<()>;

    /// Lets the user edit the text field, starting from `draft`.
    fn edit_text(&self, label: &str, draft: &str) -> Result<Option<String>>;

    /// Lets the user pick one of `choices`, starting at `selected`.
    fn pick_choice(
        &self,
        label: &str,
        choices: &[String],
        selected: Option<usize>,
    ) -> Result<Selection>;

    /// Waits for one of `buttons` to be pressed.
    fn press_button(&self, buttons: &[Button], default: Button) -> Result<Option<Button>>;

    /// Releases the on-screen presence.
    fn close(&self);
}

impl<S: DialogSurface + ?Sized> DialogSurface for &S {
    fn open(&self, title: &str, layout: &DialogLayout) -> Result<()> {
        (**self).open(title, layout)
    }

    fn edit_text(&self, label: &str, draft: &str) -> Result<Option<String>> {
        (**self).edit_text(label, draft)
    }

    fn pick_choice(
        &self,
        label: &str,
        choices: &[String],
        selected: Option<usize>,
    ) -> Result<Selection> {
        (**self).pick_choice(label, choices, selected)
    }

    fn press_button(&self, buttons: &[Button], default: Button) -> Result<Option<Button>> {
        (**self).press_button(buttons, default)
    }

    fn close(&self) {
        (**self).close()
    }
}
