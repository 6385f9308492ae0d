//! Dialoguer-based dialog surface
//!
//! Presents dialogs on the controlling terminal. The text field is an
//! `Input`, the choice list and the button row are `Select` menus. Escape
//! (or `q`) in a menu closes the dialog.
//!
//! A `Select` always highlights an item, so pressing Return on a choice list
//! picks one. A default that is not among the choices is therefore replaced
//! by the highlighted item.

use super::{
    layout::{Button, Control, DialogLayout},
    surface::{DialogSurface, Selection},
};
use crate::error::{Error, Result};
use dialoguer::{
    console::{style, Term},
    Input, Select,
};

/// Terminal implementation of the dialog surface
pub struct TerminalSurface {
    term: Term,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::with_term(Term::stderr())
    }

    /// Present on the given terminal instead of stderr.
    pub fn with_term(term: Term) -> Self {
        Self { term }
    }

    /// Keys are read from the controlling tty, so only stderr has to be one.
    fn ensure_interactive(&self) -> Result<()> {
        if !self.term.is_term() {
            return Err(Error::PresentationUnavailable {
                reason: "stderr is not a terminal".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogSurface for TerminalSurface {
    fn open(&self, title: &str, layout: &DialogLayout) -> Result<()> {
        self.ensure_interactive()?;
        self.term.write_line(&style(title).bold().to_string())?;
        if layout.control == Control::None {
            // No control will carry the label as its prompt.
            self.term.write_line(&layout.label)?;
        }
        Ok(())
    }

    fn edit_text(&self, label: &str, draft: &str) -> Result<Option<String>> {
        let text: String = Input::new()
            .with_prompt(label)
            .with_initial_text(draft)
            .allow_empty(true)
            .interact_text_on(&self.term)?;
        Ok(Some(text))
    }

    fn pick_choice(
        &self,
        label: &str,
        choices: &[String],
        selected: Option<usize>,
    ) -> Result<Selection> {
        let picked = Select::new()
            .with_prompt(label)
            .items(choices)
            .default(selected.unwrap_or(0))
            .interact_on_opt(&self.term)?;

        Ok(picked.map_or(Selection::Closed, Selection::Picked))
    }

    fn press_button(&self, buttons: &[Button], default: Button) -> Result<Option<Button>> {
        let captions: Vec<String> = buttons.iter().map(ToString::to_string).collect();
        let default_index = buttons.iter().position(|b| *b == default).unwrap_or(0);

        let pressed = Select::new()
            .items(&captions)
            .default(default_index)
            .interact_on_opt(&self.term)?;

        Ok(pressed.and_then(|index| buttons.get(index).copied()))
    }

    fn close(&self) {
        if let Err(e) = self.term.flush() {
            log::debug!("Failed to flush terminal on close: {e}");
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::dialog::{DialogMode, PromptDialog};
    use std::fs::{File, OpenOptions};

    fn null_surface() -> TerminalSurface {
        let read = File::open("/dev/null").unwrap();
        let write = OpenOptions::new().write(true).open("/dev/null").unwrap();
        TerminalSurface::with_term(Term::read_write_pair(read, write))
    }

    #[test]
    fn open_fails_without_terminal() {
        let surface = null_surface();
        let layout = DialogLayout::assemble(DialogMode::Text, "Enter name", "", None);
        assert!(matches!(
            surface.open("Build Input", &layout),
            Err(Error::PresentationUnavailable { .. })
        ));
    }

    #[test]
    fn show_fails_before_reading_input() {
        // /dev/null yields EOF, so reaching the text field would surface an IO error.
        let surface = null_surface();
        assert!(matches!(
            PromptDialog::show("Enter name", "", None, &surface),
            Err(Error::PresentationUnavailable { .. })
        ));
    }
}
