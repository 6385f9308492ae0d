//! Non-interactive dialog surface
//!
//! Answers every dialog the way a user pressing Return would: the text field
//! keeps its draft, the list is left alone and the default button is pressed.
//! Predefined answers can be registered per label.
//! Useful for automation, testing, or CI/CD environments.

use super::{
    layout::{Button, DialogLayout},
    surface::{DialogSurface, Selection},
};
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Automatic surface that gives predefined or default responses
#[derive(Debug, Default)]
pub struct AutomaticSurface {
    text_responses: HashMap<String, String>,
    choice_responses: HashMap<String, usize>,
}

impl AutomaticSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predefined text response for a specific label
    pub fn with_text_response(mut self, label: &str, response: &str) -> Self {
        self.text_responses.insert(label.to_string(), response.to_string());
        self
    }

    /// Add a predefined choice response for a specific label
    pub fn with_choice_response(mut self, label: &str, choice_index: usize) -> Self {
        self.choice_responses.insert(label.to_string(), choice_index);
        self
    }
}

impl DialogSurface for AutomaticSurface {
    fn open(&self, title: &str, layout: &DialogLayout) -> Result<()> {
        log::debug!("Auto-answering '{title}' dialog: {}", layout.label);
        Ok(())
    }

    fn edit_text(&self, label: &str, draft: &str) -> Result<Option<String>> {
        let response =
            self.text_responses.get(label).cloned().unwrap_or_else(|| draft.to_string());
        log::info!("Auto-answering text prompt '{label}' with: '{response}'");
        Ok(Some(response))
    }

    fn pick_choice(
        &self,
        label: &str,
        choices: &[String],
        selected: Option<usize>,
    ) -> Result<Selection> {
        match self.choice_responses.get(label).copied() {
            Some(index) if index < choices.len() => {
                log::info!(
                    "Auto-answering choice prompt '{label}' with option {index}: '{}'",
                    choices[index]
                );
                Ok(Selection::Picked(index))
            }
            Some(index) => Err(Error::ChoiceOutOfRange {
                label: label.to_string(),
                index,
                len: choices.len(),
            }),
            None => {
                log::info!("Auto-answering choice prompt '{label}' with its preselection");
                Ok(selected.map_or(Selection::Kept, Selection::Picked))
            }
        }
    }

    fn press_button(&self, _buttons: &[Button], default: Button) -> Result<Option<Button>> {
        Ok(Some(default))
    }

    fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::{DialogState, PromptDialog};

    #[test]
    fn keeps_prefilled_text() {
        let dialog =
            PromptDialog::show("Enter name", "Alice", None, &AutomaticSurface::new()).unwrap();
        assert_eq!(dialog.result(), Some("Alice"));
    }

    #[test]
    fn uses_registered_text_response() {
        let surface = AutomaticSurface::new().with_text_response("Enter name", "Dave");
        let dialog = PromptDialog::show("Enter name", "Alice", None, &surface).unwrap();
        assert_eq!(dialog.result(), Some("Dave"));
    }

    #[test]
    fn keeps_preselected_choice() {
        let choices = vec!["one".to_string(), "two".to_string()];
        let dialog = PromptDialog::show(
            "Pick one",
            "two",
            Some(choices.as_slice()),
            &AutomaticSurface::new(),
        )
        .unwrap();
        assert_eq!(dialog.result(), Some("two"));
    }

    #[test]
    fn keeps_default_outside_choices() {
        let choices = vec!["one".to_string(), "two".to_string()];
        let dialog = PromptDialog::show(
            "Pick one",
            "three",
            Some(choices.as_slice()),
            &AutomaticSurface::new(),
        )
        .unwrap();
        assert_eq!(dialog.state(), DialogState::Confirmed);
        assert_eq!(dialog.result(), Some("three"));
    }

    #[test]
    fn keeps_empty_default_without_preselection() {
        let choices = vec!["one".to_string(), "two".to_string()];
        let dialog =
            PromptDialog::show("Pick one", "", Some(choices.as_slice()), &AutomaticSurface::new())
                .unwrap();
        assert_eq!(dialog.result(), Some(""));
    }

    #[test]
    fn rejects_out_of_range_choice_response() {
        let choices = vec!["one".to_string(), "two".to_string()];
        let surface = AutomaticSurface::new().with_choice_response("Pick one", 5);
        assert!(matches!(
            surface.pick_choice("Pick one", &choices, None),
            Err(Error::ChoiceOutOfRange { index: 5, len: 2, .. })
        ));
        assert!(matches!(
            PromptDialog::show("Pick one", "one", Some(choices.as_slice()), &surface),
            Err(Error::ChoiceOutOfRange { .. })
        ));
    }

    #[test]
    fn uses_registered_choice_response() {
        let choices = vec!["one".to_string(), "two".to_string()];
        let surface = AutomaticSurface::new().with_choice_response("Pick one", 1);
        let dialog = PromptDialog::show("Pick one", "one", Some(choices.as_slice()), &surface)
            .unwrap();
        assert_eq!(dialog.result(), Some("two"));
    }

    #[test]
    fn acknowledges_pause() {
        let dialog = PromptDialog::show("", "", None, &AutomaticSurface::new()).unwrap();
        assert_eq!(dialog.state(), DialogState::Confirmed);
        assert_eq!(dialog.result(), Some(""));
    }
}
