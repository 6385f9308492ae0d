//! Mode selection and widget assembly for prompt dialogs
//!
//! The dialog mode is decided once, up front, from the label and the choices.
//! The layout is then derived from the mode: a label area on the north edge,
//! the input control in the centre and the action buttons on the south edge.

use crate::constants::{buttons, PAUSE_MESSAGE};
use std::fmt::Display;

/// The input mode of a prompt dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    /// No input control, only OK. Blocks until acknowledged.
    Pause,
    /// Single selection from a fixed list.
    Choice,
    /// Free-text field.
    Text,
}

/// Decides the dialog mode.
///
/// An empty label means pause. A choice list that is empty or whose first
/// entry is empty also means pause.
pub fn classify_mode(label: &str, choices: Option<&[String]>) -> DialogMode {
    if label.is_empty() {
        return DialogMode::Pause;
    }
    match choices {
        Some(choices) => match choices.first() {
            None => DialogMode::Pause,
            Some(first) if first.is_empty() => DialogMode::Pause,
            Some(_) => DialogMode::Choice,
        },
        None => DialogMode::Text,
    }
}

/// Action buttons of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Ok,
    Cancel,
}

impl Display for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Button::Ok => buttons::OK,
            Button::Cancel => buttons::CANCEL,
        };
        write!(f, "{s}")
    }
}

/// The input control in the centre of the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    None,
    TextField { initial: String },
    ChoiceList { choices: Vec<String>, selected: Option<usize> },
}

/// Assembled widgets of a prompt dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLayout {
    /// Text of the label area.
    pub label: String,
    pub control: Control,
    /// Buttons in display order.
    pub buttons: Vec<Button>,
    /// Button triggered by the confirm key.
    pub default_button: Button,
}

impl DialogLayout {
    /// Builds the widgets for `mode`.
    pub fn assemble(
        mode: DialogMode,
        label: &str,
        default_value: &str,
        choices: Option<&[String]>,
    ) -> Self {
        let label = if label.is_empty() { PAUSE_MESSAGE.to_string() } else { label.to_string() };

        let (control, buttons) = match mode {
            DialogMode::Pause => (Control::None, vec![Button::Ok]),
            DialogMode::Choice => {
                let choices = choices.map(<[String]>::to_vec).unwrap_or_default();
                let selected = preselect(&choices, default_value);
                (Control::ChoiceList { choices, selected }, vec![Button::Cancel, Button::Ok])
            }
            DialogMode::Text => (
                Control::TextField { initial: default_value.to_string() },
                vec![Button::Cancel, Button::Ok],
            ),
        };

        Self { label, control, buttons, default_button: Button::Ok }
    }

    pub fn has_button(&self, button: Button) -> bool {
        self.buttons.contains(&button)
    }
}

fn preselect(choices: &[String], default_value: &str) -> Option<usize> {
    if default_value.is_empty() {
        return None;
    }
    choices.iter().position(|choice| choice == default_value)
}
