//! Input handlers bridging build-engine requests to prompt dialogs
//!
//! The build engine hands every [`InputRequest`] to its registered
//! [`InputHandler`]. [`DialogInputHandler`] answers it with a [`PromptDialog`]
//! and reports each resolved value on a line-oriented diagnostic output.

use crate::{
    constants::DEFAULT_TITLE,
    dialog::{DialogSurface, PromptDialog},
    error::{Error, Result},
    request::InputRequest,
};
use std::io::{Stdout, Write};

/// Interactive-input provider of a build engine
pub trait InputHandler {
    /// Answers `request`, filling its result slot.
    fn handle_input(&mut self, request: &mut InputRequest) -> Result<()>;
}

/// Handler that asks through a modal prompt dialog
pub struct DialogInputHandler<S: DialogSurface, W: Write = Stdout> {
    surface: S,
    diagnostics: W,
    title: String,
}

impl<S: DialogSurface> DialogInputHandler<S> {
    /// Creates a handler reporting resolved values on stdout.
    pub fn new(surface: S) -> Self {
        Self::with_diagnostics(surface, std::io::stdout())
    }
}

impl<S: DialogSurface, W: Write> DialogInputHandler<S, W> {
    pub fn with_diagnostics(surface: S, diagnostics: W) -> Self {
        Self { surface, diagnostics, title: DEFAULT_TITLE.to_string() }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consumes the handler and returns the diagnostic writer.
    pub fn into_diagnostics(self) -> W {
        self.diagnostics
    }
}

impl<S: DialogSurface, W: Write> InputHandler for DialogInputHandler<S, W> {
    fn handle_input(&mut self, request: &mut InputRequest) -> Result<()> {
        if request.is_answered() {
            return Err(Error::InputAlreadySet { prompt: request.prompt().to_string() });
        }

        let mut dialog =
            PromptDialog::new(request.prompt(), request.default_value(), request.choices())
                .with_title(self.title.as_str());
        dialog.run(&self.surface)?;

        let state = dialog.state();
        let result = dialog.into_result();
        log::info!("Resolved '{}' ({state:?}): {result:?}", request.prompt());

        request.set_input(result)?;

        writeln!(self.diagnostics, "{}", request.input().unwrap_or_default())?;
        self.diagnostics.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::{Button, ScriptedAction, ScriptedSurface};

    fn handler(actions: Vec<ScriptedAction>) -> DialogInputHandler<ScriptedSurface, Vec<u8>> {
        DialogInputHandler::with_diagnostics(ScriptedSurface::new(actions), Vec::new())
    }

    fn output(handler: DialogInputHandler<ScriptedSurface, Vec<u8>>) -> String {
        String::from_utf8(handler.into_diagnostics()).unwrap()
    }

    #[test]
    fn text_request_receives_confirmed_value() {
        let mut handler = handler(vec![
            ScriptedAction::Text("Alice".to_string()),
            ScriptedAction::Press(Button::Ok),
        ]);
        let mut request = InputRequest::new("Enter name").with_default("Alice");

        handler.handle_input(&mut request).unwrap();

        assert_eq!(request.input(), Some("Alice"));
        assert_eq!(output(handler), "Alice\n");
    }

    #[test]
    fn multiple_choice_request_uses_choices() {
        let choices = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        let mut handler =
            handler(vec![ScriptedAction::Pick(2), ScriptedAction::Press(Button::Ok)]);
        let mut request = InputRequest::multiple_choice("Pick one", choices).with_default("two");

        handler.handle_input(&mut request).unwrap();

        assert_eq!(request.input(), Some("three"));
        assert_eq!(output(handler), "three\n");
    }

    #[test]
    fn cancelled_request_is_left_unset() {
        let mut handler = handler(vec![
            ScriptedAction::Text("ignored".to_string()),
            ScriptedAction::Press(Button::Cancel),
        ]);
        let mut request = InputRequest::new("Enter name");

        handler.handle_input(&mut request).unwrap();

        assert!(request.is_answered());
        assert_eq!(request.input(), None);
        assert_eq!(output(handler), "\n");
    }

    #[test]
    fn empty_choice_list_pauses() {
        let mut handler = handler(vec![ScriptedAction::Press(Button::Ok)]);
        let mut request = InputRequest::multiple_choice("x", vec![]);

        handler.handle_input(&mut request).unwrap();

        assert_eq!(request.input(), Some(""));
        assert_eq!(handler.surface().remaining(), 0);
    }

    #[test]
    fn presentation_failure_propagates_without_answer() {
        let mut handler =
            DialogInputHandler::with_diagnostics(ScriptedSurface::headless(), Vec::<u8>::new());
        let mut request = InputRequest::new("Enter name");

        let err = handler.handle_input(&mut request).unwrap_err();

        assert!(matches!(err, Error::PresentationUnavailable { .. }));
        assert!(!request.is_answered());
        assert!(handler.into_diagnostics().is_empty());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn request_is_answered_even_if_diagnostics_fail() {
        let surface = ScriptedSurface::new(vec![
            ScriptedAction::Text("Alice".to_string()),
            ScriptedAction::Press(Button::Ok),
        ]);
        let mut handler = DialogInputHandler::with_diagnostics(surface, BrokenPipe);
        let mut request = InputRequest::new("Enter name");

        let err = handler.handle_input(&mut request).unwrap_err();

        assert!(matches!(err, Error::IoError(_)));
        assert!(request.is_answered());
        assert_eq!(request.input(), Some("Alice"));
    }

    #[test]
    fn answered_request_is_rejected() {
        let mut handler = handler(vec![ScriptedAction::Press(Button::Ok)]);
        let mut request = InputRequest::new("");
        request.set_input(Some("earlier".to_string())).unwrap();

        let err = handler.handle_input(&mut request).unwrap_err();

        assert!(matches!(err, Error::InputAlreadySet { .. }));
        assert_eq!(request.input(), Some("earlier"));
        assert_eq!(handler.surface().opened(), 0);
        assert!(handler.into_diagnostics().is_empty());
    }
}
