use crate::{
    cli::Args,
    constants::STDIN_INDICATOR,
    dialog::{AutomaticSurface, DialogSurface, TerminalSurface},
    error::Result,
    handler::{DialogInputHandler, InputHandler},
    request::{InputRequest, RequestReader},
};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Main CLI runner that answers one request or a stream of them
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Picks the surface and answers all requests
    pub fn run(&self) -> Result<()> {
        if self.args.non_interactive {
            self.run_with(AutomaticSurface::new())
        } else {
            self.run_with(TerminalSurface::new())
        }
    }

    fn run_with<S: DialogSurface>(&self, surface: S) -> Result<()> {
        let mut handler = DialogInputHandler::new(surface).with_title(self.args.title.as_str());
        let answered = self.answer(&mut handler)?;
        log::debug!("Answered {answered} request(s)");
        Ok(())
    }

    /// Hands every request to `handler`, one at a time. Returns how many were answered.
    pub fn answer<H: InputHandler>(&self, handler: &mut H) -> Result<usize> {
        match &self.args.requests {
            Some(source) if source == Path::new(STDIN_INDICATOR) => {
                answer_from(handler, std::io::stdin().lock())
            }
            Some(source) => answer_from(handler, BufReader::new(File::open(source)?)),
            None => {
                let mut request = self.single_request();
                handler.handle_input(&mut request)?;
                Ok(1)
            }
        }
    }

    /// Builds the request described by the command line flags
    pub fn single_request(&self) -> InputRequest {
        let request = match &self.args.choices {
            Some(choices) => InputRequest::multiple_choice(&self.args.prompt, choices.clone()),
            None => InputRequest::new(&self.args.prompt),
        };
        request.with_default(self.args.default_value.as_str())
    }
}

/// Answers newline-delimited JSON requests serially, stopping at the first error.
pub fn answer_from<H: InputHandler, R: BufRead>(handler: &mut H, reader: R) -> Result<usize> {
    let mut answered = 0;
    for request in RequestReader::new(reader) {
        let mut request = request?;
        handler.handle_input(&mut request)?;
        answered += 1;
    }
    Ok(answered)
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
