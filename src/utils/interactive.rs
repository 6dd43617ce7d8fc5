use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::core::traits::Choice;
use crate::utils::error::{AppError, AppResult, FlowResult};
use crate::utils::output::{OutputStyle, render_menu, render_options};
use crate::utils::validate::{validate_menu_choice, validate_yes_no};

/// Line-based terminal session
///
/// Every menu reads and writes through a `Console`, so a whole session can be
/// driven by an in-memory script.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: impl Display) -> AppResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn warn(&mut self, message: &str) -> AppResult<()> {
        self.say(OutputStyle::warning(message))
    }

    pub fn report(&mut self, flow: FlowResult) -> AppResult<()> {
        self.say(flow.render())
    }

    /// Print `prompt` and read one trimmed line
    pub fn prompt_input(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Err(AppError::InputClosed);
        }

        Ok(input.trim().to_string())
    }

    /// Ask until `parse` accepts the answer
    ///
    /// Retryable errors print their message and ask again; anything else is
    /// returned to the caller.
    pub fn prompt_valid<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> AppResult<T>,
    ) -> AppResult<T> {
        loop {
            let raw = self.prompt_input(prompt)?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() => {
                    tracing::debug!(input = %raw, error = %err, "rejected input");
                    self.warn(&format!("{}!", err))?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    pub fn prompt_yes_no(&mut self, prompt: &str) -> AppResult<bool> {
        self.prompt_valid(&format!("{} (Y/N): ", prompt), validate_yes_no)
    }

    pub fn show_menu(&mut self, title: &str, items: &[&str]) -> AppResult<()> {
        self.say(render_menu(title, items))
    }

    pub fn show_options<T: Choice>(&mut self, title: &str) -> AppResult<()> {
        self.say(render_options::<T>(title))
    }

    /// Read a menu number once; `None` when it is not one of the options
    pub fn read_choice<T: Choice>(&mut self, prompt: &str) -> AppResult<Option<T>> {
        let raw = self.prompt_input(prompt)?;
        Ok(validate_menu_choice(&raw, T::all().len())
            .ok()
            .and_then(T::from_menu_number))
    }

    /// Show the options of `T` and ask until one is picked
    pub fn select_option<T: Choice>(&mut self, title: &str) -> AppResult<T> {
        self.show_options::<T>(title)?;
        let count = T::all().len();
        let number = self.prompt_valid("Enter choice: ", |raw| validate_menu_choice(raw, count))?;
        T::from_menu_number(number)
            .ok_or_else(|| AppError::System(format!("No option number {}", number)))
    }
}
