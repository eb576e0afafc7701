use crate::ui::cli::drivers::{Bounds, PromptDriver};
use anyhow::{Result, bail};
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Select(usize),
    Bool(bool),
    Str(String),
    U64(u64),
    F64(f64),
}

/// Replays a fixed sequence of answers; any mismatch is an error.
///
/// Out-of-bounds numbers are recorded as notices and the next answer is
/// taken, as a terminal prompt would re-ask.
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Answer>>,
    notices: RefCell<Vec<String>>,
}

impl ScriptedDriver {
    pub fn new<I: IntoIterator<Item = Answer>>(answers: I) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            notices: RefCell::new(Vec::new()),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.borrow().is_empty()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }

    fn next(&self, title: &str) -> Result<Answer> {
        match self.answers.borrow_mut().pop_front() {
            Some(a) => Ok(a),
            None => bail!("no scripted answer left for '{title}'"),
        }
    }
}

impl PromptDriver for ScriptedDriver {
    /// Out-of-range indices are passed through so callers can be tested
    /// against them.
    fn select(&self, title: &str, _help: Option<&str>, _options: &[String]) -> Result<usize> {
        match self.next(title)? {
            Answer::Select(i) => Ok(i),
            other => bail!("expected a selection for '{title}', got {other:?}"),
        }
    }

    fn ask_bool(&self, title: &str, _help: &str, _default: bool) -> Result<bool> {
        match self.next(title)? {
            Answer::Bool(b) => Ok(b),
            other => bail!("expected a bool for '{title}', got {other:?}"),
        }
    }

    fn ask_string(&self, title: &str, _help: &str, _default: &str) -> Result<String> {
        match self.next(title)? {
            Answer::Str(s) => Ok(s),
            other => bail!("expected a string for '{title}', got {other:?}"),
        }
    }

    fn ask_u64(&self, title: &str, _help: &str, _default: u64, bounds: Bounds<u64>) -> Result<u64> {
        loop {
            match self.next(title)? {
                Answer::U64(x) => match bounds.check(x) {
                    Ok(()) => return Ok(x),
                    Err(msg) => self.notify(&msg),
                },
                other => bail!("expected an integer for '{title}', got {other:?}"),
            }
        }
    }

    fn ask_f64(&self, title: &str, _help: &str, _default: f64, bounds: Bounds<f64>) -> Result<f64> {
        loop {
            match self.next(title)? {
                Answer::F64(x) => match bounds.check(x) {
                    Ok(()) => return Ok(x),
                    Err(msg) => self.notify(&msg),
                },
                other => bail!("expected a number for '{title}', got {other:?}"),
            }
        }
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}
