use crate::ui::cli::drivers::{Bounds, PromptDriver};
use anyhow::Result;
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, Select, Text};
use std::fmt::Display;
use std::str::FromStr;

/// Terminal prompts backed by `inquire`.
pub struct InquireDriver;

fn ask_in_bounds<T>(title: &str, help: &str, default: T, bounds: Bounds<T>) -> Result<T>
where
    T: Clone + Copy + Display + FromStr + PartialOrd + 'static,
{
    Ok(CustomType::<T>::new(title)
        .with_default(default)
        .with_help_message(help)
        .with_validator(move |x: &T| {
            Ok(match bounds.check(*x) {
                Ok(()) => Validation::Valid,
                Err(msg) => Validation::Invalid(msg.into()),
            })
        })
        .prompt()?)
}

impl PromptDriver for InquireDriver {
    fn select(&self, title: &str, help: Option<&str>, options: &[String]) -> Result<usize> {
        let mut select = Select::new(title, options.to_vec());
        if let Some(help) = help {
            select = select.with_help_message(help);
        }
        Ok(select.raw_prompt()?.index)
    }

    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_u64(&self, title: &str, help: &str, default: u64, bounds: Bounds<u64>) -> Result<u64> {
        ask_in_bounds(title, help, default, bounds)
    }

    fn ask_f64(&self, title: &str, help: &str, default: f64, bounds: Bounds<f64>) -> Result<f64> {
        ask_in_bounds(title, help, default, bounds)
    }

    fn notify(&self, message: &str) {
        eprintln!("✗ {message}");
    }
}
