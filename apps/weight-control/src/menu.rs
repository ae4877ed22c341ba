//! Interactive menu loop

use colored::Colorize;
use domain_products::{
    CreateProduct, FilterByWeight, ListProducts, ProductId, ProductRequest, WeightToleranceCheck,
};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::app::App;
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum MenuOption {
    #[strum(to_string = "View Products")]
    ViewProducts,
    #[strum(to_string = "Add Product")]
    AddProduct,
    #[strum(to_string = "Filter Products By Weight")]
    FilterByWeight,
    #[strum(to_string = "Product Weight Tolerance Check")]
    ToleranceCheck,
    #[strum(to_string = "Exit")]
    Exit,
}

impl MenuOption {
    /// Accepts the 1-based position or the option text, ignoring case
    pub fn from_choice(choice: &str) -> Option<Self> {
        let choice = choice.trim();

        if let Ok(position) = choice.parse::<usize>() {
            return position.checked_sub(1).and_then(|i| Self::iter().nth(i));
        }

        Self::iter().find(|option| option.to_string().eq_ignore_ascii_case(choice))
    }
}

pub struct Menu<'a, I, O> {
    app: &'a App,
    input: I,
    out: O,
    clear_screen: bool,
}

impl<'a, I: BufRead, O: Write> Menu<'a, I, O> {
    pub fn new(app: &'a App, input: I, out: O) -> Self {
        Self {
            app,
            input,
            out,
            clear_screen: false,
        }
    }

    /// Clear the terminal before showing the menu
    pub fn clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Run until the user picks Exit or input ends
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            if self.clear_screen {
                let term = console::Term::stdout();
                if term.is_term() {
                    term.clear_screen()?;
                }
            }

            render::header(&mut self.out, "weight control")?;
            for (i, option) in MenuOption::iter().enumerate() {
                writeln!(self.out, "  {} {}", format!("[{}]", i + 1).bright_black(), option)?;
            }

            let Some(choice) = self.ask_line(&"Please select an option:".yellow().bold().to_string())? else {
                return Ok(());
            };

            let option = match MenuOption::from_choice(&choice) {
                Some(option) => option,
                None => {
                    writeln!(self.out, "{}", format!("Unknown option: {}", choice.trim()).red())?;
                    continue;
                }
            };

            let request = match option {
                MenuOption::Exit => {
                    writeln!(self.out, "{}", "Exiting the application...".red())?;
                    return Ok(());
                }
                MenuOption::ViewProducts => Some(ListProducts::default().into()),
                MenuOption::AddProduct => self.ask_create()?,
                MenuOption::FilterByWeight => self.ask_filter()?,
                MenuOption::ToleranceCheck => self.ask_tolerance()?,
            };

            let Some(request) = request else {
                return Ok(());
            };

            let result = self.app.execute(request).await;
            render::result(&mut self.out, &result)?;

            if self
                .ask_line(&"Press Enter to return to the menu...".blue().to_string())?
                .is_none()
            {
                return Ok(());
            }
        }
    }

    fn ask_create(&mut self) -> io::Result<Option<ProductRequest>> {
        let Some(name) = self.ask_line("Enter the product name:")? else {
            return Ok(None);
        };
        let Some(weight) = self.ask::<f64>("Enter the product weight(KG):")? else {
            return Ok(None);
        };
        Ok(Some(CreateProduct::new(name, weight).into()))
    }

    fn ask_filter(&mut self) -> io::Result<Option<ProductRequest>> {
        Ok(self.ask_range()?.map(|(min_weight, max_weight)| {
            FilterByWeight {
                min_weight,
                max_weight,
            }
            .into()
        }))
    }

    fn ask_tolerance(&mut self) -> io::Result<Option<ProductRequest>> {
        let Some(product_id) = self.ask::<ProductId>("Enter the product Id:")? else {
            return Ok(None);
        };
        Ok(self.ask_range()?.map(|(min_weight, max_weight)| {
            WeightToleranceCheck {
                product_id,
                min_weight,
                max_weight,
            }
            .into()
        }))
    }

    fn ask_range(&mut self) -> io::Result<Option<(f64, f64)>> {
        let Some(min) = self.ask::<f64>("Enter the product minimum weight(KG):")? else {
            return Ok(None);
        };
        let Some(max) = self.ask::<f64>("Enter the product maximum weight(KG):")? else {
            return Ok(None);
        };
        Ok(Some((min, max)))
    }

    /// Prompt until the answer parses; `None` at end of input
    fn ask<T: FromStr>(&mut self, prompt: &str) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.ask_line(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.out, "{}", "Invalid input, please try again.".red())?,
            }
        }
    }

    /// Prompt for a raw line without its line ending; `None` at end of input
    fn ask_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{} ", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
