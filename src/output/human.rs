#![forbid(unsafe_code)]

//! Human-readable output formatter with colorization support

use crate::params::ParameterSet;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

/// Human-readable output formatter
///
/// Lists parameters, leftover arguments and the analysed command for
/// terminal display with optional colors.
pub struct HumanFormatter {
    color_choice: ColorChoice,
}

impl HumanFormatter {
    /// Creates a new HumanFormatter with the specified color choice
    pub fn new(color_choice: ColorChoice) -> Self {
        HumanFormatter { color_choice }
    }

    /// Format the parameter set as plain text
    pub fn format(&self, params: &ParameterSet) -> String {
        let mut buffer = NoColor::new(Vec::new());
        let _ = self.write_to(params, &mut buffer);
        String::from_utf8_lossy(&buffer.into_inner()).into_owned()
    }

    /// Write the formatted output to stdout with colors
    pub fn write_to_stdout(&self, params: &ParameterSet) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        self.write_to(params, &mut stdout)?;
        stdout.flush()
    }

    /// Write the formatted output to any color-aware writer
    pub fn write_to<W: WriteColor>(&self, params: &ParameterSet, out: &mut W) -> io::Result<()> {
        if params.parameters().is_empty() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            writeln!(out, "No parameters")?;
            out.reset()?;
        } else {
            heading(out, "Parameters:")?;

            for (name, value) in params.parameters() {
                write!(out, "  ")?;
                out.set_color(ColorSpec::new().set_bold(true))?;
                write!(out, "{}", name)?;
                out.reset()?;
                write!(out, " = ")?;
                out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
                write!(out, "{}", value)?;
                out.reset()?;

                out.set_color(ColorSpec::new().set_dimmed(true))?;
                match params.position(name) {
                    Some(position) => write!(out, " (argument {})", position)?,
                    None => write!(out, " (default)")?,
                }
                out.reset()?;
                writeln!(out)?;
            }
        }

        writeln!(out)?;

        if params.arguments().is_empty() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            writeln!(out, "No arguments")?;
            out.reset()?;
        } else {
            heading(out, "Arguments:")?;
            for argument in params.arguments() {
                writeln!(out, "  {}", argument)?;
            }
        }

        writeln!(out)?;

        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "Command:")?;
        out.reset()?;
        writeln!(out, " {}", params.command())?;

        Ok(())
    }
}

fn heading<W: WriteColor>(out: &mut W, title: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "{}", title)?;
    out.reset()?;
    writeln!(out)
}
