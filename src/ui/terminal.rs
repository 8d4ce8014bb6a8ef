//! Crossterm-backed console: ANSI colored lines, clear-and-redraw frames,
//! blocking line input.

use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use super::Console;
use crate::combat::types::{Line, Tone};

pub struct TerminalConsole {
    out: io::Stdout,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

fn color_for(tone: Tone) -> Color {
    match tone {
        Tone::Heading => Color::Magenta,
        Tone::Stage => Color::Cyan,
        Tone::Good => Color::Green,
        Tone::Guard => Color::Blue,
        Tone::Bad => Color::Red,
        Tone::Event => Color::Yellow,
        Tone::Prompt => Color::Green,
        Tone::Plain => Color::Reset,
    }
}

impl Console for TerminalConsole {
    fn render(&mut self, lines: &[Line]) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        for line in lines {
            queue!(
                self.out,
                SetForegroundColor(color_for(line.tone)),
                Print(&line.text),
                ResetColor,
                Print("\n"),
            )?;
        }
        self.out.flush()
    }

    fn read_choice(&mut self) -> io::Result<String> {
        queue!(
            self.out,
            SetForegroundColor(Color::Green),
            Print("Your choice? "),
            ResetColor,
        )?;
        self.out.flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        // Strip the line terminator only; the parser is exact-match
        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }

    fn announce(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        queue!(
            self.out,
            SetForegroundColor(color_for(tone)),
            Print(text),
            ResetColor,
            Print("\n"),
        )?;
        self.out.flush()
    }
}
