use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::{Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::ClearType;
use crossterm::event::{Event, KeyEvent, KeyEventKind, read, poll};

use crate::grid::Grid;

pub struct TermManager {
    stdout: Stdout,
    raw: bool,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout(), raw: false }
    }

    pub fn setup(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("Error enabling raw mode")?;
        self.raw = true;
        execute!(self.stdout, cursor::Hide, terminal::Clear(ClearType::All))
            .context("Error preparing the screen")?;
        Ok(())
    }

    /// Leaves raw mode and shows the cursor again. Safe to call more than once.
    pub fn restore(&mut self) -> Result<()> {
        if self.raw {
            terminal::disable_raw_mode().context("Error disabling raw mode")?;
            self.raw = false;
        }
        execute!(self.stdout, cursor::Show).context("Error showing the cursor")?;
        Ok(())
    }

    /// Drains every pending key press without blocking.
    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::ZERO).context("Error polling input")? {
            if let Event::Key(ev) = read().context("Error reading input")? {
                if ev.kind == KeyEventKind::Press {
                    events.push(ev);
                }
            }
        }

        Ok(events)
    }

    /// Redraws from the top-left corner, leaving the cursor on the line after
    /// the frame.
    pub fn draw_frame(&mut self, lines: &[String]) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(0, 0))?;

        for line in lines {
            queue!(
                self.stdout,
                style::Print(line),
                terminal::Clear(ClearType::UntilNewLine),
                style::Print("\r\n")
            )?;
        }

        self.flush()
    }

    pub fn print_line(&mut self, line: &str) -> Result<()> {
        queue!(self.stdout, style::Print(line), style::Print("\r\n"))?;
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("Error flushing")
    }
}

/// Text frame for one tick: the field surrounded by `border`, then `footer`.
pub fn frame_lines(grid: &Grid, border: char, footer: &str) -> Vec<String> {
    let edge: String = std::iter::repeat(border).take(grid.width() + 2).collect();
    let mut lines = Vec::with_capacity(grid.height() + 3);

    lines.push(edge.clone());
    for row in grid.rows() {
        let mut line = String::with_capacity(row.len() + 2);
        line.push(border);
        line.extend(row.iter());
        line.push(border);
        lines.push(line);
    }
    lines.push(edge);
    lines.push(footer.to_string());

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Symbols;
    use crate::snake::{Direction, Snake};

    #[test]
    fn bordered_frame_with_footer() {
        let snake = Snake::new((0, 1), Direction::Right);
        let grid = Grid::rebuild(&snake, (2, 0), 3, 2, &Symbols::default());
        let lines = frame_lines(&grid, '#', "Score: 4");

        assert_eq!(lines, vec![
            "#####",
            "#  @#",
            "#O  #",
            "#####",
            "Score: 4",
        ]);
    }

    #[test]
    fn frame_dimensions_follow_grid() {
        let snake = Snake::new((1, 1), Direction::Up);
        let grid = Grid::rebuild(&snake, (2, 2), 25, 20, &Symbols::default());
        let lines = frame_lines(&grid, '#', "Score: 0");

        assert_eq!(lines.len(), 20 + 3);
        assert!(lines[..22].iter().all(|l| l.chars().count() == 27));
        assert!(lines[1..21].iter().all(|l| l.starts_with('#') && l.ends_with('#')));
    }
}
