use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue, terminal,
};
use std::io::{self, Write};
use toruslife::Grid;

pub enum ConsoleCommand {
    Exit,
    Handled,
}

pub struct ConsoleRender {
    report: String,
    line: String,
}
impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;
        Ok(Self {
            report: String::new(),
            line: String::new(),
        })
    }

    /// Draws the visible part of `grid` from the top-left corner, `#` for live cells
    pub fn render(&mut self, grid: &Grid) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let visible_cols = grid.width().min(cols as usize);
        let visible_rows = grid.height().min(rows.saturating_sub(1) as usize);

        let mut stdout = io::stdout();
        for (y, row) in grid.rows().take(visible_rows).enumerate() {
            self.line.clear();
            self.line
                .extend(row[..visible_cols].iter().map(|&c| if c != 0 { '#' } else { ' ' }));
            queue!(stdout, cursor::MoveTo(0, y as u16))?;
            stdout.write_all(self.line.as_bytes())?;
        }

        // write footer
        queue!(
            stdout,
            cursor::MoveTo(0, visible_rows as u16),
            terminal::Clear(terminal::ClearType::CurrentLine)
        )?;
        stdout.write_all(self.report.as_bytes())?;

        stdout.flush()
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // make sure event is preset for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        match event::read()? {
            // CTRL+C
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | event::Event::Key(KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }) => Ok(Some(ConsoleCommand::Exit)),
            _ => Ok(Some(ConsoleCommand::Handled)),
        }
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // if we can enable it, we should be able to disable it
        terminal::disable_raw_mode().expect("disable raw mode");
        execute!(io::stdout(), cursor::Show).expect("enable cursor");
    }
}
