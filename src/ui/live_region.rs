use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

/// A single line redrawn in place, e.g. a progress counter
#[derive(Debug, Default)]
pub struct LiveLine {
    visible: bool,
}

impl LiveLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Erase the line so regular output can be printed in its place
    pub fn clear(&mut self, out: &mut impl Write) -> io::Result<()> {
        if !self.visible {
            return Ok(());
        }
        out.queue(cursor::MoveToColumn(0))?;
        out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        out.flush()?;
        self.visible = false;
        Ok(())
    }

    pub fn update(&mut self, out: &mut impl Write, content: &str) -> io::Result<()> {
        out.queue(cursor::MoveToColumn(0))?;
        out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        out.write_all(content.trim_end_matches('\n').as_bytes())?;
        out.flush()?;
        self.visible = true;
        Ok(())
    }
}
