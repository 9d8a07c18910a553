use crate::github::Event;
use io::Result;
use std::io;

const INDENT_STR: &str = "  ";

pub trait ConsoleDisplay {
    fn display(&self, f: &mut Box<dyn io::Write>) -> Result<()>;
}

impl ConsoleDisplay for Event {
    fn display(&self, f: &mut Box<dyn io::Write>) -> Result<()> {
        writeln!(f, "{}- {}", INDENT_STR, self.describe())
    }
}

pub struct ConsoleTextReport {
    sink: Box<dyn io::Write>,
}
impl ConsoleTextReport {
    fn sink_to(sink: Box<dyn io::Write>) -> Self {
        ConsoleTextReport { sink }
    }
    pub fn stdout() -> Self {
        ConsoleTextReport::sink_to(Box::new(io::stdout()))
    }
}

impl ConsoleTextReport {
    pub fn render(&mut self, events: &[Event]) -> anyhow::Result<()> {
        for event in events {
            event.display(&mut self.sink)?;
        }
        Ok(())
    }
}
