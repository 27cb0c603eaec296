use std::io::{BufRead, Write};

use anyhow::Context;
use directory::{
    consts::consts::FETCH_FAILURE_MESSAGE,
    directory::directory::{Directory, DirectoryError},
    model::event::{DetailChange, DirectoryEvent},
    source::PeopleSource,
};

use super::{
    command::{Command, HELP, KEY_ALIASES},
    render::{render_detail, render_grid},
};

/// Line-oriented presentation layer. Reads commands, drives the `Directory`
/// and renders whatever its events say changed.
pub struct Terminal<R, W> {
    directory: Directory,
    events: flume::Receiver<DirectoryEvent>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(
        mut directory: Directory,
        events: flume::Receiver<DirectoryEvent>,
        input: R,
        output: W,
    ) -> Self {
        for (key, action) in KEY_ALIASES {
            directory.bindings_mut().alias(key, action);
        }

        Self {
            directory,
            events,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        self.render_pending()?;
        writeln!(self.output, "Type `help` for commands.")?;

        let mut line = String::new();

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Unable to read command")?;

            // EOF
            if read == 0 {
                return Ok(());
            }

            let Some(command) = Command::parse(&line) else {
                continue;
            };

            log::debug!("Command: {:?}", command);

            if command == Command::Quit {
                return Ok(());
            }

            self.execute(command)?;
            self.render_pending()?;
        }
    }

    fn execute(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Search(query) => self.directory.search(&query),
            Command::Open(position) => {
                let active = self.directory.active_records();

                match position.checked_sub(1).and_then(|index| active.get(index)) {
                    Some(person) => {
                        let id = person.id;

                        if let Err(err) = self.directory.open(id) {
                            contract_violation(err);
                        }
                    }
                    None => writeln!(
                        self.output,
                        "No card {}, pick between 1 and {}",
                        position,
                        active.len()
                    )?,
                }
            }
            Command::Key(key) => match self.directory.handle_key(&key) {
                Ok(true) => {}
                Ok(false) => writeln!(self.output, "Unknown command {:?}, try `help`", key)?,
                Err(err) => contract_violation(err),
            },
            Command::List => {
                let grid = render_grid(self.directory.active_records(), self.directory.query());
                write!(self.output, "{}", grid)?;
            }
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => {}
        }

        Ok(())
    }

    /// Renders in response to events. A burst of events coalesces into at
    /// most one grid and one detail render.
    fn render_pending(&mut self) -> anyhow::Result<()> {
        let mut grid = false;
        let mut detail = false;

        for event in self.events.try_iter() {
            match event {
                DirectoryEvent::FullListReady { .. }
                | DirectoryEvent::ActiveSubsetChanged { .. }
                | DirectoryEvent::DetailChanged(DetailChange::Closed(_)) => grid = true,
                DirectoryEvent::DetailChanged(_) => detail = true,
                // The grid already shows the indicator when there is nothing to list
                DirectoryEvent::EmptyStateShown | DirectoryEvent::EmptyStateCleared => {}
            }
        }

        if grid {
            let rendered = render_grid(self.directory.active_records(), self.directory.query());
            write!(self.output, "{}", rendered)?;
        }

        if detail && self.directory.is_detail_open() {
            self.render_detail()?;
        }

        Ok(())
    }

    fn render_detail(&mut self) -> anyhow::Result<()> {
        let neighbors = match self.directory.current_neighbors() {
            Ok(neighbors) => neighbors,
            Err(err) => {
                contract_violation(err);
                None
            }
        };

        let Some(person) = self.directory.current() else {
            return Ok(());
        };

        let controls = neighbors.filter(|_| self.directory.navigation_enabled());
        let rendered = render_detail(person, controls.as_ref());

        write!(self.output, "{}", rendered)?;

        Ok(())
    }
}

/// Runs the one-off load. On failure the user gets the reload message on
/// `errors` and `false` comes back; nothing is retried.
pub fn load_or_report(
    directory: &mut Directory,
    source: &dyn PeopleSource,
    errors: &mut impl Write,
) -> anyhow::Result<bool> {
    match directory.load_from(source) {
        Ok(_) => Ok(true),
        Err(err) => {
            log::error!("Unable to load directory: {}", err);
            writeln!(errors, "{}", FETCH_FAILURE_MESSAGE)?;

            Ok(false)
        }
    }
}

/// The terminal validates every position before calling into the directory, so
/// a navigation error here is a bug in this client, not bad input.
fn contract_violation(err: DirectoryError) {
    log::error!("Directory contract violated: {}", err);

    if cfg!(debug_assertions) {
        panic!("Directory contract violated: {}", err);
    }
}
