use crate::app::command::map_key_to_command;
use crate::app::demo::Demo;
use crate::app::event::AppEvent;
use crate::app::render;
use crate::terminal::{Terminal, TerminalEvent};
use std::io;
use std::time::{Duration, Instant};

/// Longest sleep between checks for finished searches.
const SEARCH_POLL: Duration = Duration::from_millis(40);

pub struct Runtime {
    demo: Demo,
    terminal: Terminal,
}

impl Runtime {
    pub fn new(demo: Demo, terminal: Terminal) -> Self {
        Self { demo, terminal }
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;

        let run_result = (|| -> io::Result<()> {
            self.render()?;

            while !self.demo.should_exit() {
                self.process_scheduled_events()?;

                let now = Instant::now();
                let timeout = self.demo.widget().poll_timeout(now, SEARCH_POLL);
                let event = self.terminal.poll_event(timeout.min(SEARCH_POLL))?;
                self.dispatch_app_event(AppEvent::Terminal(event))?;
            }

            Ok(())
        })();

        let exit_result = self.terminal.exit();
        run_result.and(exit_result)
    }

    fn process_scheduled_events(&mut self) -> io::Result<()> {
        for completion in self.demo.drain_search() {
            self.dispatch_app_event(AppEvent::Search(completion))?;
        }
        if self.demo.tick(Instant::now()) {
            self.render()?;
        }
        Ok(())
    }

    fn dispatch_app_event(&mut self, event: AppEvent) -> io::Result<()> {
        let now = Instant::now();
        match event {
            AppEvent::Terminal(TerminalEvent::Resize(size)) => {
                self.terminal.set_size(size);
            }
            AppEvent::Terminal(TerminalEvent::Key(key)) => {
                return self.dispatch_app_event(AppEvent::Command(map_key_to_command(key)));
            }
            AppEvent::Terminal(TerminalEvent::Tick) => {
                self.demo.tick(now);
            }
            AppEvent::Command(command) => {
                self.demo.handle_command(command, now);
                self.demo.tick(now);
            }
            AppEvent::Search(completion) => {
                self.demo.apply_completion(completion, now);
            }
        }
        self.render()
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = render::render(&self.demo);
        self.terminal.render(&frame.lines, frame.cursor)
    }
}
