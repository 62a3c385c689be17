use crate::config::Config;
use crate::display::{IntervalClock, ScreenBuffer};
use crate::editor::Editor;
use crate::input::IntentMailbox;
use crate::shutdown::ShutdownHandle;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::{setup_terminal, EditorTerminal};
use std::io;

/// Runs the editor in the current terminal until quit or shutdown.
pub fn run(config: &Config, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;

    let mailbox = IntentMailbox::new(config.editor.brush());
    let mut editor = Editor::new(&config.editor, &config.layout);
    let mut screen = ScreenBuffer::new();
    let mut clock = IntervalClock::new(config.display.frame_rate);
    let events = EventHandler::new(mailbox.clone(), shutdown.clone());

    editor.load(&mut screen);
    tracing::info!(
        cursor = %editor.cursor(),
        brush = %editor.brush(),
        frame_rate = config.display.frame_rate,
        "editor started"
    );

    let result = frame_loop(
        &mut terminal,
        &mut editor,
        &mut screen,
        &mut clock,
        &mailbox,
        &events,
        &shutdown,
    );

    shutdown.signal();
    events.join();
    tracing::info!("editor stopped");
    drop(guard);
    result
}

fn frame_loop(
    terminal: &mut EditorTerminal,
    editor: &mut Editor,
    screen: &mut ScreenBuffer,
    clock: &mut IntervalClock,
    mailbox: &IntentMailbox,
    events: &EventHandler,
    shutdown: &ShutdownHandle,
) -> io::Result<()> {
    let mut force_draw = true;
    loop {
        let report = editor.tick(clock, mailbox, screen);

        while let Some(event) = events.try_next() {
            match event {
                AppEvent::Quit => shutdown.signal(),
                AppEvent::Resize(cols, rows) => {
                    tracing::debug!(cols, rows, "terminal resized");
                    terminal.clear()?;
                    force_draw = true;
                }
            }
        }

        if shutdown.is_shutting_down() {
            return Ok(());
        }

        if report.redrawn || force_draw {
            terminal.draw(|frame| draw(frame, editor, screen))?;
            force_draw = false;
        }
    }
}
