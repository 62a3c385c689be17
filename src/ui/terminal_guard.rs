use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

pub type EditorTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back the way it was on drop or on panic, exactly once.
pub struct TerminalGuard {
    armed: Arc<Mutex<bool>>,
}

impl TerminalGuard {
    fn arm() -> Self {
        let guard = Self {
            armed: Arc::new(Mutex::new(true)),
        };
        guard.install_panic_hook();
        guard
    }

    fn install_panic_hook(&self) {
        let armed = Arc::clone(&self.armed);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            disarm(&armed);
            default_hook(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        disarm(&self.armed);
    }
}

fn disarm(armed: &Mutex<bool>) {
    let mut armed = armed.lock();
    if std::mem::take(&mut *armed) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

pub fn setup_terminal() -> io::Result<(EditorTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::arm();

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(TermClear(ClearType::All))?;
    stdout.execute(Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok((terminal, guard))
}
