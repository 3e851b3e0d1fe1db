//! Terminal front end: draws the page and maps key commands to buttons

use std::io::{IsTerminal, Write};
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::dashboard::{Command, Dashboard};
use crate::view::{ElementId, ViewState};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Draw the page as text. With `ansi`, the inactive toggle is dimmed.
pub fn render(state: &ViewState, ansi: bool) -> String {
    let mut out = String::new();

    out.push_str("neonrift\n\n");
    out.push_str(&format!(
        "Health [{}]\n{}\n\n",
        state.text(ElementId::HealthBadge),
        state.text(ElementId::HealthOut)
    ));
    out.push_str(&format!("Info\n{}\n\n", state.text(ElementId::InfoOut)));

    let auto = if ansi && state.auto_inactive {
        format!("{}{}{}", DIM, state.text(ElementId::BtnAuto), RESET)
    } else {
        state.text(ElementId::BtnAuto).to_string()
    };
    out.push_str(&format!(
        "[h] {}  [i] {}  [a] {}",
        state.text(ElementId::BtnHealth),
        state.text(ElementId::BtnInfo),
        auto
    ));
    let note = state.text(ElementId::AutoNote);
    if !note.is_empty() {
        out.push(' ');
        out.push_str(note);
    }
    out.push_str("  [q] Quit\n");
    out
}

fn draw(state: &ViewState, ansi: bool) -> crate::Result<()> {
    let mut stdout = std::io::stdout().lock();
    if ansi {
        stdout.write_all(CLEAR_SCREEN.as_bytes())?;
    }
    stdout.write_all(render(state, ansi).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Redraw on every page change and feed stdin lines to the dashboard.
///
/// Returns on `q`, end of input, or cancellation.
pub async fn run(dashboard: Arc<Dashboard>, cancel: CancellationToken) -> crate::Result<()> {
    let ansi = std::io::stdout().is_terminal();
    let mut changes = dashboard.view().subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let initial = changes.borrow_and_update().clone();
    draw(&initial, ansi)?;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("Terminal loop cancelled");
                break;
            }
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = changes.borrow_and_update().clone();
                draw(&state, ansi)?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("Input closed");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(command) => {
                        if !dashboard.dispatch(command).await {
                            break;
                        }
                    }
                    Err(e) => tracing::warn!("{}", e),
                }
            }
        }
    }

    Ok(())
}
