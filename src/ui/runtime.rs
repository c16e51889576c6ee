use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::search::SearchIntent;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Run the terminal UI until the user quits.
///
/// This task is the store's update context: key presses and task results
/// are both applied here, one at a time.
pub async fn run(mut app: App, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new(tick_rate);

    // Search on first appearance
    app.dispatch(SearchIntent::SearchRequested);

    loop {
        app.store_mut().drain();
        terminal.draw(|frame| draw(frame, app.state(), app.is_searching()))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                Some(AppEvent::Tick) | Some(AppEvent::Resize(_, _)) => {}
                None => break,
            },
            _ = app.store_mut().process_next() => {}
        }
    }

    drop(events);
    guard.restore();
    tracing::info!("Terminal UI stopped");
    Ok(())
}
