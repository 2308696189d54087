use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::content::ContentProvider;
use crate::desktop::Desktop;
use crate::drivers::{InputDriver, OutputDriver};
use crate::event_loop::{ControlFlow, EventLoop};

/// Something that can show a URL to the user.
pub trait LinkOpener {
    fn open(&mut self, url: &str);
}

/// Hands URLs to the platform browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&mut self, url: &str) {
        match webbrowser::open(url) {
            Ok(()) => tracing::info!(url, "opened link"),
            Err(err) => tracing::warn!(url, %err, "failed to open link"),
        }
    }
}

fn is_quit(event: &Event) -> bool {
    let Event::Key(key) = event else {
        return false;
    };
    match key.code {
        KeyCode::Char('q') => {
            key.modifiers.is_empty() || key.modifiers.contains(KeyModifiers::CONTROL)
        }
        _ => false,
    }
}

/// Drive `desktop` until the user quits with `q` or `Ctrl+Q`.
///
/// The screen is redrawn only after an event changed something.
pub fn run_desktop<I, O, P, L>(
    input: I,
    output: &mut O,
    desktop: &mut Desktop<P>,
    poll_interval: Duration,
    opener: &mut L,
) -> io::Result<()>
where
    I: InputDriver,
    O: OutputDriver,
    P: ContentProvider,
    L: LinkOpener + ?Sized,
{
    let mut event_loop = EventLoop::new(input, poll_interval);
    event_loop.driver().set_mouse_capture(true)?;
    let mut dirty = true;

    event_loop.run(|_driver, event| {
        let Some(event) = event else {
            if dirty {
                output.draw(|mut frame| desktop.render(&mut frame))?;
                dirty = false;
            }
            return Ok(ControlFlow::Continue);
        };
        if is_quit(&event) {
            tracing::info!("quit requested");
            return Ok(ControlFlow::Quit);
        }
        if desktop.handle_event(&event) {
            dirty = true;
        }
        for url in desktop.take_link_requests() {
            opener.open(url);
        }
        if let Some((cursor, selection_suppressed)) = desktop.take_interaction_change() {
            tracing::debug!(?cursor, selection_suppressed, "interaction state changed");
        }
        Ok(ControlFlow::Continue)
    })
}
