use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use term_folio::chrome::ChromeAction;
use term_folio::desktop::{Desktop, DesktopOptions};
use term_folio::layout::Viewport;
use term_folio::ui::UiFrame;
use term_folio::window::WindowId;

fn draw(desktop: &mut Desktop, viewport: Viewport) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(viewport.width, viewport.height)).unwrap();
    terminal
        .draw(|frame| {
            let mut ui = UiFrame::new(frame);
            desktop.render(&mut ui);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

fn screen(buf: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
        }
        out.push('\n');
    }
    out
}

#[test]
fn startup_screen_has_bars_and_the_about_window() {
    let viewport = Viewport::new(120, 40);
    let mut desktop = Desktop::new(viewport, DesktopOptions::cells());
    let text = screen(&draw(&mut desktop, viewport));

    assert!(text.contains("Reset Layout"));
    assert!(text.contains("About Me"));
    for id in WindowId::ALL {
        assert!(text.contains(id.app_name()), "dock is missing {id}");
    }
}

#[test]
fn minimized_window_disappears_from_screen() {
    let viewport = Viewport::new(120, 40);
    let mut desktop = Desktop::new(viewport, DesktopOptions::cells());
    desktop.apply(ChromeAction::Minimize(WindowId::About));
    let text = screen(&draw(&mut desktop, viewport));
    assert!(!text.contains("About Me"));

    desktop.apply(ChromeAction::DockIcon(WindowId::About));
    let text = screen(&draw(&mut desktop, viewport));
    assert!(text.contains("About Me"));
}

#[test]
fn narrow_terminal_draws_one_full_width_window() {
    let viewport = Viewport::new(70, 30);
    let mut options = DesktopOptions::cells();
    options.startup = vec![WindowId::About, WindowId::Contact];
    let mut desktop = Desktop::new(viewport, options);
    assert!(desktop.is_mobile());

    let text = screen(&draw(&mut desktop, viewport));
    assert!(text.contains("Get In Touch"));
    assert!(!text.contains("About Me"));
}
