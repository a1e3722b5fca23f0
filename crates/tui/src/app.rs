use std::collections::HashMap;
use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use numberline_core::TimelineViewer;
use numberline_protocol::{SlotContent, SlotHandle, SlotSurface};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    widgets::Block,
};

struct RenderedSlot {
    content: SlotContent,
    top_pct: f64,
    faded: bool,
}

/// Slot store the engine reconciles against; the draw pass paints whatever
/// is resident and not faded.
#[derive(Default)]
struct TerminalSurface {
    slots: HashMap<SlotHandle, RenderedSlot>,
    next_handle: u64,
}

impl SlotSurface for TerminalSurface {
    fn create_slot(&mut self, content: SlotContent, top_pct: f64, faded: bool) -> SlotHandle {
        let handle = SlotHandle(self.next_handle);
        self.next_handle += 1;
        self.slots.insert(
            handle,
            RenderedSlot {
                content,
                top_pct,
                faded,
            },
        );
        handle
    }

    fn update_slot(&mut self, handle: SlotHandle, top_pct: f64, faded: bool) {
        if let Some(slot) = self.slots.get_mut(&handle) {
            slot.top_pct = top_pct;
            slot.faded = faded;
        }
    }

    fn remove_slot(&mut self, handle: SlotHandle) {
        self.slots.remove(&handle);
    }

    fn retypeset(&mut self, _scope: &[SlotHandle]) {
        // Terminal text needs no post-processing.
    }
}

pub fn run(mut viewer: TimelineViewer) -> Result<()> {
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    let mut surface = TerminalSurface::default();
    viewer.render(&mut surface);
    let mut query = String::new();

    loop {
        terminal.draw(|frame| draw(frame, &viewer, &surface, &query))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Up => viewer.on_wheel(-1.0, &mut surface),
                    KeyCode::Down => viewer.on_wheel(1.0, &mut surface),
                    KeyCode::Backspace => {
                        query.pop();
                        viewer.on_query(&query, &mut surface);
                    }
                    KeyCode::Char(c) => {
                        query.push(c);
                        viewer.on_query(&query, &mut surface);
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => viewer.on_wheel(1.0, &mut surface),
                    MouseEventKind::ScrollUp => viewer.on_wheel(-1.0, &mut surface),
                    _ => {}
                },
                _ => {}
            }
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn draw(frame: &mut Frame, viewer: &TimelineViewer, surface: &TerminalSurface, query: &str) {
    let area = frame.area();

    // Header: entry count plus key hints.
    let header_area = Rect::new(0, 0, area.width, 1);
    let header = Block::default()
        .title(format!(
            " numberline — {} entries | wheel/↑↓ scroll | type a number to search | q quit ",
            viewer.entry_count()
        ))
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));
    frame.render_widget(header, header_area);

    // Search box.
    let search_area = Rect::new(0, 1, area.width, 1);
    let search = Block::default()
        .title(format!(" search: {query}_"))
        .style(Style::default().fg(Color::Cyan).bg(Color::Black));
    frame.render_widget(search, search_area);

    let content_area = Rect::new(0, 2, area.width, area.height.saturating_sub(2));
    let content_height = f64::from(content_area.height);

    let mut rows: Vec<&RenderedSlot> = surface.slots.values().collect();
    rows.sort_by(|a, b| a.top_pct.total_cmp(&b.top_pct));

    let buf = frame.buffer_mut();
    for slot in rows {
        if slot.faded {
            continue;
        }
        let row = (slot.top_pct / 100.0 * content_height).round();
        if row < 0.0 || row >= content_height {
            continue;
        }
        let y = content_area.y + row as u16;

        let label = slot.content.label.as_deref().unwrap_or("");
        let line = format!(
            "{:>14}  {:<12}  {}",
            slot.content.key, label, slot.content.body
        );
        for (i, ch) in line.chars().enumerate() {
            let x = content_area.x + i as u16;
            if x >= content_area.x + content_area.width {
                break;
            }
            let style = if (i as u16) < 16 {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            buf[(x, y)].set_char(ch).set_style(style).set_bg(Color::Black);
        }
    }
}
