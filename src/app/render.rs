use crate::app::demo::Demo;
use crate::surface::MemoryComponent;
use crate::terminal::backend::{CursorPos, Line, LineStyle};
use unicode_width::UnicodeWidthStr;

const FIELD_MIN_WIDTH: usize = 12;
const PROMPT: &str = "> ";

pub struct Frame {
    pub lines: Vec<Line>,
    pub cursor: Option<CursorPos>,
}

pub fn render(demo: &Demo) -> Frame {
    let mut lines = vec![
        Line::new("steply-autocomplete", LineStyle::Accent),
        Line::new(
            "Tab: focus/blur   Esc: close   Enter: select   Ctrl-C: quit",
            LineStyle::Muted,
        ),
        Line::plain(""),
    ];
    let Some(component) = demo.component() else {
        return Frame {
            lines,
            cursor: None,
        };
    };

    if !component.chips.is_empty() {
        let chips = component
            .chips
            .iter()
            .map(|chip| format!("[{} x]", chip.label))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::plain(chips));
    }

    let field_row = lines.len();
    let (field, cursor_col) = text_field(component);
    let field_style = if component.focus_ring {
        LineStyle::Accent
    } else {
        LineStyle::Plain
    };
    lines.push(Line::new(field, field_style));

    if component.results_visible {
        let end = (component.scroll_offset + component.visible_rows).min(component.items.len());
        for item in component.items.get(component.scroll_offset..end).unwrap_or_default() {
            let style = if item.focused {
                LineStyle::Selected
            } else if item.href.is_none() {
                LineStyle::Muted
            } else {
                LineStyle::Plain
            };
            lines.push(Line::new(format!("  {}", item.label), style));
        }
    }

    lines.push(Line::plain(""));
    if !component.live_text.trim().is_empty() {
        lines.push(Line::new(
            format!("live: {}", component.live_text.trim_end_matches('\u{a0}')),
            LineStyle::Muted,
        ));
    }
    for entry in demo.log().iter().rev().take(5) {
        lines.push(Line::new(entry.clone(), LineStyle::Muted));
    }

    let cursor = demo.has_focus().then(|| CursorPos {
        col: cursor_col.min(u16::MAX as usize) as u16,
        row: field_row as u16,
    });
    Frame { lines, cursor }
}

/// The bracketed text field and the display column of its cursor. With
/// expanded width the brackets hug the text instead of the minimum width.
fn text_field(component: &MemoryComponent) -> (String, usize) {
    let text_width = component.input.width();
    let inner = if component.width_expanded {
        text_width + 1
    } else {
        (text_width + 1).max(FIELD_MIN_WIDTH)
    };
    let padding = " ".repeat(inner.saturating_sub(text_width));
    let field = format!("{PROMPT}[{}{}]", component.input, padding);

    let before_cursor = component
        .input
        .chars()
        .take(component.cursor)
        .collect::<String>();
    (field, PROMPT.width() + 1 + before_cursor.width())
}
