//! # TUI Components
//!
//! Reusable pieces shared by the screens in `tui::screens`.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: screen name, plan badge and status line
//! - `BottomNav`: the six tabs, with the unread badge on Mensagens
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `ListCursor` / `SelectableList`: the highlighted row of the current screen
//! - `TextInput`: single-line text entry (login, search, chat draft)
//!
//! Stateful components follow the persistent state + transient wrapper
//! pattern: the state lives in `TuiState`, the wrapper is built each frame
//! with borrowed state and props.
//!
//! ```text
//! components/
//! ├── mod.rs          (this file, plus small style helpers)
//! ├── title_bar.rs
//! ├── bottom_nav.rs
//! ├── list_cursor.rs
//! └── text_input.rs
//! ```

mod bottom_nav;
mod list_cursor;
mod text_input;
mod title_bar;

pub use bottom_nav::BottomNav;
pub use list_cursor::{ListCursor, ListEvent, SelectableList};
pub use text_input::{InputEvent, TextInput};
pub use title_bar::TitleBar;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::catalog::{Availability, IconTag};
use crate::core::plan::Plan;

/// Truncate to at most `max_width` terminal columns, ending in "…" when cut.
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

pub fn icon_glyph(icon: IconTag) -> &'static str {
    match icon {
        IconTag::Calculator => "∑",
        IconTag::BookOpen => "¶",
        IconTag::Microscope => "◎",
        IconTag::Zap => "ϟ",
        IconTag::FlaskConical => "△",
        IconTag::Leaf => "❦",
    }
}

/// Catalog color tags ("blue", "green", ...) to terminal colors.
pub fn tag_color(tag: &str) -> Color {
    match tag {
        "blue" => Color::Blue,
        "green" => Color::Green,
        "purple" => Color::Magenta,
        "orange" => Color::LightRed,
        "red" => Color::Red,
        "yellow" => Color::Yellow,
        "emerald" => Color::LightGreen,
        _ => Color::Gray,
    }
}

pub fn plan_color(plan: Plan) -> Color {
    match plan {
        Plan::Free => Color::Gray,
        Plan::Pro => Color::Yellow,
        Plan::ProPlus => Color::Magenta,
    }
}

/// Trailing badge for a catalog row.
pub fn availability_badge(availability: Availability, required: Plan) -> Span<'static> {
    match availability {
        Availability::Unlocked if required == Plan::Free => {
            Span::styled(" Gratuito", Style::default().fg(Color::Green))
        }
        Availability::Unlocked => Span::styled(
            format!(" {}", required.label()),
            Style::default().fg(plan_color(required)),
        ),
        Availability::Locked => Span::styled(
            format!(" 🔒 {}", required.label()),
            Style::default()
                .fg(plan_color(required))
                .add_modifier(Modifier::DIM),
        ),
        Availability::Empty => Span::styled(" Em breve", Style::default().fg(Color::DarkGray)),
    }
}

pub fn row_style(availability: Availability) -> Style {
    match availability {
        Availability::Unlocked => Style::default(),
        Availability::Locked | Availability::Empty => Style::default().fg(Color::DarkGray),
    }
}

pub fn section_title(text: &str) -> Span<'_> {
    Span::styled(
        text,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_columns() {
        assert_eq!(truncate("Matemática", 20), "Matemática");
        assert_eq!(truncate("Matemática", 5), "Mate…");
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(truncate("日本語テキスト", 5).width(), 5);
    }

    #[test]
    fn test_tag_color_fallback() {
        assert_eq!(tag_color("blue"), Color::Blue);
        assert_eq!(tag_color("chartreuse"), Color::Gray);
    }
}
