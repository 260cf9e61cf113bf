use clap::builder::styling::{AnsiColor, Color, Style};
use clap::builder::Styles;
use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

// ═══════════════════════════════════════════════════════════════════════════════
// Clap Styles
// ═══════════════════════════════════════════════════════════════════════════════

pub fn get_styles() -> Styles {
    clap::builder::Styles::styled()
        .usage(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .header(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .literal(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .invalid(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .error(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Color Palette
// ═══════════════════════════════════════════════════════════════════════════════

pub mod colors {
    use crossterm::style::Color;

    pub const CYAN: Color = Color::Rgb {
        r: 0,
        g: 255,
        b: 255,
    };
    pub const MAGENTA: Color = Color::Rgb {
        r: 255,
        g: 0,
        b: 255,
    };
    pub const GREEN: Color = Color::Rgb {
        r: 0,
        g: 255,
        b: 136,
    };
    pub const ORANGE: Color = Color::Rgb {
        r: 255,
        g: 165,
        b: 0,
    };
    pub const RED: Color = Color::Rgb {
        r: 255,
        g: 85,
        b: 85,
    };
    pub const DIM: Color = Color::Rgb {
        r: 128,
        g: 128,
        b: 128,
    };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Bars and Gauges
// ═══════════════════════════════════════════════════════════════════════════════

pub mod bar_chars {
    pub const FILLED: &str = "█";
    pub const EMPTY: &str = "░";
    pub const SINGLE_HORIZONTAL: &str = "─";
    pub const ROUND_TOP_LEFT: &str = "╭";
    pub const ROUND_TOP_RIGHT: &str = "╮";
}

/// A fixed-width meter for a 0..=100 value: filled blocks up to the value,
/// light blocks for the rest.
pub fn render_bar(percent: u8, width: usize) -> String {
    let clamped = percent.min(100) as usize;
    let filled = clamped * width / 100;
    format!(
        "{}{}",
        bar_chars::FILLED.repeat(filled),
        bar_chars::EMPTY.repeat(width - filled)
    )
}

/// Traffic-light color for a 0..=100 score.
pub fn score_color(percent: u8) -> crossterm::style::Color {
    match percent {
        70.. => colors::GREEN,
        40..=69 => colors::ORANGE,
        _ => colors::RED,
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Section Headers
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_section_header(title: &str, color_enabled: bool) {
    let width: usize = 60;
    let title_len = title.width();
    let padding = width.saturating_sub(title_len + 4) / 2;
    let left = bar_chars::SINGLE_HORIZONTAL.repeat(padding);
    let right = bar_chars::SINGLE_HORIZONTAL.repeat(width.saturating_sub(padding + title_len + 4));

    println!();
    if color_enabled {
        println!(
            "{}{} {} {}{}",
            bar_chars::ROUND_TOP_LEFT.with(colors::CYAN),
            left.as_str().with(colors::CYAN),
            title.with(colors::CYAN).bold(),
            right.as_str().with(colors::CYAN),
            bar_chars::ROUND_TOP_RIGHT.with(colors::CYAN),
        );
    } else {
        println!(
            "{}{} {} {}{}",
            bar_chars::ROUND_TOP_LEFT, left, title, right, bar_chars::ROUND_TOP_RIGHT
        );
    }
}

/// Applies `color` to `text` when enabled, otherwise passes it through.
pub fn paint(text: &str, color: crossterm::style::Color, color_enabled: bool) -> String {
    if color_enabled {
        format!("{}", text.with(color))
    } else {
        text.to_string()
    }
}

/// Like [`paint`], but bold.
pub fn paint_bold(text: &str, color: crossterm::style::Color, color_enabled: bool) -> String {
    if color_enabled {
        format!("{}", text.with(color).bold())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_is_always_requested_width() {
        for percent in [0u8, 1, 33, 50, 99, 100] {
            let bar = render_bar(percent, 20);
            assert_eq!(bar.chars().count(), 20);
        }
    }

    #[test]
    fn bar_extremes() {
        assert_eq!(render_bar(0, 4), "░░░░");
        assert_eq!(render_bar(100, 4), "████");
    }

    #[test]
    fn paint_without_color_is_passthrough() {
        assert_eq!(paint("hello", colors::RED, false), "hello");
        assert_eq!(paint_bold("hello", colors::RED, false), "hello");
    }
}
