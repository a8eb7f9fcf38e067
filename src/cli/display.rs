// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the hitmark CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `HITMARK_THEME` first, then `COLORFGBG` (set by some terminals), then
//! defaults to dark. Highlighted spans are painted with the CSS colors from
//! the active configuration, so the terminal preview matches what a browser
//! viewer would draw. Respects `NO_COLOR` and non-TTY output.
//!
//! # Theme detection order
//!
//! 1. `HITMARK_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use hitmark::{HighlightLevel, HighlightSpan, LevelColors};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("HITMARK_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

type Rgb = (u8, u8, u8);

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Score tier colors plus the box chrome and the ink over painted spans.
struct Palette {
    strong: Rgb,
    fair: Rgb,
    weak: Rgb,
    muted: Rgb,
    ink: Rgb,
}

/// OneDark
const DARK: Palette = Palette {
    strong: (152, 195, 121), // #98c379
    fair: (97, 175, 239),    // #61afef
    weak: (229, 192, 123),   // #e5c07b
    muted: (92, 99, 112),    // #5c6370
    ink: (40, 44, 52),       // #282c34
};

/// One Light
const LIGHT: Palette = Palette {
    strong: (80, 161, 79),  // #50a14f
    fair: (64, 120, 242),   // #4078f2
    weak: (193, 132, 1),    // #c18401
    muted: (160, 161, 167), // #a0a1a7
    ink: (56, 58, 66),      // #383a42
};

fn palette() -> &'static Palette {
    match theme() {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

fn rgb((r, g, b): Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

fn rgb_bg((r, g, b): Rgb) -> String {
    format!("\x1b[48;2;{};{};{}m", r, g, b)
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn themed(color: Rgb, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), rgb(color), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Parse `#rrggbb` (or `rrggbb`) into its channels.
pub fn parse_hex(color: &str) -> Option<Rgb> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = themed(palette().muted, &[], "│");
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border, content, " ".repeat(pad), border);
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let colored_label = themed(palette().fair, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        themed(palette().muted, &[], "┌"),
        label_part,
        themed(palette().muted, &[], &format!("{}┐", "─".repeat(remaining)))
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", themed(palette().muted, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Level name padded to the widest level, colored with the configured CSS
/// color for that level.
pub fn level_label(level: HighlightLevel, palette: &LevelColors) -> String {
    let name = format!("{:<7}", level.to_string());
    if !use_colors() {
        return name;
    }
    match parse_hex(palette.for_level(level)) {
        Some(color) => format!("{}{}{}", rgb(color), name, RESET),
        None => name,
    }
}

/// Color-coded score value
pub fn score_value(score: f64, max_score: f64) -> String {
    let text = format!("{:>6.2}", score);
    let ratio = if max_score > 0.0 { score / max_score } else { 0.0 };
    let tiers = palette();
    let color = if ratio >= 0.8 {
        tiers.strong
    } else if ratio >= 0.5 {
        tiers.fair
    } else if ratio >= 0.3 {
        tiers.weak
    } else {
        tiers.muted
    };
    themed(color, &[], &text)
}

/// The document with every span painted in its level's background color.
/// Without color support, spans are wrapped in `[` `]` instead.
pub fn paint_document(document: &str, spans: &[HighlightSpan], palette: &LevelColors) -> String {
    let colored = use_colors();
    let chars: Vec<char> = document.chars().collect();
    let mut out = String::with_capacity(document.len() + spans.len() * 24);
    let mut cursor = 0;

    for span in spans {
        if span.start < cursor || span.end > chars.len() {
            continue;
        }
        out.extend(&chars[cursor..span.start]);
        let text: String = chars[span.start..span.end].iter().collect();

        match (colored, parse_hex(palette.for_level(span.level))) {
            (true, Some(background)) => {
                let ink = rgb(self::palette().ink);
                out.push_str(&format!("{}{}{}{}", rgb_bg(background), ink, text, RESET));
            }
            _ => out.push_str(&format!("[{}]", text)),
        }
        cursor = span.end;
    }
    out.extend(&chars[cursor..]);
    out
}

/// Shorten to `max` visible chars with a trailing ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Dimmed hint line under a section.
pub fn hint(text: &str) -> String {
    themed(palette().muted, &[DIM], text)
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
