use cruise_countdown::view::{CompactView, Icon, NoDataView, StandardView, Symbol, Text, View};
use std::fmt;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COMPACT_WIDTH: usize = 22;
const COUNTDOWN_COLUMN_WIDTH: usize = 12;
const DETAILS_COLUMN_WIDTH: usize = 26;
const COLUMN_GAP: usize = 2;
const ELLIPSIS: char = '…';

/// A view drawn as boxed plain text.
pub struct Preview {
    width: usize,
    lines: Vec<String>,
}

impl Preview {
    pub fn new(view: &View) -> Self {
        match view {
            View::NoData(view) => no_data(view),
            View::Compact(view) => compact(view),
            View::Standard(view) => standard(view),
        }
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "─".repeat(self.width + 2);
        writeln!(f, "╭{border}╮")?;
        for line in &self.lines {
            writeln!(f, "│ {} │", pad(line, self.width))?;
        }
        write!(f, "╰{border}╯")
    }
}

fn glyph(icon: &Icon) -> char {
    match icon.symbol {
        Symbol::Sailboat => '△',
        Symbol::SailboatFill => '▲',
        Symbol::Calendar => '▦',
    }
}

/// Terminal columns taken by `s`; wide glyphs count double.
fn width_of(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Longest prefix of `chars` that fits in `width` columns, at least one char.
fn fitting_prefix(chars: &[char], width: usize) -> usize {
    let mut used = 0;
    let mut count = 0;
    for &c in chars {
        used += char_width(c);
        if used > width {
            break;
        }
        count += 1;
    }
    count.max(1).min(chars.len())
}

fn pad(s: &str, width: usize) -> String {
    format!("{s}{}", " ".repeat(width.saturating_sub(width_of(s))))
}

fn center(s: &str, width: usize) -> String {
    let left = width.saturating_sub(width_of(s)) / 2;
    pad(&format!("{}{s}", " ".repeat(left)), width)
}

/// Word-wraps `text` to `width`, then cuts it to its line limit, marking the
/// cut with an ellipsis.
fn wrap(text: &Text, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for word in text.content.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.iter().map(|&c| char_width(c)).sum::<usize>() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let split = fitting_prefix(&word, width);
            lines.push(word.drain(..split).collect());
        }
        if word.is_empty() {
            continue;
        }
        let word_width: usize = word.iter().map(|&c| char_width(c)).sum();
        if !line.is_empty() && width_of(&line) + 1 + word_width > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.extend(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }

    if let Some(max) = text.max_lines.map(usize::from) {
        if lines.len() > max {
            lines.truncate(max);
            if let Some(last) = lines.last_mut() {
                let chars: Vec<char> = last.chars().collect();
                let keep = fitting_prefix(&chars, width.saturating_sub(1).max(1));
                let mut kept: String = chars[..keep].iter().collect();
                kept.push(ELLIPSIS);
                *last = kept;
            }
        }
    }

    lines
}

fn no_data(view: &NoDataView) -> Preview {
    let width = COMPACT_WIDTH;
    let mut lines = vec![center(&glyph(&view.icon).to_string(), width)];
    lines.extend(wrap(&view.message, width).iter().map(|l| center(l, width)));
    lines.extend(wrap(&view.hint, width).iter().map(|l| center(l, width)));
    Preview { width, lines }
}

fn compact(view: &CompactView) -> Preview {
    let width = COMPACT_WIDTH;
    let icon = glyph(&view.icon).to_string();
    let gap = width.saturating_sub(width_of(&icon) + width_of(&view.days.content));

    let mut lines = vec![
        format!("{icon}{}{}", " ".repeat(gap), view.days.content),
        center(&view.caption.content, width),
        String::new(),
    ];
    for text in [&view.event_name, &view.vehicle_name, &view.destination] {
        lines.extend(wrap(text, width).iter().map(|l| center(l, width)));
    }
    Preview { width, lines }
}

fn standard(view: &StandardView) -> Preview {
    let countdown = &view.countdown;
    let left = vec![
        glyph(&countdown.icon).to_string(),
        countdown.days.content.clone(),
        countdown.caption.content.clone(),
    ];

    let details = &view.details;
    let mut right = Vec::new();
    for text in [&details.event_name, &details.vehicle_name, &details.destination] {
        right.extend(wrap(text, DETAILS_COLUMN_WIDTH));
    }
    right.push(String::new());
    right.push(format!(
        "{} {}",
        glyph(&details.footer.icon),
        details.footer.date.content
    ));

    let rows = left.len().max(right.len());
    let lines = (0..rows)
        .map(|row| {
            let l = left.get(row).map(String::as_str).unwrap_or("");
            let r = right.get(row).map(String::as_str).unwrap_or("");
            format!("{}{}{r}", pad(l, COUNTDOWN_COLUMN_WIDTH), " ".repeat(COLUMN_GAP))
        })
        .collect();

    Preview {
        width: COUNTDOWN_COLUMN_WIDTH + COLUMN_GAP + DETAILS_COLUMN_WIDTH,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cruise_countdown::{render, CountdownSnapshot, SizeCategory};
    use cruise_countdown::view::{Font, Tint, Weight};

    fn text(content: &str, max_lines: Option<u8>) -> Text {
        let text = Text::new(content, Font::new(12, Weight::Regular), Tint::Primary);
        match max_lines {
            Some(lines) => text.max_lines(lines),
            None => text,
        }
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap(&text("Miami to Caribbean Islands", None), 10);

        assert_eq!(lines, vec!["Miami to", "Caribbean", "Islands"]);
    }

    #[test]
    fn test_wrap_truncates_with_ellipsis() {
        let lines = wrap(&text("Miami to Caribbean Islands", Some(1)), 10);

        assert_eq!(lines, vec!["Miami to…"]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let lines = wrap(&text("Transatlantic", None), 5);

        assert_eq!(lines, vec!["Trans", "atlan", "tic"]);
    }

    #[test]
    fn test_wrap_counts_wide_glyphs_double() {
        let lines = wrap(&text("飛鳥II 横浜港", None), 6);

        assert_eq!(lines, vec!["飛鳥II", "横浜港"]);
        assert!(lines.iter().all(|line| width_of(line) <= 6));
    }

    #[test]
    fn test_wide_names_keep_box_aligned() {
        let mut snapshot = CountdownSnapshot::placeholder(chrono::Utc::now());
        snapshot.event_name = "カリブ海クルーズ".into();
        snapshot.vehicle_name = "Norwegian Aqua 🚢".into();

        for size in [SizeCategory::Compact, SizeCategory::Standard] {
            let preview = Preview::new(&render(&snapshot, size)).to_string();
            let widths: Vec<usize> = preview.lines().map(width_of).collect();

            assert!(widths.windows(2).all(|pair| pair[0] == pair[1]), "{preview}");
        }
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(wrap(&text("", Some(2)), 10).is_empty());
    }

    #[test]
    fn test_standard_preview_has_footer() {
        let mut snapshot = CountdownSnapshot::placeholder(chrono::Utc::now());
        snapshot.departure = chrono::DateTime::parse_from_rfc3339("2025-09-07T00:00:00Z").unwrap();

        let preview = Preview::new(&render(&snapshot, SizeCategory::Standard)).to_string();

        assert!(preview.contains("September 7, 2025"));
        assert!(preview.contains("days to go"));
        assert!(preview.contains("15"));
    }

    #[test]
    fn test_no_data_preview() {
        let snapshot = CountdownSnapshot::no_data(chrono::Utc::now());

        let preview = Preview::new(&render(&snapshot, SizeCategory::Compact)).to_string();

        assert!(preview.contains("No Cruise Selected"));
        assert!(!preview.contains("days to go"));
    }
}
