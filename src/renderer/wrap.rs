//! Title wrapping and single-line truncation.

use serde::Serialize;

use super::constants::ELLIPSIS;
use super::metrics::{char_width, text_width};

/// A title broken into at most two lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WrappedTitle {
    OneLine(String),
    /// Both lines are always non-empty.
    TwoLines(String, String),
}

impl WrappedTitle {
    pub fn is_two_line(&self) -> bool {
        matches!(self, WrappedTitle::TwoLines(..))
    }

    pub fn line_count(&self) -> usize {
        if self.is_two_line() { 2 } else { 1 }
    }

    pub fn lines(&self) -> Vec<&str> {
        match self {
            WrappedTitle::OneLine(l) => vec![l.as_str()],
            WrappedTitle::TwoLines(a, b) => vec![a.as_str(), b.as_str()],
        }
    }
}

/// Greedy two-line word wrap.
///
/// Words go on line 1 while they fit. The first word that overflows starts
/// line 2, which takes every remaining word and is ellipsized if it is still
/// too wide. Text that never overflows is returned unchanged as one line.
pub fn wrap_title(text: &str, font_size: f64, max_width: f64) -> WrappedTitle {
    let words: Vec<&str> = text.split_whitespace().collect();

    let mut line1 = String::new();
    let mut overflow_at = None;
    for (i, word) in words.iter().enumerate() {
        let candidate = if line1.is_empty() {
            (*word).to_string()
        } else {
            format!("{line1} {word}")
        };
        if text_width(&candidate, font_size) <= max_width {
            line1 = candidate;
        } else {
            overflow_at = Some(i);
            break;
        }
    }

    let Some(first_overflow) = overflow_at else {
        return WrappedTitle::OneLine(text.to_string());
    };

    let mut rest: Vec<&str> = words[first_overflow..].to_vec();
    if line1.is_empty() {
        // The first word alone is wider than the line: break it mid-word.
        let (head, tail) = split_at_width(words[0], font_size, max_width);
        if tail.is_empty() {
            return WrappedTitle::OneLine(text.to_string());
        }
        line1 = head.to_string();
        rest[0] = tail;
    }

    let mut line2 = ellipsize(&rest.join(" "), font_size, max_width);
    if line2.is_empty() {
        line2 = match line1.rfind(' ') {
            Some(pos) => {
                let moved = line1[pos + 1..].to_string();
                line1.truncate(pos);
                force_ellipsis(&moved, font_size, max_width)
            }
            None => ELLIPSIS.to_string(),
        };
    }

    WrappedTitle::TwoLines(line1, line2)
}

/// Truncate `text` to at most `max_chars` characters and `max_width` units,
/// ellipsis included. Text within both limits is returned unchanged; when
/// the limits leave no room for the ellipsis itself the result is empty.
pub fn truncate_to_width(text: &str, font_size: f64, max_width: f64, max_chars: usize) -> String {
    if text.chars().count() <= max_chars && text_width(text, font_size) <= max_width {
        return text.to_string();
    }

    let ellipsis_w = char_width(ELLIPSIS, font_size);
    if max_chars == 0 || ellipsis_w > max_width {
        return String::new();
    }
    let mut out = String::new();
    let mut width = 0.0;
    for ch in text.chars().take(max_chars.saturating_sub(1)) {
        let w = char_width(ch, font_size);
        if width + w + ellipsis_w > max_width {
            break;
        }
        width += w;
        out.push(ch);
    }
    let keep = out.trim_end().len();
    out.truncate(keep);
    out.push(ELLIPSIS);
    out
}

/// Drop trailing words (or characters, once a single word is left) until
/// `line` plus an ellipsis fits. Returns an empty string when nothing fits.
fn ellipsize(line: &str, font_size: f64, max_width: f64) -> String {
    if text_width(line, font_size) <= max_width {
        return line.to_string();
    }

    let mut cut = line.trim_end().to_string();
    while !cut.is_empty() && text_width(&cut, font_size) + char_width(ELLIPSIS, font_size) > max_width {
        match cut.rfind(' ') {
            Some(pos) if pos > 0 => cut.truncate(pos),
            _ => {
                cut.pop();
            }
        }
        let keep = cut.trim_end().len();
        cut.truncate(keep);
    }

    if cut.is_empty() {
        return cut;
    }
    cut.push(ELLIPSIS);
    cut
}

/// Longest character prefix of `word` that fits with an ellipsis appended.
fn force_ellipsis(word: &str, font_size: f64, max_width: f64) -> String {
    let budget = max_width - char_width(ELLIPSIS, font_size);
    let (head, _) = split_at_width(word, font_size, budget);
    if text_width(head, font_size) > budget {
        return ELLIPSIS.to_string();
    }
    format!("{head}{ELLIPSIS}")
}

/// Split `word` after the longest prefix that fits in `max_width`.
/// The head always holds at least one character.
fn split_at_width(word: &str, font_size: f64, max_width: f64) -> (&str, &str) {
    let mut width = 0.0;
    let mut end = 0;
    for (idx, ch) in word.char_indices() {
        width += char_width(ch, font_size);
        if width > max_width && end > 0 {
            break;
        }
        end = idx + ch.len_utf8();
    }
    word.split_at(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_title_stays_on_one_line() {
        let w = wrap_title("Blinding Lights", 41.0, 458.19);
        assert_eq!(w, WrappedTitle::OneLine("Blinding Lights".into()));
    }

    #[test]
    fn one_line_text_is_returned_verbatim() {
        let w = wrap_title("  spaced   out ", 41.0, 458.19);
        assert_eq!(w, WrappedTitle::OneLine("  spaced   out ".into()));
    }

    #[test]
    fn overflow_starts_second_line() {
        let w = wrap_title("This Love (Taylor's Version)", 41.0, 420.0);
        assert_eq!(
            w,
            WrappedTitle::TwoLines("This Love".into(), "(Taylor's Version)".into())
        );
    }

    #[test]
    fn long_second_line_is_ellipsized() {
        let title = "One Two Three Four Five Six Seven Eight Nine Ten Eleven Twelve";
        let w = wrap_title(title, 30.0, 250.0);
        let lines = w.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with(ELLIPSIS));
        for line in &lines {
            assert!(text_width(line, 30.0) <= 250.0, "{line:?} too wide");
        }
        // Kept words come out in order
        let joined = lines.join(" ");
        let kept: Vec<&str> = joined.trim_end_matches(ELLIPSIS).split(' ').collect();
        let leading: Vec<&str> = title.split(' ').take(kept.len()).collect();
        assert_eq!(kept, leading);
    }

    #[test]
    fn unbreakable_word_is_split_across_both_lines() {
        let title = "X".repeat(200);
        let w = wrap_title(&title, 26.0, 458.19);
        match &w {
            WrappedTitle::TwoLines(a, b) => {
                assert!(!a.is_empty());
                assert!(!b.is_empty());
                assert!(text_width(a, 26.0) <= 458.19);
                assert!(text_width(b, 26.0) <= 458.19);
                assert!(b.ends_with(ELLIPSIS));
            }
            other => panic!("expected two lines, got {other:?}"),
        }
    }

    #[test]
    fn lines_are_never_empty_even_when_nothing_fits() {
        let w = wrap_title("Ab Cd", 40.0, 30.0);
        for line in w.lines() {
            assert!(!line.is_empty());
        }
        assert!(w.is_two_line());
    }

    #[test]
    fn last_word_moves_down_when_second_line_empties() {
        // "WWW" cannot fit even one glyph plus the ellipsis, so line 2 is
        // rebuilt from the last word of line 1.
        let w = wrap_title("i i WWW", 10.0, 13.0);
        assert_eq!(w, WrappedTitle::TwoLines("i".into(), "i…".into()));
    }

    #[test]
    fn two_lines_preserve_every_word_when_nothing_is_cut() {
        let title = "Somebody That I Used To Know";
        let w = wrap_title(title, 41.0, 400.0);
        let WrappedTitle::TwoLines(a, b) = &w else {
            panic!("expected a split");
        };
        assert_eq!(format!("{a} {b}"), title);
    }

    #[test]
    fn truncate_respects_chars_and_width() {
        let artist = "A".repeat(80);
        let t = truncate_to_width(&artist, 24.0, 458.19, 60);
        assert!(t.ends_with(ELLIPSIS));
        assert!(t.chars().count() <= 60);
        assert!(text_width(&t, 24.0) <= 458.19);

        assert_eq!(truncate_to_width("The Weeknd", 24.0, 458.19, 60), "The Weeknd");
    }

    #[test]
    fn truncate_returns_empty_when_limits_leave_no_room() {
        assert_eq!(truncate_to_width("Anyone", 24.0, 10.0, 60), "");
        assert_eq!(truncate_to_width("Anyone", 24.0, 458.19, 0), "");
        assert_eq!(truncate_to_width("", 24.0, 458.19, 0), "");
    }

    #[test]
    fn truncate_trims_trailing_space_before_ellipsis() {
        let t = truncate_to_width("abc defghijkl", 10.0, 30.0, 60);
        assert_eq!(t, "abc…");
    }
}
