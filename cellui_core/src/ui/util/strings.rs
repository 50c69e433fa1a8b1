//! Text utils for widgets.

use compact_str::CompactString;

/// Count of chars, all symbols are treated as single-width.
pub fn char_count(text: &str) -> usize {
  text.chars().count()
}

/// Take a slice of chars `[start, start + n)` from text.
pub fn char_slice(text: &str, start: usize, n: usize) -> CompactString {
  text.chars().skip(start).take(n).collect()
}

/// Truncate text to at most `width` chars, a truncated text ends with `…`.
pub fn truncate(text: &str, width: usize) -> CompactString {
  if char_count(text) <= width {
    return CompactString::from(text);
  }
  if width == 0 {
    return CompactString::default();
  }
  let mut result = char_slice(text, 0, width - 1);
  result.push('…');
  result
}

/// Wrap text into lines of at most `width` chars.
///
/// Lines break at whitespace, words longer than `width` break at any char. Explicit line
/// breaks (`\n`) are kept.
pub fn wrap(text: &str, width: usize) -> Vec<CompactString> {
  let mut lines = vec![];
  if width == 0 {
    return lines;
  }

  for paragraph in text.split('\n') {
    let mut line = CompactString::default();
    let mut line_len = 0_usize;
    for word in paragraph.split_whitespace() {
      let mut word: Vec<char> = word.chars().collect();
      let sep = if line_len > 0 { 1 } else { 0 };
      if line_len + sep + word.len() <= width {
        if sep > 0 {
          line.push(' ');
        }
        line.extend(word.iter().copied());
        line_len += sep + word.len();
        continue;
      }
      if line_len > 0 {
        lines.push(std::mem::take(&mut line));
      }
      while word.len() > width {
        let rest = word.split_off(width);
        lines.push(word.iter().copied().collect());
        word = rest;
      }
      line.extend(word.iter().copied());
      line_len = word.len();
    }
    lines.push(line);
  }
  lines
}
