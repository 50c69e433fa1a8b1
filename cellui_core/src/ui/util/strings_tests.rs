use super::strings::*;

#[test]
fn truncate1() {
  assert_eq!(truncate("hello", 10), "hello");
  assert_eq!(truncate("hello", 5), "hello");
  assert_eq!(truncate("hello", 4), "hel…");
  assert_eq!(truncate("hello", 0), "");
}

#[test]
fn wrap1() {
  let lines = wrap("the quick brown fox jumps", 10);
  assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);

  let lines = wrap("abcdefghijkl xy", 5);
  assert_eq!(lines, vec!["abcde", "fghij", "kl xy"]);

  let lines = wrap("first\n\nthird line", 20);
  assert_eq!(lines, vec!["first", "", "third line"]);

  assert!(wrap("anything", 0).is_empty());
}

#[test]
fn char_slice1() {
  assert_eq!(char_slice("héllo", 1, 3), "éll");
  assert_eq!(char_slice("abc", 2, 10), "c");
  assert_eq!(char_count("héllo"), 5);
}
