//! Pure edit operations producing weighted actions.
//!
//! Each operation takes the live buffer value, computes the post-state, and
//! packages both snapshots with the action's cost. Weights count the
//! characters an edit touched: appended, replaced, or removed.

use core_history::Action;

/// Append `text` to the buffer. Weight: characters appended.
pub fn append(current: &str, text: &str) -> Action {
    let mut next = String::with_capacity(current.len() + text.len());
    next.push_str(current);
    next.push_str(text);
    Action::new(current, next, text.chars().count() as u64)
}

/// Replace every occurrence of `find` with `replace`. Weight: occurrences
/// replaced (zero when `find` is absent).
pub fn replace_char(current: &str, find: char, replace: char) -> Action {
    let mut replaced = 0u64;
    let next: String = current
        .chars()
        .map(|c| {
            if c == find {
                replaced += 1;
                replace
            } else {
                c
            }
        })
        .collect();
    Action::new(current, next, replaced)
}

/// Truncate the buffer from character `index` onward. The index clamps to
/// `[0, len]`. Weight: characters removed.
pub fn delete_from(current: &str, index: i64) -> Action {
    let len = current.chars().count();
    let index = usize::try_from(index).unwrap_or(0).min(len);
    let next: String = current.chars().take(index).collect();
    Action::new(current, next, (len - index) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn append_weights_by_char_count() {
        let action = append("ab", "cdé");
        assert_eq!(action.prev, "ab");
        assert_eq!(action.next, "abcdé");
        assert_eq!(action.weight, 3);
    }

    #[test]
    fn append_empty_is_zero_weight() {
        let action = append("ab", "");
        assert_eq!(action.next, "ab");
        assert_eq!(action.weight, 0);
    }

    #[test]
    fn replace_counts_occurrences() {
        let action = replace_char("banana", 'a', 'o');
        assert_eq!(action.next, "bonono");
        assert_eq!(action.weight, 3);
    }

    #[test]
    fn replace_with_no_match_is_zero_weight() {
        let action = replace_char("banana", 'z', 'q');
        assert_eq!(action.next, "banana");
        assert_eq!(action.weight, 0);
    }

    #[test]
    fn delete_truncates_from_char_index() {
        let action = delete_from("abcdef", 3);
        assert_eq!(action.next, "abc");
        assert_eq!(action.weight, 3);
    }

    #[test]
    fn delete_index_clamps_both_ends() {
        let low = delete_from("abc", -2);
        assert_eq!(low.next, "");
        assert_eq!(low.weight, 3);

        let high = delete_from("abc", 99);
        assert_eq!(high.next, "abc");
        assert_eq!(high.weight, 0);
    }

    #[test]
    fn delete_counts_chars_not_bytes() {
        let action = delete_from("héllo", 2);
        assert_eq!(action.next, "hé");
        assert_eq!(action.weight, 3);
    }
}
