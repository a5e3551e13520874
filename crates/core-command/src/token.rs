//! Quote-aware whitespace tokenizer.
//!
//! Splits on spaces outside double quotes; a `"` toggles quoting and is
//! stripped from the token. There are no escape sequences, and empty tokens
//! are never produced — `""` contributes nothing, and runs of spaces
//! collapse.

/// Split a command line into quote-stripped tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            ' ' if !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            '"' => in_quotes = !in_quotes,
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_spaces() {
        assert_eq!(tokenize("APPEND abc def"), vec!["APPEND", "abc", "def"]);
    }

    #[test]
    fn collapses_space_runs() {
        assert_eq!(tokenize("  UNDO   "), vec!["UNDO"]);
    }

    #[test]
    fn quotes_protect_spaces_and_are_stripped() {
        assert_eq!(
            tokenize(r#"CREATE 10 "hello world""#),
            vec!["CREATE", "10", "hello world"]
        );
    }

    #[test]
    fn quote_segments_join_with_adjacent_text() {
        assert_eq!(tokenize(r#"APPEND ab"c d"ef"#), vec!["APPEND", "abc def"]);
    }

    #[test]
    fn empty_quotes_produce_no_token() {
        assert_eq!(tokenize(r#"CREATE 5 """#), vec!["CREATE", "5"]);
    }

    #[test]
    fn empty_line_produces_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }
}
