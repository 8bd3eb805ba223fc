//! Comment stripping
//!
//! Two string-literal-aware passes run over the source, in this order:
//!
//! 1. `/* ... */` spans are removed.
//! 2. `// ...` spans are removed up to, but not including, the newline.
//!
//! Comment markers inside a double-quoted string are kept verbatim. A `"` is
//! treated as escaped when the character right before it is a backslash.

use crate::diagnostics::{Diagnostics, LexicalError};

/// Result of the multi-line pass.
struct Stripped {
    text: String,
    /// Offset of a `/*` that never found its `*/`.
    unterminated_at: Option<usize>,
}

/// Remove all comments from `source`. Never fails and records nothing.
///
/// An unterminated `/*` drops the rest of the text.
pub fn preprocess(source: &str) -> String {
    remove_single_line_comments(&remove_multi_line_comments(source).text)
}

/// Same as [`preprocess`], but an unterminated `/*` is also recorded as a
/// diagnostic at the offset where the comment opened.
pub fn preprocess_checked(source: &str, diagnostics: &mut Diagnostics) -> String {
    let stripped = remove_multi_line_comments(source);
    if let Some(position) = stripped.unterminated_at {
        diagnostics.push(LexicalError::UnterminatedComment { position });
    }
    let text = remove_single_line_comments(&stripped.text);
    log::debug!(
        "preprocessed {} chars into {} chars",
        source.chars().count(),
        text.chars().count()
    );
    text
}

fn is_unescaped_quote(chars: &[char], i: usize) -> bool {
    chars[i] == '"' && (i == 0 || chars[i - 1] != '\\')
}

fn remove_multi_line_comments(source: &str) -> Stripped {
    let chars: Vec<char> = source.chars().collect();
    let mut text = String::with_capacity(source.len());
    let mut in_string = false;
    let mut i = 0;

    while i < chars.len() {
        if is_unescaped_quote(&chars, i) {
            in_string = !in_string;
        }

        if !in_string && chars[i] == '/' && chars.get(i + 1) == Some(&'*') {
            match find_comment_end(&chars, i + 2) {
                Some(end) => {
                    i = end;
                    continue;
                }
                None => {
                    return Stripped {
                        text,
                        unterminated_at: Some(i),
                    };
                }
            }
        }

        text.push(chars[i]);
        i += 1;
    }

    Stripped {
        text,
        unterminated_at: None,
    }
}

/// Index just past the first `*/` at or after `from`.
fn find_comment_end(chars: &[char], from: usize) -> Option<usize> {
    (from..chars.len().saturating_sub(1))
        .find(|&j| chars[j] == '*' && chars[j + 1] == '/')
        .map(|j| j + 2)
}

fn remove_single_line_comments(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut text = String::with_capacity(source.len());
    let mut in_string = false;
    let mut in_comment = false;

    for i in 0..chars.len() {
        let c = chars[i];

        if in_comment {
            if c == '\n' {
                in_comment = false;
                text.push(c);
            }
            continue;
        }

        if is_unescaped_quote(&chars, i) {
            in_string = !in_string;
        } else if !in_string && c == '/' && chars.get(i + 1) == Some(&'/') {
            in_comment = true;
            continue;
        }

        text.push(c);
    }

    text
}
