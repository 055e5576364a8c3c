//! Indentation normalization for block text.
//!
//! Text written as an indented block inside source code (the typical shape of
//! a multi-line string literal) is turned into flush-left prose:
//!
//! 1. leading and trailing whitespace-only lines are dropped,
//! 2. the smallest leading-whitespace count over the non-blank lines is
//!    taken as the common indent,
//! 3. that many characters are stripped from every non-blank line, and
//!    interior blank lines become empty.
//!
//! Lines break on `\n`, `\r\n` and a lone `\r`, so no carriage return
//! survives into the output.
//!
//! Indentation is counted in characters, so a tab and a space each count as
//! one. Blocks that mix tabs and spaces across lines are stripped by that
//! count and may keep some visual indentation.

fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
        .collect()
}

fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Drops the first `n` characters of `line`.
fn strip_chars(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((at, _)) => &line[at..],
        None => "",
    }
}

pub fn normalize(text: &str) -> String {
    let lines = split_lines(text);

    let Some(first) = lines.iter().position(|l| !is_blank(l)) else {
        return String::new();
    };
    // a non-blank line exists, so this can't miss
    let last = lines.iter().rposition(|l| !is_blank(l)).unwrap_or(first);
    let body = &lines[first..=last];

    let indent = body
        .iter()
        .filter(|l| !is_blank(l))
        .map(|l| indent_width(l))
        .min()
        .unwrap_or(0);

    body.iter()
        .map(|line| match is_blank(line) {
            true => "",
            false => strip_chars(line, indent),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
