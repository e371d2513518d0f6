//! Final text cleanup.

/// Clean extracted text. Pure function, never fails, idempotent on its
/// own output for ordinary text.
///
/// Steps, in order:
/// 1. collapse runs of spaces and tabs to a single space
/// 2. normalize `\r\n` and lone `\r` to `\n`
/// 3. collapse three or more consecutive newlines to exactly two
/// 4. strip control characters (`0x00`–`0x08`, `0x0B`, `0x0C`,
///    `0x0E`–`0x1F`, `0x7F`)
/// 5. trim leading and trailing whitespace
pub fn clean(text: &str) -> String {
    let collapsed = collapse_blanks(text);
    let normalized = collapsed.replace("\r\n", "\n").replace('\r', "\n");
    let mut out = limit_newlines(&normalized);
    out.retain(|c| !is_stripped_control(c));
    out.trim().to_string()
}

fn collapse_blanks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_blank = false;
    for c in text.chars() {
        if c == ' ' || c == '\t' {
            if !in_blank {
                out.push(' ');
                in_blank = true;
            }
        } else {
            out.push(c);
            in_blank = false;
        }
    }
    out
}

fn limit_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newlines = 0;
    for c in text.chars() {
        if c == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push('\n');
            }
        } else {
            newlines = 0;
            out.push(c);
        }
    }
    out
}

fn is_stripped_control(c: char) -> bool {
    matches!(c,
        '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}' | '\u{7F}')
}
