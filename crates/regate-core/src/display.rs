//! Regex-syntax rendering of character sets.
//!
//! The output parses back to the same set: `.` for the full alphabet, `[]`
//! for the empty set, a negated class when the set reaches the end of the
//! alphabet, and a bare atom when the set is a single code point.

use std::fmt::{self, Write as _};

use crate::{ALPHABET_SIZE, CharSet};

/// Characters that need a backslash inside or outside a class.
const RESERVED: &str = "[]\\^$.|?*+()-";

impl fmt::Display for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set = self.minimize();
        if set.is_empty() {
            return f.write_str("[]");
        }
        if set == CharSet::full() {
            return f.write_str(".");
        }

        let negate = set.ranges().last().is_some_and(|r| r.stop() == ALPHABET_SIZE);
        let shown = if negate { set.complement() } else { set };

        let mut body = String::new();
        let mut count = 0u32;
        for r in shown.iter() {
            count += r.len();
            if r.len() <= 2 {
                for cp in r.start()..r.stop() {
                    push_printable(&mut body, cp);
                }
            } else {
                push_printable(&mut body, r.start());
                body.push('-');
                push_printable(&mut body, r.last());
            }
        }

        if negate {
            write!(f, "[^{body}]")
        } else if count == 1 {
            f.write_str(&body)
        } else {
            write!(f, "[{body}]")
        }
    }
}

fn push_printable(out: &mut String, cp: u32) {
    match cp {
        0x0A => out.push_str("\\n"),
        0x0D => out.push_str("\\r"),
        0x20..=0x7E => {
            let c = cp as u8 as char;
            if RESERVED.contains(c) {
                out.push('\\');
            }
            out.push(c);
        }
        0..=0xFF => {
            let _ = write!(out, "\\x{cp:02X}");
        }
        _ => {
            let _ = write!(out, "\\u{cp:06X}");
        }
    }
}
