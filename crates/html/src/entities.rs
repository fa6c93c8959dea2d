/// Named references decoded by [`decode_entities`]. Anything else passes through.
const NAMED: &[(&[u8], char)] = &[
    (b"&amp;", '&'),
    (b"&lt;", '<'),
    (b"&gt;", '>'),
    (b"&quot;", '"'),
    (b"&apos;", '\''),
    (b"&nbsp;", '\u{00A0}'),
];

const MAX_HEX_DIGITS: usize = 6; // 0x10FFFF
const MAX_DEC_DIGITS: usize = 7; // 1114111

/// Decode the small entity subset that editor content and pasted snippets use.
///
/// - Named: `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;`, `&nbsp;`.
/// - Numeric: `&#215;` and `&#xD7;`, only when semicolon-terminated and naming a
///   Unicode scalar value.
///
/// Unknown names, missing semicolons and malformed numerics are copied unchanged.
pub(crate) fn decode_entities(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut copy_start = 0;
    let mut i = 0;

    while let Some(rel) = memchr::memchr(b'&', &bytes[i..]) {
        i += rel;
        out.push_str(&s[copy_start..i]);

        let consumed = decode_named(bytes, i, &mut out)
            .or_else(|| decode_numeric(s, i, &mut out))
            .unwrap_or_else(|| {
                out.push('&');
                1
            });
        i += consumed;
        copy_start = i;
    }

    out.push_str(&s[copy_start..]);
    out
}

fn decode_named(bytes: &[u8], at: usize, out: &mut String) -> Option<usize> {
    let rest = &bytes[at..];
    let (pat, ch) = NAMED.iter().find(|(pat, _)| rest.starts_with(pat))?;
    out.push(*ch);
    Some(pat.len())
}

/// Returns the number of bytes consumed from `at`, or `None` when `at` does not
/// start a numeric reference at all.
fn decode_numeric(s: &str, at: usize, out: &mut String) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.get(at + 1) != Some(&b'#') {
        return None;
    }
    let is_hex = matches!(bytes.get(at + 2), Some(b'x' | b'X'));
    let digits_start = if is_hex { at + 3 } else { at + 2 };
    let max_digits = if is_hex { MAX_HEX_DIGITS } else { MAX_DEC_DIGITS };

    let Some(end) = scan_digits(bytes, digits_start, max_digits, is_hex) else {
        return Some(copy_malformed(s, at, out));
    };

    let digits = &s[digits_start..end];
    let radix = if is_hex { 16 } else { 10 };
    match u32::from_str_radix(digits, radix).ok().and_then(char::from_u32) {
        Some(ch) => out.push(ch),
        None => out.push_str(&s[at..=end]),
    }
    Some(end + 1 - at)
}

// Bounded so adversarial digit runs stay linear.
fn scan_digits(bytes: &[u8], start: usize, max_digits: usize, is_hex: bool) -> Option<usize> {
    let mut j = start;
    while j < bytes.len() {
        let b = bytes[j];
        if b == b';' {
            return (j > start).then_some(j);
        }
        let ok = if is_hex {
            b.is_ascii_hexdigit()
        } else {
            b.is_ascii_digit()
        };
        if !ok || j - start == max_digits {
            return None;
        }
        j += 1;
    }
    None
}

/// Copies a malformed reference verbatim up to (and including) `;`, or up to
/// the next `&` / whitespace so a following reference still decodes.
fn copy_malformed(s: &str, at: usize, out: &mut String) -> usize {
    let bytes = s.as_bytes();
    let mut j = at + 1;
    while j < bytes.len() {
        match bytes[j] {
            b';' => {
                out.push_str(&s[at..=j]);
                return j + 1 - at;
            }
            b'&' => break,
            b if b.is_ascii_whitespace() => break,
            _ => j += 1,
        }
    }
    out.push_str(&s[at..j]);
    j - at
}
