//! Fragment tokenizer with a constrained, practical tag-name character set.
//!
//! Supported tag-name characters (ASCII only): `[A-Za-z0-9:_-]`. Attribute
//! names use the same class. Tag and attribute names are lowercased at
//! tokenization time so later comparisons are plain equality.
//!
//! This tokenizes entry-template fragments and page skeletons, not arbitrary
//! documents. Known limitations (intentional):
//! - No doctype handling; a fragment never carries one.
//! - No rawtext modes: `<script>`/`<style>` bodies are tokenized like any
//!   other markup, since templates do not emit them.
//! - A stray `<` that does not open a tag, end tag, or comment is treated as
//!   literal text.

use crate::entities::decode_entities;
use crate::types::Token;
use memchr::memchr;

const COMMENT_START: &str = "<!--";
const COMMENT_END: &str = "-->";

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

pub fn tokenize(input: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let mut i = 0;

    // Invariant: slice endpoints always land on UTF-8 char boundaries. We cut
    // either at ASCII structural bytes (`<`, `>`, quotes, whitespace) or at
    // positions reached by scanning ASCII-only name characters.
    while i < bytes.len() {
        if bytes[i] != b'<' {
            // Collect text up to the next '<'.
            let end = memchr(b'<', &bytes[i..]).map_or(bytes.len(), |rel| i + rel);
            debug_assert!(input.is_char_boundary(i));
            debug_assert!(input.is_char_boundary(end));
            push_text(&mut out, &input[i..end]);
            i = end;
            continue;
        }

        if input[i..].starts_with(COMMENT_START) {
            let body_start = i + COMMENT_START.len();
            match input[body_start..].find(COMMENT_END) {
                Some(rel) => {
                    out.push(Token::Comment(input[body_start..body_start + rel].to_string()));
                    i = body_start + rel + COMMENT_END.len();
                }
                None => {
                    // Unterminated comment swallows the rest of the input.
                    out.push(Token::Comment(input[body_start..].to_string()));
                    i = bytes.len();
                }
            }
            continue;
        }

        if bytes.get(i + 1) == Some(&b'/') {
            i = lex_end_tag(input, bytes, i, &mut out);
            continue;
        }

        if bytes.get(i + 1).copied().is_some_and(|b| b.is_ascii_alphabetic()) {
            i = lex_start_tag(input, bytes, i, &mut out);
            continue;
        }

        // Not a tag opener: keep the '<' as literal text.
        push_text(&mut out, "<");
        i += 1;
    }

    out
}

fn push_text(out: &mut Vec<Token>, raw: &str) {
    if raw.is_empty() {
        return;
    }
    // Merge with a preceding text token so stray '<' handling cannot split runs.
    let decoded = decode_entities(raw);
    if let Some(Token::Text(prev)) = out.last_mut() {
        prev.push_str(&decoded);
        return;
    }
    out.push(Token::Text(decoded));
}

fn lex_end_tag(input: &str, bytes: &[u8], at: usize, out: &mut Vec<Token>) -> usize {
    let name_start = at + 2;
    let mut j = name_start;
    while j < bytes.len() && is_name_byte(bytes[j]) {
        j += 1;
    }
    let name = input[name_start..j].to_ascii_lowercase();
    // Skip anything up to the closing '>'.
    while j < bytes.len() && bytes[j] != b'>' {
        j += 1;
    }
    if j < bytes.len() {
        j += 1;
    }
    if name.is_empty() {
        log::trace!(target: "dom.tokenizer", "dropping empty end tag at byte {at}");
    } else {
        out.push(Token::EndTag(name));
    }
    j
}

fn lex_start_tag(input: &str, bytes: &[u8], at: usize, out: &mut Vec<Token>) -> usize {
    let len = bytes.len();
    let name_start = at + 1;
    let mut k = name_start;
    while k < len && is_name_byte(bytes[k]) {
        k += 1;
    }
    let name = input[name_start..k].to_ascii_lowercase();

    let mut attributes: Vec<(String, Option<String>)> = Vec::new();
    let mut self_closing = false;

    loop {
        while k < len && bytes[k].is_ascii_whitespace() {
            k += 1;
        }
        match bytes.get(k) {
            None => break,
            Some(&b'>') => {
                k += 1;
                break;
            }
            Some(&b'/') => {
                if bytes.get(k + 1) == Some(&b'>') {
                    self_closing = true;
                    k += 2;
                    break;
                }
                k += 1;
                continue;
            }
            _ => {}
        }

        let attr_start = k;
        while k < len && is_name_byte(bytes[k]) {
            k += 1;
        }
        if attr_start == k {
            // Unrecognized byte inside the tag; skip it.
            k += 1;
            continue;
        }
        let attr_name = input[attr_start..k].to_ascii_lowercase();

        while k < len && bytes[k].is_ascii_whitespace() {
            k += 1;
        }
        let value = if bytes.get(k) == Some(&b'=') {
            k += 1;
            while k < len && bytes[k].is_ascii_whitespace() {
                k += 1;
            }
            Some(lex_attr_value(input, bytes, &mut k))
        } else {
            None
        };

        attributes.push((attr_name, value));
    }

    if is_void_element(&name) {
        self_closing = true;
    }

    out.push(Token::StartTag {
        name,
        attributes,
        self_closing,
    });
    k
}

fn lex_attr_value(input: &str, bytes: &[u8], k: &mut usize) -> String {
    let len = bytes.len();
    if let Some(quote @ (b'"' | b'\'')) = bytes.get(*k).copied() {
        *k += 1;
        let start = *k;
        while *k < len && bytes[*k] != quote {
            *k += 1;
        }
        let raw = &input[start..*k];
        if *k < len {
            *k += 1;
        }
        return decode_entities(raw);
    }

    // Unquoted: run until whitespace, '>', or '/>'.
    let start = *k;
    while *k < len && !bytes[*k].is_ascii_whitespace() && bytes[*k] != b'>' {
        if bytes[*k] == b'/' && bytes.get(*k + 1) == Some(&b'>') {
            break;
        }
        *k += 1;
    }
    input[start..*k].to_string()
}

fn is_void_element(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
