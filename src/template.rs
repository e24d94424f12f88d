//! # URI Templates
//!
//! Pure string operations over `{...}` templates. Two different substitutions are needed
//! from the same action `src`, and they must not be confused:
//!
//! - [`expand`] produces a real, well-formed URI (RFC 6570 style) used to instantiate the
//!   target resource. Values are percent-encoded and undefined variables disappear.
//! - [`substitute_as_query`] produces the client-facing `href`: every `{?key}` becomes the
//!   literal text `?key=value`, nothing is encoded and nothing is resolved.
//!
//! ```
//! use siren_actions::params::NamedParameters;
//! use siren_actions::template;
//!
//! let params = NamedParameters::new().with("id", "a b");
//! assert_eq!(template::expand("app://self/child{?id}", &params), "app://self/child?id=a%20b");
//! assert_eq!(template::substitute_as_query("/child{?id}", &params), "/child?id=a b");
//! ```

use crate::params::NamedParameters;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

// `{+var}` additionally passes the reserved set through.
const UNRESERVED_OR_RESERVED: &AsciiSet = &UNRESERVED
    .remove(b':')
    .remove(b'/')
    .remove(b'?')
    .remove(b'#')
    .remove(b'[')
    .remove(b']')
    .remove(b'@')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// Expands `{var}`, `{+var}`, `{?a,b}` and `{&a,b}` expressions against `params`.
///
/// Undefined and `Null` variables are dropped; an unterminated `{` is copied verbatim.
pub fn expand(template: &str, params: &NamedParameters) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                expand_expression(&after[..end], params, &mut out);
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Replaces each `{?key}` with the literal `?key=value`, for every key in order.
pub fn substitute_as_query(template: &str, params: &NamedParameters) -> String {
    params.iter().fold(template.to_string(), |src, (key, value)| {
        let text = NamedParameters::text(value).unwrap_or_default();
        src.replace(&format!("{{?{key}}}"), &format!("?{key}={text}"))
    })
}

/// Replaces `{?key}` with the bare value, using only the first parameter pair.
///
/// Later pairs are never consulted, even when `value` names them.
pub fn substitute_first(value: &str, params: &NamedParameters) -> String {
    match params.first() {
        Some((key, arg)) => {
            let text = NamedParameters::text(arg).unwrap_or_default();
            value.replace(&format!("{{?{key}}}"), &text)
        }
        None => value.to_string(),
    }
}

#[derive(Clone, Copy)]
enum Operator {
    Simple,
    Reserved,
    Query,
    Continuation,
}

fn expand_expression(expr: &str, params: &NamedParameters, out: &mut String) {
    let (op, vars) = match expr.chars().next() {
        Some('+') => (Operator::Reserved, &expr[1..]),
        Some('?') => (Operator::Query, &expr[1..]),
        Some('&') => (Operator::Continuation, &expr[1..]),
        _ => (Operator::Simple, expr),
    };
    let allow_reserved = matches!(op, Operator::Reserved);

    let mut defined = 0;
    for spec in vars.split(',') {
        let (name, prefix) = parse_varspec(spec);
        let Some(text) = params.get(name).and_then(NamedParameters::text) else {
            continue;
        };
        let text = match prefix {
            Some(len) => text.chars().take(len).collect::<String>(),
            None => text.into_owned(),
        };

        match op {
            Operator::Simple | Operator::Reserved => {
                if defined > 0 {
                    out.push(',');
                }
            }
            Operator::Query | Operator::Continuation => {
                let lead = if defined == 0 && matches!(op, Operator::Query) {
                    '?'
                } else {
                    '&'
                };
                out.push(lead);
                out.push_str(name);
                out.push('=');
            }
        }
        encode_into(out, &text, allow_reserved);
        defined += 1;
    }
}

// `name`, `name*` or `name:3`
fn parse_varspec(spec: &str) -> (&str, Option<usize>) {
    let spec = spec.trim().trim_end_matches('*');
    match spec.split_once(':') {
        Some((name, len)) => (name, len.parse().ok()),
        None => (spec, None),
    }
}

fn encode_into(out: &mut String, value: &str, allow_reserved: bool) {
    if !allow_reserved {
        out.extend(utf8_percent_encode(value, UNRESERVED));
        return;
    }

    // Existing `%XX` triplets pass through, a lone `%` is encoded.
    let mut rest = value;
    while let Some(pos) = rest.find('%') {
        out.extend(utf8_percent_encode(&rest[..pos], UNRESERVED_OR_RESERVED));
        let tail = &rest[pos..];
        if is_pct_triplet(tail) {
            out.push_str(&tail[..3]);
            rest = &tail[3..];
        } else {
            out.push_str("%25");
            rest = &tail[1..];
        }
    }
    out.extend(utf8_percent_encode(rest, UNRESERVED_OR_RESERVED));
}

fn is_pct_triplet(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 3 && bytes[1].is_ascii_hexdigit() && bytes[2].is_ascii_hexdigit()
}
