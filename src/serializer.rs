//! Serializes a [`Value`] tree back to JSON text.
//!
//! Numbers are formatted to 17 significant decimal digits — the minimum
//! that guarantees an exact IEEE-754 double round-trip — then trimmed of
//! trailing zeros, mirroring the classic `"%.17g"` formatting strategy this
//! component is modeled on.

use crate::value::Value;

/// Serialize a value tree to a JSON string.
pub fn serialize(value: &Value) -> String {
    let mut out = String::with_capacity(STRINGIFY_STACK_INITIAL_BYTES);
    write_value(value, &mut out);
    out
}

use crate::scratch::STRINGIFY_STACK_INITIAL_BYTES;

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::False => out.push_str("false"),
        Value::True => out.push_str("true"),
        Value::Number(n) => out.push_str(&format_number(*n)),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(members) => {
            out.push('{');
            for (i, member) in members.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(&member.key, out);
                out.push(':');
                write_value(&member.value, out);
            }
            out.push('}');
        }
    }
}

fn write_string(s: &str, out: &mut String) {
    // Worst case every byte expands to `\u00HH` (6 bytes) plus the two
    // surrounding quotes.
    out.reserve(s.len() * 6 + 2);
    out.push('"');
    for byte in s.bytes() {
        match byte {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            0x08 => out.push_str("\\b"),
            0x0C => out.push_str("\\f"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b if b < 0x20 => out.push_str(&format!("\\u{:04X}", b)),
            b => out.push(b as char),
        }
    }
    out.push('"');
}

/// Format `n` in the shortest decimal or scientific form that preserves all
/// 17 significant digits of a `double`, matching what `"%.17g"` would
/// produce: no trailing zeros, no decimal point on whole numbers, and
/// scientific notation only outside the range a plain-decimal printf would
/// use.
pub(crate) fn format_number(n: f64) -> String {
    if n == 0.0 {
        return if n.is_sign_negative() {
            "-0".to_string()
        } else {
            "0".to_string()
        };
    }

    let negative = n.is_sign_negative();
    let abs = n.abs();

    // 17 significant digits: one before the decimal point, 16 after.
    let sci = format!("{:.16e}", abs);
    let (mantissa, exp_part) = sci
        .split_once('e')
        .expect("scientific formatting always includes an exponent");
    let exp: i32 = exp_part.parse().expect("exponent is always an integer");

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let digits = digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let point_pos = exp + 1; // digits before the decimal point in plain notation

    let mut out = String::new();
    if negative {
        out.push('-');
    }

    if point_pos < -5 || point_pos > 21 {
        out.push_str(&digits[0..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        if exp >= 0 {
            out.push('+');
        }
        out.push_str(&exp.to_string());
    } else if point_pos <= 0 {
        out.push_str("0.");
        for _ in 0..(-point_pos) {
            out.push('0');
        }
        out.push_str(digits);
    } else if point_pos as usize >= digits.len() {
        out.push_str(digits);
        for _ in 0..(point_pos as usize - digits.len()) {
            out.push('0');
        }
    } else {
        out.push_str(&digits[0..point_pos as usize]);
        out.push('.');
        out.push_str(&digits[point_pos as usize..]);
    }
    out
}
