//! PascalCase / snake_case conversion.

/// Convert `XxxYyy` to `xxx_yyy`.
///
/// An underscore is inserted before every interior uppercase letter, so
/// acronym runs expand letter by letter (`HTTPServer` -> `h_t_t_p_server`).
pub fn pascal_to_snake(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 2);
    let mut seen = false; // a non-underscore character has been emitted
    for (i, ch) in input.char_indices() {
        if i > 0 && ch.is_ascii_uppercase() && seen {
            out.push('_');
        }
        if ch != '_' {
            seen = true;
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}

/// Convert `xxx_yyy` to `XxxYyy`.
///
/// Underscores are removed and the letter after each one is uppercased, as
/// is the first letter of the input.
pub fn snake_to_pascal(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut upper_next = true;
    for ch in input.chars() {
        if ch == '_' {
            upper_next = true;
            continue;
        }
        if upper_next && ch.is_ascii_lowercase() {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
        upper_next = false;
    }
    out
}
