//! Number and list formatting for the facts panel.

/// Separator inserted between digit groups.
pub const GROUP_SEPARATOR: &str = ", ";
/// Separator used when joining list fields.
pub const LIST_SEPARATOR: &str = ", ";

/// Groups digits in threes from the right: `1234567` → `"1, 234, 567"`.
pub fn group_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Like [`group_thousands`] for areas, which may be fractional.
///
/// Whole values print without a decimal point (`357114.0` → `"357, 114"`);
/// fractional digits are kept as-is and never grouped.
pub fn group_thousands_f64(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let text = value.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    match unsigned.split_once('.') {
        Some((int_part, frac)) => format!("{sign}{}.{frac}", group_digits(int_part)),
        None => format!("{sign}{}", group_digits(unsigned)),
    }
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + (len / 3) * GROUP_SEPARATOR.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Joins an optional list, treating a missing list as empty.
pub fn join_list(items: Option<&[String]>) -> String {
    items.map(|items| items.join(LIST_SEPARATOR)).unwrap_or_default()
}
