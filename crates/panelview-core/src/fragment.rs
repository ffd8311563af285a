//! Shareable location fragment codec: `<episode id>:<1-based panel>`.

/// Decoded navigation request. `panel` is 1-based and at least 1.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FragmentTarget {
    pub episode_id: String,
    pub panel: usize,
}

/// Produces `"<id>:<panel>"`. No validation; callers pass a resolved position.
pub fn encode(episode_id: &str, panel: usize) -> String {
    format!("{episode_id}:{panel}")
}

/// Parses a fragment with or without its leading `#`.
///
/// Returns `None` for empty input. The panel segment defaults to 1 when
/// missing, empty, non-numeric or below 1.
pub fn decode(raw: &str) -> Option<FragmentTarget> {
    let raw = raw.strip_prefix('#').unwrap_or(raw);
    if raw.is_empty() {
        return None;
    }

    let (episode_id, panel_raw) = match raw.split_once(':') {
        Some((id, panel)) => (id, Some(panel)),
        None => (raw, None),
    };

    let panel = panel_raw
        .and_then(leading_integer)
        .filter(|value| *value != 0)
        .unwrap_or(1)
        .max(1);

    Some(FragmentTarget {
        episode_id: episode_id.to_owned(),
        panel: usize::try_from(panel).unwrap_or(usize::MAX),
    })
}

/// Same as [`decode`] for hosts that may have no fragment at all.
pub fn decode_hash(hash: Option<&str>) -> Option<FragmentTarget> {
    hash.and_then(decode)
}

// Leading-digits integer parse: optional whitespace and sign, then digits.
// Trailing garbage is ignored, overflow saturates and negatives collapse to 0.
fn leading_integer(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: u64 = 0;
    let mut seen = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen = true;
        value = value
            .saturating_mul(10)
            .saturating_add(u64::from(byte - b'0'));
    }

    if !seen {
        return None;
    }
    Some(if negative { 0 } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(id: &str, panel: usize) -> Option<FragmentTarget> {
        Some(FragmentTarget {
            episode_id: id.to_owned(),
            panel,
        })
    }

    #[test]
    fn encode_uses_colon_separator() {
        assert_eq!(encode("ep1", 3), "ep1:3");
    }

    #[test]
    fn decode_round_trips_encoded_fragment() {
        for (id, panel) in [("ep1", 1), ("chapter-12", 40), ("x", 1_000_000)] {
            assert_eq!(decode(&encode(id, panel)), target(id, panel));
        }
    }

    #[test]
    fn empty_input_is_no_navigation() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("#"), None);
        assert_eq!(decode_hash(None), None);
    }

    #[test]
    fn panel_defaults_to_one() {
        assert_eq!(decode("ep1"), target("ep1", 1));
        assert_eq!(decode("ep1:"), target("ep1", 1));
        assert_eq!(decode("ep1:abc"), target("ep1", 1));
        assert_eq!(decode("ep1:0"), target("ep1", 1));
        assert_eq!(decode("ep1:-4"), target("ep1", 1));
    }

    #[test]
    fn leading_digits_are_honoured() {
        assert_eq!(decode("#ep2:3abc"), target("ep2", 3));
        assert_eq!(decode("ep2:7:9"), target("ep2", 7));
        assert_eq!(decode("ep2: 5"), target("ep2", 5));
    }
}
