// textsan-ascii/src/filter/mod.rs

use alloc::vec::Vec;

/// Filters a byte slice down to the 7-bit charset.
///
/// Three passes, in order: every byte above 0x7F is dropped unconditionally;
/// of the remainder, control bytes below 0x20 are dropped unless listed in
/// `allowed_low`; finally any surviving byte listed in `strip` is dropped,
/// so `strip` can remove a byte `allowed_low` just kept.
pub fn filter_bytes(input: &[u8], allowed_low: Option<&[u8]>, strip: Option<&[u8]>) -> Vec<u8> {
    let allowed_low = allowed_low.unwrap_or(&[]);
    let strip = strip.unwrap_or(&[]);

    let mut filtered = Vec::with_capacity(input.len());
    for &byte in input {
        if byte > 0x7F {
            continue;
        }

        if byte < 0x20 && !allowed_low.contains(&byte) {
            continue;
        }

        if strip.contains(&byte) {
            continue;
        }

        filtered.push(byte);
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn sample() -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.push(0x80);
        bytes.extend_from_slice(b" granite  \0labs ");
        bytes.extend_from_slice(&[0xB4, 0x9B]);
        bytes
    }

    #[test]
    fn test_drops_high_and_low_bytes_by_default() {
        assert_eq!(filter_bytes(&sample(), None, None), b" granite  labs ");
    }

    #[test]
    fn test_allowed_low_keeps_control_bytes() {
        assert_eq!(
            filter_bytes(&sample(), Some(b"\0"), None),
            b" granite  \0labs "
        );
    }

    #[test]
    fn test_strip_runs_after_the_low_byte_gate() {
        assert_eq!(
            filter_bytes(&sample(), Some(b"\0\r\n"), Some(b"a")),
            b" grnite  \0lbs "
        );
        // strip can take back a byte allowed_low just kept
        assert_eq!(
            filter_bytes(&sample(), Some(b"\0"), Some(b"\0")),
            b" granite  labs "
        );
    }

    #[test]
    fn test_strip_printable_bytes() {
        assert_eq!(filter_bytes(&sample(), None, Some(b" ")), b"granitelabs");
        assert_eq!(filter_bytes(&sample(), None, Some(b"ea ")), b"grnitlbs");
    }

    #[test]
    fn test_idempotent_under_fixed_arguments() {
        let once = filter_bytes(&sample(), Some(b"\0"), Some(b"a"));
        let twice = filter_bytes(&once, Some(b"\0"), Some(b"a"));
        assert_eq!(once, twice);
    }
}
