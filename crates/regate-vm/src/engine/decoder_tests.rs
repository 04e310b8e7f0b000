use super::Utf8Decoder;

fn decode(bytes: &[u8]) -> (Vec<u32>, bool) {
    let mut decoder = Utf8Decoder::new();
    let cps = bytes.iter().filter_map(|&b| decoder.push(b)).collect();
    (cps, decoder.finish())
}

#[test]
fn well_formed_input() {
    let text = "a\u{e9}\u{20ac}\u{1f600}";
    let expected: Vec<u32> = text.chars().map(|c| c as u32).collect();
    assert_eq!(decode(text.as_bytes()), (expected, false));
}

#[test]
fn stray_continuation_is_ignored() {
    assert_eq!(decode(&[0x80, b'a']), (vec![0x61], true));
}

#[test]
fn interrupted_sequence_is_dropped() {
    assert_eq!(decode(&[0xE2, 0x82, b'a']), (vec![0x61], true));
    assert_eq!(decode(&[0xC3, 0xE2, 0x82, 0xAC]), (vec![0x20AC], true));
}

#[test]
fn truncated_sequence_at_end() {
    assert_eq!(decode(&[b'a', 0xE2]), (vec![0x61], true));
    assert_eq!(decode(&[0xF0, 0x9F, 0x98]), (vec![], true));
}

#[test]
fn invalid_lead_bytes_are_flagged_and_ignored() {
    for byte in 0xF8..=0xFF {
        assert_eq!(decode(&[byte, b'z']), (vec![0x7A], true), "{byte:#x}");
    }
}

#[test]
fn reserved_leads_decode_with_error() {
    assert_eq!(decode(&[0xC0, 0x80]), (vec![0], true));
    assert_eq!(decode(&[0xC1, 0xBF]), (vec![0x7F], true));
    assert_eq!(decode(&[0xF7, 0xBF, 0xBF, 0xBF]), (vec![0x1FFFFF], true));
}

#[test]
fn permissive_forms_decode_cleanly() {
    // Overlong three-byte slash.
    assert_eq!(decode(&[0xE0, 0x80, 0xAF]), (vec![0x2F], false));
    // Surrogate.
    assert_eq!(decode(&[0xED, 0xA0, 0x80]), (vec![0xD800], false));
    // Above the Unicode range.
    assert_eq!(decode(&[0xF4, 0x90, 0x80, 0x80]), (vec![0x110000], false));
}

#[test]
fn finish_resets_state() {
    let mut decoder = Utf8Decoder::new();
    decoder.push(0x80);
    decoder.push(0xE2);
    assert!(decoder.has_error());
    assert!(decoder.is_pending());
    assert!(decoder.finish());

    assert_eq!(decoder.push(b'a'), Some(0x61));
    assert!(!decoder.finish());
}
