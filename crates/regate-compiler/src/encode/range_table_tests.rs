use regate_core::{CharSet, CodepointRange};
use regate_signals::{Condition, SignalId};

use super::RangeTable;

fn signal(id: u32, negated: bool) -> Condition {
    Condition::Signal {
        id: SignalId::new(id),
        negated,
    }
}

#[test]
fn constants_need_no_signal() {
    let mut table = RangeTable::new();
    assert_eq!(table.intern(&CharSet::empty()), Condition::Never);
    assert_eq!(table.intern(&CharSet::full()), Condition::Always);
    assert!(table.is_empty());
}

#[test]
fn identical_charsets_share_a_signal() {
    let mut table = RangeTable::new();
    let a = table.intern(&CharSet::from_chars("abc"));
    let b = table.intern(&CharSet::new([(0x61, 0x62), (0x62, 0x64)]).unwrap());
    assert_eq!(a, signal(0, false));
    assert_eq!(a, b);
    assert_eq!(table.len(), 1);
}

#[test]
fn complement_shares_the_signal_negated() {
    let mut table = RangeTable::new();
    let a = CharSet::from_chars("a");
    assert_eq!(table.intern(&a.complement()), signal(0, true));
    assert_eq!(table.intern(&a), signal(0, false));
    assert_eq!(table.len(), 1);
    assert_eq!(table.signals()[0].charset(), &a);
}

#[test]
fn ids_follow_first_use() {
    let mut table = RangeTable::new();
    table.intern(&CharSet::from_chars("x"));
    table.intern(&CharSet::from_chars("y"));
    table.intern(&CharSet::from_chars("x"));
    let charsets: Vec<String> = table
        .signals()
        .iter()
        .map(|s| s.charset().to_string())
        .collect();
    assert_eq!(charsets, vec!["x", "y"]);
}

#[test]
fn fewer_subranges_wins() {
    // The first 65536 code points span 1024 blocks, the rest 31744.
    let bmp = CharSet::from(CodepointRange::new(0, 0x10000).unwrap());
    assert_eq!(RangeTable::choose(&bmp), Some((bmp.clone(), false)));
    assert_eq!(RangeTable::choose(&bmp.complement()), Some((bmp, true)));
}

#[test]
fn ties_prefer_smaller_range_list() {
    let low = CharSet::from(CodepointRange::new(0, 0x100000).unwrap());
    let high = low.complement();
    assert_eq!(RangeTable::choose(&low), Some((low.clone(), false)));
    assert_eq!(RangeTable::choose(&high), Some((low, true)));
}

#[test]
fn subranges_are_attached_to_signals() {
    let mut table = RangeTable::new();
    table.intern(&CharSet::from_chars("az"));
    let signals = table.signals();
    let names: Vec<String> = signals[0].subranges().iter().map(|s| s.to_string()).collect();
    assert_eq!(names, vec!["b00001f41t41", "b00001f72t72"]);
}
