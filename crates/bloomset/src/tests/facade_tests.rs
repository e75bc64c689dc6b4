use crate::Filter;

#[test]
fn pristine_filter_has_no_storage_and_tests_false() {
    let f = Filter::new(100, 0.01);
    assert_eq!(f.memsize(), 0);
    assert!(!f.upgraded());
    assert!(f.is_empty());
    assert!(!f.test(42));
}

#[test]
fn constructor_reports_capacity_and_rate() {
    let f = Filter::new(500, 0.02);
    assert_eq!(f.capacity(), 500);
    assert!((f.false_positive_rate() - 0.02).abs() < 1e-12);
}

#[test]
fn clear_in_hash_mode_empties_without_changing_mode() {
    let mut f = Filter::new(1000, 0.01);
    for i in 0..50u64 {
        f.add(i).unwrap();
    }
    assert!(!f.upgraded());
    assert!(!f.is_empty());

    f.clear();
    assert!(!f.upgraded());
    assert!(f.is_empty());
    assert_eq!(f.len(), 0);
    for i in 0..50u64 {
        assert!(!f.test(i));
    }
}

#[test]
fn clear_in_bloom_mode_empties_without_de_upgrading() {
    let mut f = Filter::new(16, 0.5);
    f.add(1).unwrap();
    assert!(f.upgraded());

    f.clear();
    assert!(f.upgraded(), "clear must not un-upgrade");
    assert!(!f.test(1));
}

#[test]
fn re_add_after_clear_behaves_like_a_fresh_sequence() {
    let mut f = Filter::new(1000, 0.05);
    for i in 0..1000u64 {
        f.add(i).unwrap();
    }
    f.clear();
    assert!(!f.test(500));

    for i in 0..1000u64 {
        f.add(i).unwrap();
    }
    assert!(f.test(500));
}

#[test]
fn duplicate_add_does_not_grow_count() {
    let mut f = Filter::new(1000, 0.01);
    f.add(777).unwrap();
    assert!(!f.upgraded(), "test requires hash mode");
    let len_after_first = f.len();
    f.add(777).unwrap();
    assert_eq!(f.len(), len_after_first);
}

#[test]
fn debug_output_mentions_key_fields() {
    let mut f = Filter::new(100, 0.01);
    f.add(1).unwrap();
    let text = format!("{:?}", f);
    assert!(text.contains("Filter"));
    assert!(text.contains("upgraded"));
    assert!(text.contains("memsize"));
}

#[test]
fn memsize_never_decreases_across_adds_until_upgrade() {
    let mut f = Filter::new(1_000_000, 0.01);
    let mut last = f.memsize();
    for i in 0..200u64 {
        f.add(i).unwrap();
        let now = f.memsize();
        assert!(now >= last, "memsize shrank from {} to {}", last, now);
        last = now;
    }
}
