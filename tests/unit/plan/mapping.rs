use super::*;

#[test]
fn parses_year_and_word() {
    let m: YearWord = "2022:HELLO".parse().unwrap();
    assert_eq!(m, YearWord::new(2022, "HELLO"));
    assert_eq!(m.to_string(), "2022:HELLO");
}

#[test]
fn splits_on_first_colon_only() {
    let m: YearWord = "2021:a:b".parse().unwrap();
    assert_eq!(m.word, "a:b");
}

#[test]
fn empty_word_is_allowed() {
    let m: YearWord = "2021:".parse().unwrap();
    assert_eq!(m.word, "");
}

#[test]
fn malformed_entries_are_invalid_mappings() {
    for bad in ["HELLO", "20x1:HELLO", ":HELLO", "0:HELLO", "10000:x", "-5:x"] {
        let err = bad.parse::<YearWord>().unwrap_err();
        assert!(
            matches!(err, ContribError::InvalidMapping(_)),
            "{bad} gave {err}"
        );
    }
}

#[test]
fn one_bad_entry_rejects_all() {
    let err = parse_mappings(["2021:ok", "oops", "2022:fine"]).unwrap_err();
    assert!(err.to_string().contains("oops"));

    let ok = parse_mappings(["2021:ok", "2022:fine"]).unwrap();
    assert_eq!(ok.len(), 2);
}

#[test]
fn defaults_cover_last_three_full_years() {
    let m = default_mappings(2025).unwrap();
    assert_eq!(
        m,
        vec![
            YearWord::new(2022, "LEBRON"),
            YearWord::new(2023, "elephanto"),
            YearWord::new(2024, "feel"),
        ]
    );
}

#[test]
fn defaults_stay_inside_supported_years() {
    assert_eq!(default_mappings(4).unwrap()[0], YearWord::new(1, "LEBRON"));
    assert_eq!(default_mappings(10000).unwrap()[2], YearWord::new(9999, "feel"));

    for current in [i32::MIN, i32::MIN + 2, 0, 3, 10001, i32::MAX] {
        let err = default_mappings(current).unwrap_err();
        assert!(
            matches!(err, ContribError::InvalidMapping(_)),
            "{current} gave {err}"
        );
    }
}
