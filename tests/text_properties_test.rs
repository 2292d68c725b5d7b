use rand::rngs::StdRng;
use rand::SeedableRng;
use rustf_text::utils::{date, random, string};
use rustf_text::{CaseMode, Error, LeapYear, RandomTextOptions, TextExt, U};

const WORDS: &[&str] = &[
    "",
    "a",
    "Test",
    "Luminou",
    "Ponder",
    "StringExtensionsTest",
    "żółw",
    "🐢 turtle",
    "  spaced  ",
];

#[test]
fn test_center_is_identity_when_field_is_narrow() {
    for word in WORDS {
        let len = word.chars().count();
        for width in 0..=len {
            assert_eq!(string::center(word, width), *word);
        }
    }
}

#[test]
fn test_center_fills_field_and_keeps_text() {
    for word in WORDS {
        let len = word.chars().count();
        for width in len..len + 5 {
            let centered = string::center_with(word, width, '.');
            assert_eq!(centered.chars().count(), width);
            assert!(centered.contains(word));

            let left = centered.chars().take_while(|c| *c == '.').count();
            let right = centered.chars().rev().take_while(|c| *c == '.').count();
            if !word.is_empty() {
                assert!(left == right || left == right + 1);
            }
        }
    }
}

#[test]
fn test_center_reference_values() {
    assert_eq!("Test".center(8), "  Test  ");
    assert_eq!("Luminou".center(8), " Luminou");
    assert_eq!("Ponder".center(8), " Ponder ");
}

#[test]
fn test_count_reference_values() {
    assert_eq!(string::count("applesapples", "apples"), 2);
    assert_eq!(string::count("I love apple", "apples"), 0);
}

#[test]
fn test_count_whole_range_matches_count() {
    let text = "the cat and the hat and the bat";
    for pattern in ["the", "at", "and", "a", "zebra"] {
        assert_eq!(
            string::count_in_range(text, pattern, 0, None).unwrap(),
            string::count(text, pattern)
        );
    }
}

#[test]
fn test_count_range_errors_are_argument_errors() {
    let err = "abc".count_occurrences_in("a", 2, Some(1)).unwrap_err();
    assert!(err.is_argument_error());
    assert!(matches!(err, Error::IndexOutOfRange { .. }));
}

#[test]
fn test_upper_of_lower_equals_upper() {
    for word in ["hello", "WORLD", "MiXeD", "abcXYZ", "Q"] {
        let lowered = string::convert_case(word, CaseMode::LowerCase);
        assert_eq!(
            string::convert_case(&lowered, CaseMode::UpperCase),
            string::convert_case(word, CaseMode::UpperCase)
        );
    }
}

#[test]
fn test_invert_twice_is_identity() {
    for word in ["Hello, World!", "abc XYZ 123", ""] {
        let twice = word
            .convert_case(CaseMode::InvertCase)
            .convert_case(CaseMode::InvertCase);
        assert_eq!(twice, word);
    }
}

#[test]
fn test_random_case_structure() {
    let mut rng = StdRng::seed_from_u64(2024);
    let input = "Random Case 101: keep punctuation!";

    let output = string::convert_case_with_rng(input, CaseMode::RandomCase, &mut rng);
    assert_eq!(output.chars().count(), input.chars().count());
    assert!(output.eq_ignore_ascii_case(input));
    assert!(!output.is_empty());

    for (before, after) in input.chars().zip(output.chars()) {
        if !before.is_alphabetic() {
            assert_eq!(before, after);
        }
    }
}

#[test]
fn test_palindromes() {
    assert!("racecar".is_palindrome());
    assert!(U::is_palindrome("race car", true, false));
    assert!(!"race car".is_palindrome());
}

#[test]
fn test_numeric_detection() {
    assert!("123.45".is_numeric());
    assert!(!"abc".is_numeric());
}

#[test]
fn test_membership() {
    let methods = vec!["GET".to_string(), "POST".to_string()];
    assert!("GET".is_in(false, &methods));
    assert!("post".is_in(true, &methods));
    assert!(!"post".is_in(false, &methods));
}

#[test]
fn test_remove_diacritics_reference_value() {
    assert_eq!("café".remove_diacritics(), "cafe");
}

#[test]
fn test_split_by_len_reassembles() {
    for word in WORDS {
        for size in 1..6 {
            let chunks: Vec<&str> = word.split_by_len(size).unwrap().collect();
            assert_eq!(chunks.concat(), *word);

            if let Some((last, rest)) = chunks.split_last() {
                assert!(rest.iter().all(|chunk| chunk.chars().count() == size));
                let last_len = last.chars().count();
                assert!(last_len >= 1 && last_len <= size);
            }
        }
    }
}

#[test]
fn test_split_by_len_zero_is_error() {
    let err = "abc".split_by_len(0).unwrap_err();
    assert!(matches!(err, Error::InvalidChunkSize(0)));
}

#[test]
fn test_leap_years() {
    assert!(date::is_leap_year(2000));
    assert!(!date::is_leap_year(1900));
    assert!(2024_i32.is_leap_year());
    assert!(!2023_i32.is_leap_year());
}

#[test]
fn test_random_text_default_alphabet() {
    let allowed = random::alphabet(&RandomTextOptions::default());
    for _ in 0..50 {
        let text = random::generate_random_text(10);
        assert_eq!(text.chars().count(), 10);
        assert!(text.chars().all(|c| allowed.contains(c)));
    }
}

#[test]
fn test_random_text_concurrent_generation() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| random::generate_random_text(32)))
        .collect();

    for handle in handles {
        let text = handle.join().unwrap();
        assert_eq!(text.len(), 32);
    }
}
