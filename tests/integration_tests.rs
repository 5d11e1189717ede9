//! 통합 테스트 - 자소 분리/조합 핵심 로직

use puli::search::AutocompleteIndex;
use puli::{backspace_one, decompose, join_jamo, match_hangul, recompose, split_syllable};

/// 완성형 음절 전체(가 ~ 힣, 11172자)에 대해 분리 -> 조합 왕복이 항등인지 확인
#[test]
fn test_roundtrip_all_syllables_no_split() {
    for code in 0xAC00u32..=0xD7A3 {
        let syllable = char::from_u32(code).unwrap();
        let jamo = split_syllable(code, false).unwrap();
        assert_eq!(
            join_jamo(&jamo),
            syllable.to_string(),
            "왕복 실패: U+{:04X}",
            code
        );
    }
}

/// 겹받침 분리형으로도 문장 단위 왕복이 항등이어야 한다
#[test]
fn test_roundtrip_all_syllables_split_final() {
    for code in 0xAC00u32..=0xD7A3 {
        let s = char::from_u32(code).unwrap().to_string();
        assert_eq!(recompose(&decompose(&s, true)), s, "왕복 실패: {}", s);
    }
}

#[test]
fn test_compound_final_roundtrip() {
    assert_eq!(decompose("값", true), "ㄱㅏㅂㅅ");
    assert_eq!(recompose(&decompose("값", true)), "값");
}

#[test]
fn test_diphthong_roundtrip() {
    assert_eq!(recompose(&decompose("워", true)), "워");
    // 타이핑 순서의 ㅜ + ㅓ도 ㅝ로 합쳐진다
    assert_eq!(recompose("ㅇㅜㅓ"), "워");
}

#[test]
fn test_ascii_passthrough() {
    assert_eq!(decompose("apple123", true), "apple123");
    assert_eq!(recompose("apple123"), "apple123");
}

#[test]
fn test_multi_syllable_roundtrip() {
    assert_eq!(recompose(&decompose("한글", true)), "한글");
    assert_eq!(recompose(&decompose("돼지고기 100g", true)), "돼지고기 100g");
}

#[test]
fn test_backspace_simple_syllable() {
    // 가 -> ㄱ (중성 삭제, 초성은 낱자모로 남는다)
    assert_eq!(backspace_one("가"), "ㄱ");
}

#[test]
fn test_backspace_compound_final() {
    // 값 -> 갑 (겹받침 뒷자소만 삭제)
    assert_eq!(backspace_one("값"), "갑");
}

#[test]
fn test_backspace_repeated() {
    // 한 획씩: 한글 -> 한그 -> 한ㄱ -> 한 -> 하 -> ㅎ -> ""
    let mut text = "한글".to_string();
    let expected = ["한그", "한ㄱ", "한", "하", "ㅎ", ""];
    for step in expected {
        text = backspace_one(&text);
        assert_eq!(text, step);
    }
}

#[test]
fn test_jamo_level_matching() {
    let query = decompose("ㄱ", true);
    let target = decompose("가지", true);
    assert!(target.contains(&query));
    assert!(match_hangul("ㄱ", "가지"));
    assert!(match_hangul("감ㅈ", "감자"));
    assert!(!match_hangul("양파", "감자"));
}

#[test]
fn test_autocomplete_end_to_end() {
    let index = AutocompleteIndex::new(["가지", "감자", "고구마", "닭고기", "양파"]);
    assert_eq!(index.suggest("ㄱ", 10), vec!["가지", "감자", "고구마", "닭고기"]);
    assert_eq!(index.suggest("닭", 10), vec!["닭고기"]);
    assert_eq!(index.suggest("달ㄱ", 10), vec!["닭고기"]);
    assert!(index.suggest("", 10).is_empty());
}
