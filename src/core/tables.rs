//! 한글 자소 상수 테이블
//!
//! 완성형 음절 블록(가 ~ 힣)의 초성/중성/종성 순서는 유니코드 배열 순서 그대로이며,
//! 한 칸이라도 어긋나면 분리/조합 전체가 조용히 깨지므로 순서를 바꾸면 안 됩니다.

use std::collections::HashMap;
use std::sync::LazyLock;

/// 한글 음절 시작 코드포인트 (가)
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
pub const SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 간 간격 (중성 21 x 종성 28)
pub const CHOSEONG_STRIDE: u32 = 588;
/// 중성 간 간격 (종성 28)
pub const JUNGSEONG_STRIDE: u32 = 28;

/// 초성 19글자
#[rustfmt::skip]
pub const CHOSEONG_CHAR: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ',
    'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 21글자
#[rustfmt::skip]
pub const JUNGSEONG_CHAR: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ',
    'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ',
    'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ',
    'ㅣ',
];

/// 종성 27글자 + 없음 1개 (받침이 없는 경우 빈 문자열)
#[rustfmt::skip]
pub const JONGSEONG_CHAR: [&str; 28] = [
    "",   "ㄱ", "ㄲ", "ㄳ", "ㄴ",
    "ㄵ", "ㄶ", "ㄷ", "ㄹ", "ㄺ",
    "ㄻ", "ㄼ", "ㄽ", "ㄾ", "ㄿ",
    "ㅀ", "ㅁ", "ㅂ", "ㅄ", "ㅅ",
    "ㅆ", "ㅇ", "ㅈ", "ㅊ", "ㅋ",
    "ㅌ", "ㅍ", "ㅎ",
];

/// 종성 테이블 - 겹받침을 두 자소로 나눈 분리형
#[rustfmt::skip]
pub const JONGSEONG_SPLIT_CHAR: [&str; 28] = [
    "",     "ㄱ",   "ㄲ",   "ㄱㅅ", "ㄴ",
    "ㄴㅈ", "ㄴㅎ", "ㄷ",   "ㄹ",   "ㄹㄱ",
    "ㄹㅁ", "ㄹㅂ", "ㄹㅅ", "ㄹㅌ", "ㄹㅍ",
    "ㄹㅎ", "ㅁ",   "ㅂ",   "ㅂㅅ", "ㅅ",
    "ㅆ",   "ㅇ",   "ㅈ",   "ㅊ",   "ㅋ",
    "ㅌ",   "ㅍ",   "ㅎ",
];

/// 초성 자소 -> 인덱스
pub static CHOSEONG_INDEX: LazyLock<HashMap<char, u32>> = LazyLock::new(|| {
    CHOSEONG_CHAR
        .iter()
        .enumerate()
        .map(|(i, &c)| (c, i as u32))
        .collect()
});

/// 중성 자소 -> 인덱스
pub static JUNGSEONG_INDEX: LazyLock<HashMap<char, u32>> = LazyLock::new(|| {
    JUNGSEONG_CHAR
        .iter()
        .enumerate()
        .map(|(i, &c)| (c, i as u32))
        .collect()
});

/// 종성 자소(단일형) -> 인덱스 (빈 문자열 = 받침 없음 = 0)
pub static JONGSEONG_INDEX: LazyLock<HashMap<&'static str, u32>> = LazyLock::new(|| {
    JONGSEONG_CHAR
        .iter()
        .enumerate()
        .map(|(i, &s)| (s, i as u32))
        .collect()
});

/// 종성 자소(분리형) -> 인덱스
pub static JONGSEONG_SPLIT_INDEX: LazyLock<HashMap<&'static str, u32>> = LazyLock::new(|| {
    JONGSEONG_SPLIT_CHAR
        .iter()
        .enumerate()
        .map(|(i, &s)| (s, i as u32))
        .collect()
});

/// 코드포인트가 완성형 한글 음절 범위(가 ~ 힣)인지 확인
pub fn is_syllable(code: u32) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&code)
}
