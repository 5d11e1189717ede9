//! 완성형 음절 -> 자소 분리

use super::tables::{
    is_syllable, CHOSEONG_CHAR, CHOSEONG_STRIDE, JONGSEONG_CHAR, JONGSEONG_SPLIT_CHAR,
    JUNGSEONG_CHAR, JUNGSEONG_STRIDE, SYLLABLE_BASE,
};

/// 음절 코드포인트 하나를 자소 목록으로 분리한다.
/// 음절 범위 밖이면 `None` (호출자가 원래 글자를 그대로 통과시킨다).
///
/// `split_final`이 참이면 겹받침을 두 자소로 나눈다. (ㄳ -> ㄱ, ㅅ)
pub fn split_syllable(code: u32, split_final: bool) -> Option<Vec<char>> {
    if !is_syllable(code) {
        return None;
    }

    let index = code - SYLLABLE_BASE;
    let cho = index / CHOSEONG_STRIDE;
    let jung = (index % CHOSEONG_STRIDE) / JUNGSEONG_STRIDE;
    let jong = index % JUNGSEONG_STRIDE;

    let mut jamo = vec![CHOSEONG_CHAR[cho as usize], JUNGSEONG_CHAR[jung as usize]];
    let jong_str = if split_final {
        JONGSEONG_SPLIT_CHAR[jong as usize]
    } else {
        JONGSEONG_CHAR[jong as usize]
    };
    jamo.extend(jong_str.chars());
    Some(jamo)
}
