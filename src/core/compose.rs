//! 자소 목록 -> 완성형 음절 조합

use super::tables::{
    CHOSEONG_INDEX, CHOSEONG_STRIDE, JONGSEONG_INDEX, JONGSEONG_SPLIT_INDEX, JUNGSEONG_INDEX,
    JUNGSEONG_STRIDE, SYLLABLE_BASE,
};

/// 겹모음 조합: (첫 중성, 다음 자소) -> 합쳐진 중성
fn merge_jungseong(first: char, second: char) -> Option<char> {
    match (first, second) {
        ('ㅗ', 'ㅏ') => Some('ㅘ'),
        ('ㅗ', 'ㅐ') => Some('ㅙ'),
        ('ㅗ', 'ㅣ') => Some('ㅚ'),
        ('ㅜ', 'ㅓ') => Some('ㅝ'),
        ('ㅜ', 'ㅔ') => Some('ㅞ'),
        ('ㅡ', 'ㅣ') => Some('ㅢ'),
        _ => None,
    }
}

/// 자소 목록을 음절 한 글자로 조합한다.
///
/// - 자소가 2개 미만이거나 초성/중성을 찾을 수 없으면 목록을 그대로 이어붙여 돌려준다.
/// - 중성 다음 자소와 겹모음을 이루면 먼저 합친다. (ㅜ + ㅓ -> ㅝ)
/// - 종성은 남은 자소 전체를 합쳐 단일형 -> 분리형 순서로 조회하고,
///   못 찾으면 바로 다음 자소 하나만 종성으로 삼고 나머지는 리터럴로 덧붙인다.
pub fn join_jamo(jamo: &[char]) -> String {
    if jamo.len() < 2 {
        return jamo.iter().collect();
    }

    let Some(&cho) = CHOSEONG_INDEX.get(&jamo[0]) else {
        return jamo.iter().collect();
    };

    // 겹모음 예외 처리: 두 자소를 하나의 중성으로 합치고 종성 시작을 한 칸 미룬다
    let mut jung_char = jamo[1];
    let mut jong_start = 2;
    if let Some(&next) = jamo.get(2) {
        if let Some(merged) = merge_jungseong(jamo[1], next) {
            jung_char = merged;
            jong_start = 3;
        }
    }

    let Some(&jung) = JUNGSEONG_INDEX.get(&jung_char) else {
        return jamo.iter().collect();
    };

    // 종성은 남은 자소를 전부 합쳐서 조사한다 (겹받침이 나눠져 있을 수 있다)
    let candidate: String = jamo[jong_start..].iter().collect();
    let (jong, trailing) = if let Some(&j) = JONGSEONG_INDEX.get(candidate.as_str()) {
        (j, String::new())
    } else if let Some(&j) = JONGSEONG_SPLIT_INDEX.get(candidate.as_str()) {
        (j, String::new())
    } else {
        // 종성 전체가 맞지 않으면 바로 다음 자소 하나만 종성으로 삼는다
        let first = jamo[jong_start].to_string();
        let rest: String = jamo[jong_start + 1..].iter().collect();
        match JONGSEONG_INDEX.get(first.as_str()) {
            Some(&j) => (j, rest),
            None => {
                // 다음 자소도 종성이 될 수 없으면 종성 없이 조합하고 전부 리터럴로 넘긴다
                log::debug!("종성 불일치, 리터럴로 통과: {:?}", candidate);
                (0, candidate)
            }
        }
    };

    let code = SYLLABLE_BASE + cho * CHOSEONG_STRIDE + jung * JUNGSEONG_STRIDE + jong;
    match char::from_u32(code) {
        Some(c) => {
            let mut result = String::with_capacity(3 + trailing.len());
            result.push(c);
            result.push_str(&trailing);
            result
        }
        // 테이블 인덱스 범위상 발생하지 않음
        None => jamo.iter().collect(),
    }
}
