//! 자소 문장 모아쓰기

use super::compose::join_jamo;
use super::decompose::decompose;
use super::tables::{CHOSEONG_INDEX, JUNGSEONG_INDEX};

/// 자소와 완성형 음절이 섞인 문장을 음절 단위로 다시 조합한다.
///
/// 먼저 전체를 분리형으로 풀어쓴 뒤, 음절 경계(컷)를 표시하고
/// 경계 사이의 자소 묶음을 하나씩 조합한다. 경계 규칙:
/// - ASCII 글자는 항상 제 앞에서 끊는다.
/// - 모음 바로 앞이 자음이면 그 자음 앞에서 끊는다. (자음+모음 = 새 음절 시작)
pub fn recompose(text: &str) -> String {
    let flat = decompose(text, true);
    let chars: Vec<char> = flat.chars().collect();

    let mut cut = vec![false; chars.len()];
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii() {
            cut[i] = true;
        } else if JUNGSEONG_INDEX.contains_key(&c)
            && i > 0
            && CHOSEONG_INDEX.contains_key(&chars[i - 1])
        {
            cut[i - 1] = true;
        }
    }

    let mut result = String::with_capacity(flat.len());
    let mut group: Vec<char> = Vec::new();
    for (i, &c) in chars.iter().enumerate() {
        if cut[i] {
            result.push_str(&join_jamo(&group));
            group.clear();
        }
        group.push(c);
    }
    result.push_str(&join_jamo(&group));
    result
}
