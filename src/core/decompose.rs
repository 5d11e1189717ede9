//! 문장 전체 풀어쓰기

use super::decode::decode_scalar;
use super::split::split_syllable;

/// 문장을 자소 단위로 풀어쓴다.
///
/// 완성형 음절은 2~4개의 자소로 풀리고, 나머지 글자(ASCII, 호환 자모,
/// 기타 문자)는 그대로 통과한다. `split_final`이 참이면 겹받침도 나눈다.
pub fn decompose(text: &str, split_final: bool) -> String {
    let bytes = text.as_bytes();
    let mut result = String::with_capacity(text.len());
    let mut pos = 0;

    while pos < bytes.len() {
        let (code, width) = decode_scalar(bytes, pos);
        pos += width;
        match split_syllable(code, split_final) {
            Some(jamo) => result.extend(jamo),
            None => {
                if let Some(c) = char::from_u32(code) {
                    result.push(c);
                }
            }
        }
    }
    result
}
