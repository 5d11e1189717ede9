//! 자소 단위 백스페이스

use super::decompose::decompose;
use super::recompose::recompose;

/// 문장 끝에서 자소 한 개를 지운다. (음절 통째가 아니라 한 획)
///
/// 전체를 분리형으로 풀어쓴 뒤 마지막 자소를 버리고 다시 모아쓴다.
/// 빈 문장이나 자소 한 개짜리 문장은 빈 문장이 된다.
pub fn backspace_one(text: &str) -> String {
    let flat = decompose(text, true);
    let mut chars: Vec<char> = flat.chars().collect();
    if chars.pop().is_none() {
        return String::new();
    }
    let rest: String = chars.into_iter().collect();
    recompose(&rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_syllable() {
        // 가 -> ㄱ (중성 삭제, 초성만 남아 낱자모로)
        assert_eq!(backspace_one("가"), "ㄱ");
    }

    #[test]
    fn test_final_removed() {
        // 간 -> 가 (받침 삭제)
        assert_eq!(backspace_one("간"), "가");
    }

    #[test]
    fn test_compound_final() {
        // 값 -> 갑 (겹받침의 뒷자소만 삭제)
        assert_eq!(backspace_one("값"), "갑");
    }

    #[test]
    fn test_last_syllable_only() {
        // 마지막 음절만 깎인다
        assert_eq!(backspace_one("한글"), "한그");
        assert_eq!(backspace_one("감자"), "감ㅈ");
    }

    #[test]
    fn test_diphthong_medial_whole() {
        // 겹모음 중성은 분리 대상이 아니라 통째로 지워진다
        assert_eq!(backspace_one("워"), "ㅇ");
    }

    #[test]
    fn test_ascii_tail() {
        assert_eq!(backspace_one("apple"), "appl");
        assert_eq!(backspace_one("가a"), "가");
    }

    #[test]
    fn test_short_inputs() {
        assert_eq!(backspace_one(""), "");
        assert_eq!(backspace_one("ㄱ"), "");
        assert_eq!(backspace_one("a"), "");
    }
}
