//! 자소 단위 검색어 매칭

use crate::core::decompose;

/// 검색어의 자소가 대상 문자열의 자소에 포함되는지 확인한다.
///
/// 양쪽을 분리형으로 풀어쓴 뒤 부분 문자열 검사를 하므로
/// "ㄱ"으로 "가지"를, "감ㅈ"으로 "감자"를 찾을 수 있다.
pub fn match_hangul(query: &str, target: &str) -> bool {
    let query_puli = decompose(query, true);
    let target_puli = decompose(target, true);
    target_puli.contains(&query_puli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_fragment() {
        assert!(match_hangul("ㄱ", "가지"));
        assert!(!match_hangul("ㄴ", "가지"));
        // 초성만 이어 쓴 검색(ㄱㅈ)은 연속 자소가 아니므로 일치하지 않는다
        assert!(!match_hangul("ㄱㅈ", "가지"));
    }

    #[test]
    fn test_partial_syllable() {
        // 감자의 "자"를 치는 중: 감ㅈ
        assert!(match_hangul("감ㅈ", "감자"));
        assert!(match_hangul("양ㅍ", "양파"));
    }

    #[test]
    fn test_full_word() {
        assert!(match_hangul("감자", "감자"));
        assert!(match_hangul("감자", "감자전"));
        assert!(!match_hangul("감자전", "감자"));
    }

    #[test]
    fn test_middle_match() {
        // 부분 문자열이므로 중간 일치도 찾는다
        assert!(match_hangul("구마", "고구마"));
    }

    #[test]
    fn test_compound_final_match() {
        // 닭 = ㄷㅏㄹㄱ: "달ㄱ"을 치는 중에도 일치
        assert!(match_hangul("달ㄱ", "닭고기"));
    }

    #[test]
    fn test_ascii_and_empty() {
        assert!(match_hangul("100", "감자 100g"));
        assert!(!match_hangul("200", "감자 100g"));
        // 빈 검색어는 무엇에나 포함된다 (필터링은 호출자 몫)
        assert!(match_hangul("", "감자"));
    }
}
