//! 자소 단위 재료 검색 모듈
//!
//! 검색어와 재료명을 모두 풀어쓴 뒤 부분 문자열 검사로 일치를 판단합니다.
//! 데이터베이스나 네트워크는 여기서 다루지 않습니다. (어휘는 호출자가 공급)

mod autocomplete;
mod matcher;

pub use autocomplete::{AutocompleteIndex, DEFAULT_SUGGESTION_LIMIT};
pub use matcher::match_hangul;
