//! Puli - 한글 자소 분리/조합 엔진
//!
//! 완성형 한글 음절을 자소(초성/중성/종성)로 풀어쓰고, 자소 문장을 다시
//! 음절로 모아쓰고, 자소 단위 백스페이스를 지원합니다. 그 위에 재료명
//! 검색을 위한 자소 단위 매칭과 자동완성을 제공합니다.
//!
//! ```
//! use puli::{backspace_one, decompose, match_hangul, recompose};
//!
//! assert_eq!(decompose("값", true), "ㄱㅏㅂㅅ");
//! assert_eq!(recompose("ㅎㅏㄴㄱㅡㄹ"), "한글");
//! assert_eq!(backspace_one("값"), "갑");
//! assert!(match_hangul("감ㅈ", "감자"));
//! ```

pub mod config;
pub mod core;
pub mod search;

pub use self::core::{backspace_one, decode_scalar, decompose, join_jamo, recompose, split_syllable};
pub use self::search::{match_hangul, AutocompleteIndex};
