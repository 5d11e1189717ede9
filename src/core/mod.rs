//! 한글 자소 분리/조합 엔진
//!
//! 완성형 음절(가 ~ 힣)을 자소로 풀어쓰고(`decompose`), 자소 문장을
//! 다시 음절로 모아쓰고(`recompose`), 자소 단위 백스페이스(`backspace_one`)를
//! 제공합니다. 모든 연산은 순수 함수이며 어떤 입력에도 에러를 내지 않습니다.

mod backspace;
mod compose;
mod decode;
mod decompose;
mod recompose;
mod split;
pub mod tables;

pub use backspace::backspace_one;
pub use compose::join_jamo;
pub use decode::decode_scalar;
pub use decompose::decompose;
pub use recompose::recompose;
pub use split::split_syllable;
