//! 재료명 자동완성

use crate::core::decompose;

/// 자동완성 기본 후보 수
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// 어휘 전체를 미리 풀어쓰기해 둔 자동완성 인덱스
///
/// 질의마다 어휘를 다시 풀어쓰는 대신 생성 시 한 번만 풀어쓴다.
/// 등록 순서가 곧 후보 순서다.
pub struct AutocompleteIndex {
    /// (원본 재료명, 풀어쓴 형태)
    entries: Vec<(String, String)>,
}

impl AutocompleteIndex {
    /// 재료명 목록으로 인덱스를 만든다. (목록 순서 유지)
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = vocabulary
            .into_iter()
            .map(|name| {
                let name = name.into();
                let puli = decompose(&name, true);
                (name, puli)
            })
            .collect();
        Self { entries }
    }

    /// 등록된 재료명 수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 검색어 자소가 포함되는 재료명을 등록 순서대로 최대 `limit`개 반환한다.
    /// 빈 검색어(공백뿐인 검색어 포함)는 빈 목록을 돌려준다.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let query_puli = decompose(query, true);
        self.entries
            .iter()
            .filter(|(_, puli)| puli.contains(&query_puli))
            .take(limit)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
