//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Puli CLI 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PuliConfig {
    /// 재료명 어휘 파일 경로 (JSON 문자열 배열)
    #[serde(default = "default_ingredients_path")]
    pub ingredients_path: PathBuf,
    /// 자동완성 최대 후보 수
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

fn default_ingredients_path() -> PathBuf {
    PathBuf::from("ingredients.json")
}

fn default_suggestion_limit() -> usize {
    crate::search::DEFAULT_SUGGESTION_LIMIT
}

impl Default for PuliConfig {
    fn default() -> Self {
        Self {
            ingredients_path: default_ingredients_path(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

/// 설정 파일 경로: ~/.config/puli/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("puli").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> PuliConfig {
    match fs::read_to_string(config_path()) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|_| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용");
            PuliConfig::default()
        }),
        Err(_) => PuliConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &PuliConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
