//! 판별기 설정 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Bhasha 판별기 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DetectorConfig {
    /// 신호 없는 입력을 unknown으로 판정하는 최소 토큰 수 기준
    #[serde(default = "default_min_tokens")]
    pub min_tokens: usize,
    /// mixed 판정에 필요한 언어별 최소 히트 수
    #[serde(default = "default_mixed_min_hits")]
    pub mixed_min_hits: u32,
    /// 퍼지 매칭 사용 여부
    #[serde(default = "default_use_fuzzy")]
    pub use_fuzzy: bool,
    /// 구문 패턴 매칭 사용 여부
    #[serde(default = "default_use_patterns")]
    pub use_patterns: bool,
}

fn default_min_tokens() -> usize {
    3
}

fn default_mixed_min_hits() -> u32 {
    2
}

fn default_use_fuzzy() -> bool {
    true
}

fn default_use_patterns() -> bool {
    true
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_tokens: default_min_tokens(),
            mixed_min_hits: default_mixed_min_hits(),
            use_fuzzy: default_use_fuzzy(),
            use_patterns: default_use_patterns(),
        }
    }
}

impl DetectorConfig {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 퍼지 매칭 사용 여부 설정
    pub fn with_fuzzy(mut self, enabled: bool) -> Self {
        self.use_fuzzy = enabled;
        self
    }

    /// 구문 패턴 매칭 사용 여부 설정
    pub fn with_patterns(mut self, enabled: bool) -> Self {
        self.use_patterns = enabled;
        self
    }

    /// 최소 토큰 수 기준 설정
    pub fn with_min_tokens(mut self, min_tokens: usize) -> Self {
        self.min_tokens = min_tokens;
        self
    }
}

/// 설정 파일 경로: ~/.config/bhasha/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백 (쓰기 가능, /tmp보다 안전)
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("bhasha").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> DetectorConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|_| DetectorConfig::default()),
        Err(_) => DetectorConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &DetectorConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DetectorConfig::default();
        assert_eq!(config.min_tokens, 3);
        assert_eq!(config.mixed_min_hits, 2);
        assert!(config.use_fuzzy);
        assert!(config.use_patterns);
    }

    #[test]
    fn test_builder_pattern() {
        let config = DetectorConfig::new()
            .with_fuzzy(false)
            .with_patterns(false)
            .with_min_tokens(5);

        assert!(!config.use_fuzzy);
        assert!(!config.use_patterns);
        assert_eq!(config.min_tokens, 5);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = DetectorConfig::new().with_fuzzy(false);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: DetectorConfig = serde_json::from_str(&json).unwrap();
        assert!(!parsed.use_fuzzy);
        assert!(parsed.use_patterns);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 이전 설정 파일에 필드가 없는 경우 기본값 사용
        let json = r#"{"use_fuzzy": false}"#;
        let config: DetectorConfig = serde_json::from_str(json).unwrap();
        assert!(!config.use_fuzzy);
        assert_eq!(config.min_tokens, 3);
        assert!(config.use_patterns);
    }
}
