//! 라틴 표기 텍스트 토큰화
//!
//! 공백 분리 + 토큰별 구두점 제거 + 소문자 정규화.
//! 결정적이며 부수 효과가 없습니다.

/// 토큰
///
/// 매칭은 소문자 형태로 수행하고, 원본 표기는 퍼지 매칭 로그 등
/// 근거 추적을 위해 유지합니다. 토큰 순서는 구문 패턴 매칭에 사용됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// 소문자 정규화 형태
    pub lower: String,
    /// 원본 표기
    pub surface: String,
}

/// 텍스트를 토큰 열로 분해
///
/// 공백으로 나누고 토큰 양끝의 구두점을 제거합니다.
/// 제거 후 빈 토큰은 버립니다.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .filter_map(|raw| {
            let stripped = raw.trim_matches(|c: char| !c.is_alphanumeric());
            if stripped.is_empty() {
                return None;
            }
            Some(Token {
                lower: stripped.to_lowercase(),
                surface: stripped.to_string(),
            })
        })
        .collect()
}
