//! 유니코드 범위 기반 스크립트 스캐너
//!
//! 입력 문자열의 문자 구성을 집계하여 표기 스크립트를 판별합니다.
//! 모든 입력이 정확히 하나의 판정으로 귀결되며 실패 경로가 없습니다.

use serde::{Deserialize, Serialize};

/// 데바나가리 블록 시작 코드포인트
const DEVANAGARI_START: u32 = 0x0900;
/// 데바나가리 블록 끝 코드포인트
const DEVANAGARI_END: u32 = 0x097F;

/// 스크립트 판정
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// 라틴 문자 위주
    Latin,
    /// 데바나가리 문자 위주
    Devanagari,
    /// 라틴 + 데바나가리 혼용
    Mixed,
    /// 빈 입력, 숫자 전용, 기타 스크립트
    Other,
}

/// 스크립트별 유효 문자 카운트
///
/// 공백/구두점/숫자는 판정에 관여하지 않으므로 집계에서 제외됩니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptCounts {
    /// ASCII 라틴 문자 수
    pub latin: usize,
    /// 데바나가리 블록 문자 수 (모음 기호 포함, 숫자 제외)
    pub devanagari: usize,
    /// 그 외 스크립트의 문자 수
    pub other: usize,
    /// 유효 문자 총수
    pub total: usize,
}

/// 문자가 ASCII 라틴 문자인지 확인
pub fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// 문자가 데바나가리 블록(U+0900 ~ U+097F)에 속하는지 확인
pub fn is_devanagari_char(c: char) -> bool {
    let cp = c as u32;
    (DEVANAGARI_START..=DEVANAGARI_END).contains(&cp)
}

/// 문자가 데바나가리 글자(문자/모음 기호)인지 확인
///
/// 블록 내 단다(।, ॥)와 숫자(०-९)는 구두점/숫자이므로 제외
pub fn is_devanagari_letter(c: char) -> bool {
    is_devanagari_char(c) && !matches!(c as u32, 0x0964..=0x096F)
}

/// 문자 구성 집계
///
/// 데바나가리는 블록 소속 기준으로 계수하되 블록 내 단다/숫자는 제외.
/// 라틴은 ASCII 알파벳만 계수 (이 도메인의 입력은 ASCII 표기).
pub fn count_scripts(text: &str) -> ScriptCounts {
    let mut counts = ScriptCounts::default();

    for c in text.chars() {
        if c.is_whitespace() {
            continue;
        }

        if is_devanagari_letter(c) {
            counts.devanagari += 1;
            counts.total += 1;
        } else if is_latin_letter(c) {
            counts.latin += 1;
            counts.total += 1;
        } else if c.is_alphabetic() {
            // 한글/한자 등 지원 외 스크립트
            counts.other += 1;
            counts.total += 1;
        }
        // 구두점/숫자/기호는 제외
    }

    counts
}

/// 카운트로부터 스크립트 판정
///
/// - 데바나가리 > 2 그리고 라틴 > 2 → mixed
/// - 데바나가리 > 2 → devanagari
/// - 라틴 > 0 → latin
/// - 그 외 → other
///
/// 데바나가리 1~2자는 노이즈로 간주하여 단독으로는 판정을 바꾸지 않습니다.
pub fn classify_script(counts: &ScriptCounts) -> Script {
    if counts.devanagari > 2 && counts.latin > 2 {
        Script::Mixed
    } else if counts.devanagari > 2 {
        Script::Devanagari
    } else if counts.latin > 0 {
        Script::Latin
    } else {
        Script::Other
    }
}

/// 집계 + 판정을 한 번에 수행
pub fn scan_script(text: &str) -> Script {
    classify_script(&count_scripts(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_devanagari_char() {
        assert!(is_devanagari_char('म'));
        assert!(is_devanagari_char('ु')); // 모음 기호
        assert!(is_devanagari_char('्')); // 비라마

        assert!(!is_devanagari_char('a'));
        assert!(!is_devanagari_char('한'));
        assert!(!is_devanagari_char('1'));
    }

    #[test]
    fn test_count_scripts_latin() {
        let counts = count_scripts("hello world");
        assert_eq!(counts.latin, 10);
        assert_eq!(counts.devanagari, 0);
        assert_eq!(counts.total, 10);
    }

    #[test]
    fn test_count_scripts_ignores_punct_and_digits() {
        let counts = count_scripts("at 5 pm!!! (today)");
        assert_eq!(counts.latin, 9); // at + pm + today
        assert_eq!(counts.total, 9);

        // 데바나가리 숫자와 단다도 제외
        let counts = count_scripts("१२३ ।");
        assert_eq!(counts.devanagari, 0);
        assert_eq!(counts.total, 0);
    }

    #[test]
    fn test_count_scripts_devanagari_includes_matras() {
        // 모음 기호와 비라마도 블록 소속 문자로 계수
        let counts = count_scripts("मुझे");
        assert_eq!(counts.devanagari, 4);
        assert_eq!(counts.latin, 0);
    }

    #[test]
    fn test_scan_latin() {
        assert_eq!(scan_script("office mein kaam"), Script::Latin);
        assert_eq!(scan_script("ok"), Script::Latin);
        assert_eq!(scan_script("a"), Script::Latin); // 라틴 1자도 latin
    }

    #[test]
    fn test_scan_devanagari() {
        assert_eq!(scan_script("मुझे बहुत नींद आ रही है"), Script::Devanagari);
        assert_eq!(scan_script("नमस्ते"), Script::Devanagari);
    }

    #[test]
    fn test_scan_mixed() {
        assert_eq!(scan_script("Hello duniya नमस्ते"), Script::Mixed);
    }

    #[test]
    fn test_devanagari_noise_does_not_flip_latin() {
        // 데바나가리 2자 이하는 혼용 판정을 만들지 않음
        assert_eq!(scan_script("good morning दो"), Script::Latin);
    }

    #[test]
    fn test_scan_other() {
        assert_eq!(scan_script(""), Script::Other);
        assert_eq!(scan_script("12345 !!!"), Script::Other);
        assert_eq!(scan_script("안녕하세요"), Script::Other); // 한글
        assert_eq!(scan_script("你好"), Script::Other); // 한자
    }

    #[test]
    fn test_devanagari_only_below_threshold() {
        // 데바나가리 2자 이하 + 라틴 없음 → other
        assert_eq!(scan_script("दो"), Script::Other);
    }
}
