//! 스크립트/언어 판별기
//!
//! 스크립트 스캔 → 토큰화 → 어휘집 정확 매칭 → 퍼지 매칭 →
//! 구문 패턴 매칭 → 점수 집계의 순서로 동작하며, 우선순위가 고정된
//! 판정 규칙으로 (언어, 신뢰도)를 결정합니다.
//!
//! 판별기는 입력 문자열만의 순수 함수이며 공유 상태를 쓰지 않으므로
//! 여러 스레드에서 동시에 호출해도 안전합니다.

use serde::{Deserialize, Serialize};

use crate::config::DetectorConfig;
use crate::core::script::{classify_script, count_scripts, Script, ScriptCounts};
use crate::core::tokenizer::{tokenize, Token};

use super::fuzzy::closest_match;
use super::lexicon::{EN_STOPWORDS, HINGLISH_PATTERNS, HI_LATIN_STOPWORDS};

/// 언어 판정 레이블
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Hindi,
    Hinglish,
    Mixed,
    Unknown,
}

/// 판정 근거: 결과를 만든 카운트들
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    /// 토큰 수
    pub n_tokens: usize,
    /// 영어 정확 매칭 수
    pub en_exact: u32,
    /// 힌디어 정확 매칭 수
    pub hi_exact: u32,
    /// 힌디어 퍼지 매칭 수
    pub hi_fuzzy: u32,
    /// 구문 패턴 매칭 수
    pub pattern_hits: u32,
    /// 라틴 문자 수
    pub latin_chars: usize,
    /// 데바나가리 문자 수
    pub devanagari_chars: usize,
}

/// 판정 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    /// 표기 스크립트
    pub script: Script,
    /// 언어 레이블
    pub language: Language,
    /// 신뢰도 (0.0 ~ 1.0, 보정된 확률이 아닌 신호 강도)
    pub confidence: f32,
    /// 판정 근거
    pub evidence: Evidence,
}

/// 매칭 집계 (classify 호출 1회 동안만 존재)
#[derive(Debug, Default)]
struct MatchTally {
    en_exact: u32,
    hi_exact: u32,
    hi_fuzzy: u32,
    patterns: u32,
    total_tokens: usize,
}

impl MatchTally {
    /// 힌디어 종합 점수 (정확 + 퍼지 + 패턴)
    fn hi_score(&self) -> u32 {
        self.hi_exact + self.hi_fuzzy + self.patterns
    }

    /// 영어 종합 점수 (정확 매칭만, 영어 철자는 정규형으로 가정)
    fn en_score(&self) -> u32 {
        self.en_exact
    }

    fn hi_ratio(&self) -> f32 {
        ratio(self.hi_score(), self.total_tokens)
    }

    fn en_ratio(&self) -> f32 {
        ratio(self.en_score(), self.total_tokens)
    }
}

fn ratio(hits: u32, total_tokens: usize) -> f32 {
    if total_tokens == 0 {
        0.0
    } else {
        hits as f32 / total_tokens as f32
    }
}

/// 규칙 1/5: 어떤 신호도 없는 입력의 신뢰도. 토큰 수에 비례, 최대 0.3
fn unknown_confidence(total_tokens: usize) -> f32 {
    (0.1 * total_tokens as f32).min(0.3)
}

/// 규칙 3/4: 히트 비율 스케일 신뢰도. 하한 0.5, 상한 1.0
///
/// 패턴 히트가 더해지면 비율이 1을 넘을 수 있어 상한에서 잘립니다.
fn ratio_confidence(ratio: f32) -> f32 {
    (0.5 + 0.5 * ratio).clamp(0.5, 1.0)
}

/// 규칙 2 및 스크립트 우회 경로 신뢰도 (0.9 ~ 0.95 스케일)
fn strong_confidence(ratio: f32) -> f32 {
    (0.9 + 0.05 * ratio).clamp(0.9, 0.95)
}

/// 스크립트/언어 판별기
///
/// 어휘집과 패턴 집합은 프로세스 전역 읽기 전용 정적 데이터이며,
/// 판별기 자체는 설정만 들고 있는 가벼운 값입니다.
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    config: DetectorConfig,
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector {
    /// 기본 설정으로 판별기 생성
    pub fn new() -> Self {
        Self {
            config: DetectorConfig::default(),
        }
    }

    /// 설정을 지정하여 판별기 생성
    pub fn with_config(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// 입력 문자열을 (스크립트, 언어, 신뢰도)로 분류
    ///
    /// 모든 입력에 대해 결과를 반환합니다. 빈 문자열이나 지원 외
    /// 스크립트도 other/unknown + 낮은 신뢰도로 귀결됩니다.
    pub fn classify(&self, text: &str) -> Detection {
        // 1단계: 스크립트 스캔
        let counts = count_scripts(text);
        let script = classify_script(&counts);

        match script {
            // 데바나가리 표기는 이 도메인에서 사실상 힌디어
            Script::Devanagari => {
                let dev_ratio = ratio(counts.devanagari as u32, counts.total);
                Detection {
                    script,
                    language: Language::Hindi,
                    confidence: strong_confidence(dev_ratio),
                    evidence: evidence(&MatchTally::default(), &counts),
                }
            }
            // 두 스크립트가 유의미하게 섞이면 언어도 mixed로 정의
            Script::Mixed => {
                let smaller = counts.latin.min(counts.devanagari);
                let larger = counts.latin.max(counts.devanagari);
                let balance = smaller as f32 / larger as f32;
                Detection {
                    script,
                    language: Language::Mixed,
                    confidence: strong_confidence(balance),
                    evidence: evidence(&MatchTally::default(), &counts),
                }
            }
            // latin은 토큰 분석 경로.
            // other도 복구 가능한 토큰이 있으면 같은 규칙을 태운다
            // (라틴 문자가 없으므로 실제로는 unknown/저신뢰로 귀결).
            Script::Latin | Script::Other => self.analyze_latin(text, script, counts),
        }
    }

    /// 라틴 표기 분석: 토큰화 → 매칭 → 판정
    fn analyze_latin(&self, text: &str, script: Script, counts: ScriptCounts) -> Detection {
        // 2단계: 토큰화
        let tokens = tokenize(text);

        // 3~5단계: 어휘집/퍼지/패턴 매칭
        let tally = self.run_matchers(&tokens);

        // 6단계: 판정
        let (language, confidence) = self.decide(&tally);

        Detection {
            script,
            language,
            confidence,
            evidence: evidence(&tally, &counts),
        }
    }

    /// 토큰 열에 매처를 차례로 적용하여 집계 생성
    fn run_matchers(&self, tokens: &[Token]) -> MatchTally {
        let mut tally = MatchTally {
            total_tokens: tokens.len(),
            ..Default::default()
        };

        for token in tokens {
            let word = token.lower.as_str();

            // 정확 매칭. 두 어휘집에 모두 있는 단어는 영어로 계수 (문서화된 우선순위)
            if EN_STOPWORDS.contains(word) {
                tally.en_exact += 1;
                continue;
            }
            if HI_LATIN_STOPWORDS.contains(word) {
                tally.hi_exact += 1;
                continue;
            }

            // 퍼지 매칭: 정확 매칭이 해소하지 못한 토큰만.
            // 영어 어휘집에는 적용하지 않음 (영어 철자는 정규형으로 가정).
            if self.config.use_fuzzy {
                if let Some((entry, dist)) = closest_match(word, &HI_LATIN_STOPWORDS) {
                    log::debug!("퍼지 매칭: '{}' → '{}' (거리 {})", token.surface, entry, dist);
                    tally.hi_fuzzy += 1;
                }
            }
        }

        // 구문 패턴 매칭: 크기 2/3 윈도우, 중첩 매칭 허용
        if self.config.use_patterns {
            tally.patterns = count_pattern_hits(tokens);
        }

        tally
    }

    /// 고정 우선순위 판정 규칙. 위에서부터 첫 매칭 규칙이 승리
    fn decide(&self, tally: &MatchTally) -> (Language, f32) {
        let hi = tally.hi_score();
        let en = tally.en_score();
        let m = self.config.mixed_min_hits;

        // 규칙 1: 짧은 입력 + 신호 없음 → unknown
        if tally.total_tokens < self.config.min_tokens && hi == 0 && en == 0 {
            return (Language::Unknown, unknown_confidence(tally.total_tokens));
        }

        // 규칙 2: 양쪽 모두 독립적으로 강한 신호 → mixed
        if hi > 0 && en > 0 && hi >= m && en >= m {
            let min_ratio = tally.hi_ratio().min(tally.en_ratio());
            return (Language::Mixed, strong_confidence(min_ratio));
        }

        // 규칙 3: 힌디어 마커 존재 → hinglish.
        // 영어 어휘가 섞여 있어도 힌디어 문법 마커(퍼지/패턴 포함)가 판정을 지배.
        if hi > 0 {
            return (Language::Hinglish, ratio_confidence(tally.hi_ratio()));
        }

        // 규칙 4: 영어 신호만 존재 → english
        if en > 0 {
            return (Language::English, ratio_confidence(tally.en_ratio()));
        }

        // 규칙 5: 토큰은 있으나 어휘집/패턴 히트가 전혀 없음 → unknown
        (Language::Unknown, unknown_confidence(tally.total_tokens))
    }
}

/// 토큰 열에서 힌디어 문법 구문 패턴 히트 수 계산
///
/// 크기 2와 3의 슬라이딩 윈도우를 각각 적용. 매칭된 윈도우를 소비하지
/// 않으므로 겹치는 윈도우가 각각 독립적으로 계수됩니다.
fn count_pattern_hits(tokens: &[Token]) -> u32 {
    let words: Vec<&str> = tokens.iter().map(|t| t.lower.as_str()).collect();
    let mut hits = 0;

    for size in [2, 3] {
        for window in words.windows(size) {
            if HINGLISH_PATTERNS.contains(window.join(" ").as_str()) {
                hits += 1;
            }
        }
    }

    hits
}

fn evidence(tally: &MatchTally, counts: &ScriptCounts) -> Evidence {
    Evidence {
        n_tokens: tally.total_tokens,
        en_exact: tally.en_exact,
        hi_exact: tally.hi_exact,
        hi_fuzzy: tally.hi_fuzzy,
        pattern_hits: tally.patterns,
        latin_chars: counts.latin,
        devanagari_chars: counts.devanagari,
    }
}
