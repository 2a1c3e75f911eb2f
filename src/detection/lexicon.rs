//! 힌디어/영어 어휘·패턴 데이터
//!
//! 라틴 표기 입력의 언어 판별 근거가 되는 불용어 집합과
//! 힌디어 문법 구문 패턴을 정의합니다. 두 불용어 집합은 서로소로
//! 선별되어 있으며 ("me", "the" 같은 중복 단어는 한쪽에만 배정),
//! 프로세스 시작 후 변경되지 않습니다.

use std::collections::HashSet;
use std::sync::LazyLock;

/// 흔한 영어 불용어 목록 (영어 신호로 계수)
pub static EN_STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    // 기능어 (관사/전치사/접속사/대명사)
    for w in ["the", "is", "at", "which", "on", "and", "a", "an", "in",
              "to", "of", "for", "it", "this", "that", "with", "as",
              "was", "were", "be", "are", "i", "you", "he", "she", "we",
              "they", "my", "your", "his", "her", "our", "their", "but",
              "or", "so", "if", "then", "than", "me", "him", "us", "them"] {
        set.insert(w);
    }
    // 부사/조동사/기본 동사
    for w in ["just", "very", "really", "now", "not", "no", "yes", "can",
              "will", "do", "did", "done", "has", "have", "had", "go",
              "going", "went", "get", "got", "am", "feeling", "feel", "felt"] {
        set.insert(w);
    }
    // 일기 도메인 고빈도 단어
    for w in ["today", "tomorrow", "yesterday", "morning", "evening",
              "night", "after", "before", "stress", "tired", "pain",
              "energy", "work", "meeting", "meetings", "mood", "cramps",
              "low", "okay", "better", "good", "bad", "lunch", "dinner",
              "breakfast", "slept", "sleep", "bed", "early", "late",
              "gym", "body", "heavy"] {
        set.insert(w);
    }
    set
});

/// 라틴 표기 힌디어(힝글리시) 불용어 목록 (힌디어 신호로 계수)
///
/// 영어에서 흔한 철자("the", "me", "use" 등)는 오탐 방지를 위해 제외
pub static HI_LATIN_STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    // 계사/조동사 (hona 활용형)
    for w in ["hai", "hain", "ho", "hun", "hu", "tha", "thi", "ga", "gi",
              "ge", "raha", "rahi", "rahe", "h"] {
        set.insert(w);
    }
    // 후치사/격조사
    for w in ["ki", "ka", "ke", "ko", "mein", "se", "ne", "par", "liye"] {
        set.insert(w);
    }
    // 의문사/접속사/불변화사
    for w in ["kya", "kyun", "kyu", "kab", "kahan", "kaise", "aur",
              "tatha", "evam", "bhi", "hi", "mat", "na", "nahi", "nahin",
              "n", "jaisa", "waisa", "kaisa"] {
        set.insert(w);
    }
    // 대명사/한정사
    for w in ["main", "hum", "tum", "aap", "ye", "yeh", "wo", "woh",
              "mujhe", "mera", "meri", "mere", "uska", "unka", "unki",
              "unke", "unhe", "iske", "isso", "wala", "wale", "wali"] {
        set.insert(w);
    }
    // 시간/정도 부사
    for w in ["aaj", "kal", "ab", "jab", "tab", "kabhi", "abhi", "aa",
              "bohot", "bahut", "thoda", "zyada", "kam"] {
        set.insert(w);
    }
    // 동사 어간/활용형
    for w in ["karna", "kar", "kiya", "gaya", "gayi", "gaye", "lag",
              "khana", "peena", "sone", "uthna"] {
        set.insert(w);
    }
    // 일기 도메인 고빈도 단어 (호칭/신체 상태)
    for w in ["yaar", "bhai", "dost", "dimag", "garam", "subah", "dard",
              "thakan", "bukhar", "sardard"] {
        set.insert(w);
    }
    set
});

/// 힌디어 문법을 강하게 지시하는 구문 패턴 (토큰 2~3개, 공백 연결)
///
/// 어휘가 아닌 문법 신호이므로 개별 단어 히트와 별도로 계수됩니다.
pub static HINGLISH_PATTERNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    // 소유/원인 후치사 구문
    for p in ["ki wajah", "wajah se", "ki wajah se", "ka matlab",
              "ke liye", "ki taraf"] {
        set.insert(p);
    }
    // 완료/기동 (hona/jana 보조동사)
    for p in ["ho gaya", "ho gayi", "ho gaya hai", "ho raha", "ho rahi",
              "ho raha hai", "ho rahi hai"] {
        set.insert(p);
    }
    // 진행/감각 (lagna/aana 보조동사)
    for p in ["lag raha", "lag rahi", "lag raha hai", "lag rahi hai",
              "aa raha", "aa rahi", "aa raha hai", "aa rahi hai"] {
        set.insert(p);
    }
    // 관용구
    for p in ["kya baat", "kya baat hai", "karna hai", "karna tha"] {
        set.insert(p);
    }
    set
});
