//! Bhasha - 힌디어/영어 코드 스위칭 텍스트 판별 CLI
//!
//! JSONL 레코드(`{"id": ..., "text": ...}`)를 한 줄씩 읽어 분류하고,
//! 판정 결과를 JSONL로 출력합니다. 분류 로직 자체는 라이브러리에 있으며
//! 이 바이너리는 레코드 입출력만 담당합니다.

use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::process;

use serde::Deserialize;

use bhasha::config::load_config;
use bhasha::LanguageDetector;

/// 입력 레코드
#[derive(Debug, Deserialize)]
struct Record {
    /// 레코드 식별자 (출력에 그대로 전달)
    id: Option<serde_json::Value>,
    /// 분류 대상 텍스트 (없으면 빈 문자열)
    #[serde(default)]
    text: String,
}

fn main() {
    // 로깅 초기화 (warn 이상만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("사용법: {} <입력.jsonl> <출력.jsonl>", args[0]);
        process::exit(2);
    }

    if let Err(e) = run(&args[1], &args[2]) {
        log::error!("실행 실패: {}", e);
        process::exit(1);
    }
}

fn run(in_path: &str, out_path: &str) -> Result<(), String> {
    let input =
        File::open(in_path).map_err(|e| format!("입력 파일 열기 실패 ({}): {}", in_path, e))?;
    let output =
        File::create(out_path).map_err(|e| format!("출력 파일 생성 실패 ({}): {}", out_path, e))?;
    let mut writer = BufWriter::new(output);

    let detector = LanguageDetector::with_config(load_config());

    for (line_no, line) in BufReader::new(input).lines().enumerate() {
        let line = line.map_err(|e| format!("입력 읽기 실패: {}", e))?;
        if line.trim().is_empty() {
            continue;
        }

        // 잘못된 레코드는 경고 후 건너뜀 (한 줄 오류가 전체 처리를 막지 않도록)
        let record: Record = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("{}번째 줄 파싱 실패, 건너뜀: {}", line_no + 1, e);
                continue;
            }
        };

        let detection = detector.classify(&record.text);

        let mut value =
            serde_json::to_value(&detection).map_err(|e| format!("직렬화 실패: {}", e))?;
        value["id"] = record.id.unwrap_or(serde_json::Value::Null);

        let out_line =
            serde_json::to_string(&value).map_err(|e| format!("직렬화 실패: {}", e))?;
        writeln!(writer, "{}", out_line).map_err(|e| format!("출력 쓰기 실패: {}", e))?;
    }

    writer.flush().map_err(|e| format!("출력 쓰기 실패: {}", e))?;
    Ok(())
}
