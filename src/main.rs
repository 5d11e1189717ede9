//! Puli - 한글 자소 분리/조합 CLI

use puli::config::load_config;
use puli::search::AutocompleteIndex;
use puli::{backspace_one, decompose, match_hangul, recompose};
use std::process::ExitCode;

fn print_usage() {
    eprintln!("사용법:");
    eprintln!("  puli split <문장>          자소 풀어쓰기 (겹받침 분리)");
    eprintln!("  puli split-keep <문장>     자소 풀어쓰기 (겹받침 유지)");
    eprintln!("  puli join <자소문장>       자소를 음절로 모아쓰기");
    eprintln!("  puli backspace <문장>      끝 자소 한 개 삭제");
    eprintln!("  puli match <검색어> <대상> 자소 단위 포함 여부");
    eprintln!("  puli suggest <검색어>      재료명 자동완성 (JSON)");
}

fn run(args: &[String]) -> Result<(), String> {
    let Some((command, rest)) = args.split_first() else {
        return Err(String::new());
    };
    match (command.as_str(), rest) {
        ("split", [text]) => {
            println!("{}", decompose(text, true));
            Ok(())
        }
        ("split-keep", [text]) => {
            println!("{}", decompose(text, false));
            Ok(())
        }
        ("join", [text]) => {
            println!("{}", recompose(text));
            Ok(())
        }
        ("backspace", [text]) => {
            println!("{}", backspace_one(text));
            Ok(())
        }
        ("match", [query, target]) => {
            println!("{}", match_hangul(query, target));
            Ok(())
        }
        ("suggest", [query]) => run_suggest(query),
        // 빈 메시지 = 사용법 출력
        _ => Err(String::new()),
    }
}

/// 설정에 지정된 재료 어휘 파일을 읽어 자동완성 후보를 JSON으로 출력
fn run_suggest(query: &str) -> Result<(), String> {
    let config = load_config();
    let content = std::fs::read_to_string(&config.ingredients_path).map_err(|e| {
        format!(
            "재료 파일을 읽을 수 없습니다 ({}): {}",
            config.ingredients_path.display(),
            e
        )
    })?;
    let vocabulary: Vec<String> =
        serde_json::from_str(&content).map_err(|e| format!("재료 파일 파싱 실패: {}", e))?;

    let index = AutocompleteIndex::new(vocabulary);
    log::debug!("재료 {}개 로드", index.len());

    let suggestions = index.suggest(query, config.suggestion_limit);
    let body = serde_json::json!({ "suggestions": suggestions });
    println!("{}", body);
    Ok(())
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            if msg.is_empty() {
                print_usage();
            } else {
                eprintln!("{}", msg);
            }
            ExitCode::FAILURE
        }
    }
}
