//! cupnote - 시음 노트 매치 스코어 CLI

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;

use cupnote::config::{load_config, load_config_from, CupnoteConfig};
use cupnote::{
    decompose_hangul, extract_keywords, FlavorDictionary, FlavorMatcher, NumericScorer, NumericTasting,
    ScoreAggregator, TastingRecord,
};

#[derive(Parser)]
#[command(name = "cupnote", version, about = "커피 시음 노트 ↔ 로스터 노트 매치 스코어")]
struct Cli {
    /// 설정 파일 경로 (기본: ~/.config/cupnote/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 시음 기록 JSON으로 Level 1/2 매치 스코어 계산
    Score {
        /// 시음 기록 JSON 파일 ("-"이면 표준 입력)
        record: String,
        /// 찾은/못 찾은 맛 목록도 출력
        #[arg(long)]
        breakdown: bool,
    },
    /// 키워드와 사용자 선택 매칭
    Match {
        /// 로스터 키워드 (쉼표 구분, 생략 시 노트에서 추출)
        #[arg(long, value_delimiter = ',')]
        keywords: Vec<String>,
        /// 사용자 선택 (쉼표 구분)
        #[arg(long, value_delimiter = ',', required = true)]
        selections: Vec<String>,
        /// 로스터 노트 원문
        #[arg(long, default_value = "")]
        note: String,
        /// 유사도 임계값 (생략 시 설정값)
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// 수치 평가(1~5 척도) 매치 스코어 계산
    Numeric {
        /// 사용자 평가 JSON 파일
        user: PathBuf,
        /// 로스터 평가 JSON 파일
        roaster: PathBuf,
    },
    /// 한글 자모 분해 결과 출력
    Decompose {
        text: String,
    },
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // 설정 로드
    let config = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };

    if let Err(e) = run(cli.command, &config) {
        log::error!("{}", e);
        eprintln!("오류: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command, config: &CupnoteConfig) -> cupnote::Result<()> {
    match command {
        Command::Score { record, breakdown } => {
            let record: TastingRecord = read_json(&record)?;
            let dictionary = load_dictionary(config)?;
            let aggregator = ScoreAggregator::with_config(&dictionary, config.score_config());

            let score = aggregator.calculate(&record);
            if breakdown {
                let output = serde_json::json!({
                    "match_score": score,
                    "flavors": aggregator.flavor_breakdown(&record),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&score)?);
            }
        }
        Command::Match {
            keywords,
            selections,
            note,
            threshold,
        } => {
            let keywords = if keywords.is_empty() {
                extract_keywords(&note)
            } else {
                keywords
            };
            log::debug!("keywords: {:?}", keywords);

            let matcher = FlavorMatcher::with_config(config.matcher_config());
            let threshold = threshold.unwrap_or(config.match_threshold);
            let matches = matcher.find_best_matches_with_threshold(&keywords, &selections, &note, threshold);
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
        Command::Numeric { user, roaster } => {
            let user: NumericTasting = read_json_file(&user)?;
            let roaster: NumericTasting = read_json_file(&roaster)?;
            let breakdown = NumericScorer::with_config(config.score_config()).breakdown(&user, &roaster);
            let output = serde_json::json!({
                "score": breakdown.score,
                "flavor": breakdown.flavor,
                "sensory": breakdown.sensory,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Decompose { text } => {
            for ch in text.chars().filter(|c| !c.is_whitespace()) {
                println!("{}\t{}", ch, decompose_hangul(ch).join(" "));
            }
        }
    }
    Ok(())
}

/// 설정에 사전 경로가 있으면 파일에서, 없으면 내장 사전
fn load_dictionary(config: &CupnoteConfig) -> cupnote::Result<FlavorDictionary> {
    match &config.dictionary_path {
        Some(path) => FlavorDictionary::load(path),
        None => Ok(FlavorDictionary::builtin().clone()),
    }
}

/// 파일 또는 표준 입력("-")에서 JSON 읽기
fn read_json<T: DeserializeOwned>(source: &str) -> cupnote::Result<T> {
    if source == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        Ok(serde_json::from_str(&content)?)
    } else {
        read_json_file(Path::new(source))
    }
}

fn read_json_file<T: DeserializeOwned>(path: &Path) -> cupnote::Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
