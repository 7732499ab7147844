//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::matcher::MatcherConfig;
use crate::score::{ScoreConfig, SensoryStrategy};

/// cupnote 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CupnoteConfig {
    /// 매칭으로 인정하는 최소 유사도
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,
    /// 편집 거리 유사도 가중치
    #[serde(default = "default_string_weight")]
    pub string_weight: f64,
    /// 자모 발음 유사도 가중치
    #[serde(default = "default_phonetic_weight")]
    pub phonetic_weight: f64,
    /// 문맥 가산점 가중치
    #[serde(default = "default_context_weight")]
    pub context_weight: f64,
    /// Level 2 점수의 맛 비중
    #[serde(default = "default_level2_flavor_weight")]
    pub level2_flavor_weight: f64,
    /// 수치 평가 점수의 맛 비중
    #[serde(default = "default_numeric_flavor_weight")]
    pub numeric_flavor_weight: f64,
    /// Level 2 감각 점수 전략
    #[serde(default)]
    pub sensory_strategy: SensoryStrategy,
    /// 임시 감각 점수
    #[serde(default = "default_placeholder_sensory_score")]
    pub placeholder_sensory_score: u8,
    /// 수치 평가 척도 최소값
    #[serde(default = "default_scale_min")]
    pub scale_min: f64,
    /// 수치 평가 척도 최대값
    #[serde(default = "default_scale_max")]
    pub scale_max: f64,
    /// 사용자 정의 맛 사전 경로 (없으면 내장 사전)
    #[serde(default)]
    pub dictionary_path: Option<PathBuf>,
}

fn default_match_threshold() -> f64 {
    0.6
}

fn default_string_weight() -> f64 {
    0.5
}

fn default_phonetic_weight() -> f64 {
    0.3
}

fn default_context_weight() -> f64 {
    0.2
}

fn default_level2_flavor_weight() -> f64 {
    0.5
}

fn default_numeric_flavor_weight() -> f64 {
    0.4
}

fn default_placeholder_sensory_score() -> u8 {
    75
}

fn default_scale_min() -> f64 {
    1.0
}

fn default_scale_max() -> f64 {
    5.0
}

impl Default for CupnoteConfig {
    fn default() -> Self {
        Self {
            match_threshold: default_match_threshold(),
            string_weight: default_string_weight(),
            phonetic_weight: default_phonetic_weight(),
            context_weight: default_context_weight(),
            level2_flavor_weight: default_level2_flavor_weight(),
            numeric_flavor_weight: default_numeric_flavor_weight(),
            sensory_strategy: SensoryStrategy::default(),
            placeholder_sensory_score: default_placeholder_sensory_score(),
            scale_min: default_scale_min(),
            scale_max: default_scale_max(),
            dictionary_path: None,
        }
    }
}

impl CupnoteConfig {
    /// 매처 설정으로 변환
    pub fn matcher_config(&self) -> MatcherConfig {
        MatcherConfig::new()
            .with_threshold(self.match_threshold)
            .with_weights(self.string_weight, self.phonetic_weight, self.context_weight)
    }

    /// 점수 집계 설정으로 변환
    pub fn score_config(&self) -> ScoreConfig {
        let mut config = ScoreConfig::new()
            .with_sensory_strategy(self.sensory_strategy)
            .with_level2_flavor_weight(self.level2_flavor_weight)
            .with_numeric_flavor_weight(self.numeric_flavor_weight)
            .with_scale(self.scale_min, self.scale_max)
            .with_matcher_config(self.matcher_config());
        config.placeholder_sensory_score = self.placeholder_sensory_score;
        config
    }
}

/// 설정 파일 경로: ~/.config/cupnote/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("cupnote").join("config.json")
}

/// 기본 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> CupnoteConfig {
    load_config_from(&config_path())
}

/// 지정 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> CupnoteConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}, 기본값 사용", path.display(), e);
            CupnoteConfig::default()
        }),
        Err(_) => CupnoteConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &CupnoteConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
