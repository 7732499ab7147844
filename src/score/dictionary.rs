//! 한→영 맛 표현 동의어 사전
//!
//! 사용자가 한글로 고른 맛을 영문 로스터 노트에서 찾기 위한 고정 사전입니다.
//! 한 번 만들어지면 변경되지 않습니다.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use lazy_static::lazy_static;

use crate::core::normalize::normalize;
use crate::error::{Error, Result};

#[rustfmt::skip]
const BUILTIN_ENTRIES: &[(&str, &[&str])] = &[
    // 초콜릿/견과
    ("초콜릿", &["chocolate", "cocoa", "cacao"]),
    ("다크초콜릿", &["dark chocolate", "cocoa"]),
    ("밀크초콜릿", &["milk chocolate"]),
    ("코코아", &["cocoa", "cacao"]),
    ("견과류", &["nut", "nutty", "almond", "hazelnut", "walnut", "peanut"]),
    ("고소함", &["nutty", "roasted nut"]),
    ("아몬드", &["almond"]),
    ("헤이즐넛", &["hazelnut"]),
    ("땅콩", &["peanut"]),
    // 단맛
    ("캐러멜", &["caramel", "toffee", "butterscotch"]),
    ("카라멜", &["caramel", "toffee"]),
    ("꿀", &["honey"]),
    ("흑설탕", &["brown sugar", "molasses", "panela"]),
    ("메이플", &["maple"]),
    ("바닐라", &["vanilla"]),
    ("당밀", &["molasses"]),
    // 베리
    ("베리", &["berry", "berries"]),
    ("블루베리", &["blueberry"]),
    ("딸기", &["strawberry"]),
    ("라즈베리", &["raspberry"]),
    ("블랙베리", &["blackberry"]),
    ("크랜베리", &["cranberry"]),
    ("블랙커런트", &["blackcurrant", "black currant", "cassis"]),
    // 과일
    ("체리", &["cherry"]),
    ("자두", &["plum"]),
    ("복숭아", &["peach"]),
    ("살구", &["apricot"]),
    ("사과", &["apple"]),
    ("청사과", &["green apple"]),
    ("배", &["pear"]),
    ("포도", &["grape"]),
    ("청포도", &["green grape", "white grape"]),
    ("건포도", &["raisin"]),
    ("무화과", &["fig"]),
    ("대추", &["date"]),
    ("파인애플", &["pineapple"]),
    ("망고", &["mango"]),
    ("패션후르츠", &["passion fruit", "passionfruit"]),
    ("열대과일", &["tropical", "tropical fruit"]),
    ("멜론", &["melon"]),
    ("리치", &["lychee", "litchi"]),
    // 시트러스
    ("시트러스", &["citrus"]),
    ("레몬", &["lemon"]),
    ("라임", &["lime"]),
    ("오렌지", &["orange"]),
    ("자몽", &["grapefruit"]),
    ("귤", &["tangerine", "mandarin"]),
    ("베르가못", &["bergamot"]),
    // 꽃/차
    ("꽃향", &["floral", "flower"]),
    ("자스민", &["jasmine"]),
    ("재스민", &["jasmine"]),
    ("장미", &["rose"]),
    ("라벤더", &["lavender"]),
    ("히비스커스", &["hibiscus"]),
    ("홍차", &["black tea"]),
    ("얼그레이", &["earl grey"]),
    ("녹차", &["green tea"]),
    ("허브", &["herbal", "herb"]),
    // 향신료/로스팅
    ("시나몬", &["cinnamon"]),
    ("계피", &["cinnamon"]),
    ("정향", &["clove"]),
    ("후추", &["pepper", "peppery"]),
    ("스모키", &["smoky", "smoke"]),
    ("토스트", &["toast", "toasty"]),
    ("곡물", &["grain", "cereal", "malt"]),
    ("몰트", &["malt"]),
    ("와인", &["wine", "winey", "winy"]),
    ("럼", &["rum"]),
    ("흙", &["earthy"]),
];

lazy_static! {
    /// 내장 사전 (프로세스당 한 번 초기화)
    static ref BUILTIN: FlavorDictionary = FlavorDictionary::from_entries(
        BUILTIN_ENTRIES
            .iter()
            .map(|(term, synonyms)| (term.to_string(), synonyms.iter().map(|s| s.to_string()).collect())),
    );
}

/// 맛 표현 → 영문 동의어 목록
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlavorDictionary {
    entries: HashMap<String, Vec<String>>,
}

impl FlavorDictionary {
    /// 내장 사전
    pub fn builtin() -> &'static FlavorDictionary {
        &*BUILTIN
    }

    /// (표현, 동의어 목록) 쌍으로 사전 생성
    ///
    /// 키와 동의어는 정규화되고, 빈 동의어는 버려집니다.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let entries = entries
            .into_iter()
            .map(|(term, synonyms)| {
                let synonyms = synonyms
                    .iter()
                    .map(|s| normalize(s))
                    .filter(|s| !s.is_empty())
                    .collect();
                (normalize(&term), synonyms)
            })
            .collect();
        Self { entries }
    }

    /// JSON 문자열에서 사전 로드
    ///
    /// # 형식
    /// ```json
    /// { "블루베리": ["blueberry"], "초콜릿": ["chocolate", "cocoa"] }
    /// ```
    pub fn from_json(json_str: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json_str)?;

        if let Some((term, _)) = raw
            .iter()
            .find(|(_, synonyms)| synonyms.iter().all(|s| s.trim().is_empty()))
        {
            return Err(Error::Dictionary(format!("빈 동의어 목록: {}", term)));
        }

        Ok(Self::from_entries(raw))
    }

    /// JSON 파일에서 사전 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 표현의 영문 동의어 목록 (사전에 없으면 표현 자체)
    pub fn synonyms(&self, term: &str) -> Vec<String> {
        let key = normalize(term);
        match self.entries.get(&key) {
            Some(synonyms) => synonyms.clone(),
            None => vec![key],
        }
    }

    /// 사전에 등록된 표현인지 확인
    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(&normalize(term))
    }

    /// 등록된 표현 수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 사전이 비어 있는지 확인
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
