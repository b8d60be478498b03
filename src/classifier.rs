//! 주소 분류기 핵심 구현

use crate::data::{load_cities, load_districts, SlugIndex};
use crate::record::{ClassifiedAddress, UNKNOWN};
use crate::rules::find_division_token;
use once_cell::sync::Lazy;

/// 전역 분류기 인스턴스
static GLOBAL_CLASSIFIER: Lazy<AddressClassifier> = Lazy::new(AddressClassifier::new);

/// 구/군 토큰 탐색 창: 시/도 토큰 뒤 최대 5개 토큰
const DISTRICT_WINDOW: usize = 5;

/// 한국 주소 분류기
///
/// 공백으로 토큰화한 주소 문자열에서 시/도와 구/군 토큰을 뽑아
/// 슬러그 표에 대응시킨다. 입력과 정적 표만 보는 순수 함수이며
/// 실패하는 대신 "unknown"/None으로 물러난다.
pub struct AddressClassifier {
    index: SlugIndex,
}

impl AddressClassifier {
    /// 새 분류기 인스턴스 생성
    pub fn new() -> Self {
        let cities = load_cities();
        let districts = load_districts();

        Self {
            index: SlugIndex::build(&cities, &districts),
        }
    }

    /// 전역 분류기 인스턴스
    pub fn global() -> &'static AddressClassifier {
        &GLOBAL_CLASSIFIER
    }

    /// 주소 문자열을 분류한다
    ///
    /// 첫 토큰을 시/도로 보고, 그 뒤 최대 5개 토큰에서 접미사 규칙으로
    /// 구/군 토큰을 찾는다. 규칙에 걸리는 토큰이 없으면 둘째 토큰으로
    /// 물러난다. 공백 정규화나 약칭 처리는 하지 않는다 (정확 일치만).
    ///
    /// # 예시
    /// ```rust
    /// use kcda::AddressClassifier;
    ///
    /// let classifier = AddressClassifier::new();
    /// let result = classifier.classify("서울특별시 강남구 테헤란로 123");
    /// assert_eq!(result.city_kor, "서울특별시");
    /// assert_eq!(result.city_slug, "seoul");
    /// assert_eq!(result.district_kor, "강남구");
    /// assert_eq!(result.district_slug.as_deref(), Some("gangnam"));
    /// ```
    pub fn classify(&self, address: &str) -> ClassifiedAddress {
        let tokens: Vec<&str> = address.split_whitespace().collect();
        if tokens.is_empty() {
            return ClassifiedAddress::empty();
        }

        let city_kor = tokens[0];

        let window = &tokens[1..tokens.len().min(1 + DISTRICT_WINDOW)];
        let district_kor = match find_division_token(window) {
            Some((token, _kind)) => token,
            None => tokens.get(1).copied().unwrap_or(""),
        };

        let city_slug = self
            .index
            .city_slug(city_kor)
            .unwrap_or(UNKNOWN)
            .to_string();
        let district_slug = self
            .index
            .district_slug(city_kor, district_kor)
            .map(str::to_string);

        ClassifiedAddress {
            city_kor: city_kor.to_string(),
            city_slug,
            district_kor: district_kor.to_string(),
            district_slug,
        }
    }

    /// 주소 목록 일괄 분류
    pub fn classify_batch(&self, addresses: &[&str]) -> Vec<ClassifiedAddress> {
        addresses.iter().map(|a| self.classify(a)).collect()
    }

    /// 표에 등록된 모든 시/도 한글명
    pub fn cities(&self) -> Vec<&String> {
        self.index.city_names()
    }

    /// 시/도 산하의 구/군 한글명 목록
    pub fn districts_of_city(&self, city_kor: &str) -> Vec<&String> {
        self.index.district_names(city_kor)
    }
}

impl Default for AddressClassifier {
    fn default() -> Self {
        Self::new()
    }
}
