//! 시/도·구/군 슬러그 데이터 로딩과 색인 구축

use std::collections::HashMap;

use tracing::warn;

/// 내장 시/도 데이터 (컴파일 타임 포함)
const CITY_DATA: &str = include_str!("../data/cities.csv");

/// 내장 구/군 데이터 (컴파일 타임 포함)
const DISTRICT_DATA: &str = include_str!("../data/districts.csv");

/// CSV에서 시/도 행을 읽는다: (한글명, 슬러그)
pub fn load_cities() -> Vec<(String, String)> {
    let mut cities = Vec::new();

    for line in CITY_DATA.lines().skip(1) {
        // 표제 행 건너뜀
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() >= 2 {
            let city_kor = parts[0].trim().to_string();
            let slug = parts[1].trim().to_string();
            if !city_kor.is_empty() && !slug.is_empty() {
                cities.push((city_kor, slug));
            }
        }
    }

    cities
}

/// CSV에서 구/군 행을 읽는다: (시/도 한글명, 구/군 한글명, 슬러그)
pub fn load_districts() -> Vec<(String, String, String)> {
    let mut districts = Vec::new();

    for line in DISTRICT_DATA.lines().skip(1) {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() >= 3 {
            let city_kor = parts[0].trim().to_string();
            let district_kor = parts[1].trim().to_string();
            let slug = parts[2].trim().to_string();
            if !city_kor.is_empty() && !district_kor.is_empty() && !slug.is_empty() {
                districts.push((city_kor, district_kor, slug));
            }
        }
    }

    districts
}

/// 슬러그 색인
///
/// 구/군 표는 (시/도, 구/군) 쌍으로 범위를 한정한다. 중구·남구처럼
/// 여러 시/도에 같은 이름이 있어 평면 표로는 키가 겹치기 때문이다.
/// 범위 조회가 빗나가면 시/도 해석 여부와 무관하게 평면 폴백 표로
/// 이어진다.
pub struct SlugIndex {
    /// 시/도 한글명 -> 슬러그
    city_slugs: HashMap<String, String>,
    /// 시/도 한글명 -> (구/군 한글명 -> 슬러그)
    district_slugs: HashMap<String, HashMap<String, String>>,
    /// 구/군 한글명 -> 슬러그 (범위 조회 실패 시의 폴백, 뒤 행이 이긴다)
    flat_district_slugs: HashMap<String, String>,
}

impl SlugIndex {
    /// 로딩한 행 목록으로 색인을 만든다
    pub fn build(cities: &[(String, String)], districts: &[(String, String, String)]) -> Self {
        let mut city_slugs = HashMap::new();
        let mut district_slugs: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut flat_district_slugs: HashMap<String, String> = HashMap::new();

        for (city_kor, slug) in cities {
            city_slugs.insert(city_kor.clone(), slug.clone());
        }

        for (city_kor, district_kor, slug) in districts {
            district_slugs
                .entry(city_kor.clone())
                .or_default()
                .insert(district_kor.clone(), slug.clone());

            // 평면 폴백은 나중 행이 이긴다. 슬러그가 다른 중복은 데이터
            // 버그이므로 경고를 남긴다.
            if let Some(prev) = flat_district_slugs.insert(district_kor.clone(), slug.clone()) {
                if prev != *slug {
                    warn!(
                        district = %district_kor,
                        kept = %slug,
                        shadowed = %prev,
                        "duplicate district name with conflicting slug in fallback table"
                    );
                }
            }
        }

        Self {
            city_slugs,
            district_slugs,
            flat_district_slugs,
        }
    }

    /// 시/도 슬러그 조회 (정확 일치)
    pub fn city_slug(&self, city_kor: &str) -> Option<&str> {
        self.city_slugs.get(city_kor).map(String::as_str)
    }

    /// 구/군 슬러그 조회
    ///
    /// (시/도, 구/군) 범위 조회가 먼저, 평면 폴백이 그다음이다.
    pub fn district_slug(&self, city_kor: &str, district_kor: &str) -> Option<&str> {
        self.district_slugs
            .get(city_kor)
            .and_then(|m| m.get(district_kor))
            .or_else(|| self.flat_district_slugs.get(district_kor))
            .map(String::as_str)
    }

    /// 표에 등록된 모든 시/도 한글명
    pub fn city_names(&self) -> Vec<&String> {
        self.city_slugs.keys().collect()
    }

    /// 시/도 산하의 구/군 한글명 목록
    pub fn district_names(&self, city_kor: &str) -> Vec<&String> {
        self.district_slugs
            .get(city_kor)
            .map(|m| m.keys().collect())
            .unwrap_or_default()
    }
}
