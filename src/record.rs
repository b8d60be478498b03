//! 입력 레코드와 분류 결과 타입

use serde::{Deserialize, Serialize};

/// 미해석 값의 대체 표기
pub const UNKNOWN: &str = "unknown";

/// 입력 한의원 레코드
///
/// 원본 목록은 이름 필드 표기가 `Name`/`name`으로 섞여 있어 둘 다 받는다.
/// 빠졌거나 null인 필드는 빈 문자열로 둔 채 분류에 넘긴다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClinicRecord {
    #[serde(default, alias = "Name", deserialize_with = "null_to_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub address: String,
}

/// null을 빈 문자열로 받아들인다
fn null_to_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// 주소 분류 결과
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassifiedAddress {
    /// 시/도 한글명 (첫 토큰, 없으면 빈 문자열)
    pub city_kor: String,
    /// 시/도 슬러그 (표에 없으면 "unknown")
    pub city_slug: String,
    /// 구/군 한글명 (없으면 빈 문자열)
    pub district_kor: String,
    /// 구/군 슬러그 (표에 없으면 None)
    pub district_slug: Option<String>,
}

impl ClassifiedAddress {
    /// 빈 주소의 분류 결과
    pub fn empty() -> Self {
        Self {
            city_slug: UNKNOWN.to_string(),
            ..Self::default()
        }
    }

    /// 출력용 시/도 한글명
    pub fn city_kor_or_unknown(&self) -> &str {
        if self.city_kor.is_empty() {
            UNKNOWN
        } else {
            &self.city_kor
        }
    }

    /// 출력용 구/군 한글명
    pub fn district_kor_or_unknown(&self) -> &str {
        if self.district_kor.is_empty() {
            UNKNOWN
        } else {
            &self.district_kor
        }
    }

    /// 출력용 구/군 코드: 슬러그, 없으면 한글명, 그것도 없으면 "unknown"
    pub fn district_code(&self) -> &str {
        match &self.district_slug {
            Some(slug) => slug,
            None if self.district_kor.is_empty() => UNKNOWN,
            None => &self.district_kor,
        }
    }

    /// 시/도와 구/군이 모두 슬러그 표에서 해석되었는지
    pub fn is_resolved(&self) -> bool {
        self.city_slug != UNKNOWN && self.district_slug.is_some()
    }
}
