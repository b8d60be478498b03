//! # KCDA - Korean City District Address Classifier
//!
//! 한국 주소 문자열에서 시/도와 구/군을 뽑아 슬러그로 정규화하고,
//! 한의원 목록 JSON을 세 가지 출력 파일로 변환하는 라이브러리.
//!
//! ## 기능
//!
//! - 자유 형식 주소에서 시/도·구/군 토큰 추출 (공백 토큰화, 정확 일치)
//! - 접미사 규칙에 따른 구/군 판별 (구/군 우선, 시 차선, 둘째 토큰 폴백)
//! - (시/도, 구/군) 범위 슬러그 표 — 중구·남구 같은 중복 이름 구분
//! - 레코드 목록 일괄 변환: 통합/한글 전용/슬러그 전용 JSON 출력
//!
//! ## 빠른 시작
//!
//! ```rust
//! use kcda::AddressClassifier;
//!
//! let classifier = AddressClassifier::new();
//!
//! let result = classifier.classify("서울특별시 강남구 테헤란로 123");
//! assert_eq!(result.city_kor, "서울특별시");
//! assert_eq!(result.city_slug, "seoul");
//! assert_eq!(result.district_kor, "강남구");
//! assert_eq!(result.district_slug.as_deref(), Some("gangnam"));
//!
//! // 표에 없는 값은 실패 대신 unknown/None으로 물러난다
//! let result = classifier.classify("어딘가 먼 곳");
//! assert_eq!(result.city_slug, "unknown");
//! ```

mod classifier;
mod data;
mod record;
mod rules;

pub mod cli;
pub mod error;
pub mod export;

pub use classifier::AddressClassifier;
pub use error::{ConvertError, Result};
pub use record::{ClassifiedAddress, ClinicRecord, UNKNOWN};
pub use rules::DivisionKind;

/// 편의 함수: 전역 분류기로 주소를 분류한다
///
/// ```rust
/// let result = kcda::classify("부산광역시 해운대구 우동");
/// assert_eq!(result.city_slug, "busan");
/// ```
pub fn classify(address: &str) -> ClassifiedAddress {
    AddressClassifier::global().classify(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_full_address() {
        let classifier = AddressClassifier::new();
        let result = classifier.classify("서울특별시 강남구 테헤란로 123");

        assert_eq!(result.city_kor, "서울특별시");
        assert_eq!(result.city_slug, "seoul");
        assert_eq!(result.district_kor, "강남구");
        assert_eq!(result.district_slug.as_deref(), Some("gangnam"));
    }

    #[test]
    fn test_classify_unknown_everywhere() {
        let result = classify("");

        assert_eq!(result.city_kor_or_unknown(), UNKNOWN);
        assert_eq!(result.city_slug, UNKNOWN);
        assert_eq!(result.district_kor_or_unknown(), UNKNOWN);
        assert_eq!(result.district_code(), UNKNOWN);
    }

    #[test]
    fn test_convenience_function_matches_instance() {
        let classifier = AddressClassifier::new();
        let address = "대구광역시 수성구 달구벌대로";

        assert_eq!(classify(address), classifier.classify(address));
    }
}
