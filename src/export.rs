//! JSON 내보내기
//!
//! 세 가지 출력 형식(통합/한글 전용/슬러그 전용)과 입력 파일을 한 번에
//! 변환하는 일괄 드라이버. 세 출력은 모두 같은 분류 결과의 필드
//! 부분집합이다.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::classifier::AddressClassifier;
use crate::error::Result;
use crate::record::ClinicRecord;

/// 모든 출력 행에 붙는 상태 값
pub const STATUS_CONFIRMED: &str = "confirmed";

/// 출력 파일명
pub const COMBINED_FILE: &str = "clinics_combined.json";
pub const KOREAN_FILE: &str = "clinics_korean.json";
pub const SLUGS_FILE: &str = "clinics_slugs.json";

/// 통합 출력 행 (한글명 + 슬러그)
#[derive(Debug, Serialize)]
pub struct CombinedRow {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub city_kor: String,
    pub district: String,
    pub district_kor: String,
    pub status: String,
}

/// 한글명 전용 출력 행
#[derive(Debug, Serialize)]
pub struct KoreanRow {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city_kor: String,
    pub district_kor: String,
    pub status: String,
}

/// 슬러그 전용 출력 행
#[derive(Debug, Serialize)]
pub struct SlugRow {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub district: String,
    pub status: String,
}

/// 세 출력 행 집합
#[derive(Debug, Default)]
pub struct ExportSet {
    pub combined: Vec<CombinedRow>,
    pub korean: Vec<KoreanRow>,
    pub slugs: Vec<SlugRow>,
}

impl ExportSet {
    /// 레코드 목록을 분류해 세 출력 행 집합을 만든다
    ///
    /// id는 1부터 시작하는 순번 문자열이고, 미해석 값은 "unknown"으로
    /// 치환된다.
    pub fn from_records(records: &[ClinicRecord], classifier: &AddressClassifier) -> Self {
        let mut set = ExportSet::default();

        for (i, record) in records.iter().enumerate() {
            let id = (i + 1).to_string();
            let result = classifier.classify(&record.address);

            let city_kor = result.city_kor_or_unknown().to_string();
            let district_kor = result.district_kor_or_unknown().to_string();
            let district = result.district_code().to_string();

            set.combined.push(CombinedRow {
                id: id.clone(),
                name: record.name.clone(),
                address: record.address.clone(),
                city: result.city_slug.clone(),
                city_kor: city_kor.clone(),
                district: district.clone(),
                district_kor: district_kor.clone(),
                status: STATUS_CONFIRMED.to_string(),
            });
            set.korean.push(KoreanRow {
                id: id.clone(),
                name: record.name.clone(),
                address: record.address.clone(),
                city_kor,
                district_kor,
                status: STATUS_CONFIRMED.to_string(),
            });
            set.slugs.push(SlugRow {
                id,
                name: record.name.clone(),
                address: record.address.clone(),
                city: result.city_slug,
                district,
                status: STATUS_CONFIRMED.to_string(),
            });
        }

        set
    }

    /// 처리한 레코드 수
    pub fn len(&self) -> usize {
        self.combined.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
    }

    /// 세 JSON 파일을 출력 디렉터리에 쓴다
    pub fn write_to(&self, out_dir: &Path) -> Result<()> {
        write_json(&out_dir.join(COMBINED_FILE), &self.combined)?;
        write_json(&out_dir.join(KOREAN_FILE), &self.korean)?;
        write_json(&out_dir.join(SLUGS_FILE), &self.slugs)?;
        Ok(())
    }
}

/// JSON 배열을 들여쓰기해 파일로 쓴다 (한글은 이스케이프하지 않는다)
fn write_json<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(rows)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), rows = rows.len(), "wrote export file");
    Ok(())
}

/// 입력 JSON을 읽어 분류하고 세 출력 파일을 쓴다
///
/// 반환값은 처리한 레코드 수.
pub fn run(input: &Path, out_dir: &Path) -> Result<usize> {
    let raw = fs::read_to_string(input)?;
    let records: Vec<ClinicRecord> = serde_json::from_str(&raw)?;
    info!(input = %input.display(), records = records.len(), "loaded clinic records");

    let set = ExportSet::from_records(&records, AddressClassifier::global());

    fs::create_dir_all(out_dir)?;
    set.write_to(out_dir)?;
    info!(out_dir = %out_dir.display(), rows = set.len(), "export complete");

    Ok(set.len())
}
