//! 행정구역 접미사 규칙
//!
//! 주소 토큰이 어떤 행정구역인지 접미사로 판별한다. 규칙은 정적 목록으로
//! 두고 우선순위 단계별로 검사해, 새 접미사 추가가 표 한 줄 수정으로
//! 끝나게 한다.

/// 행정구역 구분
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisionKind {
    /// 구 (자치구·일반구)
    Gu,
    /// 군
    Gun,
    /// 시 (도 산하의 시)
    Si,
}

/// 접미사 -> 행정구역 구분 규칙
#[derive(Debug)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub kind: DivisionKind,
    /// 낮을수록 먼저 검사한다
    pub priority: u8,
}

/// 규칙 목록
///
/// 구/군이 같은 단계에서 겨루고, 시는 구/군이 전혀 없을 때만 잡힌다.
pub const SUFFIX_RULES: &[SuffixRule] = &[
    SuffixRule {
        suffix: "구",
        kind: DivisionKind::Gu,
        priority: 0,
    },
    SuffixRule {
        suffix: "군",
        kind: DivisionKind::Gun,
        priority: 0,
    },
    SuffixRule {
        suffix: "시",
        kind: DivisionKind::Si,
        priority: 1,
    },
];

/// 토큰 창에서 구/군(차선으로 시) 토큰을 찾는다
///
/// 우선순위 단계마다 창을 앞에서부터 훑어, 그 단계의 접미사로 끝나는
/// 첫 토큰을 반환한다. 높은 단계에서 뒤에 있는 토큰이 낮은 단계의
/// 앞 토큰을 이긴다.
pub fn find_division_token<'a>(tokens: &[&'a str]) -> Option<(&'a str, DivisionKind)> {
    let mut tiers: Vec<u8> = SUFFIX_RULES.iter().map(|r| r.priority).collect();
    tiers.sort_unstable();
    tiers.dedup();

    for tier in tiers {
        for token in tokens {
            let hit = SUFFIX_RULES
                .iter()
                .filter(|r| r.priority == tier)
                .find(|r| token.ends_with(r.suffix));
            if let Some(rule) = hit {
                return Some((token, rule.kind));
            }
        }
    }

    None
}
