use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the 7 coarse trait dimensions (4 temperament, 3 character).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum Dimension {
    NS,
    HA,
    RD,
    PS,
    SD,
    CO,
    ST,
}

/// One of the 29 fine-grained subdimensions. Every variant belongs to exactly
/// one [`Dimension`]; the mapping is total and checked at compile time by the
/// match in [`Subdimension::dimension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum Subdimension {
    NS1,
    NS2,
    NS3,
    NS4,
    HA1,
    HA2,
    HA3,
    HA4,
    RD1,
    RD2,
    RD3,
    PS1,
    PS2,
    PS3,
    PS4,
    SD1,
    SD2,
    SD3,
    SD4,
    SD5,
    CO1,
    CO2,
    CO3,
    CO4,
    CO5,
    ST1,
    ST2,
    ST3,
}

impl Dimension {
    pub const ALL: [Dimension; 7] = [
        Dimension::NS,
        Dimension::HA,
        Dimension::RD,
        Dimension::PS,
        Dimension::SD,
        Dimension::CO,
        Dimension::ST,
    ];

    /// Ordered member subdimensions of this dimension.
    pub fn subdimensions(self) -> &'static [Subdimension] {
        use Subdimension::*;
        match self {
            Dimension::NS => &[NS1, NS2, NS3, NS4],
            Dimension::HA => &[HA1, HA2, HA3, HA4],
            Dimension::RD => &[RD1, RD2, RD3],
            Dimension::PS => &[PS1, PS2, PS3, PS4],
            Dimension::SD => &[SD1, SD2, SD3, SD4, SD5],
            Dimension::CO => &[CO1, CO2, CO3, CO4, CO5],
            Dimension::ST => &[ST1, ST2, ST3],
        }
    }

    /// Fixed maximum attainable score, used only when presentation renders a
    /// percentage. The constants come from the reference instrument and are
    /// not recomputed from item counts.
    pub fn display_max(self) -> i32 {
        match self {
            Dimension::NS => 40,
            Dimension::HA => 35,
            Dimension::RD => 24,
            Dimension::PS => 35,
            Dimension::SD => 44,
            Dimension::CO => 42,
            Dimension::ST => 33,
        }
    }

    /// Human-readable label; presentation-only, the engine never reads it.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::NS => "자극추구 (Novelty Seeking)",
            Dimension::HA => "위험회피 (Harm Avoidance)",
            Dimension::RD => "사회적 민감성 (Reward Dependence)",
            Dimension::PS => "인내력 (Persistence)",
            Dimension::SD => "자율성 (Self-Directedness)",
            Dimension::CO => "연대감 (Cooperativeness)",
            Dimension::ST => "자기초월 (Self-Transcendence)",
        }
    }
}

impl Subdimension {
    pub const ALL: [Subdimension; 28] = [
        Subdimension::NS1,
        Subdimension::NS2,
        Subdimension::NS3,
        Subdimension::NS4,
        Subdimension::HA1,
        Subdimension::HA2,
        Subdimension::HA3,
        Subdimension::HA4,
        Subdimension::RD1,
        Subdimension::RD2,
        Subdimension::RD3,
        Subdimension::PS1,
        Subdimension::PS2,
        Subdimension::PS3,
        Subdimension::PS4,
        Subdimension::SD1,
        Subdimension::SD2,
        Subdimension::SD3,
        Subdimension::SD4,
        Subdimension::SD5,
        Subdimension::CO1,
        Subdimension::CO2,
        Subdimension::CO3,
        Subdimension::CO4,
        Subdimension::CO5,
        Subdimension::ST1,
        Subdimension::ST2,
        Subdimension::ST3,
    ];

    /// Parent dimension. Total over all 29 variants, so an orphaned or
    /// misspelled code is unrepresentable.
    pub fn dimension(self) -> Dimension {
        use Subdimension::*;
        match self {
            NS1 | NS2 | NS3 | NS4 => Dimension::NS,
            HA1 | HA2 | HA3 | HA4 => Dimension::HA,
            RD1 | RD2 | RD3 => Dimension::RD,
            PS1 | PS2 | PS3 | PS4 => Dimension::PS,
            SD1 | SD2 | SD3 | SD4 | SD5 => Dimension::SD,
            CO1 | CO2 | CO3 | CO4 | CO5 => Dimension::CO,
            ST1 | ST2 | ST3 => Dimension::ST,
        }
    }

    /// Human-readable label; presentation-only.
    pub fn label(self) -> &'static str {
        use Subdimension::*;
        match self {
            NS1 => "탐색적 흥분",
            NS2 => "충동성",
            NS3 => "낭비성",
            NS4 => "무질서",
            HA1 => "예기불안",
            HA2 => "불확실성에 대한 두려움",
            HA3 => "낯선 사람에 대한 수줍음",
            HA4 => "쉽게 피로해짐",
            RD1 => "감상성",
            RD2 => "애착심",
            RD3 => "의존성",
            PS1 => "근면성",
            PS2 => "인내력",
            PS3 => "야심찬",
            PS4 => "완벽주의",
            SD1 => "책임감",
            SD2 => "목적성",
            SD3 => "자원개발성",
            SD4 => "자기수용성",
            SD5 => "의지적 자제력",
            CO1 => "사회적 수용성",
            CO2 => "공감성",
            CO3 => "유용성",
            CO4 => "연민",
            CO5 => "양심성",
            ST1 => "자기망각성",
            ST2 => "범우주적 동일시",
            ST3 => "영성수용",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl fmt::Display for Subdimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
