use serde::{Deserialize, Serialize};
use std::fmt;

/// The ten SCL-90 dimensions. `Other` collects the items none of the nine
/// clinical factors claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    Somatization,
    ObsessiveCompulsive,
    InterpersonalSensitivity,
    Depression,
    Anxiety,
    Hostility,
    PhobicAnxiety,
    ParanoidIdeation,
    Psychoticism,
    Other,
}

impl FactorKind {
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Somatization => "somatization",
            Self::ObsessiveCompulsive => "obsessive_compulsive",
            Self::InterpersonalSensitivity => "interpersonal_sensitivity",
            Self::Depression => "depression",
            Self::Anxiety => "anxiety",
            Self::Hostility => "hostility",
            Self::PhobicAnxiety => "phobic_anxiety",
            Self::ParanoidIdeation => "paranoid_ideation",
            Self::Psychoticism => "psychoticism",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Factor {
    pub kind: FactorKind,
    /// Display label, also the key of the stored `factorScores` map.
    pub name: &'static str,
    pub description: &'static str,
    pub item_ids: &'static [u8],
}

/// Factor table in report order.
pub static FACTORS: [Factor; 10] = [
    Factor {
        kind: FactorKind::Somatization,
        name: "躯体化",
        description: "反映身体不适感，如头痛、心悸、肌肉酸痛及各种疼痛。",
        item_ids: &[1, 4, 12, 27, 40, 42, 48, 49, 52, 53, 56, 58],
    },
    Factor {
        kind: FactorKind::ObsessiveCompulsive,
        name: "强迫症状",
        description: "反映难以摆脱的无意义思想、冲动、行为，以及认知障碍。",
        item_ids: &[3, 9, 10, 28, 38, 45, 46, 51, 55, 65],
    },
    Factor {
        kind: FactorKind::InterpersonalSensitivity,
        name: "人际敏感",
        description: "反映社交中的不自在感、自卑感及对他人的评价敏感。",
        item_ids: &[6, 21, 34, 36, 37, 41, 61, 69, 73],
    },
    Factor {
        kind: FactorKind::Depression,
        name: "抑郁",
        description: "反映情绪低落、悲观、生活兴趣减退及动力下降。",
        item_ids: &[5, 14, 15, 20, 22, 26, 29, 30, 31, 32, 54, 71, 79],
    },
    Factor {
        kind: FactorKind::Anxiety,
        name: "焦虑",
        description: "反映神经过敏、紧张、烦躁、恐惧感及躯体焦虑表现。",
        item_ids: &[2, 17, 23, 33, 39, 57, 72, 78, 80, 86],
    },
    Factor {
        kind: FactorKind::Hostility,
        name: "敌对",
        description: "反映愤怒和冲动控制。包括烦恼、爆发脾气、争论及伤害冲动。",
        item_ids: &[11, 24, 63, 67, 74, 81],
    },
    Factor {
        kind: FactorKind::PhobicAnxiety,
        name: "恐怖",
        description: "反映对特定环境（如空旷场所、人群、交通工具）的非理性恐惧。",
        item_ids: &[13, 25, 47, 50, 70, 75, 82],
    },
    Factor {
        kind: FactorKind::ParanoidIdeation,
        name: "偏执",
        description: "反映思维倾向。包括猜疑、受骗感、不信任感及思维狭隘。",
        item_ids: &[8, 18, 43, 68, 76, 83],
    },
    Factor {
        kind: FactorKind::Psychoticism,
        name: "精神病性",
        description: "反映孤独感、被动体验、以及幻觉或特殊的思维逻辑。",
        item_ids: &[7, 16, 35, 62, 77, 84, 85, 87, 88, 90],
    },
    Factor {
        kind: FactorKind::Other,
        name: "其他",
        description: "反映基础生理功能，如近期睡眠质量与饮食状况。",
        item_ids: &[19, 44, 59, 60, 64, 66, 89],
    },
];

impl Factor {
    #[must_use]
    pub fn contains(&self, item_id: u8) -> bool {
        self.item_ids.contains(&item_id)
    }
}

#[must_use]
pub fn factor(kind: FactorKind) -> &'static Factor {
    // FACTORS is declared in enum order.
    &FACTORS[kind as usize]
}

/// Returns the factor owning `item_id`. The first factor listing the item wins,
/// and anything unclaimed falls back to `Other`.
#[must_use]
pub fn factor_for_item(item_id: u8) -> &'static Factor {
    FACTORS
        .iter()
        .find(|f| f.contains(item_id))
        .unwrap_or_else(|| factor(FactorKind::Other))
}
