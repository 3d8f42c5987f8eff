//! The three wizard steps and their copy.

use serde::{Deserialize, Serialize};

/// A wizard step, numbered 1 to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum IntakeStep {
    /// Step 1: name.
    Name,
    /// Step 2: birth date.
    BirthDate,
    /// Step 3: birth time.
    BirthTime,
}

impl IntakeStep {
    /// One-based step number.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Name => 1,
            Self::BirthDate => 2,
            Self::BirthTime => 3,
        }
    }

    /// The following step, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Name => Some(Self::BirthDate),
            Self::BirthDate => Some(Self::BirthTime),
            Self::BirthTime => None,
        }
    }

    /// The preceding step, if any.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Name => None,
            Self::BirthDate => Some(Self::Name),
            Self::BirthTime => Some(Self::BirthDate),
        }
    }

    /// Question shown for this step.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Name => "你在这世间的称谓？",
            Self::BirthDate => "星辰交汇的那一天？",
            Self::BirthTime => "万物苏醒的时辰？",
        }
    }

    /// Supporting line shown under the question.
    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Name => "名字是能量的初次显化",
            Self::BirthDate => "日期标记了你灵魂降临的坐标",
            Self::BirthTime => "精确的时间能解析深层的能量流动",
        }
    }

    /// Label of the advance control.
    #[must_use]
    pub fn advance_label(self) -> &'static str {
        match self {
            Self::BirthTime => "开启共鸣",
            Self::Name | Self::BirthDate => "继续探索",
        }
    }
}

impl TryFrom<u8> for IntakeStep {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Name),
            2 => Ok(Self::BirthDate),
            3 => Ok(Self::BirthTime),
            other => Err(format!("step must be 1, 2, or 3, got {other}")),
        }
    }
}

impl From<IntakeStep> for u8 {
    fn from(step: IntakeStep) -> Self {
        step.number()
    }
}
