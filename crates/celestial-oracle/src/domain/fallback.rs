//! Deterministic offline report.
//!
//! Used whenever the narrative service cannot deliver. Only the action
//! titles depend on the profile; everything else is fixed copy.

use celestial_core::profile::Profile;

use super::report::{
    ActionStory, AnalysisResult, FiveElements, LuckAnalysis, LuckScope, WeatherContext,
};

/// Title templates the fallback selects from.
pub const ACTION_TITLES: [&str; 5] = ["月影冥想", "古木寻踪", "星光书写", "露台观云", "松针烹茶"];

/// Action indices used for every scope. Day, week, and month therefore carry
/// the same three titles.
const ACTION_INDICES: [u64; 3] = [1, 2, 3];

/// Sum of the leading UTF-16 code unit of each code point in
/// `name ++ birth_date`.
///
/// Code points outside the BMP contribute their high surrogate.
#[must_use]
pub fn seed(profile: &Profile) -> u64 {
    let mut units = [0_u16; 2];
    profile
        .name
        .chars()
        .chain(profile.birth_date.chars())
        .map(|c| u64::from(c.encode_utf16(&mut units)[0]))
        .sum()
}

/// Title of action `index` for a given seed.
#[must_use]
pub fn action_title(seed: u64, index: u64) -> &'static str {
    let len = ACTION_TITLES.len() as u64;
    // The remainder is always < 5.
    #[allow(clippy::cast_possible_truncation)]
    let slot = (seed.wrapping_add(index) % len) as usize;
    ACTION_TITLES[slot]
}

fn action(seed: u64, index: u64) -> ActionStory {
    ActionStory {
        title: action_title(seed, index).to_owned(),
        short_desc: "捕捉当下的心流时刻".to_owned(),
        full_narrative: "外界的喧嚣在此刻静止。由于你命格中水气与今日气候的共鸣，最适合通过这种温和而深邃的活动来锚定灵魂。你会发现，每一个微小的动作都藏着宇宙的暗示。".to_owned(),
        visual_metaphor: "一滴落在静谧湖面的晶莹晨露".to_owned(),
        energy_cost: "转化燥火为清泉".to_owned(),
    }
}

fn luck(seed: u64, scope: LuckScope) -> LuckAnalysis {
    LuckAnalysis {
        label: scope.label().to_owned(),
        suit: vec!["专注内观".to_owned(), "深度聆听".to_owned()],
        avoid: vec!["过早决策".to_owned(), "情绪投射".to_owned()],
        actions: ACTION_INDICES.iter().map(|&i| action(seed, i)).collect(),
        affirmation: "我与群星共呼吸，在这变幻的环境中寻找恒久的宁静。".to_owned(),
        narrative: "今日星盘显示一种罕见的和谐，适合将繁杂的思绪沉淀。".to_owned(),
    }
}

/// Builds the complete offline report for `profile`. Pure: the same profile
/// always yields the same report.
#[must_use]
pub fn simulate(profile: &Profile) -> AnalysisResult {
    let seed = seed(profile);
    AnalysisResult {
        zodiac: "银河守护者".to_owned(),
        zodiac_story: "你的星盘如同一张在晨曦中展开的地图。虽然你有着如群星般的闪耀，但更有着如深空般的包容。今日天象正缓慢移入你的核心宫位，唤醒那些沉睡的直觉。".to_owned(),
        bazi_elements: FiveElements {
            wood: 28.0,
            fire: 18.0,
            earth: 22.0,
            metal: 12.0,
            water: 20.0,
        },
        bazi_narrative: "你体内的木元素正如春芽般萌发，虽然土气稍重，但水的滋养让生命力得以在裂缝中顽强生长。今日的环境微冷，正好固化了你那略显跳脱的火能。".to_owned(),
        human_design: "显示型生产者".to_owned(),
        human_strategy: "回应并告知".to_owned(),
        human_design_story: "你是一个天生的能量发动机。你的灵魂使命是通过高频率的行为来点燃他人的火花。在这个具体的地理坐标上，你的能量场正呈现出一种扩张态势。".to_owned(),
        daily_luck: luck(seed, LuckScope::Day),
        weekly_luck: luck(seed, LuckScope::Week),
        monthly_luck: luck(seed, LuckScope::Month),
        soul_mission: "在每一次呼吸间，完成与宇宙的秘密交换。".to_owned(),
        environmental_resonance: "你所在的城市正经历某种细腻的情绪波动，空气中的湿度与你的命盘产生了奇妙的导电性。".to_owned(),
        harmony_score: 92.0,
        weather_context: WeatherContext {
            temp: "18°C".to_owned(),
            description: "微凉多云，偶有星光".to_owned(),
            elemental_shift: "水气滋润了你命盘中干涸的木性，促使直觉升华。".to_owned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, birth_date: &str) -> Profile {
        Profile::new(name, birth_date, "12:00")
    }

    #[test]
    fn test_seed_sums_character_codes() {
        // '晓' plus the ASCII codes of "1990-05-01" (499).
        let expected = u64::from(u32::from('晓')) + 499;
        assert_eq!(seed(&profile("晓", "1990-05-01")), expected);
    }

    #[test]
    fn test_seed_uses_high_surrogate_for_astral_characters() {
        // U+1F319 encodes as D83C DF19.
        assert_eq!(seed(&profile("🌙", "")), 0xD83C);
    }

    #[test]
    fn test_seed_ignores_birth_time_and_location() {
        let base = profile("Mira", "2001-12-24");
        let other = Profile::new("Mira", "2001-12-24", "23:59")
            .with_location(Some(celestial_core::location::Coordinates::new(1.0, 2.0)));

        assert_eq!(seed(&base), seed(&other));
        assert_eq!(simulate(&base), simulate(&other));
    }

    #[test]
    fn test_simulate_is_deterministic() {
        let p = profile("晓", "1990-05-01");
        assert_eq!(simulate(&p), simulate(&p));
    }

    #[test]
    fn test_simulate_selects_titles_from_seed_for_every_scope() {
        let p = profile("晓", "1990-05-01");
        let s = seed(&p);
        let expected: Vec<&str> = (1..=3)
            .map(|i| ACTION_TITLES[usize::try_from((s + i) % 5).unwrap()])
            .collect();

        let report = simulate(&p);

        for scope in LuckScope::ALL {
            let titles: Vec<&str> = report
                .luck(scope)
                .actions
                .iter()
                .map(|a| a.title.as_str())
                .collect();
            assert_eq!(titles, expected, "scope {scope:?}");
        }
    }

    #[test]
    fn test_simulate_titles_vary_with_input() {
        let a = simulate(&profile("a", "2000-01-01"));
        let b = simulate(&profile("b", "2000-01-01"));

        assert_ne!(a.daily_luck.actions[0].title, b.daily_luck.actions[0].title);
        assert_eq!(a.zodiac_story, b.zodiac_story);
    }

    #[test]
    fn test_simulate_produces_valid_report_with_fixed_constants() {
        let report = simulate(&profile("晓", "1990-05-01"));

        assert!(report.validate().is_ok());
        assert_eq!(report.zodiac, "银河守护者");
        assert_eq!(report.human_strategy, "回应并告知");
        assert!((report.harmony_score - 92.0).abs() < f64::EPSILON);
        assert!((report.bazi_elements.wood - 28.0).abs() < f64::EPSILON);
        assert_eq!(report.weather_context.temp, "18°C");
        assert_eq!(report.weekly_luck.label, "本周");
    }

    #[test]
    fn test_simulate_handles_empty_profile_fields() {
        let report = simulate(&profile("", ""));
        assert_eq!(report.monthly_luck.actions.len(), 3);
        assert_eq!(report.daily_luck.actions[0].title, ACTION_TITLES[1]);
    }
}
