//! Report fixtures shaped like a well-behaved narrative service response.

use serde_json::{Value, json};

fn action(title: &str) -> Value {
    json!({
        "title": title,
        "shortDesc": "在晨光里慢下来",
        "fullNarrative": "第一段。\n第二段。",
        "visualMetaphor": "一盏在雾中亮起的灯",
        "energyCost": "补充木能"
    })
}

fn luck(label: &str) -> Value {
    json!({
        "label": label,
        "suit": ["整理书桌"],
        "avoid": ["熬夜"],
        "actions": [
            action(&format!("{label}行动一")),
            action(&format!("{label}行动二")),
            action(&format!("{label}行动三")),
        ],
        "affirmation": format!("{label}的我安然自在。"),
        "narrative": format!("{label}气场平稳。")
    })
}

/// A complete, schema-valid report as the narrative service would return it.
/// Tests remove or corrupt fields from this to exercise validation.
#[must_use]
pub fn valid_report_json() -> Value {
    json!({
        "zodiac": "金牛座",
        "zodiacStory": "沉静而坚韧。",
        "baziElements": { "wood": 30, "fire": 15, "earth": 25, "metal": 10, "water": 20 },
        "baziNarrative": "木气旺盛。",
        "humanDesign": "投射者",
        "humanStrategy": "等待邀请",
        "humanDesignStory": "你擅长引导。",
        "weatherContext": {
            "temp": "22°C",
            "description": "晴朗",
            "elementalShift": "阳光助长了火气。"
        },
        "dailyLuck": luck("今日"),
        "weeklyLuck": luck("本周"),
        "monthlyLuck": luck("本月"),
        "soulMission": "照亮身边的人。",
        "environmentalResonance": "城市的节奏与你同频。",
        "harmonyScore": 87.5
    })
}
