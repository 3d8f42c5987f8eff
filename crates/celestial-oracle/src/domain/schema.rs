//! Output contract sent to the narrative service.
//!
//! The schema uses the service's OpenAPI subset (`OBJECT`, `STRING`, ...)
//! and mirrors `AnalysisResult` field for field; every property is required.

use serde_json::{Value, json};

use super::report::ACTIONS_PER_SCOPE;

/// Persona and duties given to the model with every request.
pub const SYSTEM_INSTRUCTION: &str = "你是一位全知且极具文学底蕴的“心流星命师”。
你的任务是为行者打造一份沉浸式的灵魂报告。
1. **五行分析**：不仅给出百分比，还要描述它们在今日特定天气和地理环境下的“化学反应”。
2. **生辰深度**：结合星座、八字和人类图，撰写三段极其优美、富有哲学感的深度分析。
3. **环境共鸣**：基于提供的经纬度和推断的天气，描述周围环境如何调动或压制行者的能量场。
4. **行动指南**：提供三个带有“视觉隐喻”和“深度故事”的建议，引导行者进入心流。

JSON输出格式必须严格遵守给定的Schema。风格：唯美、治愈、深邃。";

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn number() -> Value {
    json!({ "type": "NUMBER" })
}

fn string_list() -> Value {
    json!({ "type": "ARRAY", "items": string() })
}

/// Builds an `OBJECT` schema whose properties are all required.
fn object(properties: &[(&str, Value)]) -> Value {
    let required: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();
    let properties: serde_json::Map<String, Value> = properties
        .iter()
        .map(|(name, schema)| ((*name).to_owned(), schema.clone()))
        .collect();
    json!({ "type": "OBJECT", "properties": properties, "required": required })
}

fn action_story() -> Value {
    object(&[
        ("title", string()),
        ("shortDesc", string()),
        ("fullNarrative", string()),
        ("visualMetaphor", string()),
        ("energyCost", string()),
    ])
}

fn luck_analysis() -> Value {
    let count = ACTIONS_PER_SCOPE.to_string();
    object(&[
        ("label", string()),
        ("suit", string_list()),
        ("avoid", string_list()),
        (
            "actions",
            json!({
                "type": "ARRAY",
                "items": action_story(),
                "minItems": count,
                "maxItems": count,
            }),
        ),
        ("affirmation", string()),
        ("narrative", string()),
    ])
}

/// The full response schema for one report.
#[must_use]
pub fn response_schema() -> Value {
    object(&[
        ("zodiac", string()),
        ("zodiacStory", string()),
        (
            "baziElements",
            object(&[
                ("wood", number()),
                ("fire", number()),
                ("earth", number()),
                ("metal", number()),
                ("water", number()),
            ]),
        ),
        ("baziNarrative", string()),
        ("humanDesign", string()),
        ("humanStrategy", string()),
        ("humanDesignStory", string()),
        (
            "weatherContext",
            object(&[
                ("temp", string()),
                ("description", string()),
                ("elementalShift", string()),
            ]),
        ),
        ("dailyLuck", luck_analysis()),
        ("weeklyLuck", luck_analysis()),
        ("monthlyLuck", luck_analysis()),
        ("soulMission", string()),
        ("environmentalResonance", string()),
        ("harmonyScore", number()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::AnalysisResult;
    use celestial_test_support::valid_report_json;

    #[test]
    fn test_schema_requires_every_top_level_field() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        assert_eq!(required.len(), 14);
        assert!(required.contains(&"harmonyScore"));
        assert!(required.contains(&"weatherContext"));
    }

    #[test]
    fn test_schema_properties_match_report_fields() {
        let schema = response_schema();
        let report: AnalysisResult = serde_json::from_value(valid_report_json()).unwrap();
        let serialized = serde_json::to_value(report).unwrap();

        let mut schema_keys: Vec<&String> =
            schema["properties"].as_object().unwrap().keys().collect();
        let mut report_keys: Vec<&String> = serialized.as_object().unwrap().keys().collect();
        schema_keys.sort();
        report_keys.sort();

        assert_eq!(schema_keys, report_keys);
    }

    #[test]
    fn test_actions_are_pinned_to_three_items() {
        let schema = response_schema();
        let actions = &schema["properties"]["dailyLuck"]["properties"]["actions"];

        assert_eq!(actions["minItems"], "3");
        assert_eq!(actions["maxItems"], "3");
        assert_eq!(actions["items"]["required"].as_array().unwrap().len(), 5);
    }
}
