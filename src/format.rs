use std::collections::HashSet;

use crate::config::LivingPolicy;
use crate::weather::{CurrentConditions, LivingIndex, WeatherData};

/// Living indexes shown under the allow-list policy
pub const SELECTED_LIVING: &[&str] = &[
    "穿衣指数",
    "感冒指数",
    "紫外线强度指数",
    "洗车指数",
    "运动指数",
    "舒适度指数",
    "防晒指数",
];

/// Renders the text reply for a successful query.
///
/// Blocks appear in a fixed order: header, conditions, living indexes, then
/// the warning block when the API sent one.
pub fn render_report(data: &WeatherData, policy: LivingPolicy) -> String {
    let mut out = String::new();
    render_conditions(&mut out, &data.current);

    out.push_str("📊 **生活指数精选**\n");
    for item in select_living(&data.living, policy) {
        out.push_str(&format!("• {}: {} —— {}\n", item.name, item.index, item.tips));
    }

    if let Some(warning) = data.warning() {
        out.push_str("\n⚠️ **预警信息**\n");
        match warning {
            serde_json::Value::String(s) => out.push_str(s.trim()),
            other => out.push_str(
                &serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
            ),
        }
        out.push('\n');
    }

    out
}

fn render_conditions(out: &mut String, c: &CurrentConditions) {
    out.push_str(&format!("🌤️ **{} 实时天气** (更新: {})\n\n", c.city, c.time));
    out.push_str(&format!("天气: {} ({})\n", c.weather, c.weather_english));
    out.push_str(&format!("温度: {}°C (体感 {}°F)\n", c.temp, c.fahrenheit));
    out.push_str(&format!("湿度: {}\n", c.humidity));
    out.push_str(&format!("风力: {} {}\n", c.wind, c.wind_speed));
    out.push_str(&format!("能见度: {}\n", c.visibility));
    out.push_str(&format!("空气质量: PM2.5 {} (AQI {})\n\n", c.air_pm25, c.air));
}

/// Picks living-index entries in source order. Under the allow-list policy a
/// name is rendered at most once.
pub fn select_living(living: &[LivingIndex], policy: LivingPolicy) -> Vec<&LivingIndex> {
    match policy {
        LivingPolicy::FirstN(n) => living.iter().take(n).collect(),
        LivingPolicy::AllowList => {
            let mut seen = HashSet::new();
            living
                .iter()
                .filter(|&item| SELECTED_LIVING.contains(&item.name.as_str()))
                .filter(|&item| seen.insert(item.name.as_str()))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(living: serde_json::Value, warning: serde_json::Value) -> WeatherData {
        serde_json::from_value(json!({
            "current": {
                "city": "北京",
                "time": "2024-05-01 12:00",
                "weather": "晴",
                "weatherEnglish": "Sunny",
                "temp": "25",
                "fahrenheit": "77",
                "humidity": "40%",
                "wind": "北风",
                "windSpeed": "3级",
                "visibility": "10km",
                "air_pm25": "35",
                "air": "50"
            },
            "living": living,
            "warning": warning
        }))
        .unwrap()
    }

    fn entry(name: &str) -> serde_json::Value {
        json!({ "name": name, "index": "适宜", "tips": format!("{}建议", name) })
    }

    #[test]
    fn conditions_render_in_fixed_order() {
        let text = render_report(&data(json!([]), json!(null)), LivingPolicy::AllowList);
        let lines = [
            "🌤️ **北京 实时天气** (更新: 2024-05-01 12:00)",
            "天气: 晴 (Sunny)",
            "温度: 25°C (体感 77°F)",
            "湿度: 40%",
            "风力: 北风 3级",
            "能见度: 10km",
            "空气质量: PM2.5 35 (AQI 50)",
            "📊 **生活指数精选**",
        ];
        let mut cursor = 0;
        for line in lines {
            let pos = text[cursor..]
                .find(line)
                .unwrap_or_else(|| panic!("missing or out of order: {}", line));
            cursor += pos + line.len();
        }
        assert!(!text.contains("预警"));
    }

    #[test]
    fn allow_list_keeps_source_order_without_duplicates() {
        let living = json!([
            entry("运动指数"),
            entry("钓鱼指数"),
            entry("穿衣指数"),
            entry("运动指数"),
            entry("防晒指数"),
        ]);
        let d = data(living, json!(null));
        let names: Vec<&str> = select_living(&d.living, LivingPolicy::AllowList)
            .into_iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["运动指数", "穿衣指数", "防晒指数"]);

        let text = render_report(&d, LivingPolicy::AllowList);
        assert!(text.contains("• 运动指数: 适宜 —— 运动指数建议\n"));
        assert!(!text.contains("钓鱼指数"));
        assert_eq!(text.matches("运动指数:").count(), 1);
    }

    #[test]
    fn first_n_takes_unfiltered_prefix() {
        let living = json!([entry("钓鱼指数"), entry("穿衣指数"), entry("晾晒指数")]);
        let d = data(living, json!(null));
        let names: Vec<&str> = select_living(&d.living, LivingPolicy::FirstN(2))
            .into_iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["钓鱼指数", "穿衣指数"]);
    }

    #[test]
    fn warning_block_is_appended_when_present() {
        let d = data(json!([]), json!({ "title": "高温黄色预警" }));
        let text = render_report(&d, LivingPolicy::AllowList);
        let warning_at = text.find("⚠️ **预警信息**").unwrap();
        assert!(warning_at > text.find("📊").unwrap());
        assert!(text.contains("高温黄色预警"));
    }
}
