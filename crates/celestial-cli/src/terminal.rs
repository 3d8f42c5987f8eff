//! Plain-text rendering of the wizard and the report.

use std::fmt;

use celestial_intake::domain::steps::IntakeStep;
use celestial_oracle::domain::report::LuckScope;
use celestial_report::domain::view::{ActionDetail, ElementBar, LuckBlock, ReportView};

/// Application title.
pub const TITLE: &str = "星命心旅";

/// Key help shown under the report.
pub const REPORT_HELP: &str =
    "[d/w/m] 切换时段  [h 元素] 聚焦五行  [1-3] 开启心旅行动  [x] 关闭  [r] 重新锚定宇宙坐标  [q] 退出";

const BAR_WIDTH: f64 = 20.0;

/// The prompt for one wizard step, with the value entered so far.
pub struct StepPrompt<'a> {
    /// Step shown.
    pub step: IntakeStep,
    /// Current field value.
    pub current: &'a str,
}

impl fmt::Display for StepPrompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "[{}/3] {}", self.step.number(), self.step.title())?;
        writeln!(f, "      {}", self.step.subtitle())?;
        if !self.current.is_empty() {
            writeln!(f, "      当前：{}（回车保留）", self.current)?;
        }
        if self.step.previous().is_some() {
            writeln!(f, "      输入 < 返回")?;
        }
        write!(f, "{} > ", self.step.advance_label())
    }
}

/// A full report screen.
pub struct ReportScreen<'a> {
    /// Projected report.
    pub view: &'a ReportView,
}

/// `31°N`, `33°S`, `104°E`, `70°W`.
struct Bearing {
    degrees: f64,
    positive: char,
    negative: char,
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hemisphere = if self.degrees < 0.0 {
            self.negative
        } else {
            self.positive
        };
        write!(f, "{:.0}°{hemisphere}", self.degrees.abs())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar(value: f64) -> String {
    let cells = (value.clamp(0.0, 100.0) / 100.0 * BAR_WIDTH).round() as usize;
    "█".repeat(cells)
}

fn write_bar(f: &mut fmt::Formatter<'_>, bar_view: &ElementBar) -> fmt::Result {
    let marker = if bar_view.highlighted { '▶' } else { ' ' };
    writeln!(
        f,
        " {marker} {} {:<20} {}",
        bar_view.label,
        bar(bar_view.value),
        bar_view.value
    )
}

fn write_tabs(f: &mut fmt::Formatter<'_>, selected: LuckScope) -> fmt::Result {
    let tabs: Vec<String> = LuckScope::ALL
        .iter()
        .map(|&scope| {
            if scope == selected {
                format!("【{}】", scope.label())
            } else {
                format!(" {} ", scope.label())
            }
        })
        .collect();
    writeln!(f, "── {} ──", tabs.join(""))
}

fn write_luck(f: &mut fmt::Formatter<'_>, luck: &LuckBlock) -> fmt::Result {
    write_tabs(f, luck.scope)?;
    writeln!(f, "宜：{}", luck.suit.join("、"))?;
    writeln!(f, "忌：{}", luck.avoid.join("、"))?;
    writeln!(f, "开启心旅行动")?;
    for action in &luck.actions {
        writeln!(f, "  {}. {}：{}", action.position, action.title, action.short_desc)?;
    }
    writeln!(f, "{}", luck.narrative)?;
    writeln!(f, "「{}」", luck.affirmation)
}

fn write_detail(f: &mut fmt::Formatter<'_>, detail: &ActionDetail) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "┌ {}  [{}]", detail.title, detail.energy_cost)?;
    writeln!(f, "│ “{}”", detail.visual_metaphor)?;
    for paragraph in &detail.paragraphs {
        writeln!(f, "│ {paragraph}")?;
    }
    writeln!(f, "└ 铭记此念")
}

impl fmt::Display for ReportScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.view;

        writeln!(f)?;
        writeln!(f, "══ {TITLE} ══")?;

        let default_marker = if view.location.is_default { "（默认）" } else { "" };
        let latitude = Bearing {
            degrees: view.location.latitude,
            positive: 'N',
            negative: 'S',
        };
        let longitude = Bearing {
            degrees: view.location.longitude,
            positive: 'E',
            negative: 'W',
        };
        writeln!(
            f,
            "时空坐标 {latitude}, {longitude}{default_marker}    天象实况 {} {}",
            view.weather.description,
            view.weather.temp
        )?;
        writeln!(f, "{}", view.resonance)?;

        writeln!(f)?;
        writeln!(f, "五行原力场")?;
        for bar_view in &view.element_bars {
            write_bar(f, bar_view)?;
        }
        writeln!(f, "{}", view.element_caption)?;
        writeln!(f, "{}", view.element_narrative)?;

        writeln!(f)?;
        writeln!(f, "星系本质 · {}", view.zodiac.title)?;
        writeln!(f, "{}", view.zodiac.body)?;
        match &view.archetype.tag {
            Some(tag) => writeln!(f, "能量图谱 · {}  {tag}", view.archetype.title)?,
            None => writeln!(f, "能量图谱 · {}", view.archetype.title)?,
        }
        writeln!(f, "{}", view.archetype.body)?;

        writeln!(f)?;
        write_luck(f, &view.luck)?;

        if let Some(detail) = &view.detail {
            write_detail(f, detail)?;
        }
        Ok(())
    }
}
