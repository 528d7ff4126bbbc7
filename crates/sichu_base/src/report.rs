//! Plain-text chart report (Japanese layout).

use crate::chart::{BirthInfo, Chart, ChartConfig, compute_chart};
use crate::error::ChartError;

/// Render a computed chart as a multi-section text report.
///
/// Sections: birth info, the four pillars, the five-element tally, and the
/// ten gods relative to the day stem. Lines are joined with `\n` and there
/// is no trailing newline.
pub fn format_report(chart: &Chart) -> String {
    let BirthInfo {
        year,
        month,
        day,
        hour,
    } = chart.birth;
    let p = &chart.pillars;
    let tg = &chart.ten_gods;

    let mut lines = vec![
        format!("生年月日時: {year}年{month}月{day}日 {hour}:00"),
        String::new(),
        "=== 四柱命式 ===".to_string(),
        format!("年柱: {} ({year}年)", p.year),
        format!("月柱: {} ({month}月)", p.month),
        format!("日柱: {} ({day}日)", p.day),
        format!("時柱: {} ({hour}:00頃)", p.hour),
        String::new(),
        "=== 五行分析 ===".to_string(),
    ];

    for (element, members) in chart.elements.non_empty() {
        let joined = members
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "{}性: {joined} ({}個)",
            element.kanji(),
            members.len()
        ));
    }

    lines.push(String::new());
    lines.push(format!("=== 通変星分析（日干{}基準）===", tg.day_stem));
    lines.push(format!("年干 {}: {}", p.year.stem, tg.year));
    lines.push(format!("月干 {}: {}", p.month.stem, tg.month));
    lines.push(format!("日干 {}: {} (自分自身)", p.day.stem, tg.day));
    lines.push(format!("時干 {}: {}", p.hour.stem, tg.hour));

    lines.join("\n")
}

/// Compute and format a chart with the default (lenient) configuration.
pub fn four_pillars_report(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
) -> Result<String, ChartError> {
    four_pillars_report_with(
        &BirthInfo::new(year, month, day, hour),
        &ChartConfig::default(),
    )
}

/// Compute and format a chart with an explicit configuration.
pub fn four_pillars_report_with(
    birth: &BirthInfo,
    config: &ChartConfig,
) -> Result<String, ChartError> {
    let chart = compute_chart(birth, config)?;
    Ok(format_report(&chart))
}
