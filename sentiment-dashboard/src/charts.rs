use {
    std::{fs, path::{Path, PathBuf}},
    anyhow::{Context, Result},
    tracing::{info, warn},
    plotters::prelude::*,
    sentiment_core::{
        aggregator::{Aggregates, PlatformCrossTab, SentimentCounts},
        classifier::Sentiment,
    },
};

pub const COUNTS_CHART_FILE: &str = "sentiment_counts.svg";
pub const PLATFORM_CHART_FILE: &str = "platform_sentiment.svg";

const BAR_HALF_WIDTH: f64 = 0.35;

pub fn render_charts(output_dir: &Path, aggregates: &Aggregates) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create chart output directory {}", output_dir.display()))?;

    let mut rendered = Vec::new();

    let counts_path = output_dir.join(COUNTS_CHART_FILE);
    draw_counts_chart(&counts_path, &aggregates.counts)
        .with_context(|| format!("failed to draw {}", counts_path.display()))?;
    info!("sentiment count chart saved to {}", counts_path.display());
    rendered.push(counts_path);

    if aggregates.cross_tab.is_empty() {
        warn!("no comments with a platform, skipping platform chart");
        return Ok(rendered);
    }

    let platform_path = output_dir.join(PLATFORM_CHART_FILE);
    draw_platform_chart(&platform_path, &aggregates.cross_tab)
        .with_context(|| format!("failed to draw {}", platform_path.display()))?;
    info!("platform sentiment chart saved to {}", platform_path.display());
    rendered.push(platform_path);

    Ok(rendered)
}

pub fn draw_counts_chart(path: &Path, counts: &SentimentCounts) -> Result<()> {
    let ranked = counts.ranked();
    let names: Vec<&str> = ranked.iter().map(|(label, _)| label.as_str()).collect();
    let max_count = ranked.iter().map(|(_, count)| *count).max().unwrap_or(0);

    let root = SVGBackend::new(path, (700, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Overall Sentiment Count", ("sans-serif", 26))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(category_range(names.len()), 0u32..y_limit(max_count))?;

    let category_label = |x: &f64| category_name(&names, *x);
    chart.configure_mesh()
        .disable_x_mesh()
        .x_labels(names.len())
        .x_label_formatter(&category_label)
        .x_desc("Sentiment")
        .y_desc("Number Of Comments")
        .draw()?;

    chart.draw_series(ranked.iter().enumerate().flat_map(|(index, (label, count))| {
        bar(index, 0, *count as u32, count_color(*label))
    }))?;

    root.present()?;
    Ok(())
}

pub fn draw_platform_chart(path: &Path, cross_tab: &PlatformCrossTab) -> Result<()> {
    let platforms: Vec<&str> = cross_tab.platforms().collect();

    let root = SVGBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Platform-wise Sentiment Comparison", ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(category_range(platforms.len()), 0u32..y_limit(cross_tab.max_platform_total()))?;

    let category_label = |x: &f64| category_name(&platforms, *x);
    chart.configure_mesh()
        .disable_x_mesh()
        .x_labels(platforms.len())
        .x_label_formatter(&category_label)
        .x_desc("Platform")
        .y_desc("Number Of Comments")
        .draw()?;

    // one series per label so each gets a legend entry; segments stack in Sentiment::ALL order
    for (position, label) in Sentiment::ALL.iter().enumerate() {
        let color = segment_color(*label);
        let segments = cross_tab.rows().enumerate().flat_map(|(index, (_, counts))| {
            let bottom: usize = Sentiment::ALL[..position].iter().map(|v| counts.get(*v)).sum();
            let top = bottom + counts.get(*label);
            bar(index, bottom as u32, top as u32, color)
        });

        chart.draw_series(segments)?
            .label(label.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// Filled bar plus black outline, centered on the category index.
fn bar(index: usize, bottom: u32, top: u32, color: RGBColor) -> [Rectangle<(f64, u32)>; 2] {
    let left = index as f64 - BAR_HALF_WIDTH;
    let right = index as f64 + BAR_HALF_WIDTH;

    [
        Rectangle::new([(left, bottom), (right, top)], color.filled()),
        Rectangle::new([(left, bottom), (right, top)], BLACK.stroke_width(1)),
    ]
}

// Categories sit on integers 0..n, so tick marks with step >= 1 land on bar centers.
fn category_range(categories: usize) -> std::ops::Range<f64> {
    -0.5..(categories.max(1) as f64 - 0.5)
}

fn category_name(names: &[&str], x: f64) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }

    names.get(rounded as usize).map(|v| v.to_string()).unwrap_or_default()
}

fn y_limit(max_value: usize) -> u32 {
    (max_value + max_value / 10 + 1) as u32
}

fn count_color(label: Sentiment) -> RGBColor {
    match label {
        Sentiment::Positive => RGBColor(0x22, 0x8B, 0x22),
        Sentiment::Negative => RGBColor(0xB2, 0x22, 0x22),
        Sentiment::Neutral => RGBColor(0x70, 0x80, 0x90),
    }
}

fn segment_color(label: Sentiment) -> RGBColor {
    match label {
        Sentiment::Positive => RGBColor(0x90, 0xEE, 0x90),
        Sentiment::Negative => RGBColor(0xFA, 0x80, 0x72),
        Sentiment::Neutral => RGBColor(0xD3, 0xD3, 0xD3),
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        sentiment_core::classifier::Sentiment::*,
        tempfile::tempdir,
    };

    fn aggregates(pairs: Vec<(&str, Sentiment)>) -> Aggregates {
        let counts = SentimentCounts::from_labels(pairs.iter().map(|v| v.1));
        let percentages = counts.percentages().unwrap();

        Aggregates {
            counts,
            percentages,
            cross_tab: PlatformCrossTab::from_pairs(pairs),
        }
    }

    #[test]
    fn category_names_only_on_integer_ticks() {
        let names = ["Positive", "Negative"];

        assert_eq!(category_name(&names, 0.0), "Positive");
        assert_eq!(category_name(&names, 1.0), "Negative");
        assert_eq!(category_name(&names, 0.5), "");
        assert_eq!(category_name(&names, 2.0), "");
        assert_eq!(category_name(&names, -1.0), "");
    }

    #[test]
    fn y_limit_leaves_headroom() {
        assert_eq!(y_limit(0), 1);
        assert_eq!(y_limit(3), 4);
        assert_eq!(y_limit(100), 111);
    }

    #[test]
    fn renders_both_charts() {
        let dir = tempdir().unwrap();
        let aggregates = aggregates(vec![("Twitter", Positive), ("Twitter", Negative), ("Reddit", Neutral)]);

        let rendered = render_charts(dir.path(), &aggregates).unwrap();

        assert_eq!(rendered, vec![dir.path().join(COUNTS_CHART_FILE), dir.path().join(PLATFORM_CHART_FILE)]);
        let platform_chart = fs::read_to_string(dir.path().join(PLATFORM_CHART_FILE)).unwrap();
        assert!(platform_chart.contains("<svg"));
        assert!(platform_chart.contains("Twitter"));
        assert!(platform_chart.contains("Reddit"));
    }

    #[test]
    fn single_label_single_platform_renders() {
        let dir = tempdir().unwrap();

        let rendered = render_charts(dir.path(), &aggregates(vec![("Reddit", Positive)])).unwrap();

        assert_eq!(rendered.len(), 2);
    }

    #[test]
    fn platform_chart_is_skipped_without_platforms() {
        let dir = tempdir().unwrap();

        let rendered = render_charts(dir.path(), &aggregates(vec![("", Positive)])).unwrap();

        assert_eq!(rendered, vec![dir.path().join(COUNTS_CHART_FILE)]);
    }
}
