use {
    std::fmt::{self, Display, Formatter},
    crate::{
        aggregator::{Aggregates, PlatformCrossTab},
        classifier::Sentiment,
    },
};

const COMPLETION_MESSAGE: &str = "Analysis Completed Successfully!";

// Counts, percentages and the platform table.
pub struct Overview<'a>(pub &'a Aggregates);

// Totals block and the completion message.
pub struct Summary<'a>(pub &'a Aggregates);

pub struct CrossTabTable<'a>(pub &'a PlatformCrossTab);

pub fn render_report(aggregates: &Aggregates) -> String {
    format!("{}{}", Overview(aggregates), Summary(aggregates))
}

impl Display for Overview<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let aggregates = self.0;

        writeln!(f, "\n=== Overall Sentiment Counts ===")?;
        for (label, count) in aggregates.counts.ranked() {
            writeln!(f, "{} : {}", label, count)?;
        }

        writeln!(f, "\n=== Sentiment Percentage ===")?;
        for label in Sentiment::ALL {
            writeln!(f, "{:<8} : {:.2}%", label, aggregates.percentages.get(label))?;
        }

        writeln!(f, "\n=== Platform-wise Sentiment Table ===")?;
        write!(f, "{}", CrossTabTable(&aggregates.cross_tab))
    }
}

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let counts = &self.0.counts;

        writeln!(f, "\n=== Final Summary ===")?;
        writeln!(f, "Total Comments Analyzed : {}", counts.total())?;
        writeln!(f, "Positive Comments       : {}", counts.get(Sentiment::Positive))?;
        writeln!(f, "Negative Comments       : {}", counts.get(Sentiment::Negative))?;
        writeln!(f, "Neutral Comments        : {}", counts.get(Sentiment::Neutral))?;
        writeln!(f, "\n{}", COMPLETION_MESSAGE)
    }
}

impl Display for CrossTabTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let cross_tab = self.0;

        let index_width = cross_tab.platforms()
            .map(|v| v.chars().count())
            .chain(["Sentiment".len(), "Platform".len()])
            .max()
            .unwrap_or(0);

        let column_widths: Vec<usize> = Sentiment::ALL.iter()
            .map(|label| {
                cross_tab.rows()
                    .map(|(_, counts)| counts.get(*label).to_string().len())
                    .chain(std::iter::once(label.as_str().len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let total_width = index_width + column_widths.iter().map(|v| v + 2).sum::<usize>();

        write!(f, "{:<width$}", "Sentiment", width = index_width)?;
        for (label, width) in Sentiment::ALL.iter().zip(&column_widths) {
            write!(f, "  {:>width$}", label, width = *width)?;
        }
        writeln!(f)?;
        writeln!(f, "{:<width$}", "Platform", width = total_width)?;

        for (platform, counts) in cross_tab.rows() {
            write!(f, "{:<width$}", platform, width = index_width)?;
            for (label, width) in Sentiment::ALL.iter().zip(&column_widths) {
                write!(f, "  {:>width$}", counts.get(*label), width = *width)?;
            }
            writeln!(f)?;
        }

        if cross_tab.unlabeled() > 0 {
            writeln!(f, "({} comments without platform not shown)", cross_tab.unlabeled())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        pretty_assertions::assert_eq,
        crate::aggregator::SentimentCounts,
        crate::classifier::Sentiment::*,
    };

    fn aggregates() -> Aggregates {
        let counts = SentimentCounts::from_labels(vec![Positive, Negative, Neutral]);
        let percentages = counts.percentages().unwrap();

        Aggregates {
            counts,
            percentages,
            cross_tab: PlatformCrossTab::from_pairs(vec![("Twitter", Positive), ("Twitter", Negative), ("Reddit", Neutral)]),
        }
    }

    #[test]
    fn cross_tab_table_is_aligned() {
        let table = CrossTabTable(&aggregates().cross_tab).to_string();

        assert_eq!(table, concat!(
            "Sentiment  Positive  Negative  Neutral\n",
            "Platform                              \n",
            "Reddit            0         0        1\n",
            "Twitter           1         1        0\n",
        ));
    }

    #[test]
    fn report_lists_sections_in_order() {
        let report = render_report(&aggregates());

        assert_eq!(report, concat!(
            "\n=== Overall Sentiment Counts ===\n",
            "Positive : 1\n",
            "Negative : 1\n",
            "Neutral : 1\n",
            "\n=== Sentiment Percentage ===\n",
            "Positive : 33.33%\n",
            "Negative : 33.33%\n",
            "Neutral  : 33.33%\n",
            "\n=== Platform-wise Sentiment Table ===\n",
            "Sentiment  Positive  Negative  Neutral\n",
            "Platform                              \n",
            "Reddit            0         0        1\n",
            "Twitter           1         1        0\n",
            "\n=== Final Summary ===\n",
            "Total Comments Analyzed : 3\n",
            "Positive Comments       : 1\n",
            "Negative Comments       : 1\n",
            "Neutral Comments        : 1\n",
            "\nAnalysis Completed Successfully!\n",
        ));
    }

    #[test]
    fn unlabeled_comments_are_mentioned() {
        let table = CrossTabTable(&PlatformCrossTab::from_pairs(vec![("", Positive), ("Reddit", Positive)])).to_string();

        assert!(table.ends_with("(1 comments without platform not shown)\n"));
    }
}
