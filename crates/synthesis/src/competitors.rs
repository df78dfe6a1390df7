use geo_report_types::{CompetitorAnalysis, Score};

/// Supplies competitor comparisons for a domain. Implemented by an external benchmarking
/// service; the synthesizer only consumes the result.
pub trait CompetitorAnalysisProvider: Send + Sync {
    fn analyze(&self, domain: &str) -> Vec<CompetitorAnalysis>;
}

/// Fixed three-entry comparison used until a real provider is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderCompetitors;

impl CompetitorAnalysisProvider for PlaceholderCompetitors {
    fn analyze(&self, domain: &str) -> Vec<CompetitorAnalysis> {
        let gap = format!(
            "Placeholder benchmark. Connect a competitor analysis provider to compare {domain} with real competitors."
        );
        [
            ("competitor-a.example", 72, ["Organization and FAQPage markup on every key page", "Question-led headings"]),
            ("competitor-b.example", 64, ["Concise answers under each H1", "Named authors with bios"]),
            ("competitor-c.example", 58, ["Dedicated comparison pages", "Consistent brand naming"]),
        ]
        .into_iter()
        .map(|(competitor, score, strengths)| CompetitorAnalysis {
            domain: competitor.to_string(),
            score: Score::from(score),
            strengths: strengths.iter().map(|s| s.to_string()).collect(),
            gap_analysis: gap.clone(),
        })
        .collect()
    }
}

impl<F> CompetitorAnalysisProvider for F
where
    F: Fn(&str) -> Vec<CompetitorAnalysis> + Send + Sync,
{
    fn analyze(&self, domain: &str) -> Vec<CompetitorAnalysis> {
        self(domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_fixed_size() {
        let entries = PlaceholderCompetitors.analyze("example.com");
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.gap_analysis.contains("example.com")));
    }

    #[test]
    fn closures_act_as_providers() {
        let provider = |domain: &str| {
            vec![CompetitorAnalysis {
                domain: format!("rival-of-{domain}"),
                score: Score::from(90),
                strengths: vec![],
                gap_analysis: String::new(),
            }]
        };
        let entries = provider.analyze("acme.io");
        assert_eq!(entries[0].domain, "rival-of-acme.io");
    }
}
