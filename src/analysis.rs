use std::fmt;

use crate::data::filter::RankedView;
use crate::data::model::Dataset;

const NETFLIX_INSIGHTS: [&str; 5] = [
    "Find the most popular genre in different regions.",
    "Analyze trends in movie watchtime over the years.",
    "Identify underperforming movies and genres.",
    "Recommend suitable movie categories for different seasons.",
    "Analyze audience preference for new vs. old movies.",
];

const CUSTOMER_FEEDBACK: [&str; 5] = [
    "More diversity in content with different genres.",
    "Adding more classic movies based on audience interest.",
    "Increasing availability of highly watched but discontinued shows.",
    "Better regional content selection based on viewing trends.",
    "More frequent updates on trending movie lists.",
];

const NO_RECOMMENDATION: &str = "No suitable recommendation found based on the current filters.";

// ---------------------------------------------------------------------------
// Analysis mode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisMode {
    #[default]
    NetflixInsights,
    PurchaseRecommendation,
    CustomerFeedback,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 3] = [
        AnalysisMode::NetflixInsights,
        AnalysisMode::PurchaseRecommendation,
        AnalysisMode::CustomerFeedback,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AnalysisMode::NetflixInsights => "Netflix Insights",
            AnalysisMode::PurchaseRecommendation => "Movie Purchase Recommendation",
            AnalysisMode::CustomerFeedback => "Customer Complaints & Suggestions",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Display payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum PayloadBody {
    Bullets {
        title: &'static str,
        items: &'static [&'static str],
    },
    /// Sentence naming the top-ranked title.
    Recommendation(String),
    NoRecommendation,
}

/// What the analysis section shows for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPayload {
    pub heading: &'static str,
    pub body: PayloadBody,
}

impl DisplayPayload {
    /// The body as Markdown-ish text, one line per paragraph or bullet.
    pub fn body_lines(&self) -> Vec<String> {
        match &self.body {
            PayloadBody::Bullets { title, items } => std::iter::once(format!("### {title}"))
                .chain(items.iter().map(|item| format!("- {item}")))
                .collect(),
            PayloadBody::Recommendation(text) => vec![format!("**Recommendation:** {text}")],
            PayloadBody::NoRecommendation => vec![NO_RECOMMENDATION.to_string()],
        }
    }

    pub fn to_markdown(&self) -> String {
        let mut out = format!("## {}\n", self.heading);
        for line in self.body_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

/// Build the analysis section for `mode`. Only the purchase recommendation
/// looks at the ranked view.
pub fn present(mode: AnalysisMode, dataset: &Dataset, view: &RankedView) -> DisplayPayload {
    match mode {
        AnalysisMode::NetflixInsights => DisplayPayload {
            heading: "Insights for Netflix",
            body: PayloadBody::Bullets {
                title: "5 Key Insights Netflix Can Use:",
                items: &NETFLIX_INSIGHTS,
            },
        },
        AnalysisMode::PurchaseRecommendation => DisplayPayload {
            heading: "Movie Purchase Recommendation for Netflix",
            body: match view.top(dataset) {
                Some(top) => PayloadBody::Recommendation(format!(
                    "Purchase movies similar to '{}' as it has high watchtime in its category.",
                    top.title
                )),
                None => PayloadBody::NoRecommendation,
            },
        },
        AnalysisMode::CustomerFeedback => DisplayPayload {
            heading: "Customer Feedback Based on Data",
            body: PayloadBody::Bullets {
                title: "Customer Complaints & Suggestions:",
                items: &CUSTOMER_FEEDBACK,
            },
        },
    }
}
