use crate::context::{topic_from_title, PageContext, SiteContext};
use geo_report_types::DirectAnswerRecommendation;

pub const MAX_DIRECT_ANSWERS: usize = 5;
/// Pages with at least this many direct-answer blocks are already covered.
const COVERED_BLOCKS: usize = 2;
const MIN_WORDS: usize = 40;
const MAX_WORDS: usize = 60;

const FILLER: &str = "Keep the wording factual and specific, name the organization explicitly, \
and put the single most important fact in the first sentence so that answer engines can quote it \
without further context.";

pub fn direct_answer_recommendations(site: &SiteContext<'_>) -> Vec<DirectAnswerRecommendation> {
    site.pages
        .iter()
        .filter(|p| p.page.signals.direct_answer_blocks.len() < COVERED_BLOCKS)
        .take(MAX_DIRECT_ANSWERS)
        .map(|p| recommend(p, site.domain))
        .collect()
}

fn recommend(ctx: &PageContext<'_>, domain: &str) -> DirectAnswerRecommendation {
    let topic = match topic_from_title(ctx.display_title()) {
        t if t.is_empty() => domain.to_string(),
        t => t,
    };
    let current = ctx.page.signals.direct_answer_blocks.first();
    let suggested_heading = if ctx.is_root {
        format!("What does {} do?", topic)
    } else {
        format!("What is {}?", topic)
    };
    let suggested_answer = fit_word_range(
        &format!(
            "{topic} is offered by {domain}. In one or two sentences, state what {topic} is, \
who it is for and the main result it delivers, then add one concrete fact such as a number, \
a price range or a timeframe."
        ),
        MIN_WORDS,
        MAX_WORDS,
    );
    let markup = format!(
        "<section class=\"direct-answer\">\n  <h2>{suggested_heading}</h2>\n  <p>{suggested_answer}</p>\n</section>"
    );

    DirectAnswerRecommendation {
        url: ctx.page.url.clone(),
        page_title: ctx.display_title().to_string(),
        has_direct_answer: current.is_some(),
        current_word_count: current.map(|b| b.split_whitespace().count()).unwrap_or(0),
        suggested_heading,
        suggested_answer,
        markup,
    }
}

/// Pads with guidance or truncates so the text holds between `min` and `max` words.
pub fn fit_word_range(text: &str, min: usize, max: usize) -> String {
    let mut words: Vec<&str> = text.split_whitespace().collect();
    let mut filler = FILLER.split_whitespace().cycle();
    while words.len() < min {
        match filler.next() {
            Some(w) => words.push(w),
            None => break,
        }
    }
    words.truncate(max);
    let mut out = words.join(" ");
    if !out.ends_with('.') {
        out = out.trim_end_matches([',', ';', ':']).to_string();
        out.push('.');
    }
    out
}
