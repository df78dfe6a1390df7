//! Report-wide structured-data recommendations.

use crate::context::SiteContext;
use crate::error::SynthesisError;
use crate::pages::faq_payload;
use geo_report_types::{Priority, SchemaRecommendation, SchemaState};
use serde_json::{json, Value};

const HEAD_PLACEMENT: &str =
    "Inside <script type=\"application/ld+json\"> in the <head> of the homepage";

pub fn schema_recommendations(
    site: &SiteContext<'_>,
) -> Result<Vec<SchemaRecommendation>, SynthesisError> {
    let name = site.organization_name();
    let url = site.site_url();
    let description = site
        .root()
        .and_then(|r| r.page.meta_description.clone())
        .unwrap_or_default();

    let mut recs = vec![
        entry(
            site,
            "Organization",
            json!({
                "@context": "https://schema.org",
                "@type": "Organization",
                "name": name,
                "url": url,
                "logo": format!("{url}/logo.png"),
                "description": description,
                "sameAs": [],
                "contactPoint": {
                    "@type": "ContactPoint",
                    "contactType": "customer support",
                    "url": format!("{url}/contact"),
                },
            }),
            HEAD_PLACEMENT,
            (Priority::Critical, 10),
            (Priority::Low, 2),
        )?,
        entry(
            site,
            "WebSite",
            json!({
                "@context": "https://schema.org",
                "@type": "WebSite",
                "name": name,
                "url": url,
                "potentialAction": {
                    "@type": "SearchAction",
                    "target": format!("{url}/search?q={{search_term_string}}"),
                    "query-input": "required name=search_term_string",
                },
            }),
            HEAD_PLACEMENT,
            (Priority::High, 4),
            (Priority::Low, 1),
        )?,
    ];

    let faq_covered = site
        .pages
        .iter()
        .any(|p| p.page.is_faq_like() && p.page.has_schema_type("FAQPage"));
    if !faq_covered {
        let questions: Vec<&str> = site
            .pages
            .iter()
            .filter(|p| p.page.is_faq_like())
            .flat_map(|p| p.page.h2.iter())
            .filter(|h| h.contains('?'))
            .map(String::as_str)
            .take(5)
            .collect();
        let placement = if site.has_faq_page() {
            "Inside <script type=\"application/ld+json\"> on each FAQ page"
        } else {
            "Create an FAQ page, then add this block inside <script type=\"application/ld+json\">"
        };
        recs.push(entry(
            site,
            "FAQPage",
            faq_payload(&questions),
            placement,
            (Priority::High, 6),
            (Priority::Medium, 3),
        )?);
    }
    Ok(recs)
}

fn entry(
    site: &SiteContext<'_>,
    schema_type: &str,
    payload: Value,
    placement: &str,
    when_missing: (Priority, u32),
    when_present: (Priority, u32),
) -> Result<SchemaRecommendation, SynthesisError> {
    let detected_on = site.urls_where(|p| p.page.has_schema_type(schema_type));
    let (current_state, (priority, estimated_impact)) = if detected_on.is_empty() {
        (SchemaState::Missing, when_missing)
    } else {
        (SchemaState::Present, when_present)
    };
    Ok(SchemaRecommendation {
        schema_type: schema_type.to_string(),
        current_state,
        detected_on,
        payload: serde_json::to_string_pretty(&payload)?,
        placement: placement.to_string(),
        priority,
        estimated_impact,
    })
}
