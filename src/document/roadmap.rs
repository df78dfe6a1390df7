use geo_report_layout::{HeadingLevel, PageComposer, PageSink, TextStyle};
use geo_report_types::{FullReport, RoadmapTask};

pub(super) fn write<S: PageSink>(c: &mut PageComposer<S>, report: &FullReport) -> Result<(), S::Error> {
    let roadmap = &report.implementation_roadmap;
    let buckets = roadmap.buckets();
    if buckets.iter().all(|(_, tasks)| tasks.is_empty()) {
        return Ok(());
    }
    let body = TextStyle::body(c.config());
    c.heading("Implementation Roadmap", HeadingLevel::Part)?;
    for (title, tasks) in buckets {
        if tasks.is_empty() {
            continue;
        }
        c.heading(title, HeadingLevel::Entry)?;
        let lines: Vec<String> = tasks.iter().map(task_line).collect();
        c.bullet_list(&lines, body)?;
    }
    Ok(())
}

fn task_line(task: &RoadmapTask) -> String {
    format!("{} ({}, +{} points)", task.task, task.effort, task.impact)
}
