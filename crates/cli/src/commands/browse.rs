use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use dashboard_core::{DashboardConfig, ToCard};
use dashboard_service::{CollectionRecord, CollectionService, Dashboard};
use serde::Serialize;

use crate::PageArgs;
use crate::notifier::StderrNotifier;
use crate::render;

fn open_dashboard(source: Option<&str>) -> Result<Dashboard> {
    let mut config = DashboardConfig::from_env();
    if let Some(source) = source {
        config = config.with_data(source);
    }
    Ok(Dashboard::from_config(&config, Arc::new(StderrNotifier))?)
}

/// Loads one collection and prints the requested page.
///
/// A load failure has already been reported by the notifier, so it only turns
/// into a failing exit code here.
async fn show<T>(title: &str, service: &CollectionService<T>, args: &PageArgs) -> Result<ExitCode>
where
    T: CollectionRecord + Serialize + ToCard,
{
    if service.reload().await.is_err() {
        return Ok(ExitCode::FAILURE);
    }
    let page = service.view(args.page, args.page_size).await?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print!("{}", render::render_page(title, &page));
    }
    Ok(ExitCode::SUCCESS)
}

pub(crate) async fn run_results(args: &PageArgs) -> Result<ExitCode> {
    let dashboard = open_dashboard(args.source.as_deref())?;
    show("Results", &dashboard.results, args).await
}

pub(crate) async fn run_files(args: &PageArgs) -> Result<ExitCode> {
    let dashboard = open_dashboard(args.source.as_deref())?;
    show("Files", &dashboard.files, args).await
}

/// Without `--from`/`--to` this pages through events like the other views.
/// With either bound, every event touching the range is printed; a missing
/// bound is open-ended.
pub(crate) async fn run_events(
    args: &PageArgs,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<ExitCode> {
    let dashboard = open_dashboard(args.source.as_deref())?;
    if from.is_none() && to.is_none() {
        return show("Events", &dashboard.events, args).await;
    }

    if dashboard.events.reload().await.is_err() {
        return Ok(ExitCode::FAILURE);
    }
    let from = from.unwrap_or(NaiveDate::MIN);
    let to = to.unwrap_or(NaiveDate::MAX);
    let events = dashboard.events_between(from, to).await?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&events)?);
    } else {
        print!("{}", render::render_cards(&events));
    }
    Ok(ExitCode::SUCCESS)
}
