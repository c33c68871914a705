//! Walk through the heritage guide from the command line
//!
//! This example demonstrates:
//! - Loading configuration and the catalog
//! - Page queries (category filters, text search, sorting)
//! - Summaries for dropdowns and stat cards
//! - Liking a story without mutating the catalog
//! - Signing in and out of a mock session
//!
//! Run with `cargo run --example explorer [config.yaml]`.

use sanctuary::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => SanctuaryConfig::from_yaml_file(path)?,
        None => SanctuaryConfig::default(),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let catalog = config.load_catalog()?;

    // Monasteries page: sect dropdown, then the Nyingma listing
    println!("== Monasteries ==");
    let sects = list_distinct_values(&catalog.monasteries, "sect");
    println!(
        "sects: {}",
        sects.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(", ")
    );

    let nyingma = filter(
        &catalog.monasteries,
        &FilterSpec::for_record::<Monastery>()
            .with_equals("sect", "Nyingma")
            .sorted_by("founded:asc"),
    );
    for monastery in &nyingma {
        println!("  {} (founded {})", monastery.name, monastery.founded);
    }

    let report = aggregate(
        &catalog.monasteries,
        &[
            AggregateRequest::count(),
            AggregateRequest::sum("monks"),
            AggregateRequest::min("founded"),
            AggregateRequest::range("founded"),
        ],
    )?;
    for (request, value) in report.iter() {
        println!("  {} = {}", request, value);
    }

    // Manuscripts page: search plus a digitized toggle
    println!("\n== Manuscripts matching 'sutra' ==");
    let sutras = filter(
        &catalog.manuscripts,
        &FilterSpec::for_record::<Manuscript>()
            .with_text("sutra")
            .with_equals("digitized", true),
    );
    for manuscript in &sutras {
        println!("  {} ({} century)", manuscript.title, manuscript.century);
    }

    // Festivals page
    println!("\n== Festivals ==");
    let summary = summarize(
        &catalog.festivals,
        &["category"],
        &[AggregateRequest::count_true("upcoming")],
    )?;
    println!(
        "  {} festivals, {} upcoming",
        summary.total,
        summary
            .aggregates
            .get(&AggregateRequest::count_true("upcoming"))
            .map(|v| v.as_i64())
            .unwrap_or(0)
    );
    for festival in &related(&catalog.festivals, "losar", 3) {
        println!("  other: {}", festival.name);
    }

    // Stories page: newest first, then a like
    println!("\n== Stories ==");
    let stories = filter(
        &catalog.stories,
        &FilterSpec::for_record::<Story>().with_sort(SortSpec::desc("date")),
    );
    for story in &stories {
        println!(
            "  [{}] {} by {} ({} likes)",
            story.author_initials(),
            story.title,
            story.author,
            story.likes
        );
    }

    let liked = increment_counter(&catalog.stories, "1", "likes")?;
    let story = liked.get("1")?;
    println!("  after a like, '{}' has {} likes", story.title, story.likes);

    match aggregate_one(&Collection::<Festival>::default(), &AggregateRequest::min("monasteries")) {
        Ok(value) => println!("  fewest monasteries: {}", value),
        Err(QueryError::EmptyAggregate { .. }) => println!("  fewest monasteries: -"),
        Err(e) => return Err(e.into()),
    }

    // Session
    println!("\n== Session ==");
    let storage = InMemorySessionStorage::new();
    let mut session = Session::restore(storage.clone(), config.session_key.as_str()).await?;
    println!("  signed in: {}", session.is_authenticated());

    let user = session.login("pemba@example.com", "om-mani-padme-hum").await?;
    println!("  welcome, {}", user.name);

    session.logout().await?;
    println!("  signed in: {}", session.is_authenticated());

    Ok(())
}
