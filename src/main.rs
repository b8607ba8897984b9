use clap::Parser;
use std::collections::BTreeSet;
use std::path::Path;

use lexfind::{load_collection, FilterSet, LoadError, SearchEngine, SearchResult};

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            query,
            collection,
            fuzzy,
            chapter,
            part,
            tags,
            source,
            limit,
        } => {
            let filters = FilterSet {
                chapter,
                part,
                tags: if tags.is_empty() { None } else { Some(tags) },
                law_source: source,
            };
            run_search(&collection, &query, &filters, fuzzy, limit)
        }
        Commands::Inspect { collection } => run_inspect(&collection),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run_search(
    collection: &Path,
    query: &str,
    filters: &FilterSet,
    fuzzy: bool,
    limit: usize,
) -> Result<(), LoadError> {
    let articles = load_collection(collection)?;
    let engine = SearchEngine::new(articles)?;

    let descriptor = engine.classify_query(query);
    let results = engine.search(query, filters, fuzzy);

    if results.is_empty() {
        println!("no matches for {:?} ({} mode)", query, mode_label(fuzzy, &descriptor));
        return Ok(());
    }

    println!(
        "{} match(es) for {:?} ({} mode)",
        results.len(),
        query,
        mode_label(fuzzy, &descriptor)
    );
    for result in results.iter().take(limit) {
        print_result(result);
    }
    if results.len() > limit {
        println!("... and {} more", results.len() - limit);
    }
    Ok(())
}

fn mode_label(fuzzy: bool, descriptor: &lexfind::QueryDescriptor) -> &'static str {
    if fuzzy {
        "fuzzy"
    } else {
        descriptor.mode.name()
    }
}

fn print_result(result: &SearchResult) {
    let article = &result.article;
    println!(
        "  [{:>6.1}] {} — {} ({} / {})",
        result.score, article.label, article.title, article.chapter, article.part
    );
    if let Some(source) = &article.law_source {
        println!("           source: {}", source);
    }
}

fn run_inspect(collection: &Path) -> Result<(), LoadError> {
    let articles = load_collection(collection)?;

    let chapters: BTreeSet<&str> = articles.iter().map(|a| a.chapter.as_str()).collect();
    let parts: BTreeSet<&str> = articles.iter().map(|a| a.part.as_str()).collect();
    let sources: BTreeSet<&str> = articles
        .iter()
        .filter_map(|a| a.law_source.as_deref())
        .collect();
    let tagged = articles.iter().filter(|a| !a.tags.is_empty()).count();

    println!("articles: {}", articles.len());
    println!("chapters: {}", chapters.len());
    for chapter in &chapters {
        println!("  - {}", chapter);
    }
    println!("parts: {}", parts.len());
    for part in &parts {
        println!("  - {}", part);
    }
    if sources.is_empty() {
        println!("sources: none");
    } else {
        println!("sources: {}", sources.len());
        for source in &sources {
            println!("  - {}", source);
        }
    }
    println!("articles with tags: {}", tagged);
    Ok(())
}
