//! Shared test utilities and fixtures.

#![allow(dead_code)]

use lexfind::{Article, SearchEngine};

// Re-export canonical test constructors from lexfind::testing
pub use lexfind::testing::{article, article_in};

/// A small but representative rights charter: two chapters, two parts,
/// mixed tags and sources, one accented title.
pub fn charter() -> Vec<Article> {
    vec![
        article_in(
            1,
            "Human Dignity",
            "Human dignity is inviolable. It must be respected and protected.",
            "Fundamental Rights",
            "Part I",
            &["dignity", "rights"],
            Some("Charter"),
        ),
        article_in(
            2,
            "Right to Life",
            "Everyone has the right to life. No one shall be condemned to death.",
            "Fundamental Rights",
            "Part I",
            &["life", "rights"],
            Some("Charter"),
        ),
        article_in(
            3,
            "Prohibition of Slavery",
            "No one shall be held in slavery or servitude.",
            "Fundamental Rights",
            "Part I",
            &["slavery"],
            Some("Charter"),
        ),
        article_in(
            10,
            "Café Licensing",
            "Municipal licensing rules for café terraces and outdoor seating.",
            "Municipal Regulation",
            "Part II",
            &["commerce"],
            Some("Municipal Code"),
        ),
        article_in(
            25,
            "Right to a Fair Trial",
            "Everyone is entitled to a fair and public hearing within a reasonable time.",
            "Justice",
            "Part II",
            &["justice", "rights"],
            Some("Charter"),
        ),
        article_in(
            26,
            "Right of Appeal",
            "Everyone convicted of an offence has the right to appeal. See Article 25 for \
             the guarantees applicable at first instance.",
            "Justice",
            "Part II",
            &["justice"],
            Some("Charter"),
        ),
    ]
}

/// Engine over the [`charter`] fixture.
pub fn charter_engine() -> SearchEngine {
    SearchEngine::new(charter()).expect("fixture collection is valid")
}

/// Engine over `count` generated articles numbered from 1.
pub fn generated_engine(count: u32) -> SearchEngine {
    let articles = (1..=count)
        .map(|n| {
            article(
                n,
                &format!("Provision {}", n),
                &format!("Body text of provision number {}.", n),
            )
        })
        .collect();
    SearchEngine::new(articles).expect("generated collection is valid")
}
