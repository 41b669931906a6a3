// src/trending/parse.rs
// =============================================================================
// This module extracts repository records from the trending page's HTML.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Extraction is deliberately tolerant: a missing or malformed field degrades
// to its default ("" or 0) instead of aborting the whole page. The only hard
// error is a page with zero listing blocks, which means GitHub's layout
// changed underneath us.
// =============================================================================

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::TrendingRepo;
use crate::error::ScrapeError;

/// Hrefs on the page are root-relative; they resolve against this origin
const SITE_ORIGIN: &str = "https://github.com";

// The CSS selectors that describe one listing block, parsed once per call
//
// These mirror GitHub's current markup: each repository is an
// <article class="Box-row"> whose heading anchor carries "owner / name"
// and the repo href, with stars/forks in muted counter links and the
// window's star gain in a right-floated span.
struct Selectors {
    article: Selector,
    heading_link: Selector,
    description: Selector,
    language: Selector,
    counter_link: Selector,
    star_icon: Selector,
    fork_icon: Selector,
    stars_today: Selector,
}

impl Selectors {
    fn new() -> Self {
        // Selector::parse returns Result, so we use .unwrap() which panics on
        // error. This is OK here because the selectors are constants and known
        // to be valid.
        Selectors {
            article: Selector::parse("article.Box-row").unwrap(),
            heading_link: Selector::parse("h2 a").unwrap(),
            description: Selector::parse("p").unwrap(),
            language: Selector::parse(r#"span[itemprop="programmingLanguage"]"#).unwrap(),
            counter_link: Selector::parse("a.Link--muted").unwrap(),
            star_icon: Selector::parse("svg.octicon-star").unwrap(),
            fork_icon: Selector::parse("svg.octicon-repo-forked").unwrap(),
            stars_today: Selector::parse("span.d-inline-block.float-sm-right").unwrap(),
        }
    }
}

// Parses raw trending-page markup into repository records
//
// Returns one record per listing block, in page order - that's already
// GitHub's rank order, so we never re-sort. A page with no listing blocks
// at all is an ExtractionError.
pub fn parse_trending(html: &str) -> Result<Vec<TrendingRepo>, ScrapeError> {
    let document = Html::parse_document(html);
    let selectors = Selectors::new();

    let repos: Vec<TrendingRepo> = document
        .select(&selectors.article)
        .map(|block| extract_repo(block, &selectors))
        .collect();

    if repos.is_empty() {
        return Err(ScrapeError::Extraction);
    }

    Ok(repos)
}

// Pulls the eight fields out of one listing block
//
// Never fails: each field falls back to "" or 0 when its element is missing
fn extract_repo(block: ElementRef, sel: &Selectors) -> TrendingRepo {
    let heading = block.select(&sel.heading_link).next();

    // The heading text is "owner / name" with decorative whitespace and
    // newlines sprinkled through it; strip all whitespace, then split on
    // the first slash. No slash means the whole text is the name.
    let full_name: String = heading
        .map(|a| a.text().collect::<String>())
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let (developer, name) = match full_name.split_once('/') {
        Some((owner, rest)) => (owner.to_string(), rest.to_string()),
        None => (String::new(), full_name),
    };

    let url = heading
        .and_then(|a| a.value().attr("href"))
        .and_then(resolve_url)
        .unwrap_or_default();

    let description = block
        .select(&sel.description)
        .next()
        .map(|p| p.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let language = block
        .select(&sel.language)
        .next()
        .map(|span| span.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    // Stars and forks share the same counter-link markup; the embedded
    // octicon tells them apart. Icon-less counters are kept aside so we can
    // still fall back to page order (stars first, forks second).
    let mut stars = None;
    let mut forks = None;
    let mut unlabeled = Vec::new();
    for link in block.select(&sel.counter_link) {
        let value = parse_count(&link.text().collect::<String>());
        if link.select(&sel.star_icon).next().is_some() {
            stars.get_or_insert(value);
        } else if link.select(&sel.fork_icon).next().is_some() {
            forks.get_or_insert(value);
        } else {
            unlabeled.push(value);
        }
    }
    let mut leftover = unlabeled.into_iter();
    let stars = stars.or_else(|| leftover.next()).unwrap_or(0);
    let forks = forks.or_else(|| leftover.next()).unwrap_or(0);

    // "1,234 stars today" (or "this week" / "this month")
    let stars_today = block
        .select(&sel.stars_today)
        .next()
        .map(|span| parse_count(&span.text().collect::<String>()))
        .unwrap_or(0);

    TrendingRepo {
        name,
        developer,
        description,
        language,
        stars,
        forks,
        stars_today,
        url,
    }
}

// Parses a human-readable count like "1,234" or "3,021 stars today"
//
// Keeping only the ASCII digits strips thousands separators and any
// surrounding words in one pass; anything without digits is 0.
fn parse_count(text: &str) -> u64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

// Resolves a possibly-relative href to an absolute URL
//
// "/octo/awesome-repo" -> Some("https://github.com/octo/awesome-repo")
fn resolve_url(href: &str) -> Option<String> {
    // SITE_ORIGIN is a constant and known to be valid
    let base = Url::parse(SITE_ORIGIN).unwrap();
    base.join(href).ok().map(|url| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // A trimmed-down trending page with the structural bones the extractor
    // relies on: two complete listings and one sparse listing
    const SAMPLE_PAGE: &str = r##"
    <html><body>
    <main>
      <article class="Box-row">
        <h2 class="h3 lh-condensed">
          <a href="/octo/awesome-repo">
            <span class="text-normal">octo /</span>
            awesome-repo
          </a>
        </h2>
        <p class="col-9 color-fg-muted my-1 pr-4">
          A demo
        </p>
        <div class="f6 color-fg-muted mt-2">
          <span itemprop="programmingLanguage">Python</span>
          <a class="Link--muted" href="/octo/awesome-repo/stargazers">
            <svg class="octicon octicon-star" aria-hidden="true"></svg>
            1,500
          </a>
          <a class="Link--muted" href="/octo/awesome-repo/forks">
            <svg class="octicon octicon-repo-forked" aria-hidden="true"></svg>
            200
          </a>
          <span class="d-inline-block float-sm-right">
            <svg class="octicon octicon-star" aria-hidden="true"></svg>
            42 stars today
          </span>
        </div>
      </article>
      <article class="Box-row">
        <h2 class="h3 lh-condensed">
          <a href="/rust-lang/rust">
            <span class="text-normal">rust-lang /</span>
            rust
          </a>
        </h2>
        <p class="col-9 color-fg-muted my-1 pr-4">
          Empowering everyone to build reliable and efficient software.
        </p>
        <div class="f6 color-fg-muted mt-2">
          <span itemprop="programmingLanguage">Rust</span>
          <a class="Link--muted" href="/rust-lang/rust/stargazers">
            <svg class="octicon octicon-star" aria-hidden="true"></svg>
            89,012
          </a>
          <a class="Link--muted" href="/rust-lang/rust/forks">
            <svg class="octicon octicon-repo-forked" aria-hidden="true"></svg>
            11,345
          </a>
          <span class="d-inline-block float-sm-right">
            123 stars today
          </span>
        </div>
      </article>
      <article class="Box-row">
        <h2 class="h3 lh-condensed">
          <a href="/mystery">mystery</a>
        </h2>
      </article>
    </main>
    </body></html>
    "##;

    #[test]
    fn test_extracts_one_record_per_block_in_page_order() {
        let repos = parse_trending(SAMPLE_PAGE).unwrap();
        assert_eq!(repos.len(), 3);
        assert_eq!(repos[0].name, "awesome-repo");
        assert_eq!(repos[1].name, "rust");
        assert_eq!(repos[2].name, "mystery");
    }

    #[test]
    fn test_full_listing_fields() {
        let repos = parse_trending(SAMPLE_PAGE).unwrap();
        let repo = &repos[0];
        assert_eq!(repo.name, "awesome-repo");
        assert_eq!(repo.developer, "octo");
        assert_eq!(repo.description, "A demo");
        assert_eq!(repo.language, "Python");
        assert_eq!(repo.stars, 1500);
        assert_eq!(repo.forks, 200);
        assert_eq!(repo.stars_today, 42);
        assert_eq!(repo.url, "https://github.com/octo/awesome-repo");
    }

    #[test]
    fn test_comma_separated_counts() {
        let repos = parse_trending(SAMPLE_PAGE).unwrap();
        assert_eq!(repos[1].stars, 89012);
        assert_eq!(repos[1].forks, 11345);
        assert_eq!(repos[1].stars_today, 123);
    }

    #[test]
    fn test_sparse_listing_gets_defaults() {
        let repos = parse_trending(SAMPLE_PAGE).unwrap();
        let repo = &repos[2];
        // No slash in the heading: everything is the name, developer empty
        assert_eq!(repo.name, "mystery");
        assert_eq!(repo.developer, "");
        assert_eq!(repo.description, "");
        assert_eq!(repo.language, "");
        assert_eq!(repo.stars, 0);
        assert_eq!(repo.forks, 0);
        assert_eq!(repo.stars_today, 0);
        assert_eq!(repo.url, "https://github.com/mystery");
    }

    #[test]
    fn test_counters_without_icons_fall_back_to_page_order() {
        let html = r##"
        <article class="Box-row">
          <h2><a href="/a/b">a / b</a></h2>
          <a class="Link--muted" href="/a/b/stargazers">3,000</a>
          <a class="Link--muted" href="/a/b/forks">45</a>
        </article>
        "##;
        let repos = parse_trending(html).unwrap();
        assert_eq!(repos[0].stars, 3000);
        assert_eq!(repos[0].forks, 45);
    }

    #[test]
    fn test_zero_listing_blocks_is_an_error() {
        let err = parse_trending("<html><body><p>maintenance</p></body></html>").unwrap_err();
        assert!(matches!(err, ScrapeError::Extraction));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("1,234"), 1234);
        assert_eq!(parse_count("  3,021 stars today  "), 3021);
        assert_eq!(parse_count("712 stars this week"), 712);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("no digits here"), 0);
    }

    #[test]
    fn test_resolve_url() {
        assert_eq!(
            resolve_url("/octo/awesome-repo").as_deref(),
            Some("https://github.com/octo/awesome-repo")
        );
        assert_eq!(
            resolve_url("https://github.com/full/absolute").as_deref(),
            Some("https://github.com/full/absolute")
        );
    }
}
