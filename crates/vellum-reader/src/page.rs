//! Server-rendered pages for the browser surface.
//!
//! Pure string builders over render models; nothing here touches the
//! network or the view state, so every page is testable as a value.

use crate::article::RenderedArticle;
use crate::select::RankedTopic;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2rem auto; max-width: 60rem; padding: 0 1rem; }\n\
header form { margin-bottom: 2rem; }\n\
.byline { color: #555; }\n\
.hidden { display: none; }\n\
.compare-view { display: flex; gap: 2rem; }\n\
.compare-view .article { flex: 1; }\n\
#compare-list { border: 1px solid #ccc; padding: 1rem; }\n\
blockquote { border-left: 3px solid #ccc; margin-left: 0; padding-left: 1rem; }\n\
pre { background: #f4f4f4; padding: 1rem; overflow-x: auto; }";

const COMPARE_SCRIPT: &str = r#"<script>
const compareButton = document.getElementById('compare-button');
const compareList = document.getElementById('compare-list');
if (compareButton && compareList) {
    compareButton.onclick = (e) => {
        e.stopPropagation();
        compareList.classList.toggle('hidden');
    };
    document.addEventListener('click', (e) => {
        if (!compareList.contains(e.target)) {
            compareList.classList.add('hidden');
        }
    });
}
</script>"#;

fn shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
{STYLE}
</style>
</head>
<body>
<header>
<form action="/search" method="get">
<input type="text" name="q" placeholder="Search topics">
<button type="submit">Search</button>
</form>
</header>
<main>
{body}
</main>
{COMPARE_SCRIPT}
</body>
</html>
"#
    )
}

fn article_pane(article: &RenderedArticle) -> String {
    format!(
        r#"<article class="article">
<h1>{title}</h1>
<p class="byline"><em>By: {author}...</em> (+{approvals} reactions)</p>
{body}
</article>"#,
        title = article.title,
        author = article.author,
        approvals = article.approvals,
        body = article.body_html,
    )
}

fn compare_list(ranked: &RankedTopic) -> String {
    if ranked.alternates().is_empty() {
        return String::new();
    }

    let items: String = ranked
        .alternates()
        .iter()
        .map(|alt| {
            format!(
                r#"<li><a href="/wiki/{slug}/compare/{id}">{title} by {author}... (+{approvals})</a></li>
"#,
                slug = ranked.slug,
                id = alt.id(),
                title = alt.title(),
                author = alt.author_short(),
                approvals = alt.approvals,
            )
        })
        .collect();

    format!(
        r#"<div id="compare">
<button id="compare-button">Compare</button>
<div id="compare-list" class="hidden">
<h3>Select Article to Compare</h3>
<ul>
{items}</ul>
</div>
</div>"#
    )
}

/// Landing page with the search surface.
pub fn home_page() -> String {
    shell(
        "Vellum",
        "<p>Search for a topic to read its top-ranked article.</p>",
    )
}

/// The one modeled non-happy path: a topic with no articles.
pub fn not_found_page(slug: &str) -> String {
    shell(slug, "<p>No articles found for this topic.</p>")
}

/// Primary article plus the comparison list of alternates.
pub fn article_page(ranked: &RankedTopic, primary: &RenderedArticle) -> String {
    let body = format!("{}\n{}", compare_list(ranked), article_pane(primary));
    shell(&primary.title, &body)
}

/// Two-pane comparison: the primary next to a selected alternate.
pub fn compare_page(
    ranked: &RankedTopic,
    primary: &RenderedArticle,
    secondary: &RenderedArticle,
) -> String {
    let body = format!(
        r#"<p><a href="/wiki/{slug}">Back to article</a></p>
<div class="compare-view">
{primary}
{secondary}
</div>"#,
        slug = ranked.slug,
        primary = article_pane(primary),
        secondary = article_pane(secondary),
    );
    shell(&primary.title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::Candidate;
    use vellum_markup::Converter;
    use vellum_relay::{kind, Event};

    fn candidate(id: &str, title: &str, approvals: usize) -> Candidate {
        Candidate {
            event: Event {
                id: id.into(),
                pubkey: format!("{id}-0123456789abcdef"),
                created_at: 0,
                kind: kind::WIKI_ARTICLE,
                tags: vec![
                    vec!["d".into(), "rust".into()],
                    vec!["title".into(), title.into()],
                ],
                content: format!("= {title}"),
                sig: String::new(),
            },
            approvals,
        }
    }

    fn ranked(candidates: Vec<Candidate>) -> RankedTopic {
        RankedTopic::new("rust".into(), candidates)
    }

    #[test]
    fn article_page_shows_byline_and_body() {
        let topic = ranked(vec![candidate("a", "Rust", 5)]);
        let primary = RenderedArticle::from_candidate(topic.primary(), &Converter::new());

        let html = article_page(&topic, &primary);
        assert!(html.contains("<h1>Rust</h1>"));
        assert!(html.contains("(+5 reactions)"));
        assert!(html.contains("By: a-012345..."));
    }

    #[test]
    fn compare_list_has_one_entry_per_alternate() {
        let topic = ranked(vec![
            candidate("a", "Rust", 5),
            candidate("b", "Rust v2", 3),
            candidate("c", "Rust v3", 1),
        ]);
        let primary = RenderedArticle::from_candidate(topic.primary(), &Converter::new());

        let html = article_page(&topic, &primary);
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains(r#"href="/wiki/rust/compare/b""#));
        assert!(html.contains(r#"href="/wiki/rust/compare/c""#));
        assert!(!html.contains(r#"href="/wiki/rust/compare/a""#));
    }

    #[test]
    fn single_candidate_gets_no_compare_list() {
        let topic = ranked(vec![candidate("a", "Rust", 5)]);
        let primary = RenderedArticle::from_candidate(topic.primary(), &Converter::new());

        let html = article_page(&topic, &primary);
        assert!(!html.contains("compare-button"));
    }

    #[test]
    fn not_found_page_carries_the_message() {
        let html = not_found_page("missing-topic");
        assert!(html.contains("No articles found for this topic."));
    }

    #[test]
    fn compare_page_holds_both_panes() {
        let topic = ranked(vec![candidate("a", "Rust", 5), candidate("b", "Rust v2", 3)]);
        let converter = Converter::new();
        let primary = RenderedArticle::from_candidate(topic.primary(), &converter);
        let secondary = RenderedArticle::from_candidate(&topic.alternates()[0], &converter);

        let html = compare_page(&topic, &primary, &secondary);
        assert!(html.contains("compare-view"));
        assert!(html.contains("<h1>Rust</h1>"));
        assert!(html.contains("<h1>Rust v2</h1>"));
        assert_eq!(html.matches("<article").count(), 2);
    }
}
