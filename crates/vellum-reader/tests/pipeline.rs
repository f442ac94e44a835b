//! End-to-end pipeline tests over an in-memory relay pool.

use std::sync::Arc;

use vellum_reader::{ReaderConfig, ReaderNode, RenderedArticle, TopicView};
use vellum_relay::{kind, Event, StaticPool};

fn article(id: &str, slug: &str, title: &str, body: &str) -> Event {
    Event {
        id: id.into(),
        pubkey: format!("{id}-0123456789abcdef"),
        created_at: 0,
        kind: kind::WIKI_ARTICLE,
        tags: vec![
            vec!["d".into(), slug.into()],
            vec!["title".into(), title.into()],
        ],
        content: body.into(),
        sig: String::new(),
    }
}

fn approval(id: &str, target: &str) -> Event {
    Event {
        id: id.into(),
        pubkey: "reactor".into(),
        created_at: 0,
        kind: kind::REACTION,
        tags: vec![vec!["e".into(), target.into()]],
        content: "+".into(),
        sig: String::new(),
    }
}

fn config() -> ReaderConfig {
    ReaderConfig {
        relays: Vec::new(),
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        fetch_window: std::time::Duration::from_millis(100),
    }
}

#[tokio::test]
async fn load_renders_the_top_ranked_candidate() {
    let events = vec![
        article("first", "rust", "Rust", "= Rust\n\nThe *original* take."),
        article("second", "rust", "Rust, Revised", "= Rust\n\nThe _revised_ take."),
        approval("r1", "second"),
        approval("r2", "second"),
    ];
    let node = ReaderNode::with_pool(config(), Arc::new(StaticPool::new(events)));
    let state = node.state();

    let token = state.view.write().await.begin_load();
    let view = state.selector.load_topic("Rust").await;

    let TopicView::Found(ranked) = view else {
        panic!("expected candidates");
    };
    assert_eq!(ranked.slug, "rust");
    assert_eq!(ranked.primary().id(), "second");
    assert_eq!(ranked.alternates().len(), 1);
    assert_eq!(ranked.alternates()[0].id(), "first");

    let rendered = RenderedArticle::from_candidate(ranked.primary(), &state.converter);
    assert_eq!(rendered.title, "Rust, Revised");
    assert_eq!(rendered.author, "second-0");
    assert_eq!(rendered.approvals, 2);
    assert!(rendered.body_html.contains("<em>revised</em>"));

    let mut view_state = state.view.write().await;
    assert!(view_state.commit_load(token, &ranked.slug, rendered.id.as_str()));
    assert_eq!(view_state.primary.as_deref(), Some("second"));
}

#[tokio::test]
async fn not_found_topic_leaves_panes_empty() {
    let node = ReaderNode::with_pool(config(), Arc::new(StaticPool::new(Vec::new())));
    let state = node.state();

    let token = state.view.write().await.begin_load();
    let view = state.selector.load_topic("nothing here").await;

    let TopicView::NotFound { slug } = view else {
        panic!("expected not-found");
    };
    assert_eq!(slug, "nothing-here");

    let mut view_state = state.view.write().await;
    assert!(view_state.commit_not_found(token, &slug));
    assert!(view_state.primary.is_none());
    assert!(view_state.secondary.is_none());
}

#[tokio::test]
async fn overlapping_loads_commit_only_the_newest() {
    let events = vec![
        article("a", "rust", "Rust", "= Rust"),
        article("b", "go", "Go", "= Go"),
    ];
    let node = ReaderNode::with_pool(config(), Arc::new(StaticPool::new(events)));
    let state = node.state();

    // Two searches in flight; the first resolves last.
    let stale_token = state.view.write().await.begin_load();
    let fresh_token = state.view.write().await.begin_load();

    let TopicView::Found(fresh) = state.selector.load_topic("go").await else {
        panic!("expected candidates");
    };
    let TopicView::Found(stale) = state.selector.load_topic("rust").await else {
        panic!("expected candidates");
    };

    let mut view_state = state.view.write().await;
    assert!(view_state.commit_load(fresh_token, &fresh.slug, fresh.primary().id()));
    assert!(!view_state.commit_load(stale_token, &stale.slug, stale.primary().id()));

    assert_eq!(view_state.topic.as_deref(), Some("go"));
    assert_eq!(view_state.primary.as_deref(), Some("b"));
}
