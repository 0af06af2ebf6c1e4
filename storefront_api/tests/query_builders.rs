use storefront_api::PageQuery;
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

#[test]
fn default_query_adds_nothing() {
    let url = PageQuery::default().add_to_url(&base_url());
    assert!(url.query().is_none());
}

#[test]
fn page_and_size_serialize_exactly() {
    let url = PageQuery::default()
        .with_page(2)
        .with_size(20)
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("page=2&size=20"));
}

#[test]
fn search_is_included_when_set() {
    let url = PageQuery::default()
        .with_page(0)
        .with_search("beans")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("page=0"));
    assert!(query.contains("search=beans"));
}

#[test]
fn empty_search_is_omitted() {
    let url = PageQuery::default()
        .with_page(1)
        .with_search("")
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("page=1"));
}

#[test]
fn search_terms_are_url_encoded() {
    let url = PageQuery::default()
        .with_search("coffee beans")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("search=coffee+beans") || query.contains("search=coffee%20beans"));
}

#[test]
fn size_without_page_stands_alone() {
    let url = PageQuery::default().with_size(50).add_to_url(&base_url());
    assert_eq!(url.query(), Some("size=50"));
}
