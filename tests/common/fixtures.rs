//! Graph documents and search pages for pipeline tests

/// Graph document with a single node, as exported by the graph tool
pub const SINGLE_NODE_GRAPH: &str = r#"{"nodes":[{"id":"BV1xx"}]}"#;

/// Graph document with extra node and top-level fields that must be ignored
pub const MULTI_NODE_GRAPH: &str = r#"{
  "nodes": [
    {"id": "BV1aa", "label": "first", "group": 1},
    {"id": "BV1bb", "label": "second", "group": 2},
    {"id": "BV1cc", "label": "third", "group": 1}
  ],
  "links": [
    {"source": "BV1aa", "target": "BV1bb", "value": 3}
  ]
}"#;

/// Search result page whose result list holds `img_tag` inside its first card
pub fn search_page(img_tag: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head><title>search</title></head>
  <body>
    <div class="nav"><img src="//s1.hdslb.com/logo.png"></div>
    <div class="video-list row">
      <div class="video-list-item col_3">
        <a href="//www.bilibili.com/video/BV1xx">{img_tag}</a>
      </div>
    </div>
  </body>
</html>"#
    )
}

/// Search result page without a result list
pub const EMPTY_SEARCH_PAGE: &str =
    r#"<html><body><div class="search-empty">no results</div></body></html>"#;
