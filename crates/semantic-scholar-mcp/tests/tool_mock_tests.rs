//! Mock-based tool tests using wiremock.
//!
//! These tests verify actual tool behavior by mocking the Semantic Scholar API.
#![allow(clippy::needless_pass_by_value)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use semantic_scholar_mcp::client::SemanticScholarClient;
use semantic_scholar_mcp::config::Config;
use semantic_scholar_mcp::error::{ClientError, ErrorKind, ToolError};
use semantic_scholar_mcp::tools::{
    GetAuthorsTool, GetCitationTool, GetPaperTool, McpTool, SearchPaperTool, ToolContext,
};

/// Create a test context with a mock server.
fn setup_test_context(mock_server: &MockServer) -> ToolContext {
    context_with(Config::for_testing(&mock_server.uri()))
}

fn context_with(config: Config) -> ToolContext {
    let client = SemanticScholarClient::new(config).unwrap();
    ToolContext::new(Arc::new(client))
}

/// Sample paper JSON for mocking.
fn sample_paper_json(id: &str, title: &str, year: i32) -> serde_json::Value {
    json!({
        "paperId": id,
        "title": title,
        "abstract": format!("Abstract for {title}"),
        "year": year,
        "citationCount": 10,
        "authors": [{"authorId": "1", "name": "Test Author"}]
    })
}

fn attention_paper_json() -> serde_json::Value {
    json!({
        "paperId": "204e3073870fae3d05bcbc2f6a8e263d9b72e776",
        "title": "Attention Is All You Need",
        "year": 2017,
        "venue": "Neural Information Processing Systems",
        "journal": null,
        "externalIds": {"ArXiv": "1706.03762", "DBLP": "conf/nips/VaswaniSPUJGKP17", "CorpusId": 13756489},
        "url": "https://www.semanticscholar.org/paper/204e3073870fae3d05bcbc2f6a8e263d9b72e776",
        "authors": [
            {"authorId": "40348417", "name": "Ashish Vaswani"},
            {"authorId": "1846258", "name": "Noam M. Shazeer"}
        ]
    })
}

// =============================================================================
// search_paper
// =============================================================================

#[tokio::test]
async fn test_search_returns_exactly_selected_keys() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .and(query_param("query", "graph neural networks"))
        .and(query_param("fields", "paperId,title,authors.name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 2,
            "offset": 0,
            "next": 2,
            "data": [
                {"paperId": "p1", "title": "GNN One", "authors": [{"authorId": "a1", "name": "Ada"}]},
                {"paperId": "p2", "title": "GNN Two", "authors": []}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = SearchPaperTool
        .execute(
            &ctx,
            json!({"query": "graph neural networks", "fields": "paperId, title,authors.name,title"}),
        )
        .await
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
    assert_eq!(parsed["total"], 2);
    assert_eq!(parsed["next"], 2);

    for record in parsed["data"].as_array().unwrap() {
        let mut keys: Vec<&str> = record.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["authors", "paperId", "title"]);
    }
}

#[tokio::test]
async fn test_search_keeps_selected_null_values() {
    let mock_server = MockServer::start().await;

    let body = json!({
        "total": 1,
        "offset": 0,
        "data": [{
            "paperId": "p1",
            "title": "T",
            "abstract": null,
            "authors": [{"authorId": null, "name": "A"}]
        }]
    });

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .and(query_param("fields", "paperId,title,abstract,authors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = SearchPaperTool
        .execute(&ctx, json!({"query": "q", "fields": "paperId,title,abstract,authors"}))
        .await
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
    assert_eq!(parsed, body);
    assert!(parsed["data"][0].as_object().unwrap().contains_key("abstract"));
    assert!(parsed["data"][0]["authors"][0].as_object().unwrap().contains_key("authorId"));
}

#[tokio::test]
async fn test_search_uses_default_fields_and_paging() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .and(query_param("fields", "paperId,title,abstract,authors,year,citationCount"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "0"))
        .and(query_param_is_missing("openAccessPdf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "offset": 0,
            "data": [sample_paper_json("p1", "Transformers", 2020)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = SearchPaperTool.execute(&ctx, json!({"query": "transformers"})).await.unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
    assert_eq!(parsed["data"][0]["title"], "Transformers");
    assert!(parsed.get("next").is_none());
}

#[tokio::test]
async fn test_search_forwards_filters_and_clamps_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .and(query_param("limit", "100"))
        .and(query_param("offset", "20"))
        .and(query_param("year", "2016-2020"))
        .and(query_param("fieldsOfStudy", "Computer Science"))
        .and(query_param("publicationTypes", "Review"))
        .and(query_param("minCitationCount", "50"))
        .and(query_param("venue", "Nature"))
        .and(query_param("openAccessPdf", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0, "offset": 20, "data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = SearchPaperTool
        .execute(
            &ctx,
            json!({
                "query": "survey",
                "limit": 500,
                "offset": 20,
                "year": "2016-2020",
                "fieldsOfStudy": "Computer Science",
                "publicationTypes": "Review",
                "minCitationCount": 50,
                "venue": "Nature",
                "openAccessPdf": true
            }),
        )
        .await
        .unwrap();

    assert!(result.contains("\"data\": []"));
}

#[tokio::test]
async fn test_search_blank_query_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let err = SearchPaperTool.execute(&ctx, json!({"query": "   "})).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[tokio::test]
async fn test_search_rejects_empty_field_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let err = SearchPaperTool.execute(&ctx, json!({"query": "q", "fields": " , "})).await.unwrap_err();

    assert!(matches!(err, ToolError::InvalidArgument { ref field, .. } if field == "fields"));
}

// =============================================================================
// get_paper
// =============================================================================

#[tokio::test]
async fn test_get_paper_passes_id_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/ARXIV:1706.03762"))
        .and(query_param("fields", "title,year"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"paperId": "204e3073", "title": "Attention Is All You Need", "year": 2017})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = GetPaperTool
        .execute(&ctx, json!({"paper_id": " ARXIV:1706.03762 ", "fields": "title,year"}))
        .await
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
    assert_eq!(parsed, json!({"paperId": "204e3073", "title": "Attention Is All You Need", "year": 2017}));
}

#[tokio::test]
async fn test_get_paper_keeps_unmodelled_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paperId": "p1",
            "tldr": {"model": "tldr@v2.0.0", "text": "Short summary."},
            "s2FieldsOfStudy": [{"category": "Computer Science", "source": "external"}]
        })))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = GetPaperTool
        .execute(&ctx, json!({"paper_id": "p1", "fields": "tldr,s2FieldsOfStudy"}))
        .await
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
    assert_eq!(parsed["tldr"]["text"], "Short summary.");
    assert_eq!(parsed["s2FieldsOfStudy"][0]["category"], "Computer Science");
}

#[tokio::test]
async fn test_get_paper_not_found_is_upstream_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Paper with id missing not found"})))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let err = GetPaperTool.execute(&ctx, json!({"paper_id": "missing"})).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UpstreamError);
    assert!(err.client_error().is_some_and(ClientError::is_not_found));
    let payload = err.to_payload();
    assert_eq!(payload["error"]["message"], "Paper not found: missing");
    assert_eq!(payload["error"]["status"], 404);
    assert!(payload["error"]["body"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_get_paper_empty_id_is_invalid_argument() {
    let mock_server = MockServer::start().await;
    let ctx = setup_test_context(&mock_server);

    let err = GetPaperTool.execute(&ctx, json!({"paper_id": ""})).await.unwrap_err();
    assert!(matches!(err, ToolError::InvalidArgument { ref field, .. } if field == "paper_id"));

    let err = GetPaperTool.execute(&ctx, json!({})).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/garbled"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/wrong-shape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"paperId": 42})))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    for id in ["garbled", "wrong-shape"] {
        let err = GetPaperTool.execute(&ctx, json!({"paper_id": id})).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecodeError, "{id}");
    }
}

#[tokio::test]
async fn test_slow_upstream_is_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"paperId": "slow"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let mut config = Config::for_testing(&mock_server.uri());
    config.request_timeout = Duration::from_millis(200);
    let ctx = context_with(config);

    let err = GetPaperTool.execute(&ctx, json!({"paper_id": "slow"})).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(matches!(err, ToolError::Client(ClientError::Timeout(d)) if d == Duration::from_millis(200)));
}

#[tokio::test]
async fn test_api_key_sent_as_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1"))
        .and(header("x-api-key", "secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"paperId": "p1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = Config::for_testing(&mock_server.uri());
    config.api_key = Some("secret-key".to_string());
    let ctx = context_with(config);

    let result = GetPaperTool.execute(&ctx, json!({"paper_id": "p1"})).await.unwrap();
    assert!(result.contains("\"paperId\": \"p1\""));
}

// =============================================================================
// get_authors
// =============================================================================

#[tokio::test]
async fn test_get_authors_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1/authors"))
        .and(query_param("fields", "authorId,name,affiliations,citationCount,hIndex"))
        .and(query_param("limit", "1000"))
        .and(query_param("offset", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 5,
            "next": 6,
            "data": [{
                "authorId": "1741101",
                "name": "Geoffrey E. Hinton",
                "affiliations": ["University of Toronto"],
                "citationCount": 500000,
                "hIndex": 180
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = GetAuthorsTool
        .execute(&ctx, json!({"paper_id": "p1", "limit": 5000, "offset": 5}))
        .await
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
    assert_eq!(parsed["offset"], 5);
    assert_eq!(parsed["next"], 6);
    assert_eq!(parsed["data"][0]["hIndex"], 180);
    assert_eq!(parsed["data"][0]["affiliations"][0], "University of Toronto");
}

#[tokio::test]
async fn test_get_authors_keeps_null_members() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1/authors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 0,
            "data": [{"authorId": "7", "name": "Jane Doe", "affiliations": [], "hIndex": null}]
        })))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = GetAuthorsTool
        .execute(&ctx, json!({"paper_id": "p1", "fields": "name,affiliations,hIndex"}))
        .await
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
    assert_eq!(parsed["data"][0], json!({"authorId": "7", "name": "Jane Doe", "affiliations": [], "hIndex": null}));
    assert!(parsed.get("next").is_none());
}

// =============================================================================
// get_citation
// =============================================================================

#[tokio::test]
async fn test_get_citation_bibtex_by_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/attention"))
        .and(query_param("fields", "paperId,title,authors,year,venue,journal,externalIds,url"))
        .respond_with(ResponseTemplate::new(200).set_body_json(attention_paper_json()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = GetCitationTool.execute(&ctx, json!({"paper_id": "attention"})).await.unwrap();

    assert!(result.starts_with("@article{Vaswani2017,\n"));
    assert!(result.contains("  author = {Ashish Vaswani and Noam M. Shazeer}"));
    assert!(result.contains("  journal = {Neural Information Processing Systems}"));
}

#[tokio::test]
async fn test_get_citation_apa() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/attention"))
        .respond_with(ResponseTemplate::new(200).set_body_json(attention_paper_json()))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result =
        GetCitationTool.execute(&ctx, json!({"paper_id": "attention", "format": "APA"})).await.unwrap();

    assert_eq!(
        result,
        "Vaswani, A., & Shazeer, N. M. (2017). Attention Is All You Need. Neural Information Processing Systems."
    );
}

#[tokio::test]
async fn test_unsupported_format_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(attention_paper_json()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let err = GetCitationTool
        .execute(&ctx, json!({"paper_id": "attention", "format": "harvard"}))
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::InvalidArgument { ref field, .. } if field == "format"));
}

// =============================================================================
// Rate limiting
// =============================================================================

#[tokio::test]
async fn test_rate_limit_surfaces_on_every_tool() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "3")
                .set_body_string("Too Many Requests"),
        )
        .expect(4)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let calls: [(&dyn McpTool, serde_json::Value); 4] = [
        (&SearchPaperTool, json!({"query": "q"})),
        (&GetPaperTool, json!({"paper_id": "p1"})),
        (&GetAuthorsTool, json!({"paper_id": "p1"})),
        (&GetCitationTool, json!({"paper_id": "p1", "format": "mla"})),
    ];

    for (tool, args) in calls {
        let err = tool.execute(&ctx, args).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UpstreamError, "{}", tool.name());
        match &err {
            ToolError::Client(client_err) => {
                assert_eq!(client_err.status(), Some(429));
                assert!(client_err.is_rate_limited());
                assert_eq!(client_err.retry_after(), Some(Duration::from_secs(3)));
            }
            other => panic!("{}: unexpected error {other:?}", tool.name()),
        }

        let payload = err.to_payload();
        assert_eq!(payload["error"]["kind"], "upstream_error");
        assert_eq!(payload["error"]["status"], 429);
        assert_eq!(payload["error"]["retryAfterSecs"], 3);
    }
}
