//! API shape tests — validates that response JSON matches what the
//! frontend table/result views expect, field by field.

/// SearchResponse: { query, search_type, results[], ai_summary, timestamp }
#[test]
fn test_search_response_shape() {
    let response = serde_json::json!({
        "query": "Python FastAPI tutorial",
        "search_type": "general",
        "results": [
            {
                "title": "Comprehensive Guide to Python FastAPI tutorial",
                "url": "https://example.com/guide/python-fastapi-tutorial",
                "snippet": "This comprehensive guide covers...",
                "source": "General Web",
            }
        ],
        "ai_summary": "Summary text",
        "timestamp": "2026-01-01T00:00:00+00:00",
    });

    assert!(response["query"].is_string());
    assert!(response["search_type"].is_string());
    assert!(response["results"].is_array());
    assert!(response["ai_summary"].is_string());
    assert!(response["timestamp"].is_string());

    let hit = &response["results"][0];
    assert!(hit["title"].is_string());
    assert!(hit["url"].is_string());
    assert!(hit["snippet"].is_string());
    assert!(hit["source"].is_string());
}

/// ExtractionResponse: { prompt, extracted_data[], total_records, timestamp }
#[test]
fn test_extraction_response_shape() {
    let response = serde_json::json!({
        "prompt": "Extract industrial parts data",
        "extracted_data": [
            {
                "partnum": "B10099368",
                "escn": "CYLINDER ASSEMBLY, LINEAR ACTUATING",
                "classtype": "BU",
                "property": "MANUFACTURER NAME 1",
                "value": "FESTO",
                "manufacturer": "FESTO INC",
            }
        ],
        "total_records": 1,
        "timestamp": "2026-01-01T00:00:00+00:00",
    });

    assert!(response["extracted_data"].is_array());
    assert!(response["total_records"].is_number());

    let record = &response["extracted_data"][0];
    for key in ["partnum", "escn", "classtype", "property", "value", "manufacturer"] {
        assert!(record[key].is_string(), "missing key {}", key);
    }
}

/// AnalysisResponse: { filename, analysis, ai_insights, timestamp }
#[test]
fn test_analysis_response_shape() {
    let response = serde_json::json!({
        "filename": "parts.xlsx",
        "analysis": {
            "total_rows": 10,
            "columns": ["partnum", "escn", "classtype"],
            "column_count": 3,
            "bu_items": [],
            "inc_items": [],
            "summary": {
                "bu_count": 5,
                "inc_count": 5,
                "classtype_column": "classtype",
            },
            "sample_data": [],
            "data_quality": {
                "null_counts": { "partnum": 0 },
                "duplicate_rows": 0,
            },
        },
        "ai_insights": "Insights text",
        "timestamp": "2026-01-01T00:00:00+00:00",
    });

    let analysis = &response["analysis"];
    assert!(analysis["total_rows"].is_number());
    assert!(analysis["columns"].is_array());
    assert!(analysis["column_count"].is_number());
    assert!(analysis["bu_items"].is_array());
    assert!(analysis["inc_items"].is_array());
    assert!(analysis["summary"].is_object());
    assert!(analysis["sample_data"].is_array());
    assert!(analysis["data_quality"]["null_counts"].is_object());
    assert!(analysis["data_quality"]["duplicate_rows"].is_number());
}

/// PdfCheckResponse: { filename, check_result, expected_data[], timestamp }
#[test]
fn test_pdf_check_response_shape() {
    let response = serde_json::json!({
        "filename": "catalog.pdf",
        "check_result": {
            "matches_found": 3,
            "is_correct": true,
            "matched_values": ["B10099368", "FESTO", "CYLINDER ASSEMBLY"],
            "message": "Found 3 matches. PDF is correct!",
        },
        "expected_data": ["B10099368", "FESTO"],
        "timestamp": "2026-01-01T00:00:00+00:00",
    });

    let result = &response["check_result"];
    assert!(result["matches_found"].is_number());
    assert!(result["is_correct"].is_boolean());
    assert!(result["matched_values"].is_array());
    assert!(result["message"].is_string());
    assert!(response["expected_data"].is_array());
}

/// History responses: { history[], total_*, message }
#[test]
fn test_history_response_shape() {
    let response = serde_json::json!({
        "history": [],
        "total_searches": 0,
        "message": "Search history retrieved successfully",
    });

    assert!(response["history"].is_array());
    assert!(response["total_searches"].is_number());
    assert!(response["message"].is_string());
}

/// Error responses carry a plain-text detail field.
#[test]
fn test_error_response_shape() {
    let response = serde_json::json!({
        "detail": "Search prompt cannot be empty",
    });
    assert!(response["detail"].is_string());
}
