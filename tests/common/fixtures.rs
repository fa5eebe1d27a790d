//! JSON payloads as the backend sends them

use serde_json::{Value, json};

/// One listing row
pub fn batch(id: &str, status: &str) -> Value {
    json!({
        "batchId": id,
        "application": "FUNDS_TRANSFER",
        "originalFilename": format!("{}.csv", id),
        "status": status,
        "uploadedAt": "2026-02-03T09:30:00Z",
        "totalRecords": 10,
        "errorCount": 0,
        "uploadedBy": "awa.diop",
        "country": "SN",
        "department": "Trésorerie",
        "validatedBy": null,
        "validatedAt": null
    })
}

/// Listing row with reporting fields set
pub fn reported_batch(id: &str, status: &str, country: &str, validator: &str, errors: u64) -> Value {
    let mut b = batch(id, status);
    b["country"] = json!(country);
    b["validatedBy"] = json!(validator);
    b["validatedAt"] = json!("2026-02-04T10:00:00Z");
    b["errorCount"] = json!(errors);
    b
}

/// Paginated envelope
pub fn page(content: Vec<Value>, page: u32, total_pages: u64) -> Value {
    json!({
        "content": content,
        "page": page,
        "size": 50,
        "totalElements": content.len(),
        "totalPages": total_pages
    })
}

/// Processed FUNDS_TRANSFER batch with one success and one failure
pub fn executed_detail(id: &str) -> Value {
    json!({
        "batchId": id,
        "application": "FUNDS_TRANSFER",
        "originalFilename": "ft.csv",
        "status": "PROCESSED_WITH_ERROR",
        "uploadedAt": "2026-02-03T09:30:00Z",
        "totalRecords": 2,
        "details": [
            {
                "lineNumber": 2,
                "status": "SUCCESS",
                "t24Reference": "FT2603400001",
                "data": {"DEBIT.AMOUNT": "100", "CREDIT.AMOUNT": "50", "DEBIT.ACCT.NO": "SN001"}
            },
            {
                "lineNumber": 3,
                "status": "FAILED",
                "errorMessage": "{\"error\":{\"errorDetails\":[{\"message\":\"ACCOUNT CLOSED\"}]}}",
                "data": {"DEBIT.AMOUNT": "20", "CREDIT.AMOUNT": null, "DEBIT.ACCT.NO": "SN002"}
            }
        ]
    })
}

/// Status counts as returned by `/api/batches/counts`
pub fn counts() -> Value {
    json!({
        "UPLOADED": 2,
        "VALIDATED": 1,
        "PROCESSING": 1,
        "PROCESSED": 3,
        "PROCESSED_WITH_ERROR": 1,
        "PROCESSED_FAILED": 1
    })
}
