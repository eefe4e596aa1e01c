use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;

use crate::error::StorageError;

const JSON: &str = "application/json";

/// Result of a GET operation, including the body and ETag.
pub struct GetObjectOutput {
    pub body: Vec<u8>,
    pub etag: Option<String>,
}

/// Why a conditional put was refused.
pub enum PutRejection {
    /// The precondition did not hold (412).
    Precondition,
    Other(StorageError),
}

/// Get an object from S3. `Ok(None)` if the key does not exist.
pub async fn get_object(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<Option<GetObjectOutput>, StorageError> {
    let resp = match client.get_object().bucket(bucket).key(key).send().await {
        Ok(resp) => resp,
        Err(e) => {
            let err = e.into_service_error();
            if err.is_no_such_key() {
                return Ok(None);
            }
            return Err(StorageError::GetObject(err.to_string()));
        }
    };

    let etag = resp.e_tag().map(|s| s.to_string());
    let body = resp
        .body
        .collect()
        .await
        .map_err(|e| StorageError::GetObject(e.to_string()))?
        .into_bytes()
        .to_vec();

    Ok(Some(GetObjectOutput { body, etag }))
}

/// Put a JSON object to S3 only if the key does not exist yet.
/// Returns the new ETag.
pub async fn put_object_if_absent(
    client: &Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
) -> Result<String, PutRejection> {
    let resp = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(ByteStream::from(body))
        .content_type(JSON)
        .if_none_match("*")
        .send()
        .await
        .map_err(|e| classify_put_error(e.into_service_error().to_string()))?;

    Ok(resp.e_tag().unwrap_or_default().to_string())
}

/// Put a JSON object to S3 with an If-Match precondition (ETag optimistic
/// locking). Returns the new ETag.
pub async fn put_object_if_match(
    client: &Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
    expected_etag: &str,
) -> Result<String, PutRejection> {
    let resp = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(ByteStream::from(body))
        .content_type(JSON)
        .if_match(expected_etag)
        .send()
        .await
        .map_err(|e| classify_put_error(e.into_service_error().to_string()))?;

    Ok(resp.e_tag().unwrap_or_default().to_string())
}

fn classify_put_error(message: String) -> PutRejection {
    // S3 answers a failed If-Match / If-None-Match with 412 Precondition Failed
    if message.contains("PreconditionFailed") {
        PutRejection::Precondition
    } else {
        PutRejection::Other(StorageError::PutObject(message))
    }
}

/// List object keys under a prefix, following continuation tokens.
pub async fn list_objects(
    client: &Client,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<String>, StorageError> {
    let mut keys = Vec::new();
    let mut continuation_token: Option<String> = None;

    loop {
        let mut req = client.list_objects_v2().bucket(bucket).prefix(prefix);

        if let Some(token) = &continuation_token {
            req = req.continuation_token(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| StorageError::ListObjects(e.into_service_error().to_string()))?;

        for obj in resp.contents() {
            if let Some(key) = obj.key() {
                keys.push(key.to_string());
            }
        }

        if resp.is_truncated() == Some(true) {
            continuation_token = resp.next_continuation_token().map(|s| s.to_string());
        } else {
            break;
        }
    }

    Ok(keys)
}
