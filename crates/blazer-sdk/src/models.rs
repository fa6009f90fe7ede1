//! Request payloads sent by the SDK

use serde::{Deserialize, Serialize};

/// Options attached to a serialized RDF payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadOptions {
    #[serde(rename = "contentType")]
    pub content_type: String,
}

/// A TriG document plus its content type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RdfPayload {
    pub options: PayloadOptions,
    pub value: String,
}

/// Body of an `updatePost` request: statements to remove, then to add
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePostBody {
    pub remove: RdfPayload,
    pub add: RdfPayload,
}
