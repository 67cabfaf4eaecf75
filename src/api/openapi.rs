//! OpenAPI description of the greeting API.

use utoipa::OpenApi;

use super::handlers::{self, HelloResponse};

/// OpenAPI document for the service.
#[derive(OpenApi)]
#[openapi(
    info(title = "hello-backend", description = "Minimal greeting API"),
    paths(handlers::hello),
    components(schemas(HelloResponse)),
    tags((name = "greeting", description = "Static greeting"))
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Render the document as pretty-printed JSON.
    pub fn to_json() -> crate::Result<String> {
        Ok(Self::openapi().to_pretty_json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_hello_route() {
        let doc: serde_json::Value = serde_json::from_str(&ApiDoc::to_json().unwrap()).unwrap();

        assert!(doc["paths"]["/api/hello"]["get"].is_object());
        assert!(doc["components"]["schemas"]["HelloResponse"].is_object());
    }

    #[test]
    fn document_has_no_other_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        assert_eq!(paths, vec!["/api/hello".to_string()]);
    }
}
