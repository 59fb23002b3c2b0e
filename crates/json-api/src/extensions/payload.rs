//! Request body extraction shared by the create and update handlers.

use std::path::PathBuf;

use salvo::{Request, http::mime, prelude::StatusError};
use serde_json::{Map, Value};

use crate::extensions::*;

const MALFORMED_BODY: &str = "Request body could not be parsed";

/// Raw fields of a request body plus the temporary path of an attached file.
#[derive(Debug, Default)]
pub(crate) struct Payload {
    pub(crate) fields: Value,
    pub(crate) file: Option<PathBuf>,
}

/// Read a JSON body, or a urlencoded or multipart form whose fields become
/// string values. `file_field` names the multipart part kept as an attachment.
pub(crate) async fn read_payload(
    req: &mut Request,
    file_field: Option<&str>,
) -> Result<Payload, StatusError> {
    let is_json = req
        .content_type()
        .is_some_and(|content_type| content_type.subtype() == mime::JSON);

    if is_json {
        let fields = req.parse_json::<Value>().await.or_400(MALFORMED_BODY)?;

        return Ok(Payload { fields, file: None });
    }

    let form = req.form_data().await.or_400(MALFORMED_BODY)?;

    let fields = form
        .fields
        .iter()
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect::<Map<_, _>>();

    let file = file_field
        .and_then(|name| form.files.get(name))
        .map(|part| part.path().clone());

    Ok(Payload {
        fields: Value::Object(fields),
        file,
    })
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::CONTENT_TYPE,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn echo(req: &mut Request, res: &mut Response) -> Result<(), StatusError> {
        let payload = read_payload(req, Some("attachment")).await?;

        res.render(Json(json!({
            "fields": payload.fields,
            "file": payload.file.is_some(),
        })));

        Ok(())
    }

    fn service() -> Service {
        Service::new(Router::with_path("echo").post(echo))
    }

    #[tokio::test]
    async fn reads_json_bodies() -> TestResult {
        let body: Value = TestClient::post("http://example.com/echo")
            .json(&json!({ "title": "Read", "count": 2 }))
            .send(&service())
            .await
            .take_json()
            .await?;

        assert_eq!(
            body,
            json!({ "fields": { "title": "Read", "count": 2 }, "file": false })
        );

        Ok(())
    }

    #[tokio::test]
    async fn reads_urlencoded_forms_as_strings() -> TestResult {
        let body: Value = TestClient::post("http://example.com/echo")
            .raw_form("title=Read&count=2")
            .send(&service())
            .await
            .take_json()
            .await?;

        assert_eq!(
            body,
            json!({ "fields": { "title": "Read", "count": "2" }, "file": false })
        );

        Ok(())
    }

    #[tokio::test]
    async fn keeps_the_named_multipart_file() -> TestResult {
        let body = "--XBOUNDARY\r\n\
            Content-Disposition: form-data; name=\"title\"\r\n\r\n\
            Read\r\n\
            --XBOUNDARY\r\n\
            Content-Disposition: form-data; name=\"attachment\"; filename=\"a.jpg\"\r\n\
            Content-Type: image/jpeg\r\n\r\n\
            jpegbytes\r\n\
            --XBOUNDARY--\r\n";

        let body: Value = TestClient::post("http://example.com/echo")
            .text(body)
            .add_header(CONTENT_TYPE, "multipart/form-data; boundary=XBOUNDARY", true)
            .send(&service())
            .await
            .take_json()
            .await?;

        assert_eq!(body, json!({ "fields": { "title": "Read" }, "file": true }));

        Ok(())
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let res = TestClient::post("http://example.com/echo")
            .text("{ not json")
            .add_header(CONTENT_TYPE, "application/json", true)
            .send(&service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
