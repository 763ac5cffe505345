//! `fetch`-backed transport to the document service.
//!
//! Uploads are posted as `multipart/form-data`, preview and generation as
//! JSON. Failure replies come with an error status but still carry the JSON
//! envelope, so the body is decoded whatever the status.

use async_trait::async_trait;
use common::endpoints::Endpoints;
use common::error::WizardError;
use common::model::file::{FileRole, SelectedFile};
use common::model::reply::{
    GenerateReply, PreviewReply, UploadExcelReply, UploadTemplateReply, UploadedSpreadsheet,
    UploadedTemplate,
};
use common::requests::{GenerateRequest, PreviewRequest};
use common::transport::WizardTransport;
use gloo_file::Blob;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::FormData;

pub struct HttpTransport {
    endpoints: Endpoints,
}

impl HttpTransport {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    async fn post_file<R: DeserializeOwned>(
        &self,
        role: FileRole,
        file: &SelectedFile,
    ) -> Result<R, WizardError> {
        let form = FormData::new().map_err(js_error)?;
        let blob: web_sys::Blob =
            Blob::new_with_options(file.bytes.as_slice(), file.mime.as_deref()).into();
        form.append_with_blob_and_filename(role.form_field(), &blob, &file.name)
            .map_err(js_error)?;

        let response = Request::post(&self.endpoints.upload(role))
            .body(form)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<R, WizardError> {
        let response = Request::post(url)
            .json(body)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }
}

#[async_trait(?Send)]
impl WizardTransport for HttpTransport {
    async fn upload_spreadsheet(&self, file: &SelectedFile) -> Result<UploadedSpreadsheet, WizardError> {
        self.post_file::<UploadExcelReply>(FileRole::Spreadsheet, file)
            .await?
            .into_result()
    }

    async fn upload_template(&self, file: &SelectedFile) -> Result<UploadedTemplate, WizardError> {
        self.post_file::<UploadTemplateReply>(FileRole::Template, file)
            .await?
            .into_result()
    }

    async fn preview(&self, request: &PreviewRequest) -> Result<String, WizardError> {
        self.post_json::<_, PreviewReply>(&self.endpoints.preview(), request)
            .await?
            .into_result()
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<String, WizardError> {
        self.post_json::<_, GenerateReply>(&self.endpoints.generate(), request)
            .await?
            .into_result()
    }
}

async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, WizardError> {
    let status = response.status();
    response
        .json::<R>()
        .await
        .map_err(|err| WizardError::Decode(format!("HTTP {}: {}", status, err)))
}

fn transport_error(err: gloo_net::Error) -> WizardError {
    WizardError::Transport(err.to_string())
}

fn js_error(err: JsValue) -> WizardError {
    WizardError::Transport(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
