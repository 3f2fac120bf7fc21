//! HTTP access to the upload backend and the object store.
//!
//! Negotiation and deletion are JSON calls to the backend through
//! `gloo-net`. The binary PUT goes straight to the presigned URL through
//! `XMLHttpRequest`, the only browser API that reports upload progress.

use dropload::{
    DeleteRequest, Destination, NegotiateRequest, ProgressFn, RemovalError, RemovalResult,
    StorageBackend, TransferError, TransferResult,
};
use gloo_net::http::Request;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, ProgressEvent, XmlHttpRequest};

use crate::config::{DELETE_PATH, PRESIGN_PATH};
use crate::types::BrowserFile;

/// Presigned-URL storage reached over HTTP.
#[derive(Clone, Debug)]
pub struct HttpStorage {
    backend_url: String,
}

impl HttpStorage {
    pub fn new(backend_url: &str) -> Self {
        Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }
}

fn transport(e: impl std::fmt::Display) -> TransferError {
    TransferError::Transport(e.to_string())
}

fn js_transport(e: JsValue) -> TransferError {
    TransferError::Transport(format!("{:?}", e))
}

impl StorageBackend<BrowserFile> for HttpStorage {
    async fn negotiate(&self, request: &NegotiateRequest) -> TransferResult<Destination> {
        let response = Request::post(&self.endpoint(PRESIGN_PATH))
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;

        if !response.ok() {
            return Err(TransferError::Negotiation {
                status: response.status(),
            });
        }

        response
            .json::<Destination>()
            .await
            .map_err(|e| TransferError::Decode(e.to_string()))
    }

    async fn put(
        &self,
        url: &str,
        file: &BrowserFile,
        content_type: &str,
        on_progress: ProgressFn,
    ) -> TransferResult<u16> {
        let xhr = XmlHttpRequest::new().map_err(js_transport)?;
        xhr.open_with_async("PUT", url, true).map_err(js_transport)?;
        xhr.set_request_header("Content-Type", content_type)
            .map_err(js_transport)?;

        // Must outlive the request
        let progress = Closure::<dyn FnMut(ProgressEvent)>::new(move |event: ProgressEvent| {
            if event.length_computable() {
                on_progress(event.loaded() as u64, event.total() as u64);
            }
        });
        let upload = xhr.upload().map_err(js_transport)?;
        upload.set_onprogress(Some(progress.as_ref().unchecked_ref()));

        let target = xhr.clone();
        let finished = js_sys::Promise::new(&mut |resolve, reject| {
            target.set_onload(Some(&resolve));
            target.set_onerror(Some(&reject));
            target.set_onabort(Some(&reject));
            target.set_ontimeout(Some(&reject));
        });

        let body: &Blob = &file.0;
        xhr.send_with_opt_blob(Some(body)).map_err(js_transport)?;
        let outcome = JsFuture::from(finished).await;

        upload.set_onprogress(None);
        drop(progress);

        outcome.map_err(|_| TransferError::Transport("upload request failed".to_string()))?;
        xhr.status().map_err(js_transport)
    }

    async fn delete(&self, request: &DeleteRequest) -> RemovalResult<()> {
        let response = Request::delete(&self.endpoint(DELETE_PATH))
            .json(request)
            .map_err(|e| RemovalError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| RemovalError::Transport(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(RemovalError::Backend {
                status: response.status(),
            })
        }
    }
}
