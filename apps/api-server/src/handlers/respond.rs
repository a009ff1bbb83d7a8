//! Response shaping for HTTP handlers.

use actix_web::{HttpResponse, http::StatusCode};
use commune_shared::Envelope;
use serde::Serialize;

/// Send `data` wrapped in the response envelope, keeping only `fields`.
///
/// This is the only place responses are built, so storage-side fields never
/// reach a client. Handlers may only use 200, 201, 400 and 404; any other
/// status panics.
pub fn send_response<T>(status: StatusCode, data: Option<&T>, fields: &[&str]) -> HttpResponse
where
    T: Serialize + ?Sized,
{
    let data = match data.map(serde_json::to_value).transpose() {
        Ok(data) => data,
        Err(err) => {
            tracing::error!("Failed to serialize response data: {}", err);
            return send_response::<()>(StatusCode::BAD_REQUEST, None, fields);
        }
    };

    let code = status.as_u16();
    if let Err(err) = Envelope::try_shape(code, None, &[]) {
        tracing::error!("{}", err);
    }
    HttpResponse::build(status).json(Envelope::shape(code, data, fields))
}
