use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures::future::{FutureExt, LocalBoxFuture, ready};
use serde::de::DeserializeOwned;

/// Request body read the way a permissive JSON body parser does.
///
/// A request that isn't `application/json`, or has an empty body, yields
/// `T::default()` so every field reads as absent. A JSON body that fails to
/// parse still goes through `web::Json` and its configured 400.
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

fn is_json(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

fn is_empty(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|len| len.trim() == "0")
}

impl<T> FromRequest for JsonBody<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if !is_json(req) || is_empty(req) {
            return ready(Ok(JsonBody(T::default()))).boxed_local();
        }

        web::Json::<T>::from_request(req, payload)
            .map(|res| res.map(|json| JsonBody(json.into_inner())))
            .boxed_local()
    }
}
