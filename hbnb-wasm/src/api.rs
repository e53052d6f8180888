use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use hbnb_client::{HbnbClientError, HbnbClientResult, HttpRequest, HttpResponse, Method, Transport};

/// Пустой адрес: API на том же origin, что и страницы.
pub(crate) const API_BASE_URL: &str = match option_env!("HBNB_API_BASE_URL") {
    Some(value) => value,
    None => "",
};

/// `fetch` через `gloo-net`.
pub(crate) struct GlooTransport;

fn request_builder(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
}

fn network(err: gloo_net::Error) -> HbnbClientError {
    HbnbClientError::Network(err.to_string())
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> HbnbClientResult<HttpResponse> {
        let mut builder = request_builder(request.method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(network)?;

        let response = prepared.send().await.map_err(network)?;
        let status = response.status();
        let body = response.text().await.map_err(network)?;

        Ok(HttpResponse::new(status, body))
    }
}
