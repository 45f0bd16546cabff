use crate::exception::ExceptionFilter;
use crate::exception::http::HttpExceptionFilter;
use crate::interceptor::{ChainFuture, Interceptor, Next};
use axum::{body::Body, http::Request, response::Response};
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Tower Layer for invoking a chain of interceptors
///
/// The first interceptor in the list is the outermost one. An error escaping
/// the chain is turned into a response by the layer's exception filter, so the
/// resulting service never fails and can be handed to `Router::layer`.
#[derive(Clone)]
pub struct InterceptorLayer {
    interceptors: Arc<Vec<Box<dyn Interceptor>>>,
    filter: Arc<dyn ExceptionFilter>,
}

impl InterceptorLayer {
    pub fn new(interceptors: Vec<Box<dyn Interceptor>>) -> Self {
        Self {
            interceptors: Arc::new(interceptors),
            filter: Arc::new(HttpExceptionFilter),
        }
    }
}

impl<S> Layer<S> for InterceptorLayer {
    type Service = InterceptorMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        InterceptorMiddleware {
            inner,
            interceptors: Arc::clone(&self.interceptors),
            filter: Arc::clone(&self.filter),
        }
    }
}

#[derive(Clone)]
pub struct InterceptorMiddleware<S> {
    inner: S,
    interceptors: Arc<Vec<Box<dyn Interceptor>>>,
    filter: Arc<dyn ExceptionFilter>,
}

impl<S> Service<Request<Body>> for InterceptorMiddleware<S>
where
    S: Service<Request<Body>, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        // Keep the service that was driven to readiness; leave a fresh clone behind.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let interceptors = Arc::clone(&self.interceptors);
        let filter = Arc::clone(&self.filter);

        Box::pin(async move {
            let mut chain = Next::new(move |req: Request<Body>| -> ChainFuture {
                Box::pin(async move { inner.call(req).await.map_err(|never| match never {}) })
            });

            // Wrap from the innermost interceptor outwards.
            for index in (0..interceptors.len()).rev() {
                let interceptors = Arc::clone(&interceptors);
                let next = chain;
                chain = Next::new(move |req: Request<Body>| -> ChainFuture {
                    Box::pin(async move { interceptors[index].intercept(req, next).await })
                });
            }

            match chain.run(request).await {
                Ok(response) => Ok(response),
                Err(error) => Ok(filter.catch(error)),
            }
        })
    }
}
