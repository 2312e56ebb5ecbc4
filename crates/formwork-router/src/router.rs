//! Main router implementation.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::{Result, RouterError};
use crate::middleware::{BoxFuture, Middleware, MiddlewareResult};
use crate::request::{Method, Request};
use crate::response::Response;

/// A boxed async handler function.
pub type Handler = Arc<dyn Fn(Request) -> BoxFuture<'static, Response> + Send + Sync>;

/// A single route definition.
///
/// Paths are matched literally; a single trailing slash is tolerated.
#[derive(Clone)]
pub struct Route {
    /// HTTP method.
    pub method: Method,
    /// Literal path.
    pub path: String,
    /// Request handler.
    pub handler: Handler,
}

impl Route {
    /// Creates a new route.
    pub fn new<F, Fut>(method: Method, path: &str, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        Self {
            method,
            path: path.to_string(),
            handler: Arc::new(move |req| Box::pin(handler(req))),
        }
    }

    /// Returns whether this route's path matches `path`.
    fn matches(&self, path: &str) -> bool {
        normalize(&self.path) == normalize(path)
    }
}

/// Strips at most one trailing slash, keeping the root path intact.
fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

/// The main router for handling HTTP requests.
pub struct Router {
    /// Registered routes.
    routes: Vec<Route>,
    /// Global middleware.
    middleware: Vec<Arc<dyn Middleware>>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Creates a new empty router.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            middleware: Vec::new(),
        }
    }

    /// Adds a GET route.
    #[must_use]
    pub fn get<F, Fut>(self, path: &str, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(Method::Get, path, handler)
    }

    /// Adds a POST route.
    #[must_use]
    pub fn post<F, Fut>(self, path: &str, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(Method::Post, path, handler)
    }

    /// Adds a route with any method.
    #[must_use]
    pub fn route<F, Fut>(mut self, method: Method, path: &str, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.routes.push(Route::new(method, path, handler));
        self
    }

    /// Adds global middleware.
    #[must_use]
    pub fn middleware(mut self, mw: impl Middleware + 'static) -> Self {
        self.middleware.push(Arc::new(mw));
        self
    }

    /// Handles an incoming request.
    pub fn handle<'a>(
        &'a self,
        mut request: Request,
    ) -> Pin<Box<dyn Future<Output = Response> + Send + 'a>> {
        Box::pin(async move {
            // Run before middleware
            for mw in &self.middleware {
                match mw.before(&request).await {
                    MiddlewareResult::Continue(req) => request = req,
                    MiddlewareResult::Response(res) => {
                        // Run after middleware even on early return
                        let mut response = res;
                        for mw in self.middleware.iter().rev() {
                            response = mw.after(response).await;
                        }
                        return response;
                    }
                }
            }

            // Find matching route
            let mut response = match self.find_route(&request) {
                Ok(route) => (route.handler)(request).await,
                Err(RouterError::NotFound { .. }) => Response::not_found(),
                Err(RouterError::MethodNotAllowed { .. }) => Response::method_not_allowed(),
            };

            // Run after middleware
            for mw in self.middleware.iter().rev() {
                response = mw.after(response).await;
            }

            response
        })
    }

    /// Finds a matching route for the request.
    fn find_route(&self, request: &Request) -> Result<&Route> {
        let mut path_matched = false;

        for route in &self.routes {
            if route.matches(&request.path) {
                path_matched = true;
                if route.method == request.method {
                    return Ok(route);
                }
            }
        }

        if path_matched {
            Err(RouterError::MethodNotAllowed {
                method: request.method.to_string(),
                path: request.path.clone(),
            })
        } else {
            Err(RouterError::NotFound {
                method: request.method.to_string(),
                path: request.path.clone(),
            })
        }
    }
}
