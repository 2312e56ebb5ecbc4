//! # formwork-router
//!
//! A minimal HTTP-style routing library for the formwork demo.
//!
//! This crate provides:
//! - Request/response types independent of any server implementation
//! - Form-encoded body decoding
//! - Literal-path routing by HTTP method
//! - Middleware support (before/after hooks) with request logging
//!
//! ## Quick Start
//!
//! ```ignore
//! use formwork_router::{Request, RequestLogger, Response, Router};
//!
//! async fn page_handler(_req: Request) -> Response {
//!     Response::html("<h1>Hello</h1>")
//! }
//!
//! async fn submit_handler(req: Request) -> Response {
//!     let data = req.form_data();
//!     // ... validate, then either no body or a structured error payload
//!     Response::no_content()
//! }
//!
//! let router = Router::new()
//!     .middleware(RequestLogger)
//!     .get("/", page_handler)
//!     .post("/submit", submit_handler);
//!
//! let response = router.handle(Request::get("/")).await;
//! ```

mod error;
mod middleware;
mod request;
mod response;
mod router;

pub use error::{Result, RouterError};
pub use middleware::{BoxFuture, Middleware, MiddlewareResult, RequestLogger};
pub use request::{parse_urlencoded, Method, Request};
pub use response::Response;
pub use router::{Handler, Route, Router};
