//! Route handlers and application wiring.

use std::collections::HashMap;

use formwork_forms::{FormController, ListboxControl, OptionCatalog};
use formwork_router::{Request, RequestLogger, Response, Router};
use formwork_schema::{FieldSpec, Schema, Submission, SubmissionReply};

use crate::page::render_page;

/// The single schema field.
pub const OPTION_FIELD: &str = "option";

/// The fixed option menu, which is also the universe of intended values.
/// Any string passes validation; membership is not enforced.
pub const OPTIONS: [&str; 3] = ["Option 1", "Option 2", "Option 3"];

/// Builds the demo schema: one required string field.
pub fn demo_schema() -> Schema {
    Schema::new().field(FieldSpec::string(OPTION_FIELD))
}

/// Builds the shared option catalog.
pub fn demo_catalog() -> OptionCatalog {
    OptionCatalog::new(OPTIONS)
}

/// Authoritative server-side validation of a submission.
///
/// On success the value is logged and no payload is returned. On failure the
/// structured error payload is returned for the caller to render or encode.
pub fn handle_submission(data: &HashMap<String, String>) -> Option<SubmissionReply> {
    let submission = demo_schema().parse(data);
    match &submission {
        Submission::Success { value } => {
            tracing::info!(option = value.get(OPTION_FIELD).map(String::as_str), "form submission");
            None
        }
        Submission::Error { .. } => submission.reply(),
    }
}

/// Builds a controller seeded from posted form data, without validating.
fn seeded_controller(data: &HashMap<String, String>) -> FormController {
    let mut controller = FormController::new(demo_schema());
    if let Some(value) = data.get(OPTION_FIELD).filter(|v| !v.is_empty()) {
        controller.set_field_value(OPTION_FIELD, value.clone());
    }
    controller
}

/// GET /: the initial page with nothing selected.
async fn index_handler(_req: Request) -> Response {
    let controller = FormController::new(demo_schema());
    let listbox = ListboxControl::new(OPTION_FIELD, demo_catalog());
    Response::html(render_page(&controller, &listbox))
}

/// POST /: validate the posted data and re-render with the outcome synced
/// into the controller, so displayed value and errors cannot diverge from
/// the server's result.
async fn submit_page_handler(req: Request) -> Response {
    let data = req.form_data();
    let submission = demo_schema().parse(&data);
    if let Submission::Success { value } = &submission {
        tracing::info!(option = value.get(OPTION_FIELD).map(String::as_str), "form submission");
    }

    let mut controller = FormController::new(demo_schema());
    controller.sync_last_result(&submission);
    let listbox = ListboxControl::new(OPTION_FIELD, demo_catalog());
    Response::html(render_page(&controller, &listbox))
}

/// POST /randomize: pick a uniformly random catalog option, push it through
/// the listbox adapter as if the user had clicked it, and re-render.
async fn randomize_handler(req: Request) -> Response {
    let data = req.form_data();
    let mut controller = seeded_controller(&data);
    let listbox = ListboxControl::new(OPTION_FIELD, demo_catalog());
    if let Some(pick) = listbox.randomize(&mut controller) {
        tracing::debug!(option = %pick, "randomized selection");
    }
    Response::html(render_page(&controller, &listbox))
}

/// POST /submit: the bare submission boundary. Success carries no body;
/// failure carries the structured error payload.
async fn submit_api_handler(req: Request) -> Response {
    let data = req.form_data();
    match handle_submission(&data) {
        None => Response::no_content(),
        Some(reply) => Response::json(&reply).status(422),
    }
}

/// Builds the demo router with request logging.
pub fn build_router() -> Router {
    Router::new()
        .middleware(RequestLogger)
        .get("/", index_handler)
        .post("/", submit_page_handler)
        .post("/randomize", randomize_handler)
        .post("/submit", submit_api_handler)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_renders_form() {
        let router = build_router();
        let res = router.handle(Request::get("/")).await;

        assert_eq!(res.status, 200);
        let body = res.body_string().unwrap();
        assert!(body.contains("Select an option"));
        assert!(body.contains("Update Random Option"));
    }

    #[tokio::test]
    async fn test_submit_valid_option() {
        let router = build_router();
        let req = Request::post("/submit").body("option=Option+2");
        let res = router.handle(req).await;

        assert_eq!(res.status, 204);
        assert!(res.body.is_empty());
    }

    #[tokio::test]
    async fn test_submit_arbitrary_string_passes() {
        // No membership check against the catalog: any string is accepted.
        let router = build_router();
        let req = Request::post("/submit").body("option=Not+An+Option");
        let res = router.handle(req).await;

        assert_eq!(res.status, 204);
    }

    #[tokio::test]
    async fn test_submit_missing_option() {
        let router = build_router();
        let res = router.handle(Request::post("/submit")).await;

        assert_eq!(res.status, 422);
        let payload: serde_json::Value = serde_json::from_slice(&res.body).unwrap();
        assert_eq!(payload["status"], "error");
        let messages = payload["fieldErrors"]["option"].as_array().unwrap();
        assert!(!messages.is_empty());
    }

    #[tokio::test]
    async fn test_page_submit_renders_errors() {
        let router = build_router();
        let res = router.handle(Request::post("/")).await;

        assert_eq!(res.status, 200);
        let body = res.body_string().unwrap();
        assert!(body.contains("text-red-500"));
        assert!(body.contains("This field is required."));
    }

    #[tokio::test]
    async fn test_page_submit_echoes_value() {
        let router = build_router();
        let req = Request::post("/").body("option=Option+3");
        let res = router.handle(req).await;

        let body = res.body_string().unwrap();
        assert!(body.contains(r#"value="Option 3""#));
        assert!(!body.contains("text-red-500"));
    }

    #[tokio::test]
    async fn test_randomize_always_picks_catalog_member() {
        let router = build_router();
        for _ in 0..10 {
            let res = router.handle(Request::post("/randomize")).await;
            assert_eq!(res.status, 200);
            let body = res.body_string().unwrap();
            assert!(OPTIONS
                .iter()
                .any(|option| body.contains(&format!(r#"value="{option}""#))));
        }
    }

    #[test]
    fn test_handle_submission_logs_and_replies() {
        let data: HashMap<String, String> = [("option".to_string(), "Option 1".to_string())]
            .into_iter()
            .collect();
        assert!(handle_submission(&data).is_none());

        let reply = handle_submission(&HashMap::new()).unwrap();
        assert_eq!(reply.status, "error");
        assert!(reply.field_errors.get("option").is_some());
    }
}
