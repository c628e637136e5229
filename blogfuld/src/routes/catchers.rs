use log::error;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::response::{Flash, Redirect};
use rocket::{catch, uri, Request};
use crate::app_constants::LOGIN_REQUIRED_MESSAGE;
use crate::routes::views::ErrorContext;
use crate::templates::Templates;

/// Sends anonymous users to the login page, and back after they log in.
#[catch(401)]
pub fn unauthorized(request: &Request<'_>) -> Flash<Redirect> {
    let next = request.uri().to_string();
    Flash::error(
        Redirect::to(uri!(crate::routes::login::login_page(Some(next.as_str())))),
        LOGIN_REQUIRED_MESSAGE,
    )
}

#[catch(default)]
pub fn default_catcher(
    status: Status,
    request: &Request<'_>,
) -> (Status, RawHtml<String>) {
    let reason = status.reason_lossy();
    let page = request
        .rocket()
        .state::<Templates>()
        .map(|templates| templates.render(
            "error.html",
            &ErrorContext {
                user: None,
                status: status.code,
                reason,
            },
        ));
    match page {
        Some(Ok(page)) => (status, page),
        Some(Err(e)) => {
            error!("failed to render the error page: {e}");
            (status, fallback_page(status))
        },
        None => (status, fallback_page(status)),
    }
}

fn fallback_page(status: Status) -> RawHtml<String> {
    RawHtml(
        format!(
            "<!DOCTYPE html><html><head><title>{status}</title></head>\
                <body><h1>{status}</h1></body></html>"
        )
    )
}
