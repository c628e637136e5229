use blogful::user_db::UserDb;
use blogful::util::StrExt;
use log::{info, warn};
use rocket::form::{Form, FromForm};
use rocket::http::{Cookie, CookieJar};
use rocket::request::FlashMessage;
use rocket::response::content::RawHtml;
use rocket::response::{Flash, Redirect};
use rocket::{get, post, uri, Responder, State};
use crate::app_constants::{INDEX_PATH, LOGIN_FAILED_MESSAGE, LOGIN_PATH, SESSION_COOKIE};
use crate::db::DbConnection;
use crate::routes::authentication_guard::MaybeUser;
use crate::routes::errors::RouteError;
use crate::routes::views::{FlashView, LoginContext};
use crate::templates::Templates;

#[derive(FromForm)]
pub struct LoginForm<'r> {
    email: &'r str,
    password: &'r str,
    next: Option<&'r str>,
}

#[derive(Responder)]
pub enum LoginResponse {
    Success(Redirect),
    Failure(Flash<Redirect>),
}

#[get("/login?<next>")]
pub fn login_page(
    next: Option<&str>,
    user_guard: MaybeUser,
    flash: Option<FlashMessage<'_>>,
    templates: &State<Templates>,
) -> Result<RawHtml<String>, RouteError> {
    let MaybeUser(user) = user_guard;
    Ok(
        templates.render(
            "login.html",
            &LoginContext {
                user: user.as_ref(),
                next,
                flash: flash.as_ref().map(|f| FlashView {
                    kind: f.kind(),
                    message: f.message(),
                }),
            },
        )?
    )
}

#[post("/login", data = "<form>")]
pub async fn login(
    form: Form<LoginForm<'_>>,
    mut conn: DbConnection,
    user_db: &State<Box<dyn UserDb>>,
    cookies: &CookieJar<'_>,
) -> Result<LoginResponse, RouteError> {
    let user = user_db
        .check_user_credentials(&mut conn, form.email, form.password)
        .await?;
    match user {
        Some(user) => {
            info!("user {} logged in", user.id);
            cookies.add_private(Cookie::new(SESSION_COOKIE, user.id.to_string()));
            Ok(LoginResponse::Success(Redirect::to(local_redirect_target(form.next))))
        },
        None => {
            warn!("failed login attempt for \"{}\"", form.email);
            Ok(
                LoginResponse::Failure(
                    Flash::error(
                        Redirect::to(uri!(login_page(form.next))),
                        LOGIN_FAILED_MESSAGE,
                    )
                )
            )
        },
    }
}

#[get("/logout")]
pub fn logout(cookies: &CookieJar<'_>) -> Redirect {
    cookies.remove_private(SESSION_COOKIE);
    Redirect::to(LOGIN_PATH)
}

/// Only paths on this site are followed after logging in.
fn local_redirect_target(next: Option<&str>) -> String {
    next
        .and_then(|n| n.nonblank_to_some())
        .filter(|n| n.starts_with('/') && !n.starts_with("//") && !n.contains('\\'))
        .unwrap_or_else(|| INDEX_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_targets() {
        assert_eq!(local_redirect_target(None), "/");
        assert_eq!(local_redirect_target(Some("")), "/");
        assert_eq!(local_redirect_target(Some("/entry/add")), "/entry/add");
        assert_eq!(local_redirect_target(Some("/page/2?limit=5")), "/page/2?limit=5");
        assert_eq!(local_redirect_target(Some("https://example.com/")), "/");
        assert_eq!(local_redirect_target(Some("//example.com/")), "/");
        assert_eq!(local_redirect_target(Some("/\\example.com")), "/");
    }
}
