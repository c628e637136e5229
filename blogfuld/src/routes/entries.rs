use blogful::authorization::authorize_modification;
use blogful::config::app_config::AppConfig;
use blogful::data::{EntryId, EntryUpdate, NewEntry};
use blogful::listing::{list_page, ListingError};
use blogful::pagination::PageRequest;
use blogful::storage::EntryStorage;
use log::info;
use rocket::form::{Form, FromForm};
use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::{get, post, State};
use sqlx::Connection;
use time::OffsetDateTime;
use crate::app_constants::INDEX_PATH;
use crate::db::DbConnection;
use crate::routes::authentication_guard::{CurrentUser, MaybeUser};
use crate::routes::errors::RouteError;
use crate::routes::views::{EntryContext, EntryView, FormContext, ListingContext};
use crate::templates::Templates;

// Read-then-write transactions take the write lock up front.
const BEGIN_WRITE: &str = "BEGIN IMMEDIATE";

#[derive(Debug, FromForm)]
pub struct EntryForm {
    title: String,
    content: String,
}

#[get("/?<limit>")]
pub async fn index(
    limit: Option<u64>,
    user: MaybeUser,
    conn: DbConnection,
    config: &State<AppConfig>,
    templates: &State<Templates>,
) -> Result<RawHtml<String>, RouteError> {
    render_listing(1, limit, user, conn, config, templates).await
}

#[get("/page/<page>?<limit>")]
pub async fn page(
    page: u64,
    limit: Option<u64>,
    user: MaybeUser,
    conn: DbConnection,
    config: &State<AppConfig>,
    templates: &State<Templates>,
) -> Result<RawHtml<String>, RouteError> {
    render_listing(page, limit, user, conn, config, templates).await
}

async fn render_listing(
    page: u64,
    limit: Option<u64>,
    MaybeUser(user): MaybeUser,
    mut conn: DbConnection,
    config: &AppConfig,
    templates: &Templates,
) -> Result<RawHtml<String>, RouteError> {
    let request = PageRequest::new(
        page,
        limit.unwrap_or(config.page_size),
        config.max_page_size,
    ).map_err(ListingError::from)?;
    let entries = list_page(&mut EntryStorage::new(&mut conn), request).await?;
    Ok(
        templates.render(
            "entries.html",
            &ListingContext::new(entries, user.as_ref(), limit)?,
        )?
    )
}

#[get("/entry/add")]
pub fn add_entry_page(
    user_guard: CurrentUser,
    templates: &State<Templates>,
) -> Result<RawHtml<String>, RouteError> {
    let CurrentUser(user) = user_guard;
    Ok(templates.render("add_entry.html", &FormContext { user: Some(&user) })?)
}

#[post("/entry/add", data = "<form>")]
pub async fn add_entry(
    user_guard: CurrentUser,
    form: Form<EntryForm>,
    mut conn: DbConnection,
) -> Result<Redirect, RouteError> {
    let CurrentUser(user) = user_guard;
    let EntryForm { title, content } = form.into_inner();
    let mut tx = conn.begin().await?;
    let id = EntryStorage::new(&mut tx)
        .create_entry(
            &NewEntry {
                title,
                content,
                author_id: user.id,
            },
            OffsetDateTime::now_utc(),
        )
        .await?;
    tx.commit().await?;
    info!("user {} added entry {id}", user.id);
    Ok(Redirect::to(INDEX_PATH))
}

#[get("/entry/<id>")]
pub async fn view_entry(
    id: i64,
    user_guard: MaybeUser,
    mut conn: DbConnection,
    templates: &State<Templates>,
) -> Result<RawHtml<String>, RouteError> {
    let MaybeUser(user) = user_guard;
    let entry = EntryStorage::new(&mut conn).get_entry(EntryId(id)).await?;
    Ok(
        templates.render(
            "entry.html",
            &EntryContext {
                user: user.as_ref(),
                entry: EntryView::new(entry, user.as_ref())?,
            },
        )?
    )
}

#[get("/entry/<id>/edit")]
pub async fn edit_entry_page(
    id: i64,
    user_guard: MaybeUser,
    mut conn: DbConnection,
    templates: &State<Templates>,
) -> Result<RawHtml<String>, RouteError> {
    let MaybeUser(user) = user_guard;
    let entry = EntryStorage::new(&mut conn).get_entry(EntryId(id)).await?;
    authorize_modification(&entry, user.as_ref())?;
    Ok(
        templates.render(
            "edit_entry.html",
            &EntryContext {
                user: user.as_ref(),
                entry: EntryView::new(entry, user.as_ref())?,
            },
        )?
    )
}

#[post("/entry/<id>/edit", data = "<form>")]
pub async fn edit_entry(
    id: i64,
    user_guard: MaybeUser,
    form: Form<EntryForm>,
    mut conn: DbConnection,
) -> Result<Redirect, RouteError> {
    let MaybeUser(user) = user_guard;
    let EntryForm { title, content } = form.into_inner();
    let id = EntryId(id);
    let mut tx = conn.begin_with(BEGIN_WRITE).await?;
    let mut storage = EntryStorage::new(&mut tx);
    let entry = storage.get_entry(id).await?;
    authorize_modification(&entry, user.as_ref())?;
    storage.update_entry(id, &EntryUpdate { title, content }).await?;
    tx.commit().await?;
    info!("entry {id} updated by its owner");
    Ok(Redirect::to(INDEX_PATH))
}

#[get("/entry/<id>/delete")]
pub async fn delete_entry(
    id: i64,
    user_guard: MaybeUser,
    mut conn: DbConnection,
) -> Result<Redirect, RouteError> {
    let MaybeUser(user) = user_guard;
    let id = EntryId(id);
    let mut tx = conn.begin_with(BEGIN_WRITE).await?;
    let mut storage = EntryStorage::new(&mut tx);
    let entry = storage.get_entry(id).await?;
    authorize_modification(&entry, user.as_ref())?;
    storage.delete_entry(id).await?;
    tx.commit().await?;
    info!("entry {id} deleted by its owner");
    Ok(Redirect::to(INDEX_PATH))
}
