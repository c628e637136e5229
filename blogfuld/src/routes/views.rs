use blogful::authorization::may_modify;
use blogful::data::{Entry, User};
use blogful::listing::EntryPage;
use blogful::rendering::{timestamp_to_string, FormattingError};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EntryView {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub can_modify: bool,
}

impl EntryView {
    pub fn new(entry: Entry, user: Option<&User>) -> Result<Self, FormattingError> {
        let can_modify = may_modify(&entry, user);
        Ok(
            EntryView {
                id: entry.id.0,
                title: entry.title,
                content: entry.content,
                created_at: timestamp_to_string(entry.created_at)?,
                can_modify,
            }
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ListingContext<'a> {
    pub user: Option<&'a User>,
    pub entries: Vec<EntryView>,
    pub page: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
    /// Carried over into the navigation links when set explicitly.
    pub limit: Option<u64>,
}

impl<'a> ListingContext<'a> {
    pub fn new(
        page: EntryPage,
        user: Option<&'a User>,
        limit: Option<u64>,
    ) -> Result<Self, FormattingError> {
        Ok(
            ListingContext {
                user,
                entries: page.entries
                    .into_iter()
                    .map(|e| EntryView::new(e, user))
                    .collect::<Result<_, _>>()?,
                page: page.page,
                total_pages: page.total_pages,
                has_next: page.has_next,
                has_prev: page.has_prev,
                limit,
            }
        )
    }
}

#[derive(Debug, Serialize)]
pub struct EntryContext<'a> {
    pub user: Option<&'a User>,
    pub entry: EntryView,
}

#[derive(Debug, Serialize)]
pub struct FormContext<'a> {
    pub user: Option<&'a User>,
}

#[derive(Debug, Serialize)]
pub struct LoginContext<'a> {
    pub user: Option<&'a User>,
    pub next: Option<&'a str>,
    pub flash: Option<FlashView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct FlashView<'a> {
    pub kind: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ErrorContext<'a> {
    pub user: Option<&'a User>,
    pub status: u16,
    pub reason: &'a str,
}
