#![allow(dead_code)]

use assert_fs::TempDir;
use blogful::data::{EntryId, NewEntry, UserId};
use blogful::storage::EntryStorage;
use blogful::user_db::UserDb;
use blogfuld::build_rocket;
use rocket::figment::Figment;
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::{Client, LocalResponse};
use serde_json::json;
use sqlx::SqlitePool;
use time::{Duration, OffsetDateTime};

pub const SECRET_KEY: &str = "hPRYyVRiMyxpw5sBB1XeCMN1kFsDCqKvBi2QJxBVHQk=";

pub const ALICE_EMAIL: &str = "alice@example.com";
pub const ALICE_PASSWORD: &str = "alice-password";
pub const PETER_EMAIL: &str = "peter@example.com";
pub const PETER_PASSWORD: &str = "peter-password";

pub struct TestApp {
    pub client: Client,
    pub alice: UserId,
    pub peter: UserId,
    _dir: TempDir,
}

pub async fn spawn_app() -> TestApp {
    let dir = TempDir::new().expect("failed to create a temporary directory");
    let client = Client::tracked(build_rocket(test_figment(&dir)))
        .await
        .expect("failed to launch the app");

    let alice = add_user(&client, "Alice", ALICE_EMAIL, ALICE_PASSWORD).await;
    let peter = add_user(&client, "Peter", PETER_EMAIL, PETER_PASSWORD).await;
    TestApp {
        client,
        alice,
        peter,
        _dir: dir,
    }
}

/// A database inside `dir` and hashing cheap enough for tests.
pub fn test_figment(dir: &TempDir) -> Figment {
    let url = format!("sqlite://{}", dir.path().join("blog.db").display());
    rocket::Config::figment()
        .merge(("secret_key", SECRET_KEY))
        .merge(("log_level", "off"))
        .merge(("databases.blog.url", url))
        .merge((
            "hasher_config",
            json!({
                "argon2_m_cost": 8,
                "argon2_t_cost": 1,
                "argon2_p_cost": 1,
            }),
        ))
}

async fn add_user(
    client: &Client,
    name: &str,
    email: &str,
    password: &str,
) -> UserId {
    let user_db = client.rocket()
        .state::<Box<dyn UserDb>>()
        .expect("no user db");
    let mut conn = pool(client).acquire().await.unwrap();
    user_db.add_user(&mut conn, name, email, password).await.unwrap()
}

fn pool(client: &Client) -> &SqlitePool {
    client.rocket().state::<SqlitePool>().expect("no database pool")
}

impl TestApp {
    /// Entries with increasing timestamps, so the last one is the newest.
    pub async fn insert_entries(
        &self,
        author_id: UserId,
        titles: impl IntoIterator<Item = String>,
    ) -> Vec<EntryId> {
        let mut conn = pool(&self.client).acquire().await.unwrap();
        let mut storage = EntryStorage::new(&mut conn);
        let base = OffsetDateTime::now_utc() - Duration::hours(1);
        let mut ids = Vec::new();
        for (i, title) in titles.into_iter().enumerate() {
            let id = storage
                .create_entry(
                    &NewEntry {
                        content: format!("content of {title}"),
                        title,
                        author_id,
                    },
                    base + Duration::seconds(i as i64),
                )
                .await
                .unwrap();
            ids.push(id);
        }
        ids
    }

    pub async fn get_entry(&self, id: EntryId) -> Option<blogful::data::Entry> {
        let mut conn = pool(&self.client).acquire().await.unwrap();
        EntryStorage::new(&mut conn).get_entry(id).await.ok()
    }

    pub async fn login(&self, email: &str, password: &str) -> LocalResponse<'_> {
        self.login_with_next(email, password, "").await
    }

    pub async fn login_with_next(
        &self,
        email: &str,
        password: &str,
        next: &str,
    ) -> LocalResponse<'_> {
        self.client
            .post("/login")
            .header(ContentType::Form)
            .body(format!("email={email}&password={password}&next={next}"))
            .dispatch()
            .await
    }

    pub async fn logout(&self) {
        let response = self.client.get("/logout").dispatch().await;
        assert_eq!(response.status(), Status::SeeOther);
    }

    pub async fn get_page(&self, uri: &str) -> (Status, String) {
        let response = self.client.get(uri).dispatch().await;
        let status = response.status();
        (status, response.into_string().await.unwrap_or_default())
    }
}

pub fn location<'a>(response: &'a LocalResponse<'_>) -> &'a str {
    response.headers().get_one("Location").expect("not a redirect")
}
