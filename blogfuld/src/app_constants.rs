/// Private cookie holding the id of the logged in user.
pub const SESSION_COOKIE: &str = "user_id";

pub const INDEX_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

pub const LOGIN_FAILED_MESSAGE: &str = "Incorrect username or password";
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in to access this page.";

pub const DATE_FORMAT: &str = "[day]/[month]/[year]";
