pub mod auth_gate;
pub mod preferences;

pub use self::auth_gate::{LOGIN_PATH, auth_gate, is_public_path, session_from_jar};
pub use self::preferences::PreferenceContext;
