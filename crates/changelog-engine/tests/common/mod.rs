use changelog_core::host::{CurrentUser, MemoryHost};
use changelog_core::ChangelogConfig;
use changelog_engine::{FormData, Router};

#[allow(dead_code)]
pub const PNG_BYTES: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Router over a document with two pages and a signed-in user
#[allow(dead_code)]
pub fn router() -> Router<MemoryHost> {
    let host = MemoryHost::new()
        .with_page("Page 1")
        .with_page("Page 2")
        .with_user(CurrentUser {
            name: "Ana Souza".to_string(),
            photo_url: Some("https://cdn.example.com/ana.png".to_string()),
        });
    Router::new(host, ChangelogConfig::default())
}

#[allow(dead_code)]
pub fn form(title: &str) -> FormData {
    FormData {
        title: Some(title.to_string()),
        description: Some(format!("About {}", title)),
        change_type: Some("New Feature".to_string()),
        ..FormData::default()
    }
}
