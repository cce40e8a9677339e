//! View page loading end to end: argon2 credentials, view counting and
//! what the preview resolver makes of the loaded page.

use std::cell::Cell;

use async_trait::async_trait;
use shareview::config::ViewConfig;
use shareview::core::crypto::{Argon2Verifier, hash_password};
use shareview::core::embed::MetaTag;
use shareview::core::error::RepositoryError;
use shareview::core::host::RequestHeaders;
use shareview::core::view::{FileRepository, StoredFile, ViewOutcome, ViewPage, ViewRequest, load_view};
use shareview::core::{resolve, text_source};
use shareview::models::{
    FileSummary, PlaceholderReason, PreviewPrefs, RenderDirective, TextState, Thumbnail, User,
    UserMetrics, ViewSettings,
};

struct SingleFileRepo {
    stored: StoredFile,
    owner: User,
    views: Cell<u64>,
}

impl SingleFileRepo {
    fn new(name: &str, mime: &str, password: Option<&str>) -> Self {
        let password_hash = password.map(|pw| hash_password(pw).unwrap());
        Self {
            stored: StoredFile {
                file: FileSummary {
                    id: "f1".to_string(),
                    name: name.to_string(),
                    original_name: Some(format!("original-{}", name)),
                    mime_type: mime.to_string(),
                    size: 2048,
                    created_at: "2024-05-01T12:00:00Z".to_string(),
                    views: 7,
                    favorite: false,
                    password: false,
                    thumbnail: Some(Thumbnail {
                        path: "thumb-f1.jpg".to_string(),
                    }),
                    folder_id: None,
                },
                password_hash,
                user_id: Some("u1".to_string()),
            },
            owner: User {
                id: "u1".to_string(),
                username: "dana".to_string(),
                view: ViewSettings {
                    embed: true,
                    embed_title: Some("{file.name} by {user.username::upper}".to_string()),
                    embed_color: Some("#ff8800".to_string()),
                    ..ViewSettings::default()
                },
            },
            views: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl FileRepository for SingleFileRepo {
    async fn find_file_by_name(&self, name: &str) -> Result<Option<StoredFile>, RepositoryError> {
        Ok((self.stored.file.name == name).then(|| self.stored.clone()))
    }

    async fn find_user(&self, id: &str) -> Result<Option<User>, RepositoryError> {
        Ok((self.owner.id == id).then(|| self.owner.clone()))
    }

    async fn user_metrics(&self, _user_id: &str) -> Result<UserMetrics, RepositoryError> {
        Ok(UserMetrics {
            files: 3,
            storage: 4096,
            views: 21,
        })
    }

    async fn increment_views(&self, _file_id: &str) -> Result<(), RepositoryError> {
        self.views.set(self.views.get() + 1);
        Ok(())
    }
}

fn request(name: &str, pw: Option<&str>) -> ViewRequest {
    ViewRequest {
        name: Some(name.to_string()),
        pw: pw.map(String::from),
        headers: RequestHeaders {
            host: "share.example".to_string(),
            forwarded_proto: Some("https".to_string()),
            cf_visitor: None,
        },
    }
}

async fn page(repo: &SingleFileRepo, req: &ViewRequest) -> ViewPage {
    match load_view(repo, &Argon2Verifier, &ViewConfig::default(), req)
        .await
        .unwrap()
    {
        ViewOutcome::Found(page) => *page,
        ViewOutcome::NotFound => panic!("expected a page"),
    }
}

#[tokio::test]
async fn protected_video_unlocks_with_the_right_password() {
    let repo = SingleFileRepo::new("clip.mp4", "video/mp4", Some("open sesame"));

    let locked = page(&repo, &request("clip.mp4", Some("wrong"))).await;
    assert!(locked.password_required);
    assert!(locked.pw.is_none());
    assert!(locked.meta.is_empty());
    assert_eq!(repo.views.get(), 1);
    assert_eq!(
        resolve(&locked.record(), &locked.reveal(), PreviewPrefs::default(), &TextState::Idle),
        RenderDirective::Locked
    );

    let unlocked = page(&repo, &request("clip.mp4", Some("open sesame"))).await;
    assert!(!unlocked.password_required);
    assert_eq!(repo.views.get(), 1);

    assert_eq!(
        resolve(
            &unlocked.record(),
            &unlocked.reveal(),
            PreviewPrefs::default(),
            &TextState::Idle,
        ),
        RenderDirective::Video {
            source_url: "/raw/clip.mp4?pw=open%20sesame".to_string(),
            poster_url: Some("/raw/thumb-f1.jpg".to_string()),
            poster_only: false,
        }
    );
}

#[tokio::test]
async fn public_page_carries_templated_embed_tags() {
    let repo = SingleFileRepo::new("cat.png", "image/png", None);

    let page = page(&repo, &request("cat.png", None)).await;
    assert_eq!(page.host, "https://share.example");
    assert_eq!(repo.views.get(), 1);

    assert!(page.meta.contains(&MetaTag::property("og:title", "cat.png by DANA")));
    assert!(page.meta.contains(&MetaTag::property("theme-color", "#ff8800")));
    assert!(page.meta.contains(&MetaTag::property(
        "og:image",
        "https://share.example/raw/cat.png"
    )));
}

#[tokio::test]
async fn source_files_load_as_code_view() {
    let repo = SingleFileRepo::new("main.rs", "text/plain", None);

    let page = page(&repo, &request("main.rs", None)).await;
    assert!(page.code);

    let record = page.record();
    let reveal = page.reveal();
    assert_eq!(text_source(&record, &reveal).as_deref(), Some("/raw/main.rs"));
    assert_eq!(
        resolve(&record, &reveal, PreviewPrefs::default(), &TextState::Loading),
        RenderDirective::Placeholder {
            reason: PlaceholderReason::ViewText
        }
    );

    let loaded = TextState::Loaded("fn main() {}".to_string());
    let RenderDirective::Text { language_hint, content, .. } =
        resolve(&record, &reveal, PreviewPrefs::default(), &loaded)
    else {
        panic!("expected text");
    };
    assert_eq!(language_hint, "rs");
    assert_eq!(content, "fn main() {}");
}

#[tokio::test]
async fn view_page_survives_the_json_api() {
    let repo = SingleFileRepo::new("notes.md", "text/markdown", None);
    let page = page(&repo, &request("notes.md", None)).await;

    let json = serde_json::to_string(&page).unwrap();
    assert!(json.contains(r#""passwordRequired":false"#));
    assert!(json.contains(r#""filesRoute":"/u""#));
    let back: ViewPage = serde_json::from_str(&json).unwrap();
    assert_eq!(back, page);
}
