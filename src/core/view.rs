//! Data loading for the public view page.
//!
//! [`load_view`] is the server-side glue behind `/view/{name}`: it finds the
//! file and its owner, checks an optional `pw` credential, counts the view,
//! and precomputes the link-preview metadata. Storage is reached through
//! [`FileRepository`]; credentials through [`CredentialVerifier`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;
use crate::core::code;
use crate::core::content_url::{ContentUrl, returned_url};
use crate::core::crypto::CredentialVerifier;
use crate::core::embed::{self, MetaTag};
use crate::core::error::RepositoryError;
use crate::core::host::{RequestHeaders, public_origin};
use crate::core::template::{TemplateContext, TemplateLinks};
use crate::models::{FileRecord, FileSummary, RevealState, User, UserMetrics};

/// A file row including server-only columns.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredFile {
    pub file: FileSummary,
    /// PHC hash of the file password, if any.
    pub password_hash: Option<String>,
    /// Owner; files without an owner are not viewable.
    pub user_id: Option<String>,
}

/// Storage used by the view page.
#[async_trait(?Send)]
pub trait FileRepository {
    async fn find_file_by_name(&self, name: &str) -> Result<Option<StoredFile>, RepositoryError>;
    async fn find_user(&self, id: &str) -> Result<Option<User>, RepositoryError>;
    async fn user_metrics(&self, user_id: &str) -> Result<UserMetrics, RepositoryError>;
    async fn increment_views(&self, file_id: &str) -> Result<(), RepositoryError>;
}

/// Incoming `/view/{name}?pw=...` request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewRequest {
    pub name: Option<String>,
    pub pw: Option<String>,
    pub headers: RequestHeaders,
}

/// Everything the view page renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewPage {
    /// The file, with `password` reflecting whether it is gated.
    pub file: FileSummary,
    /// Show the password prompt instead of content.
    pub password_required: bool,
    /// Verified credential, forwarded to content URLs.
    pub pw: Option<String>,
    /// Render as source code.
    pub code: bool,
    pub user: User,
    pub metrics: UserMetrics,
    /// Public origin, e.g. `https://files.example.com`.
    pub host: String,
    pub files_route: String,
    pub meta: Vec<MetaTag>,
}

impl ViewPage {
    pub fn record(&self) -> FileRecord {
        FileRecord::from(&self.file)
    }

    /// Reveal state for the page preview (always revealed).
    pub fn reveal(&self) -> RevealState {
        RevealState::shown()
            .with_password(self.pw.clone())
            .with_code_view(self.code)
    }

    pub fn links(&self) -> TemplateLinks {
        TemplateLinks {
            raw: ContentUrl::new(&self.file.name)
                .absolute(&self.host)
                .to_string(),
            returned: returned_url(&self.host, &self.files_route, &self.file.name),
        }
    }

    /// Download link, carrying the verified credential.
    pub fn download_url(&self) -> String {
        ContentUrl::new(&self.file.name)
            .password(self.pw.as_deref())
            .download(true)
            .to_string()
    }
}

/// Result of loading a view page.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewOutcome {
    NotFound,
    Found(Box<ViewPage>),
}

/// Load the view page for `request`.
///
/// A valid `pw` for a gated file skips the password prompt and does not
/// count as a view. Every other load counts exactly one view.
pub async fn load_view<R, V>(
    repo: &R,
    verifier: &V,
    config: &ViewConfig,
    request: &ViewRequest,
) -> Result<ViewOutcome, RepositoryError>
where
    R: FileRepository + ?Sized,
    V: CredentialVerifier + ?Sized,
{
    let Some(name) = request.name.as_deref().filter(|n| !n.is_empty()) else {
        return Ok(ViewOutcome::NotFound);
    };

    let Some(stored) = repo.find_file_by_name(name).await? else {
        log::info!("view: no file named {}", name);
        return Ok(ViewOutcome::NotFound);
    };
    let Some(user_id) = stored.user_id.as_deref() else {
        log::info!("view: file {} has no owner", name);
        return Ok(ViewOutcome::NotFound);
    };
    let Some(user) = repo.find_user(user_id).await? else {
        log::info!("view: owner of {} no longer exists", name);
        return Ok(ViewOutcome::NotFound);
    };
    let metrics = repo.user_metrics(user_id).await?;

    let gated = stored.password_hash.is_some();
    let verified = match (request.pw.as_deref(), stored.password_hash.as_deref()) {
        (Some(pw), Some(hash)) if !pw.is_empty() => verifier.verify(pw, hash),
        _ => false,
    };

    if !verified {
        repo.increment_views(&stored.file.id).await?;
    }

    let mut file = stored.file;
    file.password = gated;

    let mut page = ViewPage {
        code: code::is_code(&file.name),
        file,
        password_required: gated && !verified,
        pw: request.pw.clone().filter(|_| verified),
        user,
        metrics,
        host: public_origin(&request.headers, config.return_https_urls),
        files_route: config.files_route.clone(),
        meta: Vec::new(),
    };

    if !page.password_required {
        page.meta = page_meta(&page);
    }

    Ok(ViewOutcome::Found(Box::new(page)))
}

fn page_meta(page: &ViewPage) -> Vec<MetaTag> {
    let links = page.links();
    let ctx = TemplateContext {
        file: Some(&page.file),
        user: Some(&page.user),
        link: Some(&links),
        metrics: Some(&page.metrics),
    };

    let mut meta = embed::embed_tags(&page.user.view, &ctx);
    meta.extend(embed::media_tags(&page.file, &page.host));
    meta
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::models::ViewSettings;

    /// Plaintext "hashes" so tests stay fast.
    struct PlainVerifier;

    impl CredentialVerifier for PlainVerifier {
        fn verify(&self, candidate: &str, stored_hash: &str) -> bool {
            candidate == stored_hash
        }
    }

    #[derive(Default)]
    struct MemoryRepo {
        files: HashMap<String, StoredFile>,
        users: HashMap<String, User>,
        views: RefCell<HashMap<String, u64>>,
    }

    impl MemoryRepo {
        fn with_file(mut self, name: &str, mime: &str, hash: Option<&str>, owner: Option<&str>) -> Self {
            let file = FileSummary {
                id: format!("id-{}", name),
                name: name.to_string(),
                original_name: None,
                mime_type: mime.to_string(),
                size: 10,
                created_at: "2024-01-01T00:00:00Z".to_string(),
                views: 0,
                favorite: false,
                password: false,
                thumbnail: None,
                folder_id: None,
            };
            self.files.insert(
                name.to_string(),
                StoredFile {
                    file,
                    password_hash: hash.map(String::from),
                    user_id: owner.map(String::from),
                },
            );
            self
        }

        fn with_user(mut self, id: &str) -> Self {
            self.users.insert(
                id.to_string(),
                User {
                    id: id.to_string(),
                    username: "alice".to_string(),
                    view: ViewSettings::default(),
                },
            );
            self
        }

        fn views(&self, name: &str) -> u64 {
            self.views
                .borrow()
                .get(&format!("id-{}", name))
                .copied()
                .unwrap_or(0)
        }
    }

    #[async_trait(?Send)]
    impl FileRepository for MemoryRepo {
        async fn find_file_by_name(&self, name: &str) -> Result<Option<StoredFile>, RepositoryError> {
            Ok(self.files.get(name).cloned())
        }

        async fn find_user(&self, id: &str) -> Result<Option<User>, RepositoryError> {
            Ok(self.users.get(id).cloned())
        }

        async fn user_metrics(&self, _user_id: &str) -> Result<UserMetrics, RepositoryError> {
            Ok(UserMetrics::default())
        }

        async fn increment_views(&self, file_id: &str) -> Result<(), RepositoryError> {
            *self.views.borrow_mut().entry(file_id.to_string()).or_default() += 1;
            Ok(())
        }
    }

    fn request(name: &str, pw: Option<&str>) -> ViewRequest {
        ViewRequest {
            name: Some(name.to_string()),
            pw: pw.map(String::from),
            headers: RequestHeaders {
                host: "files.test".to_string(),
                ..Default::default()
            },
        }
    }

    async fn load(repo: &MemoryRepo, req: &ViewRequest) -> ViewOutcome {
        load_view(repo, &PlainVerifier, &ViewConfig::default(), req)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_not_found_cases() {
        let repo = MemoryRepo::default()
            .with_file("orphan.png", "image/png", None, None)
            .with_file("ghost.png", "image/png", None, Some("missing"));

        assert_eq!(load(&repo, &ViewRequest::default()).await, ViewOutcome::NotFound);
        assert_eq!(load(&repo, &request("nope.png", None)).await, ViewOutcome::NotFound);
        assert_eq!(load(&repo, &request("orphan.png", None)).await, ViewOutcome::NotFound);
        assert_eq!(load(&repo, &request("ghost.png", None)).await, ViewOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_public_file_counts_one_view() {
        let repo = MemoryRepo::default()
            .with_file("cat.png", "image/png", None, Some("u1"))
            .with_user("u1");

        let ViewOutcome::Found(page) = load(&repo, &request("cat.png", None)).await else {
            panic!("expected page");
        };
        assert!(!page.password_required);
        assert_eq!(page.host, "http://files.test");
        assert!(!page.meta.is_empty());
        assert_eq!(repo.views("cat.png"), 1);
    }

    #[tokio::test]
    async fn test_valid_password_skips_prompt_and_view_count() {
        let repo = MemoryRepo::default()
            .with_file("doc.txt", "text/plain", Some("hunter2"), Some("u1"))
            .with_user("u1");

        let ViewOutcome::Found(page) = load(&repo, &request("doc.txt", Some("hunter2"))).await
        else {
            panic!("expected page");
        };
        assert!(!page.password_required);
        assert!(page.file.password);
        assert_eq!(page.pw.as_deref(), Some("hunter2"));
        assert_eq!(page.download_url(), "/raw/doc.txt?pw=hunter2&download=true");
        assert_eq!(repo.views("doc.txt"), 0);
    }

    #[tokio::test]
    async fn test_wrong_password_prompts_and_counts() {
        let repo = MemoryRepo::default()
            .with_file("doc.txt", "text/plain", Some("hunter2"), Some("u1"))
            .with_user("u1");

        let ViewOutcome::Found(page) = load(&repo, &request("doc.txt", Some("guess"))).await else {
            panic!("expected page");
        };
        assert!(page.password_required);
        assert_eq!(page.pw, None);
        assert!(page.meta.is_empty());
        assert_eq!(repo.views("doc.txt"), 1);
    }

    #[tokio::test]
    async fn test_pw_on_public_file_is_ignored() {
        let repo = MemoryRepo::default()
            .with_file("cat.png", "image/png", None, Some("u1"))
            .with_user("u1");

        let ViewOutcome::Found(page) = load(&repo, &request("cat.png", Some("x"))).await else {
            panic!("expected page");
        };
        assert_eq!(page.pw, None);
        assert_eq!(repo.views("cat.png"), 1);
    }

    #[tokio::test]
    async fn test_code_files_force_code_view() {
        let repo = MemoryRepo::default()
            .with_file("main.rs", "text/x-rust", None, Some("u1"))
            .with_user("u1");

        let ViewOutcome::Found(page) = load(&repo, &request("main.rs", None)).await else {
            panic!("expected page");
        };
        assert!(page.code);
        assert!(page.reveal().force_code_view);
        assert_eq!(page.links().returned, "http://files.test/u/main.rs");
    }
}
