//! picfeed core library.
//!
//! In-memory state for an image-sharing app: accounts, a single login
//! session, a follow graph, a newest-first feed, and free-text search over
//! it. Results come back as plain view records for any renderer.
//!
//! ```
//! use picfeed::App;
//!
//! let mut app = App::new();
//! app.sign_up("bob@example.com", "pw", "", "bob").unwrap();
//! app.add_pic("https://example.com/cat.png", "cat pic").unwrap();
//!
//! let outcome = app.search("*").unwrap();
//! assert_eq!(outcome.posts.len(), 1);
//! assert_eq!(outcome.info.to_string(), "1 images");
//! ```

pub mod app;
pub mod config;
pub mod directory;
pub mod errors;
pub mod feed;
pub mod graph;
pub mod id;
pub mod models;
pub mod notice;
pub mod search;
pub mod session;
pub mod validators;
pub mod views;

pub use app::App;
pub use config::{AppConfig, ConfigError};
pub use directory::UserDirectory;
pub use errors::*;
pub use feed::Feed;
pub use graph::SocialGraph;
pub use models::{Account, Post};
pub use notice::NoticeBoard;
pub use search::{ParsedQuery, QueryEngine, SearchOptions, SearchOutcome};
pub use session::SessionManager;
pub use validators::ValidationPolicy;
pub use views::{DisplayInfo, FollowAction, PostCard, ProfileSummary, SearchView};
