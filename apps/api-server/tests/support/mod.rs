//! Test harness: an isolated store, a live server, and fixture data.

use std::net::TcpListener;
use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;

use api_server::state::open_repository;
use api_server::{AppConfig, AppState, BlogServer};
use scribe_core::domain::{Author, BlogPost};
use scribe_core::ports::{BaseRepository, BlogPostRepository};

pub const SEED_COUNT: usize = 10;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Linus", "Barbara", "Dennis", "Margaret", "Ken", "Frances", "Alan", "Radia",
];
const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Torvalds", "Liskov", "Ritchie", "Hamilton", "Thompson", "Allen",
    "Turing", "Perlman",
];
const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "labore", "dolore", "magna", "aliqua", "enim", "minim",
    "veniam", "quis", "nostrud",
];

/// One scenario's world: a test-only store and a server bound to it.
pub struct TestContext {
    pub repo: Arc<dyn BlogPostRepository>,
    pub client: reqwest::Client,
    server: BlogServer,
}

impl TestContext {
    /// Start the server on a free port against the test store, then seed it.
    ///
    /// Uses `TEST_DATABASE_URL` when set, otherwise a private in-memory store.
    pub async fn start() -> Self {
        dotenvy::dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn,api_server=info")
            .with_test_writer()
            .try_init();

        let db_config = AppConfig::database_from_env("TEST_DATABASE_URL");
        let repo = open_repository(db_config.as_ref())
            .await
            .expect("test store should open");

        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let server = BlogServer::start(AppState::with_repository(repo.clone()), listener, 1)
            .expect("start test server");

        // No pooled keep-alive connections, so a graceful stop returns promptly.
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .expect("build http client");

        let ctx = Self {
            repo,
            client,
            server,
        };
        // A scenario that panicked never reached its teardown.
        ctx.tear_down_db().await;
        ctx.seed_blog_data().await;
        ctx
    }

    /// Insert [`SEED_COUNT`] generated posts straight into the store.
    pub async fn seed_blog_data(&self) -> Vec<BlogPost> {
        tracing::info!("seeding blog post data");
        let posts: Vec<BlogPost> = (0..SEED_COUNT).map(|_| generate_blog_post()).collect();
        self.repo
            .insert_many(posts.clone())
            .await
            .expect("seed blog posts");
        posts
    }

    /// Drop every record in the test store.
    pub async fn tear_down_db(&self) {
        tracing::warn!("deleting test data");
        self.repo.delete_all().await.expect("clear test store");
    }

    /// Tear down data, then stop the server.
    pub async fn finish(self) {
        self.tear_down_db().await;
        self.server.stop().await.expect("stop test server");
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server.base_url(), path)
    }

    /// Any one stored post.
    pub async fn any_post(&self) -> BlogPost {
        self.repo
            .find_one()
            .await
            .expect("query store")
            .expect("seeded store has a post")
    }

    pub async fn stored(&self, id: uuid::Uuid) -> Option<BlogPost> {
        self.repo.find_by_id(id).await.expect("query store")
    }

    pub async fn count(&self) -> u64 {
        self.repo.count().await.expect("count store")
    }
}

/// A random post dated within the last day.
pub fn generate_blog_post() -> BlogPost {
    let mut rng = rand::rng();
    let author = Author::new(
        *FIRST_NAMES.choose(&mut rng).unwrap(),
        *LAST_NAMES.choose(&mut rng).unwrap(),
    );
    let created = Utc::now() - Duration::seconds(rng.random_range(0..86_400));

    BlogPost::new(author, sentence(&mut rng), paragraph(&mut rng), Some(created))
}

pub fn sentence(rng: &mut impl Rng) -> String {
    let len = rng.random_range(3..9);
    let words: Vec<&str> = (0..len).map(|_| *WORDS.choose(rng).unwrap()).collect();

    let mut sentence = words.join(" ");
    if let Some(first) = sentence.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    sentence.push('.');
    sentence
}

pub fn paragraph(rng: &mut impl Rng) -> String {
    let len = rng.random_range(3..6);
    (0..len).map(|_| sentence(rng)).collect::<Vec<_>>().join(" ")
}
