//! Seed and teardown helpers shared by the end-to-end tests.

#![allow(dead_code)]

use std::sync::Arc;

use api_server::{AppConfig, RunningServer, run_server};
use blog_core::domain::{Author, BlogPost, NewBlogPost};
use blog_core::ports::BlogPostRepository;
use blog_infra::DatabaseConfig;
use rand::Rng;
use rand::seq::SliceRandom;
use tokio::sync::{Mutex, MutexGuard};

pub const SEED_COUNT: usize = 10;

/// Tests sharing a real database take turns: teardown wipes the table.
static DATABASE_LOCK: Mutex<()> = Mutex::const_new(());

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Linus", "Margaret", "Dennis", "Barbara", "Ken", "Frances", "Alan", "Radia",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Torvalds", "Hamilton", "Ritchie", "Liskov", "Thompson", "Allen",
    "Turing", "Perlman",
];

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
];

fn pick<'a>(rng: &mut impl Rng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or("lorem")
}

fn sentence(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(4..=10);
    let words: Vec<&str> = (0..len).map(|_| pick(rng, WORDS)).collect();
    let mut sentence = words.join(" ");
    if let Some(first) = sentence.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    sentence.push('.');
    sentence
}

fn paragraph(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(3..=6);
    (0..len).map(|_| sentence(rng)).collect::<Vec<_>>().join(" ")
}

/// A random draft: fake author, one-sentence title, two paragraphs of content.
pub fn generate_blog_data() -> NewBlogPost {
    let mut rng = rand::thread_rng();
    let author = Author::new(pick(&mut rng, FIRST_NAMES), pick(&mut rng, LAST_NAMES));
    let title = sentence(&mut rng);
    let content = format!("{}\n \r{}", paragraph(&mut rng), paragraph(&mut rng));

    NewBlogPost::new(author, title, content).expect("generated title is never blank")
}

/// Bulk-insert [`SEED_COUNT`] random posts.
pub async fn seed_blog_data(posts: &dyn BlogPostRepository) -> Vec<BlogPost> {
    let drafts = (0..SEED_COUNT).map(|_| generate_blog_data()).collect();
    posts.insert_many(drafts).await.expect("seeding failed")
}

/// Wipe every post.
pub async fn tear_down_db(posts: &dyn BlogPostRepository) {
    posts.delete_all().await.expect("teardown failed");
}

/// Database for the end-to-end tests. Unset means the in-memory store.
pub fn test_database() -> Option<DatabaseConfig> {
    std::env::var("TEST_DATABASE_URL")
        .ok()
        .filter(|url| !url.is_empty())
        .map(DatabaseConfig::new)
}

/// A running server on a free port with a seeded store.
pub struct TestApp {
    pub server: RunningServer,
    pub client: reqwest::Client,
    _database_turn: Option<MutexGuard<'static, ()>>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let database = test_database();
        let database_turn = match database {
            Some(_) => Some(DATABASE_LOCK.lock().await),
            None => None,
        };

        let config = AppConfig {
            port: 0,
            workers: Some(1),
            database,
            ..AppConfig::default()
        };
        let server = run_server(&config).await.expect("server failed to start");

        // A previous run may have left rows behind
        tear_down_db(server.posts().as_ref()).await;
        seed_blog_data(server.posts().as_ref()).await;

        Self {
            server,
            client: reqwest::Client::new(),
            _database_turn: database_turn,
        }
    }

    pub fn url(&self, path: &str) -> String {
        self.server.url(path)
    }

    pub fn posts(&self) -> Arc<dyn BlogPostRepository> {
        self.server.posts()
    }

    pub async fn shutdown(self) {
        tear_down_db(self.posts().as_ref()).await;
        self.server.close().await.expect("server failed to stop");
    }
}
