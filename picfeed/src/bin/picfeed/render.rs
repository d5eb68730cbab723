use comfy_table::{Cell, Table};
use picfeed::{AppConfig, ProfileSummary, SearchView};
use serde::Serialize;

use crate::output::{GlobalOptions, OutputManager, TableDisplay};

impl TableDisplay for SearchView {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = OutputManager::create_table(options);
        OutputManager::add_table_header(options, &mut table, &["Author", "URL", "Description"]);
        for post in &self.posts {
            table.add_row(vec![
                Cell::new(&post.author),
                Cell::new(&post.url),
                Cell::new(&post.description),
            ]);
        }
        let mut info = format!("Search query: {}\n{}", self.query, self.info_text);
        if let Some(action) = &self.follow_action {
            info.push_str(&format!("\n[{}] toggle {}", action.label, action.username));
        }
        table.add_row(vec![Cell::new(info)]);
        table
    }

    fn to_compact(&self) -> String {
        let posts = self
            .posts
            .iter()
            .map(|post| format!("{}:{}", post.author, post.url))
            .collect::<Vec<_>>()
            .join(" ");
        format!("[{}] {} | {posts}", self.query, self.info_text.replace('\n', ", "))
    }
}

impl TableDisplay for ProfileSummary {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = OutputManager::create_table(options);
        table.add_row(vec![Cell::new("Username"), Cell::new(&self.username)]);
        if let Some(name) = &self.name {
            table.add_row(vec![Cell::new("Name"), Cell::new(name)]);
        }
        table.add_row(vec![Cell::new("Following"), Cell::new(self.following)]);
        table.add_row(vec![Cell::new("Followers"), Cell::new(self.followers)]);
        table
    }

    fn to_compact(&self) -> String {
        format!(
            "{} following={} followers={}",
            self.username, self.following, self.followers
        )
    }
}

/// Registered usernames, in registration order.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct UserList(pub Vec<String>);

impl TableDisplay for UserList {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = OutputManager::create_table(options);
        OutputManager::add_table_header(options, &mut table, &["#", "Username"]);
        if self.0.is_empty() {
            table.add_row(vec![Cell::new("-"), Cell::new("No users yet")]);
        }
        for (i, username) in self.0.iter().enumerate() {
            table.add_row(vec![Cell::new(i + 1), Cell::new(username)]);
        }
        table
    }

    fn to_compact(&self) -> String {
        self.0.join(",")
    }
}

impl TableDisplay for AppConfig {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = OutputManager::create_table(options);
        OutputManager::add_table_header(options, &mut table, &["Key", "Value"]);
        let rows = [
            ("validation.require_valid_email", self.validation.require_valid_email.to_string()),
            ("validation.require_valid_url", self.validation.require_valid_url.to_string()),
            ("validation.require_username", self.validation.require_username.to_string()),
            (
                "search.case_insensitive_keywords",
                self.search.case_insensitive_keywords.to_string(),
            ),
            ("notices.error_display_secs", self.notices.error_display_secs.to_string()),
        ];
        for (key, value) in rows {
            table.add_row(vec![Cell::new(key), Cell::new(value)]);
        }
        table
    }

    fn to_compact(&self) -> String {
        format!(
            "email={} url={} username={} ci={} notice={}s",
            self.validation.require_valid_email,
            self.validation.require_valid_url,
            self.validation.require_username,
            self.search.case_insensitive_keywords,
            self.notices.error_display_secs
        )
    }
}
