#[path = "social_network/account_tests.rs"]
mod account_tests;
#[path = "social_network/feed_tests.rs"]
mod feed_tests;
#[path = "social_network/follow_tests.rs"]
mod follow_tests;
#[path = "social_network/search_tests.rs"]
mod search_tests;
#[path = "social_network/support.rs"]
mod support;
