use anyhow::Result;
use bsky_link_poster::{post_link, Config, LinkPost};
use log::info;

const DEFAULT_LINK: &str =
    "https://github.blog/news-insights/company-news/the-top-10-gifts-for-the-developer-in-your-life/";
const DEFAULT_CONTENT: &str = "The top 10 gifts for the developer in your life";
const DEFAULT_TAGS: &str = "#Microsoft #Azure #AppDev";

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv::dotenv();
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let post = LinkPost {
        link: args.next().unwrap_or_else(|| DEFAULT_LINK.to_string()),
        content: args.next().unwrap_or_else(|| DEFAULT_CONTENT.to_string()),
        tags: args.next().unwrap_or_else(|| DEFAULT_TAGS.to_string()),
    };
    info!("post = {post:?}");

    let config = Config::load(&std::env::current_dir()?)?;

    match post_link(&config, &post).await {
        Ok(()) => {
            println!("Post with image successful!");
            Ok(())
        }
        Err(e) if !e.is_fatal() => {
            println!("Failed to post.");
            Ok(())
        }
        Err(e) => {
            println!("Failed to post.");
            Err(e.into())
        }
    }
}
