use std::{error::Error, fs::File};

use colby_site::{feed::build_channel, posts::list_posts};

const OUT: &str = "public/rss.xml";

fn main() -> Result<(), Box<dyn Error>> {
    let posts = list_posts("")?;
    let channel = build_channel(&posts);
    channel.pretty_write_to(File::create(OUT)?, b' ', 2)?;
    println!("wrote {} posts to {OUT}", posts.len());
    Ok(())
}
