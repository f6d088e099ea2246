//! The `tubequiz video-id` command.

use anyhow::Result;

use tubequiz_core::video::extract_video_id;

pub fn execute(url: &str) -> Result<()> {
    let id = extract_video_id(url)?;
    println!("{id}");
    Ok(())
}
