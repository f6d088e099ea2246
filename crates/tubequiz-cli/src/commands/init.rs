//! The `tubequiz init` command.

use std::path::Path;

use anyhow::Result;

use tubequiz_providers::config::STARTER_CONFIG;

pub fn execute() -> Result<()> {
    let path = Path::new("tubequiz.toml");
    if path.exists() {
        println!("tubequiz.toml already exists, skipping.");
        return Ok(());
    }

    std::fs::write(path, STARTER_CONFIG)?;
    println!("Created tubequiz.toml");

    println!("\nNext steps:");
    println!("  1. Set GROQ_API_KEY (in the environment or a .env file)");
    println!("  2. Export your YouTube cookies to cookies.txt");
    println!("  3. Run: tubequiz quiz --url <YouTube URL> --from-summary");

    Ok(())
}
