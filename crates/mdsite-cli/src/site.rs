//! Site generation: static copy and page rendering over a content tree.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::config::SiteConfig;
use crate::template::{rewrite_base_path, Template};

/// Recreate `dst` and copy every file under `src` into it
///
/// Returns the number of files copied. A missing `src` copies nothing.
pub fn copy_static(src: &Path, dst: &Path) -> Result<usize> {
    if dst.exists() {
        fs::remove_dir_all(dst).with_context(|| format!("removing {}", dst.display()))?;
    }
    fs::create_dir_all(dst).with_context(|| format!("creating {}", dst.display()))?;

    if !src.exists() {
        warn!(path = %src.display(), "static directory not found");
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", src.display()))?;
        let relative = entry.path().strip_prefix(src)?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("creating {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target)
                .with_context(|| format!("copying {}", entry.path().display()))?;
            info!(from = %entry.path().display(), to = %target.display(), "copied");
            copied += 1;
        }
    }

    Ok(copied)
}

/// Render one Markdown file through the template into `dst`
pub fn generate_page(src: &Path, template: &Template, dst: &Path, base_path: &str) -> Result<()> {
    let markdown =
        fs::read_to_string(src).with_context(|| format!("reading {}", src.display()))?;

    let content = mdsite::markdown_to_html(&markdown)
        .with_context(|| format!("converting {}", src.display()))?;
    let title = mdsite::extract_title(&markdown)
        .with_context(|| format!("extracting title from {}", src.display()))?;

    let page = rewrite_base_path(&template.render(&title, &content), base_path);

    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(dst, page).with_context(|| format!("writing {}", dst.display()))?;

    info!(from = %src.display(), to = %dst.display(), "generated page");
    Ok(())
}

/// Render every `.md` file under `content_dir` to the same relative path
/// under `output_dir`, with an `.html` extension
pub fn generate_pages(
    content_dir: &Path,
    template: &Template,
    output_dir: &Path,
    base_path: &str,
) -> Result<usize> {
    let mut generated = 0;

    for entry in WalkDir::new(content_dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", content_dir.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|ext| ext.to_str()) != Some("md")
        {
            continue;
        }

        let relative = path.strip_prefix(content_dir)?;
        let target = output_dir.join(relative).with_extension("html");
        generate_page(path, template, &target, base_path)?;
        generated += 1;
    }

    Ok(generated)
}

/// Copy static files, then generate all pages
pub fn build_site(config: &SiteConfig) -> Result<usize> {
    let copied = copy_static(&config.static_dir, &config.output_dir)?;
    let template = Template::load(&config.template)?;
    let generated = generate_pages(
        &config.content_dir,
        &template,
        &config.output_dir,
        &config.base_path,
    )?;

    info!(copied, generated, output = %config.output_dir.display(), "site built");
    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "<html><title>{{ Title }}</title><body>{{ Content }}</body></html>";

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_copy_static_replaces_output() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("static");
        let dst = dir.path().join("public");
        write(&src.join("index.css"), "body {}");
        write(&src.join("images/logo.png"), "png");
        write(&dst.join("stale.html"), "old");

        let copied = copy_static(&src, &dst).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read_to_string(dst.join("index.css")).unwrap(), "body {}");
        assert!(dst.join("images/logo.png").exists());
        assert!(!dst.join("stale.html").exists());
    }

    #[test]
    fn test_copy_static_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("public");
        assert_eq!(copy_static(&dir.path().join("missing"), &dst).unwrap(), 0);
        assert!(dst.is_dir());
    }

    #[test]
    fn test_generate_page() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("index.md");
        let dst = dir.path().join("out/index.html");
        write(&src, "# Home\n\nSee [blog](/blog) and ![logo](/logo.png)");

        generate_page(&src, &Template::new(TEMPLATE), &dst, "/site/").unwrap();

        assert_eq!(
            fs::read_to_string(&dst).unwrap(),
            "<html><title>Home</title><body><div><h1>Home</h1><p>See <a href=\"/site/blog\">blog</a> and <img src=\"/site/logo.png\" alt=\"logo\"></p></div></body></html>"
        );
    }

    #[test]
    fn test_generate_page_without_title_fails() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("notitle.md");
        write(&src, "just text");
        let result = generate_page(&src, &Template::new(TEMPLATE), &dir.path().join("o.html"), "/");
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_pages_mirrors_tree() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        let output = dir.path().join("public");
        write(&content.join("index.md"), "# Index");
        write(&content.join("blog/post/index.md"), "# Post");
        write(&content.join("notes.txt"), "not markdown");

        let generated = generate_pages(&content, &Template::new(TEMPLATE), &output, "/").unwrap();

        assert_eq!(generated, 2);
        assert!(output.join("index.html").exists());
        assert!(output.join("blog/post/index.html").exists());
        assert!(!output.join("notes.html").exists());
    }

    #[test]
    fn test_build_site() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(&root.join("static/style.css"), "p {}");
        write(&root.join("content/index.md"), "# Welcome\n\n- one\n- two");
        write(&root.join("template.html"), TEMPLATE);

        let config = SiteConfig {
            content_dir: root.join("content"),
            static_dir: root.join("static"),
            template: root.join("template.html"),
            output_dir: root.join("public"),
            base_path: "/".to_string(),
        };

        assert_eq!(build_site(&config).unwrap(), 1);
        let index = fs::read_to_string(config.output_dir.join("index.html")).unwrap();
        assert!(index.contains("<title>Welcome</title>"));
        assert!(index.contains("<ul><li>one</li><li>two</li></ul>"));
        assert!(config.output_dir.join("style.css").exists());
    }
}
