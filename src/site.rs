use std::fs;
use std::path::Path;

use crate::error::MarkdownError;
use crate::render::{extract_title, markdown_to_html_node};

/// Recursively copy every file under `src` into `dest`, preserving the
/// directory structure.
pub fn copy_dir(src: &Path, dest: &Path) -> Result<(), MarkdownError> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), target)?;
        }
    }
    Ok(())
}

/// Generate one page: render the Markdown source, fill the template's
/// `{{ Title }}` and `{{ Content }}` placeholders, rewrite root-relative
/// links to `base_path`, and write the result.
pub fn generate_page(
    source: &Path,
    template: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<(), MarkdownError> {
    let markdown = fs::read_to_string(source)?;
    let template = fs::read_to_string(template)?;

    let title = extract_title(&markdown)?;
    let content = markdown_to_html_node(&markdown)?.to_html()?;

    let page = template
        .replace("{{ Title }}", &title)
        .replace("{{ Content }}", &content)
        .replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"));

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, page)?;
    Ok(())
}

/// Walk `content_dir`, generating a `.html` page in `dest_dir` for every
/// `.md` file and mirroring subdirectories. Stops at the first failing
/// page and returns its error.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<(), MarkdownError> {
    for entry in fs::read_dir(content_dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            generate_pages_recursive(&path, template, &dest_dir.join(entry.file_name()), base_path)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            let dest = dest_dir.join(entry.file_name()).with_extension("html");
            generate_page(&path, template, &dest, base_path)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str =
        "<html><head><title>{{ Title }}</title><link href=\"/style.css\"></head>\
         <body>{{ Content }}</body></html>";

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn copies_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("static");
        let dest = dir.path().join("public");
        write(&src.join("style.css"), "body {}");
        write(&src.join("images/logo.png"), "png");

        copy_dir(&src, &dest).unwrap();

        assert_eq!(fs::read_to_string(dest.join("style.css")).unwrap(), "body {}");
        assert_eq!(
            fs::read_to_string(dest.join("images/logo.png")).unwrap(),
            "png"
        );
    }

    #[test]
    fn generates_a_page_from_template() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("index.md");
        let template = dir.path().join("template.html");
        let dest = dir.path().join("public/index.html");
        write(&source, "# Welcome\n\nhello **world**");
        write(&template, TEMPLATE);

        generate_page(&source, &template, &dest, "/").unwrap();

        let page = fs::read_to_string(&dest).unwrap();
        assert!(page.contains("<title>Welcome</title>"));
        assert!(page.contains("<div><h1>Welcome</h1><p>hello <b>world</b></p></div>"));
        assert!(page.contains("href=\"/style.css\""));
    }

    #[test]
    fn rewrites_root_relative_links_to_base_path() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("index.md");
        let template = dir.path().join("template.html");
        let dest = dir.path().join("public/index.html");
        write(&source, "# T\n\n[home](/index.html) and ![i](/logo.png)");
        write(&template, TEMPLATE);

        generate_page(&source, &template, &dest, "/mysite/").unwrap();

        let page = fs::read_to_string(&dest).unwrap();
        assert!(page.contains("href=\"/mysite/style.css\""));
        assert!(page.contains("href=\"/mysite/index.html\""));
        assert!(page.contains("src=\"/mysite/logo.png\""));
    }

    #[test]
    fn page_without_title_fails() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("index.md");
        let template = dir.path().join("template.html");
        write(&source, "no heading here");
        write(&template, TEMPLATE);

        let result = generate_page(&source, &template, &dir.path().join("out.html"), "/");
        assert!(matches!(result, Err(MarkdownError::MissingTitle)));
    }

    #[test]
    fn walks_the_content_tree() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        let template = dir.path().join("template.html");
        let out = dir.path().join("public");
        write(&content.join("index.md"), "# Home\n\nhi");
        write(&content.join("blog/post.md"), "# Post\n\ntext");
        write(&content.join("notes.txt"), "ignored");
        write(&template, TEMPLATE);

        generate_pages_recursive(&content, &template, &out, "/").unwrap();

        assert!(out.join("index.html").exists());
        assert!(out.join("blog/post.html").exists());
        assert!(!out.join("notes.txt").exists());
        assert!(!out.join("notes.html").exists());
    }
}
